//! Shared utilities for ostore CLI binaries.

pub mod args;
pub mod format;
pub mod logging;

pub use args::LogLevel;
pub use format::format_bytes;
pub use logging::init_logging;
