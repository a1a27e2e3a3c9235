//! Error types and classification for ostore.
//!
//! This crate provides:
//! - [`StoreError`] - Error taxonomy for storage client operations
//! - [`ErrorCategory`] for caller-side retry decision making
//! - Error classification logic based on error variant and service code
//!
//! The client itself never retries; classification exists so a
//! caller-supplied policy can decide what is worth retrying.

use thiserror::Error;

/// Error type for storage client operations.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Bad client setup or invalid input (malformed endpoint, empty
    /// credentials, empty bucket/key arguments)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Credentials rejected by the service
    #[error("Authentication failed: {0}")]
    Authentication(String),

    /// Transport failure (endpoint unreachable, connection reset, timeout)
    #[error("Network error: {0}")]
    Network(String),

    /// Requested bucket or key does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// Any other non-success response, carrying the service-provided
    /// error code and message
    #[error("Service error [{c}]: {message}", c = .code.as_deref().unwrap_or("unknown"))]
    Service {
        code: Option<String>,
        message: String,
    },
}

/// Error classification for retry decisions.
///
/// The storage client surfaces every error immediately; a caller-supplied
/// policy uses this to decide whether another attempt could succeed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Transient error - another attempt may succeed
    ///
    /// Examples: network timeout, S3 SlowDown, 5xx responses
    Retryable,

    /// Permanent error - retrying cannot help
    ///
    /// Examples: bad configuration, rejected credentials, missing key
    Fatal,
}

/// Service error codes that indicate a transient condition.
const RETRYABLE_CODES: &[&str] = &[
    "SlowDown",
    "InternalError",
    "ServiceUnavailable",
    "RequestTimeout",
];

/// Classifies an error to determine whether a retry could succeed.
pub fn classify(error: &StoreError) -> ErrorCategory {
    match error {
        StoreError::Config(_) => ErrorCategory::Fatal,
        StoreError::Authentication(_) => ErrorCategory::Fatal,
        StoreError::Network(_) => ErrorCategory::Retryable,
        StoreError::NotFound(_) => ErrorCategory::Fatal,
        StoreError::Service { code, .. } => match code.as_deref() {
            Some(code) if RETRYABLE_CODES.contains(&code) => ErrorCategory::Retryable,
            _ => ErrorCategory::Fatal,
        },
    }
}

/// Result type alias using StoreError.
pub type Result<T> = std::result::Result<T, StoreError>;
