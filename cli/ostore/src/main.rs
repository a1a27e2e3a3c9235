//! ostore CLI
//!
//! Object storage client for S3-compatible endpoints.

use clap::Parser;
use ostore_cli_common::{format_bytes, init_logging};

mod args;
mod run;

use args::Cli;
use run::Summary;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    // Initialize logging (to stderr, so stdout is clean for command output)
    init_logging(args.log_level)?;

    let summary = run::execute(args).await?;

    // Report results to stderr
    match summary {
        Summary::Buckets { count } => {
            eprintln!();
            eprintln!("Buckets listed: {}", count);
        }
        Summary::Get {
            location,
            size_bytes,
        } => {
            eprintln!();
            eprintln!("Fetched {} ({})", location, format_bytes(size_bytes));
        }
    }

    Ok(())
}
