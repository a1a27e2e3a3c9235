//! CLI argument definitions for ostore.

use clap::{Parser, Subcommand, ValueEnum};
use ostore_cli_common::LogLevel;
use std::path::PathBuf;

/// Object storage client for S3-compatible endpoints.
///
/// Lists buckets and fetches objects from any service speaking the S3 API
/// (MinIO, LocalStack, AWS itself).
///
/// ## Examples
///
/// List buckets:
///   ostore --endpoint http://localhost:9000 buckets
///
/// Fetch an object to stdout:
///   ostore --endpoint http://localhost:9000 get s3://mybucket/foo/bar.txt
///
/// Fetch an object to a file:
///   ostore --endpoint http://localhost:9000 get --bucket mybucket \
///       --key foo/bar.txt -o bar.txt
#[derive(Parser, Debug)]
#[command(name = "ostore")]
#[command(version, about, long_about = None)]
pub struct Cli {
    // === Connection Options ===
    /// Storage endpoint URL
    #[arg(long, env = "OSTORE_ENDPOINT")]
    pub endpoint: String,

    /// Access key identifier
    #[arg(long, env = "AWS_ACCESS_KEY_ID")]
    pub access_key: String,

    /// Secret access key
    #[arg(long, env = "AWS_SECRET_ACCESS_KEY", hide_env_values = true)]
    pub secret_key: String,

    /// Signing region
    #[arg(long, env = "AWS_REGION")]
    pub region: Option<String>,

    /// Request timeout in seconds
    #[arg(long, default_value = "30")]
    pub timeout_secs: u64,

    // === Logging Options ===
    /// Log level
    #[arg(long, value_enum, default_value = "info")]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// List the buckets in the storage account
    Buckets {
        /// Output format
        #[arg(long, value_enum, default_value = "plain")]
        output_format: OutputFormatArg,
    },

    /// Fetch one object and write its contents to stdout or a file
    Get {
        /// Object URI (s3://bucket/key)
        uri: Option<String>,

        /// Bucket name (alternative to the URI form)
        #[arg(long, requires = "key", conflicts_with = "uri")]
        bucket: Option<String>,

        /// Object key (alternative to the URI form)
        #[arg(long, requires = "bucket", conflicts_with = "uri")]
        key: Option<String>,

        /// Write the object to this file instead of stdout
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },
}

/// Output format argument for bucket listings.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormatArg {
    /// One bucket per line, name and creation timestamp
    Plain,
    /// JSON Lines (one JSON object per line)
    Jsonl,
    /// Pretty-printed JSON array
    Json,
}
