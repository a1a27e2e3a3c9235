//! Main execution logic for the ostore CLI.

use anyhow::{Context, Result, bail};
use ostore_client::{Bucket, StorageClient, StorageConfig, parse_object_uri};
use std::io::Write;

use crate::args::{Cli, Command, OutputFormatArg};

/// Summary of an executed command, reported to stderr by main.
pub enum Summary {
    /// Buckets were listed
    Buckets { count: usize },
    /// An object was fetched
    Get { location: String, size_bytes: u64 },
}

/// Execute the CLI with the provided arguments.
pub async fn execute(args: Cli) -> Result<Summary> {
    // Build the client configuration
    let mut config = StorageConfig::new(&args.endpoint, &args.access_key, &args.secret_key)
        .with_timeout(args.timeout_secs);

    if let Some(region) = &args.region {
        config = config.with_region(region);
    }

    let client = StorageClient::new(config).await?;

    match args.command {
        Command::Buckets { output_format } => {
            let buckets = client.list_buckets().await?;
            print_buckets(&buckets, output_format)?;

            Ok(Summary::Buckets {
                count: buckets.len(),
            })
        }
        Command::Get {
            uri,
            bucket,
            key,
            output,
        } => {
            let (bucket, key) = resolve_object(uri.as_deref(), bucket, key)?;
            let body = client.get_object(&bucket, &key).await?;

            match &output {
                Some(path) => {
                    std::fs::write(path, &body)
                        .with_context(|| format!("failed to write {}", path.display()))?;
                }
                None => {
                    let stdout = std::io::stdout();
                    let mut out = stdout.lock();
                    out.write_all(&body)?;
                    out.flush()?;
                }
            }

            Ok(Summary::Get {
                location: format!("s3://{}/{}", bucket, key),
                size_bytes: body.len() as u64,
            })
        }
    }
}

/// Resolve the object reference from either the URI or the flag pair.
fn resolve_object(
    uri: Option<&str>,
    bucket: Option<String>,
    key: Option<String>,
) -> Result<(String, String)> {
    match (uri, bucket, key) {
        (Some(uri), None, None) => Ok(parse_object_uri(uri)?),
        (None, Some(bucket), Some(key)) => Ok((bucket, key)),
        _ => bail!("specify either an s3://bucket/key URI or both --bucket and --key"),
    }
}

/// Print the bucket listing to stdout in the requested format.
fn print_buckets(buckets: &[Bucket], format: OutputFormatArg) -> Result<()> {
    match format {
        OutputFormatArg::Plain => {
            for bucket in buckets {
                match &bucket.created {
                    Some(created) => println!("{}\t{}", bucket.name, created.to_rfc3339()),
                    None => println!("{}", bucket.name),
                }
            }
        }
        OutputFormatArg::Jsonl => {
            let stdout = std::io::stdout();
            let mut out = stdout.lock();
            for bucket in buckets {
                serde_json::to_writer(&mut out, bucket)?;
                out.write_all(b"\n")?;
            }
        }
        OutputFormatArg::Json => {
            let stdout = std::io::stdout();
            serde_json::to_writer_pretty(stdout.lock(), buckets)?;
            println!();
        }
    }

    Ok(())
}
