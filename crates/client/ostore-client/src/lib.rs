//! ostore-client - object storage client facade for S3-compatible endpoints.
//!
//! This crate wraps the AWS S3 SDK behind a small facade that performs
//! authenticated bucket listing and whole-object retrieval against any
//! S3-compatible endpoint (MinIO, LocalStack, AWS itself). It supports:
//!
//! - Explicit endpoint and credential configuration with validation
//! - Single-request operations: one `ListBuckets`, one `GetObject`
//! - An error taxonomy that distinguishes missing objects, rejected
//!   credentials, and transport failures
//!
//! # Example
//!
//! ```ignore
//! use ostore_client::{StorageClient, StorageConfig};
//!
//! // Configure the endpoint and credentials
//! let config = StorageConfig::new("http://localhost:9000", "admin", "password");
//! let client = StorageClient::new(config).await?;
//!
//! // Enumerate buckets
//! for bucket in client.list_buckets().await? {
//!     eprintln!("{}", bucket.name);
//! }
//!
//! // Read one object fully into memory
//! let body = client.get_object("mybucket", "foo/bar.txt").await?;
//! assert_eq!(&body[..], b"hello");
//! ```

pub mod client;
pub mod config;
pub mod uri;

pub use client::{Bucket, StorageClient};
pub use config::StorageConfig;
pub use uri::parse_object_uri;
