//! Storage client construction and operations.

use aws_config::timeout::TimeoutConfig;
use aws_config::{BehaviorVersion, Region};
use aws_sdk_s3::Client;
use aws_sdk_s3::config::Credentials;
use aws_sdk_s3::error::{ProvideErrorMetadata, SdkError};
use bytes::Bytes;
use chrono::{DateTime, Utc};
use ostore_error::{Result, StoreError};
use serde::Serialize;
use std::time::Duration;
use tracing::debug;

use crate::config::StorageConfig;

/// Region used for signing when the configuration does not name one.
const DEFAULT_REGION: &str = "us-east-1";

/// A bucket enumerated from the storage account.
#[derive(Debug, Clone, Serialize)]
pub struct Bucket {
    /// Bucket name
    pub name: String,

    /// Creation timestamp, when the service provides one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,
}

/// Client facade for an S3-compatible storage endpoint.
///
/// Holds immutable configuration and a ready-built SDK client. Each
/// operation issues exactly one network request; signing, transport, and
/// connection pooling are the SDK's concern. The facade performs no
/// retries and no caching; [`ostore_error::classify`] gives the
/// retryability advice a caller-side policy can act on.
#[derive(Debug)]
pub struct StorageClient {
    client: Client,
    config: StorageConfig,
}

impl StorageClient {
    /// Create a new StorageClient from configuration.
    ///
    /// Validates the configuration and builds the underlying SDK client.
    /// Construction performs no network call; credentials and region are
    /// resolved explicitly from the configuration.
    pub async fn new(config: StorageConfig) -> Result<Self> {
        config.validate()?;

        let region = config
            .region
            .clone()
            .unwrap_or_else(|| DEFAULT_REGION.to_string());

        let credentials = Credentials::new(
            &config.access_key,
            &config.secret_key,
            None,
            None,
            "ostore-client",
        );

        let sdk_config = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(region))
            .endpoint_url(&config.endpoint)
            .credentials_provider(credentials)
            .timeout_config(
                TimeoutConfig::builder()
                    .operation_timeout(Duration::from_secs(config.timeout_secs))
                    .build(),
            )
            .load()
            .await;

        // Path-style access; S3-compatible services generally do not
        // resolve virtual-hosted bucket subdomains.
        let s3_config = aws_sdk_s3::config::Builder::from(&sdk_config)
            .force_path_style(true)
            .build();

        Ok(Self {
            client: Client::from_conf(s3_config),
            config,
        })
    }

    /// The endpoint this client talks to.
    pub fn endpoint(&self) -> &str {
        &self.config.endpoint
    }

    /// List the buckets in the storage account.
    ///
    /// Issues exactly one `ListBuckets` request and returns buckets in
    /// service order.
    pub async fn list_buckets(&self) -> Result<Vec<Bucket>> {
        debug!(endpoint = %self.config.endpoint, "listing buckets");

        let resp = self
            .client
            .list_buckets()
            .send()
            .await
            .map_err(|e| map_sdk_error(e, "bucket listing"))?;

        let buckets = resp
            .buckets()
            .iter()
            .filter_map(|b| {
                let name = b.name().unwrap_or_default();
                if name.is_empty() {
                    return None;
                }

                let created = b
                    .creation_date()
                    .and_then(|t| DateTime::from_timestamp(t.secs(), t.subsec_nanos()));

                Some(Bucket {
                    name: name.to_string(),
                    created,
                })
            })
            .collect();

        Ok(buckets)
    }

    /// Fetch the full contents of one object.
    ///
    /// Issues exactly one `GetObject` request and reads the entire body
    /// into memory before returning.
    pub async fn get_object(&self, bucket: &str, key: &str) -> Result<Bytes> {
        if bucket.is_empty() {
            return Err(StoreError::Config("bucket must not be empty".to_string()));
        }
        if key.is_empty() {
            return Err(StoreError::Config("key must not be empty".to_string()));
        }

        let location = format!("s3://{}/{}", bucket, key);
        debug!(%location, "fetching object");

        let resp = self
            .client
            .get_object()
            .bucket(bucket)
            .key(key)
            .send()
            .await
            .map_err(|e| map_sdk_error(e, &location))?;

        let data = resp
            .body
            .collect()
            .await
            .map_err(|e| StoreError::Network(format!("failed to read body of {}: {}", location, e)))?
            .into_bytes();

        debug!(%location, size = data.len(), "object fetched");

        Ok(data)
    }
}

/// Service error codes that mean the bucket or key does not exist.
const NOT_FOUND_CODES: &[&str] = &["NoSuchKey", "NoSuchBucket"];

/// Service error codes that mean the credentials were rejected.
const AUTH_CODES: &[&str] = &[
    "AccessDenied",
    "InvalidAccessKeyId",
    "SignatureDoesNotMatch",
    "ExpiredToken",
];

/// Map an SDK error onto the storage error taxonomy.
fn map_sdk_error<E, R>(err: SdkError<E, R>, location: &str) -> StoreError
where
    E: ProvideErrorMetadata + std::fmt::Debug,
    R: std::fmt::Debug,
{
    match err {
        SdkError::ConstructionFailure(_) => {
            StoreError::Config(format!("failed to construct request for {}", location))
        }
        SdkError::TimeoutError(_) => {
            StoreError::Network(format!("request timed out for {}", location))
        }
        SdkError::DispatchFailure(e) => {
            StoreError::Network(format!("failed to reach endpoint for {}: {:?}", location, e))
        }
        SdkError::ServiceError(ctx) => {
            let e = ctx.into_err();
            classify_service_error(e.code(), e.message(), location)
        }
        other => StoreError::Service {
            code: None,
            message: format!("unexpected SDK error for {}: {:?}", location, other),
        },
    }
}

/// Classify a service error response by its error code.
fn classify_service_error(
    code: Option<&str>,
    message: Option<&str>,
    location: &str,
) -> StoreError {
    match code {
        Some(c) if NOT_FOUND_CODES.contains(&c) => StoreError::NotFound(location.to_string()),
        Some(c) if AUTH_CODES.contains(&c) => StoreError::Authentication(format!(
            "{}: {}",
            c,
            message.unwrap_or("credentials rejected")
        )),
        _ => StoreError::Service {
            code: code.map(str::to_string),
            message: message
                .map(str::to_string)
                .unwrap_or_else(|| format!("request failed for {}", location)),
        },
    }
}
