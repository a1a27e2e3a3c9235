//! Storage client configuration.

use ostore_error::{Result, StoreError};
use serde::{Deserialize, Serialize};
use std::fmt;
use url::Url;

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for an S3-compatible storage endpoint.
///
/// Endpoint and credentials are fixed for the lifetime of a client built
/// from this configuration; there is no mutation API on the client side.
#[derive(Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Storage service endpoint URL (e.g. `http://localhost:9000`)
    pub endpoint: String,

    /// Access key identifier
    pub access_key: String,

    /// Secret access key. Never logged, never serialized.
    #[serde(skip_serializing)]
    pub secret_key: String,

    /// Region used when signing requests. S3-compatible services accept
    /// any value; defaults to `us-east-1` at client build time.
    pub region: Option<String>,

    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl StorageConfig {
    /// Create a new StorageConfig for the given endpoint and credentials.
    pub fn new(
        endpoint: impl Into<String>,
        access_key: impl Into<String>,
        secret_key: impl Into<String>,
    ) -> Self {
        Self {
            endpoint: endpoint.into(),
            access_key: access_key.into(),
            secret_key: secret_key.into(),
            region: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Set the signing region.
    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    /// Set the request timeout in seconds.
    pub fn with_timeout(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    /// Validate the configuration.
    ///
    /// Fails with [`StoreError::Config`] if the endpoint URL is malformed
    /// or either credential is empty.
    pub fn validate(&self) -> Result<()> {
        let url = Url::parse(&self.endpoint).map_err(|e| {
            StoreError::Config(format!("invalid endpoint URL '{}': {}", self.endpoint, e))
        })?;

        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(StoreError::Config(format!(
                "endpoint must be an http(s) URL, got: {}",
                self.endpoint
            )));
        }

        if url.host_str().is_none() {
            return Err(StoreError::Config(format!(
                "endpoint is missing a host: {}",
                self.endpoint
            )));
        }

        if self.access_key.is_empty() {
            return Err(StoreError::Config(
                "access key must not be empty".to_string(),
            ));
        }

        if self.secret_key.is_empty() {
            return Err(StoreError::Config(
                "secret key must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}

impl fmt::Debug for StorageConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StorageConfig")
            .field("endpoint", &self.endpoint)
            .field("access_key", &self.access_key)
            .field("secret_key", &"<redacted>")
            .field("region", &self.region)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}
