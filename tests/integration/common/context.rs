//! Test context for a local S3-compatible endpoint.

use aws_sdk_s3::Client as S3Client;
use ostore_client::StorageConfig;

/// Test context providing a raw SDK client for fixture setup.
///
/// Fixtures are provisioned through the SDK directly so the facade under
/// test is never used to set up its own expectations.
pub struct StorageTestContext {
    pub s3: S3Client,
    pub endpoint: String,
    pub access_key: String,
    pub secret_key: String,
}

impl StorageTestContext {
    /// Create a new test context.
    ///
    /// Uses the `OSTORE_TEST_ENDPOINT` environment variable if set,
    /// otherwise defaults to `http://localhost:9000`. Credentials default
    /// to `admin` / `password` and can be overridden with
    /// `OSTORE_TEST_ACCESS_KEY` / `OSTORE_TEST_SECRET_KEY`.
    pub async fn new() -> Self {
        let endpoint = std::env::var("OSTORE_TEST_ENDPOINT")
            .unwrap_or_else(|_| "http://localhost:9000".to_string());
        let access_key =
            std::env::var("OSTORE_TEST_ACCESS_KEY").unwrap_or_else(|_| "admin".to_string());
        let secret_key =
            std::env::var("OSTORE_TEST_SECRET_KEY").unwrap_or_else(|_| "password".to_string());

        let credentials = aws_sdk_s3::config::Credentials::new(
            &access_key,
            &secret_key,
            None,
            None,
            "integration-tests",
        );

        let config = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .region(aws_sdk_s3::config::Region::new("us-east-1"))
            .endpoint_url(&endpoint)
            .credentials_provider(credentials)
            .load()
            .await;

        let s3_config = aws_sdk_s3::config::Builder::from(&config)
            .force_path_style(true)
            .build();

        Self {
            s3: S3Client::from_conf(s3_config),
            endpoint,
            access_key,
            secret_key,
        }
    }

    /// Check if the endpoint is available and healthy.
    pub async fn is_available(&self) -> bool {
        // Try to list buckets - this will fail quickly if nothing is running
        self.s3.list_buckets().send().await.is_ok()
    }

    /// Create a bucket for testing.
    pub async fn create_bucket(&self, name: &str) -> Result<(), aws_sdk_s3::Error> {
        // First check if bucket exists
        let buckets = self.s3.list_buckets().send().await?;
        let exists = buckets
            .buckets()
            .iter()
            .any(|b| b.name().unwrap_or_default() == name);

        if !exists {
            self.s3.create_bucket().bucket(name).send().await?;
        }
        Ok(())
    }

    /// Upload a fixture object.
    pub async fn put_object(
        &self,
        bucket: &str,
        key: &str,
        data: &[u8],
    ) -> Result<(), aws_sdk_s3::Error> {
        self.s3
            .put_object()
            .bucket(bucket)
            .key(key)
            .body(data.to_vec().into())
            .send()
            .await?;
        Ok(())
    }

    /// Build a facade configuration pointing at this endpoint.
    pub fn client_config(&self) -> StorageConfig {
        StorageConfig::new(&self.endpoint, &self.access_key, &self.secret_key)
    }
}
