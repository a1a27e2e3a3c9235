//! Integration tests for ostore.
//!
//! These tests require a local S3-compatible endpoint (MinIO or LocalStack).
//! They are marked as `#[ignore]` by default to avoid running them in CI
//! without proper setup.
//!
//! ## Running Integration Tests
//!
//! 1. Start MinIO:
//!    ```bash
//!    docker run -p 9000:9000 -e MINIO_ROOT_USER=admin \
//!        -e MINIO_ROOT_PASSWORD=password minio/minio server /data
//!    ```
//!
//! 2. Run the integration tests:
//!    ```bash
//!    OSTORE_TEST_ENDPOINT=http://localhost:9000 cargo test -p integration-tests -- --ignored
//!    ```

mod client_test;
mod common;
