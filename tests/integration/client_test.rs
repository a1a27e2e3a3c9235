//! Storage client integration tests against a local S3 endpoint.
//!
//! These tests verify that the client facade correctly lists buckets,
//! fetches objects, and maps service errors onto the error taxonomy.

use crate::common::StorageTestContext;
use ostore_client::{StorageClient, StorageConfig};
use ostore_error::StoreError;

async fn facade(ctx: &StorageTestContext) -> StorageClient {
    StorageClient::new(ctx.client_config()).await.unwrap()
}

#[tokio::test]
#[ignore = "requires a local S3 endpoint"]
async fn test_list_buckets_returns_created_buckets() {
    let ctx = StorageTestContext::new().await;

    if !ctx.is_available().await {
        eprintln!("S3 endpoint not available, skipping test");
        return;
    }

    ctx.create_bucket("ostore-list-a").await.unwrap();
    ctx.create_bucket("ostore-list-b").await.unwrap();

    let client = facade(&ctx).await;
    let buckets = client.list_buckets().await.unwrap();

    let names: Vec<&str> = buckets.iter().map(|b| b.name.as_str()).collect();
    assert!(names.contains(&"ostore-list-a"));
    assert!(names.contains(&"ostore-list-b"));
}

#[tokio::test]
#[ignore = "requires a local S3 endpoint"]
async fn test_get_object_returns_exact_bytes() {
    let ctx = StorageTestContext::new().await;

    if !ctx.is_available().await {
        eprintln!("S3 endpoint not available, skipping test");
        return;
    }

    ctx.create_bucket("mybucket").await.unwrap();
    ctx.put_object("mybucket", "foo/bar.txt", b"hello")
        .await
        .unwrap();

    let client = facade(&ctx).await;
    let body = client.get_object("mybucket", "foo/bar.txt").await.unwrap();

    assert_eq!(&body[..], b"hello");
}

#[tokio::test]
#[ignore = "requires a local S3 endpoint"]
async fn test_get_object_missing_key_is_not_found() {
    let ctx = StorageTestContext::new().await;

    if !ctx.is_available().await {
        eprintln!("S3 endpoint not available, skipping test");
        return;
    }

    ctx.create_bucket("ostore-missing-key").await.unwrap();

    let client = facade(&ctx).await;
    let err = client
        .get_object("ostore-missing-key", "no/such/key.txt")
        .await
        .unwrap_err();

    // Must be NotFound, never a generic Service error
    assert!(
        matches!(err, StoreError::NotFound(_)),
        "expected NotFound, got: {err:?}"
    );
}

#[tokio::test]
#[ignore = "requires a local S3 endpoint"]
async fn test_get_object_missing_bucket_is_not_found() {
    let ctx = StorageTestContext::new().await;

    if !ctx.is_available().await {
        eprintln!("S3 endpoint not available, skipping test");
        return;
    }

    let client = facade(&ctx).await;
    let err = client
        .get_object("ostore-no-such-bucket", "key.txt")
        .await
        .unwrap_err();

    assert!(
        matches!(err, StoreError::NotFound(_)),
        "expected NotFound, got: {err:?}"
    );
}

#[tokio::test]
#[ignore = "requires a local S3 endpoint"]
async fn test_invalid_credentials_are_authentication_errors() {
    let ctx = StorageTestContext::new().await;

    if !ctx.is_available().await {
        eprintln!("S3 endpoint not available, skipping test");
        return;
    }

    let config = StorageConfig::new(&ctx.endpoint, "wrong-access-key", "wrong-secret-key");
    let client = StorageClient::new(config).await.unwrap();

    let err = client.list_buckets().await.unwrap_err();

    // Rejected credentials, not a transport failure
    assert!(
        matches!(err, StoreError::Authentication(_)),
        "expected Authentication, got: {err:?}"
    );
}
