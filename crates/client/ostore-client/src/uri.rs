//! Object URI parsing.

use ostore_error::{Result, StoreError};

/// Parse an `s3://bucket/key` URI into bucket and key.
///
/// The key is an opaque identifier; any `/` inside it is a naming
/// convention of the service, not a path separator.
pub fn parse_object_uri(uri: &str) -> Result<(String, String)> {
    let url = url::Url::parse(uri)
        .map_err(|e| StoreError::Config(format!("invalid object URI '{}': {}", uri, e)))?;

    if url.scheme() != "s3" {
        return Err(StoreError::Config(format!(
            "expected s3:// URI, got: {}",
            uri
        )));
    }

    let bucket = url
        .host_str()
        .ok_or_else(|| StoreError::Config(format!("missing bucket in object URI: {}", uri)))?;

    let key = url.path().trim_start_matches('/');
    if key.is_empty() {
        return Err(StoreError::Config(format!(
            "missing key in object URI: {}",
            uri
        )));
    }

    Ok((bucket.to_string(), key.to_string()))
}
