//! One-shot JSON retrieval from the upstream HTTPS API.

use serde_json::Value;
use std::time::Duration;
use thiserror::Error;

/// Fixed upstream endpoint. HTTPS only; the TLS stack is rustls.
pub const DATA_URL: &str = "https://secure-api.com/get-data";

/// Bound on the whole request, connect included.
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP request error: {0}")]
    Request(#[from] reqwest::Error),
}

/// GET `url` and decode the body as JSON.
///
/// A non-success status is an error. The decoded value is returned without
/// any schema validation; the caller sees exactly what the server sent.
pub async fn fetch_json(url: &str) -> Result<Value, FetchError> {
    fetch_json_with_timeout(url, FETCH_TIMEOUT).await
}

async fn fetch_json_with_timeout(url: &str, timeout: Duration) -> Result<Value, FetchError> {
    let client = reqwest::Client::builder().timeout(timeout).build()?;
    let response = client.get(url).send().await?.error_for_status()?;
    Ok(response.json::<Value>().await?)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
