//! Shared HTTP plumbing for search and language-model providers.

use std::time::Duration;

use reqwest::{Client, Response};
use serde::de::DeserializeOwned;

use crate::{Result, SiftError};

/// Upper bound on a single provider call.
pub const PROVIDER_TIMEOUT_SECS: u64 = 60;

/// Build the client used for provider APIs.
pub(crate) fn provider_client() -> Client {
    Client::builder()
        .timeout(Duration::from_secs(PROVIDER_TIMEOUT_SECS))
        .build()
        .unwrap_or_else(|err| {
            tracing::warn!(error = %err, "falling back to default HTTP client");
            Client::new()
        })
}

/// Decode a JSON provider response, turning error statuses into
/// [`SiftError::Provider`].
pub(crate) async fn read_json<T: DeserializeOwned>(response: Response, provider: &'static str) -> Result<T> {
    let status = response.status();
    let body = response.text().await.map_err(|e| SiftError::HttpError(e.without_url()))?;

    if !status.is_success() {
        return Err(SiftError::provider(
            provider,
            format!("HTTP {}: {}", status.as_u16(), error_message(&body)),
        ));
    }

    serde_json::from_str(&body).map_err(|e| SiftError::provider(provider, format!("invalid response body: {e}")))
}

/// Pull a human-readable message out of an error body.
///
/// Understands `{"error": {"message": ..}}`, `{"error": ".."}` and
/// `{"message": ..}`; anything else is returned as a shortened raw body.
fn error_message(body: &str) -> String {
    let parsed = serde_json::from_str::<serde_json::Value>(body).ok();
    let message = parsed.as_ref().and_then(|v| {
        v.get("error")
            .and_then(|e| e.get("message").and_then(|m| m.as_str()).or_else(|| e.as_str()))
            .or_else(|| v.get("message").and_then(|m| m.as_str()))
            .map(String::from)
    });

    message.unwrap_or_else(|| body.chars().take(200).collect())
}
