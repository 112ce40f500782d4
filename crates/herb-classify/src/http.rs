//! Shared HTTP response helpers for the classifier client.
//!
//! Centralizes the status-code check (non-success → [`ClassifyError::Service`]
//! with the classifier's own error message when the body carries one) so the
//! client stays focused on request construction and response mapping.

use serde::Deserialize;

use crate::error::ClassifyError;

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

/// Check an HTTP response for a non-success status.
///
/// Returns the response unchanged on success. On a non-success status the
/// body is drained and, when it is a JSON `{"error": ...}` object, the
/// classifier's message is surfaced; otherwise the raw body text is.
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, ClassifyError> {
    if resp.status().is_success() {
        return Ok(resp);
    }

    let status = resp.status().as_u16();
    let body = resp.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ErrorBody>(&body).map_or(body, |parsed| parsed.error);
    Err(ClassifyError::Service(format!("HTTP {status}: {message}")))
}
