//! # herb-classify
//!
//! HTTP client for the external leaf classification service.
//!
//! The service is a black box behind two routes:
//! - `POST /predict` — multipart image upload (field `file`), replying
//!   `{"predictedLabel": "..."}` on success or `{"error": "..."}` on failure
//! - `GET /` — liveness probe replying `{"message": "..."}`
//!
//! Classification failures never touch persisted state; callers surface
//! them inline and move on.

mod error;
mod http;

pub use error::ClassifyError;

use std::time::Duration;

use serde::Deserialize;

use crate::http::check_response;

#[derive(Debug, Deserialize)]
struct PredictResponse {
    #[serde(rename = "predictedLabel")]
    predicted_label: Option<String>,
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
struct HealthResponse {
    message: String,
}

/// Client for the classification service.
pub struct ClassifierClient {
    http: reqwest::Client,
    base_url: String,
}

impl ClassifierClient {
    /// Create a client for the service at `base_url`.
    ///
    /// # Panics
    ///
    /// Panics if the underlying `reqwest::Client` fails to build.
    #[must_use]
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        let base_url = base_url.into();
        Self {
            http: reqwest::Client::builder()
                .user_agent("herbaria/0.1")
                .timeout(timeout)
                .build()
                .expect("reqwest client should build"),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Submit image bytes for classification and return the raw label.
    ///
    /// # Errors
    ///
    /// Returns [`ClassifyError::Transport`] if the endpoint is unreachable
    /// or the response body is unusable, and [`ClassifyError::Service`] if
    /// the classifier reports a failure of its own.
    pub async fn classify(
        &self,
        image_name: &str,
        image_bytes: Vec<u8>,
    ) -> Result<String, ClassifyError> {
        let part = reqwest::multipart::Part::bytes(image_bytes).file_name(image_name.to_string());
        let form = reqwest::multipart::Form::new().part("file", part);

        let url = format!("{}/predict", self.base_url);
        tracing::debug!(%url, image_name, "submitting image for classification");

        let resp = check_response(self.http.post(&url).multipart(form).send().await?).await?;
        let body: PredictResponse = resp
            .json()
            .await
            .map_err(|e| ClassifyError::Transport(format!("unreadable response: {e}")))?;

        if let Some(message) = body.error {
            return Err(ClassifyError::Service(message));
        }
        body.predicted_label.ok_or_else(|| {
            ClassifyError::Transport("response carried neither a label nor an error".to_string())
        })
    }

    /// Probe the service's liveness route.
    ///
    /// # Errors
    ///
    /// Returns [`ClassifyError`] if the service is unreachable or replies
    /// with a non-success status.
    pub async fn health(&self) -> Result<String, ClassifyError> {
        let url = format!("{}/", self.base_url);
        let resp = check_response(self.http.get(&url).send().await?).await?;
        let body: HealthResponse = resp
            .json()
            .await
            .map_err(|e| ClassifyError::Transport(format!("unreadable response: {e}")))?;
        Ok(body.message)
    }
}
