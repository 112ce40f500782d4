//! Classifier service configuration.

use serde::{Deserialize, Serialize};

/// Default classifier endpoint (local development backend).
fn default_base_url() -> String {
    "http://localhost:5000".to_string()
}

/// Default request timeout in seconds.
const fn default_timeout_secs() -> u64 {
    30
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ClassifierConfig {
    /// Base address of the classification service.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Transport timeout for classification requests, in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}
