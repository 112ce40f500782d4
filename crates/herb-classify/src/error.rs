//! Classifier boundary error types.

use thiserror::Error;

/// Errors from the classification boundary.
///
/// Both variants mean "this classification failed"; neither ever touches
/// persisted state. Transport covers everything between this process and a
/// well-formed classifier reply (unreachable endpoint, timeouts, unusable
/// bodies); Service carries a failure the classifier itself reported.
#[derive(Debug, Error)]
pub enum ClassifyError {
    /// The endpoint could not be reached or its response was unusable.
    #[error("classification request failed: {0}")]
    Transport(String),

    /// The classifier reported an error of its own.
    #[error("classifier error: {0}")]
    Service(String),
}

impl From<reqwest::Error> for ClassifyError {
    fn from(error: reqwest::Error) -> Self {
        Self::Transport(error.to_string())
    }
}
