//! Store error types.

use thiserror::Error;

/// Errors surfaced by the account registry. These are user-facing and are
/// reported verbatim by the presentation layer; none of them is retried.
#[derive(Debug, Error)]
pub enum StoreError {
    /// An account with this email is already registered.
    #[error("an account with email '{0}' is already registered")]
    DuplicateEmail(String),

    /// No account matches this email.
    #[error("no account found for email '{0}'")]
    UserNotFound(String),

    /// The supplied password was not accepted.
    #[error("incorrect password")]
    InvalidCredentials,
}
