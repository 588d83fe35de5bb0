use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
/// Errors returned by remote search collaborators.
pub enum RemoteSearchError {
    /// Transport-level failure (connect, TLS, body read, client timeout).
    #[error("remote request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The provider answered with a non-success status.
    #[error("remote search returned {status}: {message}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Provider message, if any.
        message: String,
    },

    /// The call did not finish within the caller's bound.
    #[error("remote search timed out after {after:?}")]
    Timeout {
        /// Bound that elapsed.
        after: Duration,
    },

    /// Collaborator is not usable (e.g. no credentials).
    #[error("remote search unavailable: {0}")]
    Unavailable(String),
}
