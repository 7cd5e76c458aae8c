//! Source and provider error types.
//!
//! These represent failures when talking to the word API or the feedback
//! backend, typed so callers can distinguish permanent misconfiguration
//! from transient network trouble without string matching.

use thiserror::Error;

/// Errors that can occur when fetching words or requesting feedback.
#[derive(Debug, Error)]
pub enum SourceError {
    /// Authentication failed (invalid or missing API key).
    #[error("authentication failed: {0}")]
    AuthenticationFailed(String),

    /// The requested resource or model was not found.
    #[error("not found: {0}")]
    NotFound(String),

    /// The backend returned an error response.
    #[error("API error (HTTP {status}): {message}")]
    ApiError { status: u16, message: String },

    /// The request timed out.
    #[error("request timed out after {0}s")]
    Timeout(u64),

    /// A network error occurred.
    #[error("network error: {0}")]
    NetworkError(String),
}

impl SourceError {
    /// Returns `true` if this error is permanent and retrying is pointless.
    pub fn is_permanent(&self) -> bool {
        matches!(
            self,
            SourceError::AuthenticationFailed(_) | SourceError::NotFound(_)
        )
    }
}
