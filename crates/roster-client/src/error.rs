//! Client error types for roster-client.

use thiserror::Error;

/// Errors produced by API calls.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport-level failure (connection refused, timeout, bad JSON).
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with an error status and `{"error"}` body.
    #[error("server error ({status}): {message}")]
    Api { status: u16, message: String },
}
