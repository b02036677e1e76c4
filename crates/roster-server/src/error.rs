//! API error types with HTTP status code mapping.
//!
//! [`ApiError`] is the unified error type for all API endpoints. It
//! implements `axum::response::IntoResponse` to produce the wire-contract
//! error body `{"error": "<message>"}` with the appropriate status code.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use roster_storage::StorageError;

/// API errors with HTTP status code mapping.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Invalid request, e.g. a malformed record id (400).
    #[error("{0}")]
    BadRequest(String),

    /// No record matched the given id (404).
    #[error("{0}")]
    NotFound(String),

    /// Persistence failure (500).
    #[error("{0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let body = serde_json::json!({ "error": self.to_string() });
        (status, axum::Json(body)).into_response()
    }
}

impl From<StorageError> for ApiError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::RecordNotFound(_) => {
                ApiError::NotFound("student not found".to_string())
            }
            other => {
                tracing::error!(error = %other, "store operation failed");
                ApiError::Internal(other.to_string())
            }
        }
    }
}
