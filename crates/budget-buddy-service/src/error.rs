//! API error types and responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use budget_buddy_core::BudgetError;

/// API error type.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The `X-User-Id` header is missing or empty.
    #[error("Missing X-User-Id header")]
    MissingIdentity,

    /// Bad request - invalid input.
    #[error("{0}")]
    BadRequest(#[from] BudgetError),

    /// Resource not found.
    #[error("Not found")]
    NotFound,

    /// Request body exceeded the configured limit.
    #[error("Payload too large")]
    PayloadTooLarge,

    /// Internal server error.
    #[error("internal error: {0}")]
    Internal(String),
}

/// JSON error response body.
#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::MissingIdentity => (StatusCode::UNAUTHORIZED, self.to_string()),
            Self::BadRequest(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            Self::NotFound => (StatusCode::NOT_FOUND, self.to_string()),
            Self::PayloadTooLarge => (StatusCode::PAYLOAD_TOO_LARGE, self.to_string()),
            Self::Internal(msg) => {
                tracing::error!(error = %msg, "Internal server error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}

impl From<budget_buddy_store::StoreError> for ApiError {
    fn from(err: budget_buddy_store::StoreError) -> Self {
        Self::Internal(err.to_string())
    }
}
