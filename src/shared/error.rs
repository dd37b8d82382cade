//! Application Error Types
//!
//! Centralized error handling with Axum integration.
//!
//! Every error that reaches the HTTP boundary is rendered with the same
//! envelope as successful responses:
//!
//! ```json
//! { "status": "fail", "message": "thread tidak ditemukan" }
//! ```
//!
//! Client errors use `"fail"`, server errors use `"error"` with a generic
//! message so internal details never leak.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Message returned for every unexpected server-side failure.
pub const SERVER_FAILURE_MESSAGE: &str = "terjadi kegagalan pada server kami";

/// Application error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A required entity (thread, comment, reply) does not exist.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Payload is missing a property, has the wrong type, or breaks a rule.
    #[error("Invalid payload: {0}")]
    InvalidPayload(String),

    /// Acting user does not own the target entity.
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// Unique resource already taken. Rendered as 400.
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Missing bearer token or wrong credentials.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Refresh token failed verification or is not persisted.
    #[error("Invalid token: {0}")]
    InvalidToken(String),

    #[error("Internal error: {0}")]
    Internal(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub status: &'static str,
    pub message: String,
}

impl AppError {
    /// HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::InvalidPayload(_) => StatusCode::BAD_REQUEST,
            AppError::Forbidden(_) => StatusCode::FORBIDDEN,
            AppError::Conflict(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::InvalidToken(_) => StatusCode::BAD_REQUEST,
            AppError::Internal(_) | AppError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let body = match self {
            AppError::NotFound(message)
            | AppError::InvalidPayload(message)
            | AppError::Forbidden(message)
            | AppError::Conflict(message)
            | AppError::Unauthorized(message)
            | AppError::InvalidToken(message) => ErrorResponse {
                status: "fail",
                message,
            },
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                ErrorResponse {
                    status: "error",
                    message: SERVER_FAILURE_MESSAGE.into(),
                }
            }
            AppError::Database(e) => {
                tracing::error!("Database error: {}", e);
                ErrorResponse {
                    status: "error",
                    message: SERVER_FAILURE_MESSAGE.into(),
                }
            }
        };

        (status, Json(body)).into_response()
    }
}
