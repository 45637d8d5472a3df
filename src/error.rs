//! Error types for the impact server

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Stable numeric error codes exposed to report consumers.
/// Zero is never sent; it would read as success.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum ErrorCode {
    Failure = 1,
    DbFailure = 2,
    NoSuchData = 3,
    BadValue = 4,
    InvalidRecord = 5,
    Duplicate = 6,
}

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Malformed request (e.g. `start > end`); nothing was computed.
    #[error("Validation error: {0}")]
    Validation(String),

    /// A device record broke the weight/enum invariants; the whole batch is aborted.
    #[error("Invalid record: {0}")]
    InvalidRecord(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Error response body
#[derive(Serialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub code: u32,
    pub error: String,
    pub message: String,
}

impl AppError {
    fn parts(&self) -> (StatusCode, ErrorCode, String) {
        match self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, ErrorCode::BadValue, msg.clone()),
            AppError::InvalidRecord(msg) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                ErrorCode::InvalidRecord,
                msg.clone(),
            ),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, ErrorCode::NoSuchData, msg.clone()),
            AppError::Conflict(msg) => (StatusCode::CONFLICT, ErrorCode::Duplicate, msg.clone()),
            AppError::Database(e) => {
                tracing::error!("Database error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorCode::DbFailure,
                    "Database error".to_string(),
                )
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorCode::Failure,
                    "Internal server error".to_string(),
                )
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = self.parts();

        let body = Json(ErrorResponse {
            code: code as u32,
            error: format!("{:?}", code),
            message,
        });

        (status, body).into_response()
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        AppError::Validation(errors.to_string())
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let cases = [
            (AppError::Validation("x".into()), StatusCode::BAD_REQUEST, ErrorCode::BadValue),
            (
                AppError::InvalidRecord("x".into()),
                StatusCode::UNPROCESSABLE_ENTITY,
                ErrorCode::InvalidRecord,
            ),
            (AppError::NotFound("x".into()), StatusCode::NOT_FOUND, ErrorCode::NoSuchData),
            (AppError::Conflict("x".into()), StatusCode::CONFLICT, ErrorCode::Duplicate),
        ];
        for (err, status, code) in cases {
            let (s, c, _) = err.parts();
            assert_eq!(s, status);
            assert_eq!(c, code);
        }
    }

    #[test]
    fn test_error_codes_are_never_zero() {
        let errors = [
            AppError::Validation("x".into()),
            AppError::InvalidRecord("x".into()),
            AppError::NotFound("x".into()),
            AppError::Conflict("x".into()),
            AppError::Database(sqlx::Error::RowNotFound),
            AppError::Internal("x".into()),
        ];
        for err in errors {
            let (_, code, _) = err.parts();
            assert_ne!(code as u32, 0);
        }
    }

    #[test]
    fn test_internal_message_is_masked() {
        let (status, _, message) = AppError::Internal("pool exhausted".into()).parts();
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(message, "Internal server error");
    }
}
