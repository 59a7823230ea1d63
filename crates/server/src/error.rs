use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::services::StoreError;

/// Application-wide error type returned by all handlers
#[derive(Debug, Error)]
pub enum AppError {
    /// A referenced record does not exist
    #[error("{0}")]
    NotFound(String),

    /// An association invariant was violated by the request
    #[error("{0}")]
    BadRequest(String),

    /// Database error
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("internal error: {0}")]
    Internal(String),
}

/// API error response body
#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message, details) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone(), None),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone(), None),
            AppError::Database(e) => {
                tracing::error!("Database error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "database error".to_string(),
                    Some(e.to_string()),
                )
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal error".to_string(),
                    Some(msg.clone()),
                )
            }
        };

        let body = ErrorResponse {
            error: error_message,
            details,
        };

        (status, Json(body)).into_response()
    }
}

/// Convenience alias
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self::BadRequest(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}

impl From<StoreError> for AppError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::Database(e) => AppError::Database(e),
            StoreError::StoreNotFound(id) => {
                AppError::NotFound(format!("Pet store with ID={} does not exist", id))
            }
            StoreError::EmployeeNotFound(id) => {
                AppError::NotFound(format!("Employee with ID={} not found", id))
            }
            StoreError::CustomerNotFound(id) => {
                AppError::NotFound(format!("Customer with ID={} not found", id))
            }
            StoreError::EmployeeStoreMismatch { .. } => {
                AppError::BadRequest("Employee does not belong to the specified pet store.".to_string())
            }
            StoreError::CustomerNotAssociated { .. } => {
                AppError::BadRequest("Customer is not associated with the specified pet store.".to_string())
            }
        }
    }
}
