use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

use crate::db::RepoError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),
    /// Request body or path could not be decoded; carries the decoder's status.
    #[error("Decode error: {message}")]
    Decode { status: StatusCode, message: String },
    #[error("Method not allowed")]
    MethodNotAllowed,
    #[error("Conflict: {0}")]
    Conflict(String),
    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound { .. } => AppError::NotFound(err.to_string()),
            RepoError::Constraint(msg) => AppError::Conflict(msg),
            RepoError::Unavailable(e) => AppError::StorageUnavailable(e.to_string()),
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Decode {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::Decode {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::Decode { status, message } => (status, message),
            AppError::MethodNotAllowed => (
                StatusCode::METHOD_NOT_ALLOWED,
                "Method Not Allowed".to_string(),
            ),
            AppError::Conflict(msg) => (StatusCode::CONFLICT, msg),
            AppError::StorageUnavailable(msg) => {
                error!(error = %msg, "Storage operation failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Storage unavailable".to_string(),
                )
            }
            AppError::ServiceUnavailable(msg) => (StatusCode::SERVICE_UNAVAILABLE, msg),
        };

        let body = Json(json!({
            "detail": detail,
        }));

        (status, body).into_response()
    }
}
