use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use ticklist_storage::StorageError;
use tracing::{error, info};
use uuid::Uuid;

/// Main application error type that all handlers should return
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Todo with ID {0} not found")]
    TodoNotFound(i64),

    /// Wrap storage errors from the storage layer
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

/// Error body returned to clients
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

impl AppError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Map a storage error for the todo `id`, turning a missing row into a 404
    pub fn for_todo(id: i64) -> impl FnOnce(StorageError) -> AppError {
        move |err| match err {
            StorageError::NotFound => AppError::TodoNotFound(id),
            other => AppError::Storage(other),
        }
    }

    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::TodoNotFound(_) | AppError::Storage(StorageError::NotFound) => {
                StatusCode::NOT_FOUND
            }
            AppError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get user-friendly error message (sanitized for external consumption)
    fn to_user_message(&self) -> String {
        match self {
            AppError::Validation(msg) => msg.clone(),
            AppError::TodoNotFound(_) => self.to_string(),
            AppError::Storage(StorageError::NotFound) => {
                "The requested resource was not found".to_string()
            }
            AppError::Storage(_) => "Database error".to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status_code = self.status_code();

        if status_code.is_server_error() {
            let request_id = Uuid::new_v4().to_string();
            error!(
                request_id = %request_id,
                error = %self,
                "Internal server error occurred"
            );
        } else {
            info!(
                status = %status_code.as_u16(),
                error = %self,
                "API error response"
            );
        }

        let body = ErrorResponse {
            error: self.to_user_message(),
        };

        (status_code, Json(body)).into_response()
    }
}

/// Result type alias for API handlers
pub type ApiResult<T> = Result<T, AppError>;
