//! Post Error Types
//!
//! Post-specific error variants that integrate with the unified
//! `kernel::error::AppError` system.

use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Post-specific result type alias
pub type PostResult<T> = Result<T, PostError>;

/// Post-specific error variants
#[derive(Debug, Error)]
pub enum PostError {
    /// Required request fields are missing
    #[error("All fields are required")]
    MissingFields,

    /// Input failed validation
    #[error("{0}")]
    Validation(String),

    /// Post does not exist or is not owned by the caller
    ///
    /// Deliberately covers both cases with one message so non-owners
    /// cannot probe for existence.
    #[error("Post not found")]
    PostNotFound,

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl PostError {
    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            PostError::MissingFields | PostError::Validation(_) => ErrorKind::BadRequest,
            PostError::PostNotFound => ErrorKind::NotFound,
            PostError::Database(_) | PostError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        match self {
            // Never leak internal details to the client
            PostError::Database(_) | PostError::Internal(_) => {
                AppError::new(self.kind(), "Something went wrong")
            }
            _ => AppError::new(self.kind(), self.to_string()),
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            PostError::Database(e) => {
                tracing::error!(error = %e, "Post database error");
            }
            PostError::Internal(msg) => {
                tracing::error!(message = %msg, "Post internal error");
            }
            _ => {
                tracing::debug!(error = %self, "Post error");
            }
        }
    }
}

impl IntoResponse for PostError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<AppError> for PostError {
    fn from(err: AppError) -> Self {
        if err.kind() == ErrorKind::BadRequest {
            PostError::Validation(err.message().to_string())
        } else {
            PostError::Internal(err.to_string())
        }
    }
}
