/// Error types for Posts Service
///
/// Every failure is rendered as `{"error": <message>}` with the matching
/// HTTP status. Database errors carry the driver's message unchanged.
use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use db_pool::{env_utils::EnvVarError, DbConfigError};
use thiserror::Error;

/// Result type for posts-service operations
pub type Result<T> = std::result::Result<T, AppError>;

pub const POST_NOT_FOUND: &str = "Post not found";

/// Application error types
#[derive(Debug, Error)]
pub enum AppError {
    /// Database operation failed
    #[error("{0}")]
    Database(String),

    /// Resource not found
    #[error("{0}")]
    NotFound(String),

    /// Request could not be decoded
    #[error("{0}")]
    BadRequest(String),

    /// Configuration could not be loaded
    #[error("Configuration error: {0}")]
    Config(String),

    /// Internal server error
    #[error("{0}")]
    Internal(String),
}

impl AppError {
    pub fn post_not_found() -> Self {
        AppError::NotFound(POST_NOT_FOUND.to_string())
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Database(_) | AppError::Config(_) | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(serde_json::json!({
            "error": self.to_string(),
        }))
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::Database(db_err) => AppError::Database(db_err.message().to_string()),
            other => AppError::Database(other.to_string()),
        }
    }
}

impl From<EnvVarError> for AppError {
    fn from(err: EnvVarError) -> Self {
        AppError::Config(err.to_string())
    }
}

impl From<DbConfigError> for AppError {
    fn from(err: DbConfigError) -> Self {
        AppError::Config(err.to_string())
    }
}

/// Shared failure branch for handlers: log the storage error with the
/// operation that failed, then convert it into a 500 response.
pub trait StorageResultExt<T> {
    fn storage_context(self, operation: &'static str) -> Result<T>;
}

impl<T> StorageResultExt<T> for std::result::Result<T, sqlx::Error> {
    fn storage_context(self, operation: &'static str) -> Result<T> {
        self.map_err(|err| {
            tracing::error!(error = %err, "Error {}", operation);
            AppError::from(err)
        })
    }
}
