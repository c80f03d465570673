use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug, Serialize)]
#[serde(tag = "type", content = "message")]
pub enum AppError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            AppError::DatabaseError(_)
            | AppError::ConfigError(_)
            | AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Same variant with the detail replaced, for server errors sent to clients
    fn redacted(self) -> Self {
        const GENERIC: &str = "Internal server error";
        match self {
            AppError::DatabaseError(_) => AppError::DatabaseError(GENERIC.to_string()),
            AppError::ConfigError(_) => AppError::ConfigError(GENERIC.to_string()),
            AppError::InternalError(_) => AppError::InternalError(GENERIC.to_string()),
            client_error => client_error,
        }
    }
}

impl From<diesel::result::Error> for AppError {
    fn from(err: diesel::result::Error) -> Self {
        match err {
            diesel::result::Error::NotFound => {
                AppError::NotFound("Record not found in database".to_string())
            }
            _ => AppError::DatabaseError(err.to_string()),
        }
    }
}

impl From<diesel::r2d2::PoolError> for AppError {
    fn from(err: diesel::r2d2::PoolError) -> Self {
        AppError::DatabaseError(format!("Database pool error: {}", err))
    }
}

impl From<tokio::task::JoinError> for AppError {
    fn from(err: tokio::task::JoinError) -> Self {
        AppError::InternalError(format!("Blocking task failed: {}", err))
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::InternalError(format!("I/O error: {}", err))
    }
}

// JSON body for API routes; page routes render their own error template.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if !status.is_server_error() {
            return (status, Json(self)).into_response();
        }

        log::error!("Request failed: {}", self);
        (status, Json(self.redacted())).into_response()
    }
}

// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;
