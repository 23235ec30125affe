//! API-boundary error type.
//!
//! Every failure that reaches a handler is rendered as `{"error": "<message>"}`
//! with the matching status code. Messages are client-facing; internal causes
//! are logged where they occur and never copied into the body.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{message}")]
    Validation { message: String },

    #[error("{message}")]
    NotFound { message: String },

    #[error("{message}")]
    Internal { message: String },

    /// Store failure. The cause shows up in `Display` for logs; clients only
    /// ever see the generic message.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

const DATABASE_ERROR_MESSAGE: &str = "Database error";

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Builds an error from a status code produced by the service layer.
    ///
    /// Codes other than 400 and 404 are treated as internal failures.
    pub fn from_status(status: StatusCode, message: impl Into<String>) -> Self {
        match status {
            StatusCode::BAD_REQUEST => Self::bad_request(message),
            StatusCode::NOT_FOUND => Self::not_found(message),
            _ => Self::internal(message),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Internal { .. } | AppError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            AppError::Validation { message }
            | AppError::NotFound { message }
            | AppError::Internal { message } => message,
            AppError::Database(_) => DATABASE_ERROR_MESSAGE,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorBody {
            error: match self {
                AppError::Validation { message }
                | AppError::NotFound { message }
                | AppError::Internal { message } => message,
                AppError::Database(_) => DATABASE_ERROR_MESSAGE.to_string(),
            },
        };

        (status, Json(body)).into_response()
    }
}
