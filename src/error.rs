//! Unified error handling at the handler boundary.
//!
//! Validation failures are not represented here; handlers recover from those
//! locally by re-rendering the form with a message.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::db::RepositoryError;
use crate::services::auth::AuthError;

/// Application-level error type.
#[derive(Debug, Error)]
pub enum AppError {
    /// Database operation failed.
    #[error("database error: {0}")]
    Database(RepositoryError),

    /// Resource not found.
    #[error("not found")]
    NotFound,

    /// Internal server error.
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<RepositoryError> for AppError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => Self::NotFound,
            other => Self::Database(other),
        }
    }
}

impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::Repository(e) => e.into(),
            // EmailTaken and InvalidCredentials are handled in the handlers;
            // reaching here means a code path forgot to.
            other => Self::Internal(other.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if matches!(self, Self::Database(_) | Self::Internal(_)) {
            tracing::error!(error = %self, "request error");
        }

        let status = match &self {
            Self::Database(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::NotFound => StatusCode::NOT_FOUND,
        };

        // Don't expose internal error details to clients
        let message = match &self {
            Self::Database(_) | Self::Internal(_) => "Internal server error",
            Self::NotFound => "Not Found",
        };

        (status, message).into_response()
    }
}
