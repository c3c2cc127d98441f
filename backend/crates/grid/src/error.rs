//! Grid Error Types
//!
//! This module provides grid-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Grid-specific result type alias
pub type GridResult<T> = Result<T, GridError>;

/// Grid-specific error variants
#[derive(Debug, Error)]
pub enum GridError {
    /// Missing or malformed request field
    #[error("{0}")]
    Validation(String),

    /// Path id is not a UUID
    #[error("Invalid grid id")]
    InvalidId,

    /// No such grid for this owner (also covers other users' grids)
    #[error("Grid not found")]
    NotFound,

    /// No default grid has been seeded
    #[error("Default grid not found")]
    DefaultGridMissing,

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl GridError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            GridError::Validation(_) | GridError::InvalidId => StatusCode::BAD_REQUEST,
            GridError::NotFound | GridError::DefaultGridMissing => StatusCode::NOT_FOUND,
            GridError::Database(_) | GridError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            GridError::Validation(_) | GridError::InvalidId => ErrorKind::BadRequest,
            GridError::NotFound | GridError::DefaultGridMissing => ErrorKind::NotFound,
            GridError::Database(_) | GridError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            GridError::Database(e) => {
                tracing::error!(error = %e, "Grid database error");
            }
            GridError::Internal(msg) => {
                tracing::error!(message = %msg, "Grid internal error");
            }
            GridError::DefaultGridMissing => {
                tracing::error!("No default grid seeded");
            }
            _ => {
                tracing::debug!(error = %self, "Grid error");
            }
        }
    }
}

impl From<GridError> for AppError {
    fn from(err: GridError) -> Self {
        let kind = err.kind();
        if kind.is_server_error() {
            AppError::internal()
        } else {
            AppError::new(kind, err.to_string())
        }
    }
}

impl IntoResponse for GridError {
    fn into_response(self) -> Response {
        self.log();
        AppError::from(self).into_response()
    }
}
