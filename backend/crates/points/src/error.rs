//! Points Error Types
//!
//! This module provides ledger-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use auth::AuthError;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

use crate::domain::value_objects::RequestStatus;

/// Points-specific result type alias
pub type PointsResult<T> = Result<T, PointsError>;

/// Points-specific error variants
#[derive(Debug, Error)]
pub enum PointsError {
    /// Authentication or role gate failure
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error("{0}")]
    Validation(String),

    #[error("Point request not found")]
    RequestNotFound,

    #[error("Student not found")]
    StudentNotFound,

    /// Request is not pending anymore
    #[error("Point request is already {current}")]
    InvalidState { current: RequestStatus },

    /// Status and balance would disagree; the transaction was rolled back
    #[error("Inconsistent state: {0}")]
    InconsistentState(String),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl PointsError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            PointsError::Auth(e) => e.status_code(),
            other => StatusCode::from_u16(other.kind().status_code())
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            PointsError::Auth(e) => e.kind(),
            PointsError::Validation(_) => ErrorKind::BadRequest,
            PointsError::RequestNotFound | PointsError::StudentNotFound => ErrorKind::NotFound,
            PointsError::InvalidState { .. } => ErrorKind::Conflict,
            PointsError::InconsistentState(_)
            | PointsError::Database(_)
            | PointsError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Machine-readable code carried in the problem body
    pub fn code(&self) -> &'static str {
        match self {
            PointsError::Auth(e) => e.code(),
            PointsError::Validation(_) => "VALIDATION_FAILED",
            PointsError::RequestNotFound | PointsError::StudentNotFound => "NOT_FOUND",
            PointsError::InvalidState { .. } => "INVALID_STATE",
            PointsError::InconsistentState(_) => "INCONSISTENT_STATE",
            PointsError::Database(_) | PointsError::Internal(_) => "INTERNAL",
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            PointsError::Database(e) => {
                tracing::error!(error = %e, "Points database error");
            }
            PointsError::Internal(msg) => {
                tracing::error!(message = %msg, "Points internal error");
            }
            PointsError::InconsistentState(msg) => {
                tracing::error!(message = %msg, "Ledger inconsistency, rolled back");
            }
            PointsError::InvalidState { current } => {
                tracing::warn!(current = %current, "Resolve attempted on a terminal request");
            }
            _ => {
                tracing::debug!(error = %self, "Points error");
            }
        }
    }
}

impl From<PointsError> for AppError {
    fn from(err: PointsError) -> Self {
        match err {
            PointsError::Auth(e) => e.to_app_error(),
            PointsError::Database(e) => AppError::from(e),
            other => AppError::new(other.kind(), other.to_string()).with_code(other.code()),
        }
    }
}

impl IntoResponse for PointsError {
    fn into_response(self) -> Response {
        match self {
            // Keeps the WWW-Authenticate challenge
            PointsError::Auth(e) => e.into_response(),
            other => {
                other.log();
                AppError::from(other).into_response()
            }
        }
    }
}

impl From<JsonRejection> for PointsError {
    fn from(rejection: JsonRejection) -> Self {
        PointsError::Validation(rejection.body_text())
    }
}

impl From<PathRejection> for PointsError {
    fn from(rejection: PathRejection) -> Self {
        PointsError::Validation(rejection.body_text())
    }
}
