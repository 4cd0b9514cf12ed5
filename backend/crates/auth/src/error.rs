//! Auth Error Types
//!
//! This module provides auth-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use platform::bearer::{BearerError, www_authenticate_challenge};
use thiserror::Error;

use crate::domain::value_object::user_role::UserRole;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    /// No usable `Authorization: Bearer` header
    #[error("Please authenticate")]
    MissingCredential,

    /// Token is malformed, badly signed or names an unknown role
    #[error("Invalid credential")]
    InvalidCredential,

    /// Token signature is fine but `exp` has passed
    #[error("Credential expired")]
    CredentialExpired,

    /// Unknown email or wrong password (indistinguishable on purpose)
    #[error("Invalid credentials")]
    InvalidLogin,

    /// Authenticated, but the role gate refused
    #[error("Access denied")]
    Forbidden { required: UserRole },

    #[error("Email is already registered")]
    EmailTaken,

    #[error("{0}")]
    Validation(String),

    #[error("User not found")]
    UserNotFound,

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.kind().status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::MissingCredential
            | AuthError::InvalidCredential
            | AuthError::CredentialExpired
            | AuthError::InvalidLogin => ErrorKind::Unauthorized,
            AuthError::Forbidden { .. } => ErrorKind::Forbidden,
            AuthError::EmailTaken => ErrorKind::Conflict,
            AuthError::Validation(_) => ErrorKind::BadRequest,
            AuthError::UserNotFound => ErrorKind::NotFound,
            AuthError::Database(_) | AuthError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Machine-readable code carried in the problem body
    pub fn code(&self) -> &'static str {
        match self {
            AuthError::MissingCredential => "AUTHENTICATION_REQUIRED",
            AuthError::InvalidCredential | AuthError::InvalidLogin => "INVALID_CREDENTIALS",
            AuthError::CredentialExpired => "CREDENTIAL_EXPIRED",
            AuthError::Forbidden { .. } => "FORBIDDEN",
            AuthError::EmailTaken => "EMAIL_TAKEN",
            AuthError::Validation(_) => "VALIDATION_FAILED",
            AuthError::UserNotFound => "NOT_FOUND",
            AuthError::Database(_) | AuthError::Internal(_) => "INTERNAL",
        }
    }

    pub fn is_authentication_failure(&self) -> bool {
        self.kind() == ErrorKind::Unauthorized
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        let err = AppError::new(self.kind(), self.to_string()).with_code(self.code());
        match self {
            AuthError::MissingCredential => {
                err.with_action("Send an Authorization: Bearer <token> header")
            }
            AuthError::CredentialExpired => err.with_action("Please log in again"),
            _ => err,
        }
    }

    /// Log the error with appropriate level
    pub(crate) fn log(&self) {
        match self {
            AuthError::Database(e) => {
                tracing::error!(error = %e, "Auth database error");
            }
            AuthError::Internal(msg) => {
                tracing::error!(message = %msg, "Auth internal error");
            }
            AuthError::InvalidLogin => {
                tracing::warn!("Invalid login attempt");
            }
            AuthError::InvalidCredential => {
                tracing::warn!("Rejected bearer credential");
            }
            AuthError::Forbidden { required } => {
                tracing::warn!(required = %required, "Role gate refused");
            }
            _ => {
                tracing::debug!(error = %self, "Auth error");
            }
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        self.log();
        let challenge = match &self {
            AuthError::MissingCredential => Some(www_authenticate_challenge(None)),
            e if e.is_authentication_failure() => {
                Some(www_authenticate_challenge(Some("invalid_token")))
            }
            _ => None,
        };

        let mut response = match self {
            AuthError::Database(e) => AppError::from(e).into_response(),
            other => other.to_app_error().into_response(),
        };

        if let Some(value) = challenge {
            response.headers_mut().insert(header::WWW_AUTHENTICATE, value);
        }
        response
    }
}

impl From<AppError> for AuthError {
    fn from(err: AppError) -> Self {
        match err.kind() {
            ErrorKind::BadRequest => AuthError::Validation(err.message().to_string()),
            _ => AuthError::Internal(err.to_string()),
        }
    }
}

impl From<JsonRejection> for AuthError {
    fn from(rejection: JsonRejection) -> Self {
        AuthError::Validation(rejection.body_text())
    }
}

impl From<PathRejection> for AuthError {
    fn from(rejection: PathRejection) -> Self {
        AuthError::Validation(rejection.body_text())
    }
}

impl From<BearerError> for AuthError {
    fn from(_: BearerError) -> Self {
        AuthError::MissingCredential
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_and_codes() {
        assert_eq!(AuthError::MissingCredential.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(AuthError::InvalidLogin.code(), "INVALID_CREDENTIALS");
        assert_eq!(AuthError::CredentialExpired.code(), "CREDENTIAL_EXPIRED");
        assert_eq!(
            AuthError::Forbidden {
                required: UserRole::Admin
            }
            .status_code(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(AuthError::EmailTaken.status_code(), StatusCode::CONFLICT);
        assert_eq!(
            AuthError::Validation("bad".into()).code(),
            "VALIDATION_FAILED"
        );
    }

    #[test]
    fn test_from_app_error_keeps_validation() {
        let err: AuthError = AppError::bad_request("Name cannot be empty").into();
        assert!(matches!(err, AuthError::Validation(ref m) if m == "Name cannot be empty"));

        let err: AuthError = AppError::internal("boom").into();
        assert!(matches!(err, AuthError::Internal(_)));
    }

    #[test]
    fn test_unauthorized_response_has_challenge() {
        let response = AuthError::MissingCredential.into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert!(response.headers().contains_key(header::WWW_AUTHENTICATE));

        let response = AuthError::Forbidden {
            required: UserRole::Admin,
        }
        .into_response();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
        assert!(!response.headers().contains_key(header::WWW_AUTHENTICATE));
    }
}
