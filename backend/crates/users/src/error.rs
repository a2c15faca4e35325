//! Users Error Types
//!
//! This module provides user-management error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use platform::password::PasswordHashError;
use thiserror::Error;

/// Users-specific result type alias
pub type UsersResult<T> = Result<T, UsersError>;

/// Users-specific error variants
#[derive(Debug, Error)]
pub enum UsersError {
    /// No live user has the requested id
    #[error("User not found")]
    UserNotFound,

    /// Another live user already has this email
    #[error("Email already exists")]
    EmailTaken,

    /// Input rejected after validation (e.g. email format)
    #[error("{0}")]
    InvalidInput(String),

    /// Password hashing failed
    #[error("Password hashing failed: {0}")]
    PasswordHash(#[from] PasswordHashError),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl UsersError {
    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            UsersError::UserNotFound => ErrorKind::NotFound,
            UsersError::EmailTaken | UsersError::InvalidInput(_) => ErrorKind::BadRequest,
            UsersError::PasswordHash(_) | UsersError::Internal(_) => {
                ErrorKind::InternalServerError
            }
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        self.kind().status_code()
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), self.to_string())
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            UsersError::PasswordHash(e) => {
                tracing::error!(error = %e, "Password hashing failed");
            }
            UsersError::Internal(msg) => {
                tracing::error!(message = %msg, "Users internal error");
            }
            UsersError::EmailTaken => {
                tracing::info!("Rejected duplicate email");
            }
            _ => {
                tracing::debug!(error = %self, "Users error");
            }
        }
    }
}

impl IntoResponse for UsersError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<UsersError> for AppError {
    fn from(err: UsersError) -> Self {
        err.log();
        err.to_app_error()
    }
}

impl From<AppError> for UsersError {
    fn from(err: AppError) -> Self {
        match err.kind() {
            ErrorKind::BadRequest => UsersError::InvalidInput(err.message().to_string()),
            _ => UsersError::Internal(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(UsersError::UserNotFound.status_code(), 404);
        assert_eq!(UsersError::EmailTaken.status_code(), 400);
        assert_eq!(UsersError::Internal("boom".into()).status_code(), 500);
    }

    #[test]
    fn test_app_error_keeps_message() {
        let err: AppError = UsersError::EmailTaken.into();
        assert_eq!(err.message(), "Email already exists");
        assert_eq!(err.kind(), ErrorKind::BadRequest);

        // 5xx details stay server-side
        let err: AppError = UsersError::Internal("lock poisoned".into()).into();
        assert_eq!(err.public_message(), "Internal server error");
    }
}
