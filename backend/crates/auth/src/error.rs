//! Auth Error Types
//!
//! This module provides auth-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use platform::token::TokenError;
use thiserror::Error;
use users::UsersError;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    /// Unknown email or wrong password
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Refresh token failed verification
    #[error("Invalid refresh token")]
    InvalidRefreshToken,

    /// Error from the user store (duplicate email, ...)
    #[error(transparent)]
    Users(#[from] UsersError),

    /// Token could not be issued
    #[error("Token error: {0}")]
    Token(#[from] TokenError),
}

impl AuthError {
    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::InvalidCredentials | AuthError::InvalidRefreshToken => {
                ErrorKind::Unauthorized
            }
            AuthError::Users(e) => e.kind(),
            AuthError::Token(TokenError::Signing(_)) => ErrorKind::InternalServerError,
            AuthError::Token(_) => ErrorKind::Unauthorized,
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        self.kind().status_code()
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        match self {
            AuthError::Users(e) => e.to_app_error(),
            AuthError::Token(TokenError::Signing(_)) => AppError::internal(self.to_string()),
            _ => AppError::new(self.kind(), self.to_string()),
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            AuthError::InvalidCredentials => {
                tracing::warn!("Invalid login attempt");
            }
            AuthError::InvalidRefreshToken => {
                tracing::warn!("Invalid refresh token presented");
            }
            AuthError::Token(e) => {
                tracing::error!(error = %e, "Token issuance failed");
            }
            AuthError::Users(e) if e.kind().is_server_error() => {
                tracing::error!(error = %e, "User store error during auth");
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
        self.to_app_error().into_response()
    }
}

impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        err.log();
        err.to_app_error()
    }
}
