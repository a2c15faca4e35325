//! Refresh Token Use Case
//!
//! Exchanges a still-valid token for a new one with a fresh expiry.
//! Tokens are stateless, so the presented token stays valid until it expires.

use std::sync::Arc;

use platform::token::TokenService;

use crate::error::{AuthError, AuthResult};

/// Refresh token use case
pub struct RefreshTokenUseCase {
    tokens: Arc<TokenService>,
}

impl RefreshTokenUseCase {
    pub fn new(tokens: Arc<TokenService>) -> Self {
        Self { tokens }
    }

    pub async fn execute(&self, refresh_token: &str) -> AuthResult<String> {
        let claims = self.tokens.verify(refresh_token).map_err(|e| {
            tracing::debug!(error = %e, "Refresh token rejected");
            AuthError::InvalidRefreshToken
        })?;

        let token = self.tokens.issue(claims.id, &claims.email, claims.role)?;

        tracing::debug!(user_id = claims.id, "Token refreshed");

        Ok(token)
    }
}
