//! Login Use Case
//!
//! Checks an email/password pair against the user store and issues a token.

use std::sync::Arc;

use platform::password::ClearTextPassword;
use platform::token::TokenService;
use users::{Email, UserRepository};

use crate::application::AuthOutput;
use crate::error::{AuthError, AuthResult};

/// Login input
pub struct LoginInput {
    pub email: String,
    pub password: String,
}

/// Login use case
pub struct LoginUseCase<R>
where
    R: UserRepository,
{
    repo: Arc<R>,
    tokens: Arc<TokenService>,
}

impl<R> LoginUseCase<R>
where
    R: UserRepository,
{
    pub fn new(repo: Arc<R>, tokens: Arc<TokenService>) -> Self {
        Self { repo, tokens }
    }

    pub async fn execute(&self, input: LoginInput) -> AuthResult<AuthOutput> {
        let email = Email::new(input.email).map_err(|_| AuthError::InvalidCredentials)?;

        let user = self
            .repo
            .find_by_email(&email)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        // Users without a password (sample data) cannot log in.
        let hash = user
            .password_hash
            .as_ref()
            .ok_or(AuthError::InvalidCredentials)?;

        let password = ClearTextPassword::new(input.password);
        if !hash.verify(&password) {
            return Err(AuthError::InvalidCredentials);
        }

        let token = self
            .tokens
            .issue(user.id.get(), user.email.as_str(), user.role)?;

        tracing::info!(user_id = %user.id, "User logged in");

        Ok(AuthOutput { user, token })
    }
}
