//! Register Use Case
//!
//! Creates a `user`-role account and logs it straight in.

use std::sync::Arc;

use kernel::role::UserRole;
use platform::token::TokenService;
use users::UserRepository;
use users::application::{CreateUserInput, CreateUserUseCase};

use crate::application::AuthOutput;
use crate::error::AuthResult;

/// Register input
pub struct RegisterInput {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Register use case
pub struct RegisterUseCase<R>
where
    R: UserRepository,
{
    repo: Arc<R>,
    tokens: Arc<TokenService>,
}

impl<R> RegisterUseCase<R>
where
    R: UserRepository,
{
    pub fn new(repo: Arc<R>, tokens: Arc<TokenService>) -> Self {
        Self { repo, tokens }
    }

    pub async fn execute(&self, input: RegisterInput) -> AuthResult<AuthOutput> {
        let user = CreateUserUseCase::new(self.repo.clone())
            .execute(CreateUserInput {
                name: input.name,
                email: input.email,
                password: input.password,
                role: Some(UserRole::User),
            })
            .await?;

        let token = self
            .tokens
            .issue(user.id.get(), user.email.as_str(), user.role)?;

        tracing::info!(user_id = %user.id, "User registered");

        Ok(AuthOutput { user, token })
    }
}
