//! Create User Use Case
//!
//! Creates a user with a hashed password. Also used by registration.

use std::sync::Arc;

use kernel::role::UserRole;
use platform::password::ClearTextPassword;

use crate::domain::entity::{NewUser, User};
use crate::domain::repository::UserRepository;
use crate::domain::value_object::Email;
use crate::error::{UsersError, UsersResult};

/// Create user input
pub struct CreateUserInput {
    pub name: String,
    pub email: String,
    pub password: String,
    /// Defaults to `user`
    pub role: Option<UserRole>,
}

/// Create user use case
pub struct CreateUserUseCase<R>
where
    R: UserRepository,
{
    repo: Arc<R>,
}

impl<R> CreateUserUseCase<R>
where
    R: UserRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, input: CreateUserInput) -> UsersResult<User> {
        let email = Email::new(input.email)?;

        // Checked again by the store under its write lock.
        if self.repo.find_by_email(&email).await?.is_some() {
            return Err(UsersError::EmailTaken);
        }

        let password_hash = ClearTextPassword::new(input.password).hash()?;

        let user = self
            .repo
            .create(NewUser {
                name: input.name.trim().to_string(),
                email,
                role: input.role.unwrap_or_default(),
                password_hash: Some(password_hash),
            })
            .await?;

        tracing::info!(
            user_id = %user.id,
            role = %user.role,
            "User created"
        );

        Ok(user)
    }
}
