//! Update User Use Case
//!
//! Partial update of name, email and role.

use std::sync::Arc;

use kernel::role::UserRole;

use crate::domain::entity::{User, UserChanges, UserId};
use crate::domain::repository::UserRepository;
use crate::domain::value_object::Email;
use crate::error::UsersResult;

/// Update user input
#[derive(Debug, Clone, Default)]
pub struct UpdateUserInput {
    pub name: Option<String>,
    pub email: Option<String>,
    pub role: Option<UserRole>,
}

/// Update user use case
pub struct UpdateUserUseCase<R>
where
    R: UserRepository,
{
    repo: Arc<R>,
}

impl<R> UpdateUserUseCase<R>
where
    R: UserRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, id: UserId, input: UpdateUserInput) -> UsersResult<User> {
        let changes = UserChanges {
            name: input.name.map(|name| name.trim().to_string()),
            email: input.email.map(Email::new).transpose()?,
            role: input.role,
        };

        let user = self.repo.update(id, changes).await?;

        tracing::info!(user_id = %user.id, "User updated");

        Ok(user)
    }
}
