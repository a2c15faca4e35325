//! Delete User Use Case

use std::sync::Arc;

use crate::domain::entity::{User, UserId};
use crate::domain::repository::UserRepository;
use crate::error::UsersResult;

/// Delete user use case
pub struct DeleteUserUseCase<R>
where
    R: UserRepository,
{
    repo: Arc<R>,
}

impl<R> DeleteUserUseCase<R>
where
    R: UserRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Remove the user, returning the removed record
    pub async fn execute(&self, id: UserId) -> UsersResult<User> {
        let user = self.repo.delete(id).await?;

        tracing::info!(user_id = %user.id, "User deleted");

        Ok(user)
    }
}
