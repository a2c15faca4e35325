//! Get User Use Case

use std::sync::Arc;

use crate::domain::entity::{User, UserId};
use crate::domain::repository::UserRepository;
use crate::error::{UsersError, UsersResult};

/// Get user use case
pub struct GetUserUseCase<R>
where
    R: UserRepository,
{
    repo: Arc<R>,
}

impl<R> GetUserUseCase<R>
where
    R: UserRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, id: UserId) -> UsersResult<User> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(UsersError::UserNotFound)
    }
}
