//! List Users Use Case
//!
//! Returns one page of users, optionally filtered by role.

use std::sync::Arc;

use kernel::pagination::{PageRequest, Pagination};
use kernel::role::UserRole;
use serde::Serialize;

use crate::domain::entity::User;
use crate::domain::repository::{UserFilter, UserRepository};
use crate::error::UsersResult;

/// List users input
#[derive(Debug, Clone, Default)]
pub struct ListUsersInput {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub role: Option<UserRole>,
}

/// List users output
#[derive(Debug, Clone, Serialize)]
pub struct ListUsersOutput {
    pub users: Vec<User>,
    pub pagination: Pagination,
}

/// List users use case
pub struct ListUsersUseCase<R>
where
    R: UserRepository,
{
    repo: Arc<R>,
}

impl<R> ListUsersUseCase<R>
where
    R: UserRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, input: ListUsersInput) -> UsersResult<ListUsersOutput> {
        let page = PageRequest::new(input.page, input.limit);
        let filter = UserFilter { role: input.role };

        let (users, total) = self.repo.list(filter, page).await?;

        tracing::debug!(
            page = page.page(),
            limit = page.limit(),
            returned = users.len(),
            total,
            "Listed users"
        );

        Ok(ListUsersOutput {
            users,
            pagination: Pagination::new(page, total),
        })
    }
}
