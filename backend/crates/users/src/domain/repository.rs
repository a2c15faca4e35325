//! Repository Traits
//!
//! Interfaces for user persistence. Handlers and use cases only see these
//! traits, so the in-memory store can be swapped for a database.

use kernel::pagination::PageRequest;
use kernel::role::UserRole;

use crate::domain::entity::{NewUser, User, UserChanges, UserId};
use crate::domain::value_object::Email;
use crate::error::UsersResult;

/// List filter
#[derive(Debug, Clone, Copy, Default)]
pub struct UserFilter {
    pub role: Option<UserRole>,
}

/// User repository trait
///
/// Implementations must make `create` and `update` atomic with respect to
/// the email uniqueness check.
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// One page of users in insertion order, plus the filtered total
    async fn list(&self, filter: UserFilter, page: PageRequest) -> UsersResult<(Vec<User>, u64)>;

    /// Find user by ID
    async fn find_by_id(&self, id: UserId) -> UsersResult<Option<User>>;

    /// Find user by (normalized) email
    async fn find_by_email(&self, email: &Email) -> UsersResult<Option<User>>;

    /// Assign the next id and insert; `EmailTaken` on collision
    async fn create(&self, new_user: NewUser) -> UsersResult<User>;

    /// Merge changes into an existing user; `UserNotFound` or `EmailTaken`
    async fn update(&self, id: UserId, changes: UserChanges) -> UsersResult<User>;

    /// Remove and return the user; `UserNotFound` if absent
    async fn delete(&self, id: UserId) -> UsersResult<User>;

    /// Number of live users
    async fn count(&self) -> UsersResult<u64>;

    /// Readiness probe
    async fn ping(&self) -> UsersResult<()>;
}
