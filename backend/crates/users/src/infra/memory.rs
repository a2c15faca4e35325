//! In-Memory Repository Implementation
//!
//! Process-lifetime storage behind a `tokio::sync::RwLock`. Id assignment
//! and the email uniqueness check run under the write lock, so concurrent
//! creates can never hand out the same id or email.

use std::sync::Arc;

use kernel::pagination::PageRequest;
use kernel::role::UserRole;
use tokio::sync::RwLock;

use crate::domain::entity::{NewUser, User, UserChanges, UserId};
use crate::domain::repository::{UserFilter, UserRepository};
use crate::domain::value_object::Email;
use crate::error::{UsersError, UsersResult};

#[derive(Debug)]
struct Store {
    /// Insertion order
    users: Vec<User>,
    /// Only ever incremented
    next_id: u64,
}

impl Default for Store {
    fn default() -> Self {
        Self {
            users: Vec::new(),
            next_id: 1,
        }
    }
}

impl Store {
    fn insert(&mut self, new_user: NewUser) -> UsersResult<User> {
        if self.users.iter().any(|u| u.email == new_user.email) {
            return Err(UsersError::EmailTaken);
        }

        let id = UserId::from_raw(self.next_id);
        self.next_id += 1;

        let user = User::new(id, new_user);
        self.users.push(user.clone());
        Ok(user)
    }
}

/// In-memory user repository
#[derive(Debug, Clone, Default)]
pub struct InMemoryUserRepository {
    store: Arc<RwLock<Store>>,
}

impl InMemoryUserRepository {
    /// Empty store; the first user gets id 1
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with the two sample users (ids 1 and 2)
    pub fn with_sample_users() -> Self {
        let mut store = Store::default();

        for (name, email, role) in [
            ("John Doe", "john@example.com", UserRole::Admin),
            ("Jane Smith", "jane@example.com", UserRole::User),
        ] {
            // Fresh store with distinct addresses: insert cannot collide.
            let _ = store.insert(NewUser {
                name: name.to_string(),
                email: Email::from_trusted(email),
                role,
                password_hash: None,
            });
        }

        Self {
            store: Arc::new(RwLock::new(store)),
        }
    }
}

impl UserRepository for InMemoryUserRepository {
    async fn list(&self, filter: UserFilter, page: PageRequest) -> UsersResult<(Vec<User>, u64)> {
        let store = self.store.read().await;

        let role = filter.role;
        let matches = move |u: &&User| role.is_none_or(|role| u.role == role);

        let total = store.users.iter().filter(matches).count() as u64;
        let users = store
            .users
            .iter()
            .filter(matches)
            .skip(page.offset())
            .take(page.limit() as usize)
            .cloned()
            .collect();

        Ok((users, total))
    }

    async fn find_by_id(&self, id: UserId) -> UsersResult<Option<User>> {
        let store = self.store.read().await;
        Ok(store.users.iter().find(|u| u.id == id).cloned())
    }

    async fn find_by_email(&self, email: &Email) -> UsersResult<Option<User>> {
        let store = self.store.read().await;
        Ok(store.users.iter().find(|u| &u.email == email).cloned())
    }

    async fn create(&self, new_user: NewUser) -> UsersResult<User> {
        let mut store = self.store.write().await;
        store.insert(new_user)
    }

    async fn update(&self, id: UserId, changes: UserChanges) -> UsersResult<User> {
        let mut store = self.store.write().await;

        let index = store
            .users
            .iter()
            .position(|u| u.id == id)
            .ok_or(UsersError::UserNotFound)?;

        if let Some(email) = &changes.email {
            if store.users.iter().any(|u| &u.email == email && u.id != id) {
                return Err(UsersError::EmailTaken);
            }
        }

        let user = &mut store.users[index];
        user.apply(changes);
        Ok(user.clone())
    }

    async fn delete(&self, id: UserId) -> UsersResult<User> {
        let mut store = self.store.write().await;

        let index = store
            .users
            .iter()
            .position(|u| u.id == id)
            .ok_or(UsersError::UserNotFound)?;

        Ok(store.users.remove(index))
    }

    async fn count(&self) -> UsersResult<u64> {
        Ok(self.store.read().await.users.len() as u64)
    }

    async fn ping(&self) -> UsersResult<()> {
        let _store = self.store.read().await;
        Ok(())
    }
}
