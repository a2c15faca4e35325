//! User Entity
//!
//! The stored user record. The password hash never leaves the process:
//! it is skipped when the record is serialized.

use chrono::{DateTime, Utc};
use kernel::id::{Id, markers};
use kernel::role::UserRole;
use platform::password::HashedPassword;
use serde::Serialize;

use crate::domain::value_object::Email;

pub type UserId = Id<markers::User>;

/// User entity
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Store-assigned, never reused
    pub id: UserId,
    pub name: String,
    /// Unique across live users
    pub email: Email,
    pub role: UserRole,
    #[serde(skip)]
    pub password_hash: Option<HashedPassword>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Build a record from its creation data; the store supplies the id
    pub fn new(id: UserId, new_user: NewUser) -> Self {
        let now = Utc::now();

        Self {
            id,
            name: new_user.name,
            email: new_user.email,
            role: new_user.role,
            password_hash: new_user.password_hash,
            created_at: now,
            updated_at: now,
        }
    }

    /// Merge the given changes and stamp `updated_at`
    pub fn apply(&mut self, changes: UserChanges) {
        if let Some(name) = changes.name {
            self.name = name;
        }
        if let Some(email) = changes.email {
            self.email = email;
        }
        if let Some(role) = changes.role {
            self.role = role;
        }
        self.updated_at = Utc::now();
    }
}

/// Data for a user that does not exist yet
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: Email,
    pub role: UserRole,
    pub password_hash: Option<HashedPassword>,
}

/// Partial update; `None` leaves the field as it is
#[derive(Debug, Clone, Default)]
pub struct UserChanges {
    pub name: Option<String>,
    pub email: Option<Email>,
    pub role: Option<UserRole>,
}
