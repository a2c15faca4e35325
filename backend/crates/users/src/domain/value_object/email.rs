//! Email Value Object
//!
//! A normalized (trimmed, lowercased) email address. Two users collide on
//! email exactly when their normalized addresses are equal.

use kernel::error::app_error::{AppError, AppResult};
use kernel::validation::rule::is_email;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Email address value object
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Email(String);

impl Email {
    /// Create a new email with validation
    pub fn new(email: impl Into<String>) -> AppResult<Self> {
        let email = email.into().trim().to_lowercase();

        if !is_email(&email) {
            return Err(AppError::bad_request("Valid email is required"));
        }

        Ok(Self(email))
    }

    /// Wrap an address that is already known to be valid (seed data)
    pub(crate) fn from_trusted(email: &str) -> Self {
        Self(email.trim().to_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Email {
    type Err = AppError;

    fn from_str(s: &str) -> AppResult<Self> {
        Email::new(s)
    }
}

impl std::fmt::Display for Email {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
