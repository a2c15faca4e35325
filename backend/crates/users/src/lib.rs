//! Users Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - User entity, email value object, repository trait
//! - `application/` - CRUD use cases
//! - `infra/` - In-memory repository
//! - `presentation/` - HTTP handlers, DTOs, rule tables, router
//!
//! ## Access Model
//! - Every route requires a valid bearer token
//! - Create and delete additionally require the `admin` role
//! - Requests are validated before the token is looked at

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use domain::{Email, NewUser, User, UserId, UserRepository};
pub use error::{UsersError, UsersResult};
pub use infra::memory::InMemoryUserRepository;
pub use presentation::router::{users_router, users_router_generic};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

pub mod rules {
    pub use crate::presentation::rules::*;
}

#[cfg(test)]
mod tests;
