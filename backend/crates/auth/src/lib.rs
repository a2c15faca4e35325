//! Auth (Authentication) Backend Module
//!
//! Clean Architecture structure:
//! - `application/` - Login, register and refresh use cases; configuration
//! - `presentation/` - HTTP handlers, DTOs, rule tables, router
//!
//! Users are stored by the `users` crate; this crate only checks
//! credentials and issues tokens.
//!
//! ## Security Model
//! - Passwords hashed with Argon2id
//! - Stateless HS256 access tokens carrying `{id, email, role}`
//! - Logout is client-side; tokens stay valid until they expire

pub mod application;
pub mod error;
pub mod presentation;

// Re-exports for convenience
pub use application::config::AuthConfig;
pub use error::{AuthError, AuthResult};
pub use presentation::router::{auth_router, auth_router_generic};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

pub mod config {
    pub use crate::application::config::*;
}

#[cfg(test)]
mod tests;
