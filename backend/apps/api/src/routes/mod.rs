//! Service-level routes
//!
//! Everything that is not part of the auth or users API: the banner, the
//! endpoint catalogue, health probes and the long-running demo.

pub mod demo;
pub mod health;
pub mod system;

use std::time::Instant;

use users::InMemoryUserRepository;

use crate::config::Environment;

/// Shared state for service-level handlers
#[derive(Clone)]
pub struct AppState {
    pub repo: InMemoryUserRepository,
    pub environment: Environment,
    pub started_at: Instant,
}

/// Crate version reported by the banner and health check
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Service name reported by the banner and catalogue
pub const SERVICE_NAME: &str = "Users API";
