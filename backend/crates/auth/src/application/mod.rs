//! Application Layer
//!
//! Use cases and application services.

pub mod config;
pub mod login;
pub mod refresh_token;
pub mod register;

// Re-exports
pub use config::AuthConfig;
pub use login::{LoginInput, LoginUseCase};
pub use refresh_token::RefreshTokenUseCase;
pub use register::{RegisterInput, RegisterUseCase};

use users::User;

/// A user together with a freshly issued token
pub struct AuthOutput {
    pub user: User,
    pub token: String,
}
