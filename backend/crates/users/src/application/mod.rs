//! Application Layer
//!
//! Use cases for user management.

pub mod create_user;
pub mod delete_user;
pub mod get_user;
pub mod list_users;
pub mod update_user;

// Re-exports
pub use create_user::{CreateUserInput, CreateUserUseCase};
pub use delete_user::DeleteUserUseCase;
pub use get_user::GetUserUseCase;
pub use list_users::{ListUsersInput, ListUsersOutput, ListUsersUseCase};
pub use update_user::{UpdateUserInput, UpdateUserUseCase};
