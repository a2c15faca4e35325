//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Password hashing (Argon2id)
//! - Signed access tokens (HS256 JWT)
//! - Bearer credential extraction
//! - The guard chain middleware (validation, authentication, authorization)

pub mod client;
pub mod guard;
pub mod password;
pub mod token;
