//! Client credential utilities
//!
//! Common functions for reading client credentials from HTTP headers.

use axum::http::{HeaderMap, header};

/// Authentication scheme accepted in the `Authorization` header
pub const BEARER_SCHEME: &str = "Bearer";

/// Error when extracting a bearer token
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CredentialError {
    #[error("Missing Authorization header")]
    MissingHeader,

    #[error("Malformed Authorization header")]
    Malformed,
}

/// Extract the bearer token from the `Authorization` header
///
/// The header must be exactly `Bearer <token>`: two space-separated parts,
/// scheme matched case-sensitively.
///
/// ## Returns
/// * `Ok(&str)` - The raw token
/// * `Err(CredentialError)` - Header missing or not a bearer credential
pub fn extract_bearer_token(headers: &HeaderMap) -> Result<&str, CredentialError> {
    let value = headers
        .get(header::AUTHORIZATION)
        .ok_or(CredentialError::MissingHeader)?
        .to_str()
        .map_err(|_| CredentialError::Malformed)?;

    let mut parts = value.split(' ');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(BEARER_SCHEME), Some(token), None) if !token.is_empty() => Ok(token),
        _ => Err(CredentialError::Malformed),
    }
}
