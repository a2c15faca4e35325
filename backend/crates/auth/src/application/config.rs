//! Application Configuration
//!
//! Configuration for the Auth application layer.

use std::time::Duration;

use thiserror::Error;

/// Default lifetime label for issued tokens
pub const DEFAULT_EXPIRES_IN: &str = "24h";

/// Unparseable duration label
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid duration `{0}`: expected seconds or a number with an s/m/h/d suffix")]
pub struct InvalidDuration(pub String);

/// Auth application configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Lifetime of issued tokens
    pub token_ttl: Duration,
    /// The lifetime as configured (e.g. `24h`), echoed to clients as `expiresIn`
    pub expires_in: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            token_ttl: Duration::from_secs(24 * 3600), // 24 hours
            expires_in: DEFAULT_EXPIRES_IN.to_string(),
        }
    }
}

impl AuthConfig {
    /// Build from a duration label such as `1h`, `30m` or `3600`
    pub fn from_expires_in(label: &str) -> Result<Self, InvalidDuration> {
        Ok(Self {
            token_ttl: parse_duration(label)?,
            expires_in: label.trim().to_string(),
        })
    }
}

/// Parse `<n>`, `<n>s`, `<n>m`, `<n>h` or `<n>d`
pub fn parse_duration(label: &str) -> Result<Duration, InvalidDuration> {
    let invalid = || InvalidDuration(label.to_string());
    let label = label.trim();

    let (number, unit) = match label.char_indices().last() {
        Some((i, c)) if c.is_ascii_alphabetic() => (&label[..i], c),
        Some(_) => (label, 's'),
        None => return Err(invalid()),
    };

    let value: u64 = number.parse().map_err(|_| invalid())?;
    let multiplier = match unit {
        's' => 1,
        'm' => 60,
        'h' => 3600,
        'd' => 86_400,
        _ => return Err(invalid()),
    };

    value
        .checked_mul(multiplier)
        .map(Duration::from_secs)
        .ok_or_else(invalid)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_duration() {
        assert_eq!(parse_duration("24h"), Ok(Duration::from_secs(86_400)));
        assert_eq!(parse_duration("1h"), Ok(Duration::from_secs(3600)));
        assert_eq!(parse_duration("30m"), Ok(Duration::from_secs(1800)));
        assert_eq!(parse_duration("7d"), Ok(Duration::from_secs(604_800)));
        assert_eq!(parse_duration("45s"), Ok(Duration::from_secs(45)));
        assert_eq!(parse_duration("900"), Ok(Duration::from_secs(900)));
    }

    #[test]
    fn test_parse_duration_rejects_garbage() {
        assert!(parse_duration("").is_err());
        assert!(parse_duration("h").is_err());
        assert!(parse_duration("10w").is_err());
        assert!(parse_duration("-5m").is_err());
        assert!(parse_duration("ten").is_err());
    }

    #[test]
    fn test_from_expires_in_keeps_label() {
        let config = AuthConfig::from_expires_in("1h").unwrap();
        assert_eq!(config.expires_in, "1h");
        assert_eq!(config.token_ttl, Duration::from_secs(3600));
    }
}
