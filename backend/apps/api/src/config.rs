//! Application Configuration
//!
//! Read once at startup from the process environment (after `.env` is
//! loaded). Every setting has a per-environment default except
//! `JWT_SECRET`, which production must provide.

use std::fmt;
use std::str::FromStr;

use auth::AuthConfig;
use auth::config::InvalidDuration;
use thiserror::Error;

/// Signing secret used outside production when `JWT_SECRET` is unset
pub const DEV_JWT_SECRET: &str = "dev-secret-key";

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_FRONTEND_ORIGINS: &str = "http://localhost:3000,http://localhost:3001";

/// Deployment environment (`APP_ENV`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    #[default]
    Development,
    Dev,
    Production,
}

impl Environment {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Environment::Development => "development",
            Environment::Dev => "dev",
            Environment::Production => "production",
        }
    }

    pub const fn is_production(&self) -> bool {
        matches!(self, Environment::Production)
    }

    /// Log level used when neither `RUST_LOG` nor `LOG_LEVEL` is set
    pub const fn default_log_level(&self) -> &'static str {
        match self {
            Environment::Development => "debug",
            Environment::Dev => "info",
            Environment::Production => "error",
        }
    }

    /// Token lifetime used when `JWT_EXPIRES_IN` is unset
    pub const fn default_expires_in(&self) -> &'static str {
        match self {
            Environment::Production => "1h",
            _ => "24h",
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Environment {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "development" => Ok(Environment::Development),
            "dev" => Ok(Environment::Dev),
            "prod" | "production" => Ok(Environment::Production),
            other => Err(ConfigError::UnknownEnvironment(other.to_string())),
        }
    }
}

/// Startup configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Unknown APP_ENV `{0}` (expected development, dev or prod)")]
    UnknownEnvironment(String),

    #[error("JWT_SECRET must be set in production")]
    MissingJwtSecret,

    #[error("Invalid PORT `{0}`")]
    InvalidPort(String),

    #[error("Invalid JWT_EXPIRES_IN: {0}")]
    InvalidExpiresIn(#[from] InvalidDuration),
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: Environment,
    pub port: u16,
    pub jwt_secret: String,
    pub auth: AuthConfig,
    pub log_level: String,
    pub frontend_origins: Vec<String>,
}

impl AppConfig {
    /// Load from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load from any key/value source
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let environment = match var("APP_ENV") {
            Some(value) => value.parse()?,
            None => Environment::default(),
        };

        let port = match var("PORT") {
            Some(value) => value
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidPort(value))?,
            None => DEFAULT_PORT,
        };

        let jwt_secret = match var("JWT_SECRET") {
            Some(secret) => secret,
            None if environment.is_production() => return Err(ConfigError::MissingJwtSecret),
            None => DEV_JWT_SECRET.to_string(),
        };

        let expires_in =
            var("JWT_EXPIRES_IN").unwrap_or_else(|| environment.default_expires_in().to_string());
        let auth = AuthConfig::from_expires_in(&expires_in)?;

        let log_level =
            var("LOG_LEVEL").unwrap_or_else(|| environment.default_log_level().to_string());

        let frontend_origins = var("FRONTEND_ORIGINS")
            .unwrap_or_else(|| DEFAULT_FRONTEND_ORIGINS.to_string())
            .split(',')
            .map(|origin| origin.trim().to_string())
            .filter(|origin| !origin.is_empty())
            .collect();

        Ok(Self {
            environment,
            port,
            jwt_secret,
            auth,
            log_level,
            frontend_origins,
        })
    }

    /// `EnvFilter` directives applying `log_level` to this workspace
    pub fn log_filter(&self) -> String {
        ["api", "auth", "users", "platform", "kernel", "tower_http"]
            .iter()
            .map(|target| format!("{target}={}", self.log_level))
            .collect::<Vec<_>>()
            .join(",")
    }
}
