use std::ops::RangeInclusive;

use crate::auth::jwt::SessionConfig;
use crate::auth::password::{hash_password, is_phc_hash};

/// Errors raised while reading configuration at startup.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{var} has an invalid value: {value}")]
    Invalid { var: &'static str, value: String },

    #[error("Failed to hash ADMIN_PASSWORD: {0}")]
    Hash(argon2::password_hash::Error),
}

/// The single admin account, read from the environment.
#[derive(Debug, Clone)]
pub struct AdminCredentials {
    pub email: String,
    /// PHC-formatted Argon2id hash.
    pub password_hash: String,
}

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins. `["*"]` allows any origin without credentials.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Largest accepted upload body in bytes.
    pub max_upload_bytes: usize,
    /// Recipient of contact-form email.
    pub contact_email: String,
    /// Public URL of the site, reported by diagnostics.
    pub public_base_url: Option<String>,
    /// Deployment environment name (default: `development`).
    pub app_env: String,
    pub session: SessionConfig,
    pub admin: AdminCredentials,
}

/// Default `CONTACT_EMAIL`: Resend's test inbox.
pub const DEFAULT_CONTACT_EMAIL: &str = "delivered@resend.dev";
/// Default `MAX_UPLOAD_BYTES` (10 MiB).
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;
const DEFAULT_SESSION_EXPIRY_DAYS: i64 = 30;
/// Accepted range for `SESSION_EXPIRY_DAYS`.
pub const SESSION_EXPIRY_DAYS_RANGE: RangeInclusive<i64> = 1..=365;
const DEFAULT_ADMIN_EMAIL: &str = "admin@example.com";

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                |
    /// |------------------------|------------------------|
    /// | `HOST`                 | `0.0.0.0`              |
    /// | `PORT`                 | `3000`                 |
    /// | `CORS_ORIGINS`         | `*`                    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                   |
    /// | `MAX_UPLOAD_BYTES`     | `10485760`             |
    /// | `CONTACT_EMAIL`        | `delivered@resend.dev` |
    /// | `PUBLIC_BASE_URL`      | unset                  |
    /// | `APP_ENV`              | `development`          |
    /// | `JWT_SECRET`           | **required**           |
    /// | `SESSION_EXPIRY_DAYS`  | `30` (1 to 365)        |
    /// | `COOKIE_SECURE`        | `false`                |
    /// | `ADMIN_EMAIL`          | `admin@example.com`    |
    /// | `ADMIN_PASSWORD_HASH`  | one of the two         |
    /// | `ADMIN_PASSWORD`       | one of the two         |
    pub fn from_env() -> Result<Self, ConfigError> {
        let host = env_or("HOST", "0.0.0.0");
        let port = parse_env("PORT", 3000u16)?;

        let cors_origins: Vec<String> = env_or("CORS_ORIGINS", "*")
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let session = SessionConfig {
            secret: env_opt("JWT_SECRET").ok_or(ConfigError::Missing("JWT_SECRET"))?,
            expiry_days: parse_env_in_range(
                "SESSION_EXPIRY_DAYS",
                DEFAULT_SESSION_EXPIRY_DAYS,
                SESSION_EXPIRY_DAYS_RANGE,
            )?,
            cookie_secure: parse_env("COOKIE_SECURE", false)?,
        };

        Ok(Self {
            host,
            port,
            cors_origins,
            request_timeout_secs: parse_env("REQUEST_TIMEOUT_SECS", 30u64)?,
            max_upload_bytes: parse_env("MAX_UPLOAD_BYTES", DEFAULT_MAX_UPLOAD_BYTES)?,
            contact_email: env_or("CONTACT_EMAIL", DEFAULT_CONTACT_EMAIL),
            public_base_url: env_opt("PUBLIC_BASE_URL"),
            app_env: env_or("APP_ENV", "development"),
            session,
            admin: AdminCredentials::from_env()?,
        })
    }

    /// Whether CORS is open to every origin.
    pub fn cors_allows_any(&self) -> bool {
        self.cors_origins.iter().any(|o| o == "*")
    }
}

impl AdminCredentials {
    /// Read `ADMIN_EMAIL` and the admin password.
    ///
    /// `ADMIN_PASSWORD_HASH` takes precedence; a plaintext `ADMIN_PASSWORD` is
    /// hashed once here so it is never compared in the clear.
    pub fn from_env() -> Result<Self, ConfigError> {
        let email = env_or("ADMIN_EMAIL", DEFAULT_ADMIN_EMAIL);
        let password_hash = match (env_opt("ADMIN_PASSWORD_HASH"), env_opt("ADMIN_PASSWORD")) {
            (Some(hash), _) => {
                if !is_phc_hash(&hash) {
                    return Err(ConfigError::Invalid {
                        var: "ADMIN_PASSWORD_HASH",
                        value: "<not a PHC string>".into(),
                    });
                }
                hash
            }
            (None, Some(plain)) => hash_password(&plain).map_err(ConfigError::Hash)?,
            (None, None) => return Err(ConfigError::Missing("ADMIN_PASSWORD_HASH or ADMIN_PASSWORD")),
        };
        Ok(Self {
            email,
            password_hash,
        })
    }
}

fn env_opt(var: &str) -> Option<String> {
    std::env::var(var).ok().filter(|v| !v.trim().is_empty())
}

fn env_or(var: &str, default: &str) -> String {
    env_opt(var).unwrap_or_else(|| default.to_string())
}

fn parse_env<T: std::str::FromStr>(var: &'static str, default: T) -> Result<T, ConfigError> {
    match env_opt(var) {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { var, value }),
        None => Ok(default),
    }
}

/// Like [`parse_env`], but values outside `range` are rejected too.
fn parse_env_in_range<T>(
    var: &'static str,
    default: T,
    range: RangeInclusive<T>,
) -> Result<T, ConfigError>
where
    T: std::str::FromStr + PartialOrd + std::fmt::Display,
{
    let value = parse_env(var, default)?;
    if !range.contains(&value) {
        return Err(ConfigError::Invalid {
            var,
            value: value.to_string(),
        });
    }
    Ok(value)
}
