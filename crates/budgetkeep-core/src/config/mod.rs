//! Application configuration schemas.
//!
//! All configuration structs are deserialized from TOML files via the
//! `config` crate. Each sub-module represents a logical configuration
//! section.

pub mod authorization;
pub mod cookies;
pub mod logging;
pub mod server;
pub mod tokens;
pub mod users;

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

pub use self::authorization::AuthorizationConfig;
pub use self::cookies::CookieConfig;
pub use self::logging::LoggingConfig;
pub use self::server::ServerConfig;
pub use self::tokens::TokensConfig;
pub use self::users::SeedUserConfig;

use crate::error::AppError;

/// Smallest accepted token TTL. `iat`/`exp` are whole seconds, so anything
/// shorter could produce a token with `iat == exp`.
pub const MIN_TOKEN_TTL_MS: i64 = 1_000;

/// Largest accepted token TTL (ten years). Keeps `now + ttl` well inside `i64`.
pub const MAX_TOKEN_TTL_MS: i64 = 10 * 365 * 24 * 60 * 60 * 1_000;

/// Minimum length of a configured HMAC secret (512 bits).
pub const MIN_SECRET_BYTES: usize = 64;

/// Root application configuration.
///
/// Top-level deserialization target for the merged TOML configuration
/// files (default.toml + environment overlay + `BUDGETKEEP__*` variables).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// Token lifetimes and signing.
    #[serde(default)]
    pub tokens: TokensConfig,
    /// URI authorization policy.
    #[serde(default)]
    pub authorization: AuthorizationConfig,
    /// Token cookie transport.
    #[serde(default)]
    pub cookies: CookieConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Users seeded into the in-memory directory.
    #[serde(default)]
    pub users: Vec<SeedUserConfig>,
}

impl AppConfig {
    /// Load configuration for the given environment.
    ///
    /// Merges `config/default`, the `config/{env}` overlay, and environment
    /// variables prefixed with `BUDGETKEEP__`.
    pub fn load(env: &str) -> Result<Self, AppError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{env}")).required(false))
            .add_source(
                config::Environment::with_prefix("BUDGETKEEP")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        let config: Self = config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a single file, without overlays.
    pub fn load_file(path: &str) -> Result<Self, AppError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name(path))
            .build()?;
        let config: Self = config.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Parse configuration from an in-memory TOML document.
    pub fn from_toml(document: &str) -> Result<Self, AppError> {
        let config = config::Config::builder()
            .add_source(config::File::from_str(document, config::FileFormat::Toml))
            .build()?;
        let config: Self = config.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Checks cross-field constraints that serde cannot express.
    pub fn validate(&self) -> Result<(), AppError> {
        let tokens = &self.tokens;
        if tokens.access_ttl_ms < MIN_TOKEN_TTL_MS {
            return Err(AppError::configuration(format!(
                "tokens.access_ttl_ms must be at least {MIN_TOKEN_TTL_MS}, got {}",
                tokens.access_ttl_ms
            )));
        }
        if tokens.refresh_ttl_ms < tokens.access_ttl_ms {
            return Err(AppError::configuration(format!(
                "tokens.refresh_ttl_ms ({}) must not be shorter than tokens.access_ttl_ms ({})",
                tokens.refresh_ttl_ms, tokens.access_ttl_ms
            )));
        }
        if tokens.refresh_ttl_ms > MAX_TOKEN_TTL_MS {
            return Err(AppError::configuration(format!(
                "tokens.refresh_ttl_ms must be at most {MAX_TOKEN_TTL_MS}, got {}",
                tokens.refresh_ttl_ms
            )));
        }
        if tokens.access_expiration_claim.trim().is_empty() {
            return Err(AppError::configuration(
                "tokens.access_expiration_claim must not be empty",
            ));
        }
        if let Some(secret) = &tokens.secret {
            if secret.len() < MIN_SECRET_BYTES {
                return Err(AppError::configuration(format!(
                    "tokens.secret must be at least {MIN_SECRET_BYTES} bytes"
                )));
            }
        }

        // Both are matched on every token-bearing request; "" or "/" would
        // wave every URI through.
        let authorization = &self.authorization;
        for (key, value) in [
            ("authorization.refresh_uri", &authorization.refresh_uri),
            ("authorization.error_prefix", &authorization.error_prefix),
        ] {
            if !value.starts_with('/') || value.len() < 2 {
                return Err(AppError::configuration(format!(
                    "{key} must be an absolute path below '/', got '{value}'"
                )));
            }
        }

        let mut ids = HashSet::new();
        let mut usernames = HashSet::new();
        for user in &self.users {
            if !ids.insert(user.id) {
                return Err(AppError::configuration(format!(
                    "duplicate seed user id {}",
                    user.id
                )));
            }
            if !usernames.insert(user.username.as_str()) {
                return Err(AppError::configuration(format!(
                    "duplicate seed username '{}'",
                    user.username
                )));
            }
        }

        Ok(())
    }
}
