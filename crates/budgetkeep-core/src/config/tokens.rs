//! Token lifetime and signing configuration.

use serde::{Deserialize, Serialize};

/// Access/refresh token configuration.
///
/// TTLs are expressed in milliseconds. Tokens carry whole-second `iat`/`exp`
/// claims, so both TTLs must be at least one second.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokensConfig {
    /// Access token TTL in milliseconds.
    #[serde(default = "default_access_ttl")]
    pub access_ttl_ms: i64,
    /// Refresh token TTL in milliseconds.
    #[serde(default = "default_refresh_ttl")]
    pub refresh_ttl_ms: i64,
    /// Name of the refresh-token claim holding the paired access token's
    /// expiration (epoch milliseconds).
    #[serde(default = "default_access_expiration_claim")]
    pub access_expiration_claim: String,
    /// Optional HMAC secret. When absent a fresh 512-bit key is generated at
    /// startup and every outstanding token dies with the process.
    #[serde(default, skip_serializing)]
    pub secret: Option<String>,
}

impl Default for TokensConfig {
    fn default() -> Self {
        Self {
            access_ttl_ms: default_access_ttl(),
            refresh_ttl_ms: default_refresh_ttl(),
            access_expiration_claim: default_access_expiration_claim(),
            secret: None,
        }
    }
}

fn default_access_ttl() -> i64 {
    // 5 minutes
    300_000
}

fn default_refresh_ttl() -> i64 {
    // 20 minutes
    1_200_000
}

fn default_access_expiration_claim() -> String {
    "access_token_expiration_time_ms".to_string()
}
