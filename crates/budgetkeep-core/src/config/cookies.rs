//! Token cookie transport configuration.

use serde::{Deserialize, Serialize};

/// How access/refresh tokens travel to and from the client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CookieConfig {
    /// Cookie carrying the access token.
    #[serde(default = "default_access_name")]
    pub access_name: String,
    /// Cookie carrying the refresh token.
    #[serde(default = "default_refresh_name")]
    pub refresh_name: String,
    /// Cookie max-age in seconds.
    #[serde(default = "default_max_age")]
    pub max_age_seconds: i64,
    /// Whether cookies are restricted to HTTPS.
    #[serde(default)]
    pub secure: bool,
    /// Whether cookies are hidden from client-side scripts.
    #[serde(default = "default_true")]
    pub http_only: bool,
}

impl Default for CookieConfig {
    fn default() -> Self {
        Self {
            access_name: default_access_name(),
            refresh_name: default_refresh_name(),
            max_age_seconds: default_max_age(),
            secure: false,
            http_only: true,
        }
    }
}

fn default_access_name() -> String {
    "accessToken".to_string()
}

fn default_refresh_name() -> String {
    "refreshToken".to_string()
}

fn default_max_age() -> i64 {
    1_000_000
}

fn default_true() -> bool {
    true
}
