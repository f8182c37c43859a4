//! URI authorization policy configuration.

use serde::{Deserialize, Serialize};

/// Comma-separated URI pattern lists, one per authorization bucket.
///
/// Each entry is an exact path, a prefix ending in `*`, or a template
/// containing `{id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthorizationConfig {
    /// Patterns reachable without any token.
    #[serde(default = "default_public_uris")]
    pub public_uris: String,
    /// Patterns reachable by the USER role.
    #[serde(default)]
    pub user_uris: String,
    /// Patterns reachable by the ADMIN role.
    #[serde(default)]
    pub admin_uris: String,
    /// Patterns reachable by every authenticated identity.
    #[serde(default)]
    pub is_auth_uris: String,
    /// Refresh endpoint; always allowed when a token is presented.
    #[serde(default = "default_refresh_uri")]
    pub refresh_uri: String,
    /// Error-page prefix; always allowed when a token is presented.
    #[serde(default = "default_error_prefix")]
    pub error_prefix: String,
}

impl Default for AuthorizationConfig {
    fn default() -> Self {
        Self {
            public_uris: default_public_uris(),
            user_uris: String::new(),
            admin_uris: String::new(),
            is_auth_uris: String::new(),
            refresh_uri: default_refresh_uri(),
            error_prefix: default_error_prefix(),
        }
    }
}

/// Splits a comma-separated pattern list, trimming entries and dropping
/// empty ones.
pub fn split_patterns(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

fn default_public_uris() -> String {
    "/auth/login,/error*".to_string()
}

fn default_refresh_uri() -> String {
    "/auth/refresh".to_string()
}

fn default_error_prefix() -> String {
    "/error".to_string()
}
