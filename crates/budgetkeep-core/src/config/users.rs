//! Seed users for the in-memory user directory.

use serde::{Deserialize, Serialize};

/// A user record loaded from configuration at startup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedUserConfig {
    /// Numeric user id (the token subject).
    pub id: i64,
    /// Unique login name.
    pub username: String,
    /// Contact address.
    #[serde(default)]
    pub email: Option<String>,
    /// Password digest as produced by `budgetkeep-cli hash-password`.
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// `"user"` or `"admin"`.
    pub role: String,
}
