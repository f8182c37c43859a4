//! Request DTOs.

use serde::Deserialize;

use budgetkeep_entity::user::Credentials;

/// Login request.
#[derive(Clone, Deserialize)]
pub struct LoginRequest {
    /// Username.
    pub username: String,
    /// Password.
    pub password: String,
}

impl LoginRequest {
    /// Converts into the credentials the token service checks.
    pub fn into_credentials(self) -> Credentials {
        Credentials::new(self.username, self.password)
    }
}

impl std::fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginRequest")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// Refresh request carrying the refresh token.
#[derive(Debug, Clone, Deserialize)]
pub struct RefreshRequest {
    /// The refresh token issued alongside the current access token.
    pub token: String,
}
