//! Login credentials.

use std::fmt;

use serde::Deserialize;

/// Username and raw password submitted at login. Never persisted.
#[derive(Clone, Deserialize)]
pub struct Credentials {
    /// Login name.
    pub username: String,
    /// Raw password.
    pub password: String,
}

impl Credentials {
    /// Builds credentials from borrowed parts.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}
