//! JWT claims structure shared by access and refresh tokens.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::AuthError;

/// JWT claims payload.
///
/// Access and refresh tokens share this shape; a refresh token differs only
/// by carrying one extra numeric claim with its paired access token's
/// expiration in epoch milliseconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: the user id, stringified.
    pub sub: String,
    /// Issued-at timestamp (seconds since epoch).
    pub iat: i64,
    /// Expiration timestamp (seconds since epoch).
    pub exp: i64,
    /// Any additional claims.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Claims {
    /// Creates claims for `subject_id` with no extra claims.
    pub fn new(subject_id: i64, issued_at_secs: i64, expires_at_secs: i64) -> Self {
        Self {
            sub: subject_id.to_string(),
            iat: issued_at_secs,
            exp: expires_at_secs,
            extra: Map::new(),
        }
    }

    /// Adds an extra claim.
    pub fn with_claim(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(name.into(), value.into());
        self
    }

    /// Parses the subject back into a user id.
    pub fn subject_id(&self) -> Result<i64, AuthError> {
        self.sub.parse().map_err(|_| AuthError::InvalidToken)
    }

    /// Expiration in epoch milliseconds.
    pub fn expires_at_millis(&self) -> i64 {
        self.exp.saturating_mul(1_000)
    }

    /// Returns `true` once `now_millis` has reached the expiration.
    pub fn is_expired_at(&self, now_millis: i64) -> bool {
        self.expires_at_millis() <= now_millis
    }

    /// Reads an integer extra claim.
    pub fn millis_claim(&self, name: &str) -> Option<i64> {
        self.extra.get(name).and_then(Value::as_i64)
    }
}
