//! Response DTOs.

use serde::{Deserialize, Serialize};

use budgetkeep_auth::token::TokenPair;
use budgetkeep_entity::user::{Role, User};

/// Envelope for every JSON response: either `data` or `error` is set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResponseDto<T> {
    /// Payload on success.
    pub data: Option<T>,
    /// Human-readable message on failure.
    pub error: Option<String>,
    /// Machine-readable failure code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

impl<T> ResponseDto<T> {
    /// Creates a successful response.
    pub fn ok(data: T) -> Self {
        Self {
            data: Some(data),
            error: None,
            code: None,
        }
    }

    /// Creates a failure response.
    pub fn error(message: impl Into<String>, code: Option<&str>) -> Self {
        Self {
            data: None,
            error: Some(message.into()),
            code: code.map(str::to_string),
        }
    }
}

/// Token pair returned by login and refresh.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokensResponse {
    /// Access token.
    pub access_token: String,
    /// Refresh token.
    pub refresh_token: String,
    /// Access token expiry (epoch millis).
    pub access_expires_at_ms: i64,
    /// Refresh token expiry (epoch millis).
    pub refresh_expires_at_ms: i64,
}

impl From<TokenPair> for TokensResponse {
    fn from(pair: TokenPair) -> Self {
        Self {
            access_token: pair.access_token,
            refresh_token: pair.refresh_token,
            access_expires_at_ms: pair.access_expires_at_ms,
            refresh_expires_at_ms: pair.refresh_expires_at_ms,
        }
    }
}

/// Account summary for the info endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InfoResponse {
    /// User ID.
    pub id: i64,
    /// Username.
    pub username: String,
    /// Email, if known.
    pub email: Option<String>,
    /// Role.
    pub role: Role,
}

impl From<User> for InfoResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
            role: user.role,
        }
    }
}

/// Body of an error page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorPageResponse {
    /// HTTP status code being reported.
    pub status: u16,
    /// Canonical reason phrase.
    pub reason: String,
}
