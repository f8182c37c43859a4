//! Token pair issuance, validation, and refresh.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use budgetkeep_core::config::TokensConfig;
use budgetkeep_core::traits::{Clock, PasswordEncoder};
use budgetkeep_entity::user::{Credentials, Identity};

use crate::directory::UserDirectory;
use crate::error::{AuthError, CredentialFailure};
use crate::jwt::{Claims, TokenCodec};

/// Access and refresh tokens issued together.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenPair {
    /// Short-lived access token.
    pub access_token: String,
    /// Longer-lived refresh token.
    pub refresh_token: String,
    /// Access token expiration (epoch milliseconds).
    pub access_expires_at_ms: i64,
    /// Refresh token expiration (epoch milliseconds).
    pub refresh_expires_at_ms: i64,
}

/// Issues, validates, and refreshes signed token pairs.
///
/// Holds no per-token state: validity is decided by signature and
/// expiration alone.
pub struct TokenService {
    codec: TokenCodec,
    directory: Arc<dyn UserDirectory>,
    passwords: Arc<dyn PasswordEncoder>,
    clock: Arc<dyn Clock>,
    access_ttl_ms: i64,
    refresh_ttl_ms: i64,
    access_expiration_claim: String,
}

impl std::fmt::Debug for TokenService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenService")
            .field("access_ttl_ms", &self.access_ttl_ms)
            .field("refresh_ttl_ms", &self.refresh_ttl_ms)
            .field("access_expiration_claim", &self.access_expiration_claim)
            .finish()
    }
}

impl TokenService {
    /// Creates a token service.
    pub fn new(
        codec: TokenCodec,
        directory: Arc<dyn UserDirectory>,
        passwords: Arc<dyn PasswordEncoder>,
        clock: Arc<dyn Clock>,
        config: &TokensConfig,
    ) -> Self {
        Self {
            codec,
            directory,
            passwords,
            clock,
            access_ttl_ms: config.access_ttl_ms,
            refresh_ttl_ms: config.refresh_ttl_ms,
            access_expiration_claim: config.access_expiration_claim.clone(),
        }
    }

    /// Name of the refresh-token claim carrying the access expiration.
    pub fn access_expiration_claim(&self) -> &str {
        &self.access_expiration_claim
    }

    /// Verifies credentials and issues a fresh token pair.
    pub async fn issue(&self, credentials: &Credentials) -> Result<TokenPair, AuthError> {
        let user = self
            .directory
            .find_by_username(&credentials.username)
            .await
            .map_err(AuthError::Directory)?
            .ok_or_else(|| {
                login_failure(&credentials.username, CredentialFailure::UnknownUser)
            })?;

        let password_ok = self
            .passwords
            .matches(&credentials.password, &user.password_hash)
            .map_err(|e| {
                tracing::warn!(user_id = user.id, error = %e, "Stored password digest unusable");
                login_failure(&credentials.username, CredentialFailure::PasswordMismatch)
            })?;
        if !password_ok {
            return Err(login_failure(
                &credentials.username,
                CredentialFailure::PasswordMismatch,
            ));
        }

        let now = self.now_millis();
        let access_expires_at = expires_at(now, self.access_ttl_ms)?;
        let refresh_expires_at = expires_at(now, self.refresh_ttl_ms)?;
        let pair = self.sign_pair(user.id, now, access_expires_at, refresh_expires_at)?;

        tracing::info!(
            user_id = user.id,
            access_expires_at_ms = access_expires_at,
            refresh_expires_at_ms = refresh_expires_at,
            "Issued token pair"
        );
        Ok(pair)
    }

    /// Validates a token and resolves who it belongs to.
    pub async fn validate_and_identify(&self, token: Option<&str>) -> Result<Identity, AuthError> {
        let token = token.ok_or(AuthError::InvalidToken)?;
        let claims = self.codec.verify(token)?;

        if claims.is_expired_at(self.now_millis()) {
            return Err(AuthError::TokenExpired);
        }

        let user_id = claims.subject_id()?;
        let user = self
            .directory
            .find_by_id(user_id)
            .await
            .map_err(AuthError::Directory)?
            .ok_or_else(|| {
                tracing::debug!(user_id, "Token subject no longer exists");
                AuthError::AuthorizationFailed
            })?;

        Ok(user.identity())
    }

    /// Exchanges a refresh token for a new pair.
    ///
    /// The refresh is honoured only while the access window recorded in the
    /// refresh token is still open. The new refresh token keeps the original
    /// expiration; refresh lifetime never slides.
    pub fn refresh(&self, refresh_token: &str) -> Result<TokenPair, AuthError> {
        let claims = self.codec.verify(refresh_token)?;
        let now = self.now_millis();

        if claims.is_expired_at(now) {
            return Err(AuthError::RefreshTokenExpired);
        }

        let access_window_end = claims
            .millis_claim(&self.access_expiration_claim)
            .ok_or(AuthError::InvalidToken)?;
        if access_window_end < now {
            tracing::debug!(
                subject = %claims.sub,
                access_window_end,
                now,
                "Refresh rejected: access window elapsed"
            );
            return Err(AuthError::AccessWindowExpired);
        }

        let user_id = claims.subject_id()?;
        let access_expires_at = expires_at(now, self.access_ttl_ms)?;
        let pair = self.sign_pair(user_id, now, access_expires_at, claims.expires_at_millis())?;

        tracing::info!(
            user_id,
            access_expires_at_ms = access_expires_at,
            refresh_expires_at_ms = pair.refresh_expires_at_ms,
            "Refreshed token pair"
        );
        Ok(pair)
    }

    fn sign_pair(
        &self,
        user_id: i64,
        now: i64,
        access_expires_at: i64,
        refresh_expires_at: i64,
    ) -> Result<TokenPair, AuthError> {
        let issued_at = now.div_euclid(1_000);

        let access_claims = Claims::new(user_id, issued_at, access_expires_at / 1_000);
        let refresh_claims = Claims::new(user_id, issued_at, refresh_expires_at / 1_000)
            .with_claim(self.access_expiration_claim.clone(), access_expires_at);

        Ok(TokenPair {
            access_token: self.codec.sign(&access_claims)?,
            refresh_token: self.codec.sign(&refresh_claims)?,
            access_expires_at_ms: access_expires_at,
            refresh_expires_at_ms: refresh_expires_at,
        })
    }

    fn now_millis(&self) -> i64 {
        self.clock.now_millis()
    }
}

/// Truncates an epoch-millis instant to a whole second, matching what the
/// `exp` claim can represent.
fn whole_seconds(millis: i64) -> i64 {
    millis - millis.rem_euclid(1_000)
}

/// `now + ttl` as a whole-second expiry; overflow is a signing failure.
fn expires_at(now: i64, ttl_ms: i64) -> Result<i64, AuthError> {
    now.checked_add(ttl_ms)
        .map(whole_seconds)
        .ok_or_else(|| AuthError::Signing(format!("token expiry overflows (ttl {ttl_ms} ms)")))
}

fn login_failure(username: &str, reason: CredentialFailure) -> AuthError {
    tracing::debug!(username, ?reason, "Login rejected");
    AuthError::AuthenticationFailed(reason)
}
