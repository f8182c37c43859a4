//! Request authorization: token-or-absent plus URI in, permit or deny out.

use std::sync::Arc;

use budgetkeep_entity::user::Identity;

use super::policies::AuthorizationPolicy;
use crate::error::AuthError;
use crate::token::TokenService;

/// Why a request was let through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// No token; the URI is public.
    Public,
    /// Token presented but not decoded: refresh endpoint or error page.
    AlwaysAllowed,
    /// Token resolved to this identity and a pattern matched.
    Granted(Identity),
}

impl Access {
    /// The resolved identity, if the token was decoded.
    pub fn identity(&self) -> Option<Identity> {
        match self {
            Self::Granted(identity) => Some(*identity),
            _ => None,
        }
    }
}

/// Decides whether a request may proceed.
///
/// Reads the policy and the token service; mutates neither and caches
/// nothing.
#[derive(Debug, Clone)]
pub struct AuthorizationEngine {
    tokens: Arc<TokenService>,
    policy: Arc<AuthorizationPolicy>,
}

impl AuthorizationEngine {
    /// Creates an engine over a frozen policy.
    pub fn new(tokens: Arc<TokenService>, policy: Arc<AuthorizationPolicy>) -> Self {
        Self { tokens, policy }
    }

    /// The policy this engine enforces.
    pub fn policy(&self) -> &AuthorizationPolicy {
        &self.policy
    }

    /// Permit/deny for `(token, uri)`. Any failure denies.
    pub async fn authorize(&self, token: Option<&str>, uri: &str) -> bool {
        match self.check(token, uri).await {
            Ok(_) => true,
            Err(err) => {
                tracing::debug!(uri, reason = err.code(), "Request denied");
                false
            }
        }
    }

    /// Like [`authorize`](Self::authorize) but reports why.
    ///
    /// Identity failures surface as the token service's error kinds;
    /// a resolved identity with no matching pattern yields
    /// [`AuthError::Denied`].
    pub async fn check(&self, token: Option<&str>, uri: &str) -> Result<Access, AuthError> {
        let Some(token) = token else {
            return if self.policy.is_public(uri) {
                Ok(Access::Public)
            } else {
                Err(AuthError::Denied)
            };
        };

        if self.policy.is_always_allowed(uri) {
            return Ok(Access::AlwaysAllowed);
        }

        let identity = self.tokens.validate_and_identify(Some(token)).await?;
        if self.policy.permits(&identity, uri) {
            Ok(Access::Granted(identity))
        } else {
            Err(AuthError::Denied)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use budgetkeep_core::config::TokensConfig;
    use budgetkeep_core::result::AppResult;
    use budgetkeep_core::traits::{ManualClock, PasswordEncoder};
    use budgetkeep_entity::user::{AuthorizationRole, Credentials, Role, User};

    use crate::directory::InMemoryUserDirectory;
    use crate::jwt::{SigningKey, TokenCodec};

    struct PlainEncoder;

    impl PasswordEncoder for PlainEncoder {
        fn hash(&self, raw: &str) -> AppResult<String> {
            Ok(raw.to_string())
        }

        fn matches(&self, raw: &str, digest: &str) -> AppResult<bool> {
            Ok(raw == digest)
        }
    }

    struct Fixture {
        engine: AuthorizationEngine,
        tokens: Arc<TokenService>,
        clock: Arc<ManualClock>,
        directory: Arc<InMemoryUserDirectory>,
    }

    fn fixture() -> Fixture {
        let directory = Arc::new(InMemoryUserDirectory::new());
        for (id, name, role) in [(1, "user", Role::User), (2, "admin", Role::Admin)] {
            directory
                .insert(User {
                    id,
                    username: name.to_string(),
                    email: None,
                    password_hash: "pw".to_string(),
                    role,
                })
                .unwrap();
        }

        let clock = Arc::new(ManualClock::new(1_700_000_000_000));
        let tokens = Arc::new(TokenService::new(
            TokenCodec::new(&SigningKey::generate()),
            directory.clone(),
            Arc::new(PlainEncoder),
            clock.clone(),
            &TokensConfig::default(),
        ));
        let policy = AuthorizationPolicy::builder()
            .public(["/auth/login", "/error*"])
            .role(AuthorizationRole::User, ["/users/{id}", "/users/{id}/budget*"])
            .role(AuthorizationRole::Admin, ["/api/admin/info"])
            .role(AuthorizationRole::IsAuth, ["/api/is_auth"])
            .build();

        Fixture {
            engine: AuthorizationEngine::new(tokens.clone(), Arc::new(policy)),
            tokens,
            clock,
            directory,
        }
    }

    async fn access_token(fx: &Fixture, username: &str) -> String {
        fx.tokens
            .issue(&Credentials::new(username, "pw"))
            .await
            .unwrap()
            .access_token
    }

    #[tokio::test]
    async fn test_anonymous_requests_only_reach_public_uris() {
        let fx = fixture();
        assert!(fx.engine.authorize(None, "/auth/login").await);
        assert!(fx.engine.authorize(None, "/error/404").await);
        assert!(!fx.engine.authorize(None, "/users/1").await);
        assert!(!fx.engine.authorize(None, "/auth/refresh").await);
        assert!(matches!(
            fx.engine.check(None, "/auth/login").await,
            Ok(Access::Public)
        ));
    }

    #[tokio::test]
    async fn test_user_token_with_templated_prefix() {
        let fx = fixture();
        let token = access_token(&fx, "user").await;

        assert!(fx.engine.authorize(Some(&token), "/users/1").await);
        assert!(fx.engine.authorize(Some(&token), "/users/1/budget/total").await);
        assert!(!fx.engine.authorize(Some(&token), "/users/2").await);
        assert!(!fx.engine.authorize(Some(&token), "/api/admin/info").await);

        let access = fx.engine.check(Some(&token), "/users/1").await.unwrap();
        assert_eq!(access.identity(), Some(Identity { id: 1, role: Role::User }));
    }

    #[tokio::test]
    async fn test_admin_reaches_is_auth_bucket() {
        let fx = fixture();
        let token = access_token(&fx, "admin").await;

        assert!(fx.engine.authorize(Some(&token), "/api/is_auth").await);
        assert!(fx.engine.authorize(Some(&token), "/api/admin/info").await);
        assert!(!fx.engine.authorize(Some(&token), "/users/2").await);
    }

    #[tokio::test]
    async fn test_presented_token_skips_public_list() {
        let fx = fixture();
        let token = access_token(&fx, "user").await;
        assert!(matches!(
            fx.engine.check(Some(&token), "/auth/login").await,
            Err(AuthError::Denied)
        ));
    }

    #[tokio::test]
    async fn test_refresh_and_error_pages_skip_token_decoding() {
        let fx = fixture();
        assert!(matches!(
            fx.engine.check(Some("garbage"), "/auth/refresh").await,
            Ok(Access::AlwaysAllowed)
        ));
        assert!(fx.engine.authorize(Some("garbage"), "/error/500").await);
    }

    #[tokio::test]
    async fn test_expired_token_is_denied_with_reason() {
        let fx = fixture();
        let token = access_token(&fx, "user").await;
        fx.clock.advance(TokensConfig::default().access_ttl_ms);

        assert!(!fx.engine.authorize(Some(&token), "/users/1").await);
        assert!(matches!(
            fx.engine.check(Some(&token), "/users/1").await,
            Err(AuthError::TokenExpired)
        ));
        // The refresh endpoint stays reachable with the stale cookie.
        assert!(fx.engine.authorize(Some(&token), "/auth/refresh").await);
    }

    #[tokio::test]
    async fn test_invalid_token_and_vanished_user() {
        let fx = fixture();
        assert!(matches!(
            fx.engine.check(Some("garbage"), "/users/1").await,
            Err(AuthError::InvalidToken)
        ));

        let token = access_token(&fx, "user").await;
        fx.directory.remove(1);
        assert!(matches!(
            fx.engine.check(Some(&token), "/users/1").await,
            Err(AuthError::AuthorizationFailed)
        ));
    }
}
