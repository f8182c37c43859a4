//! The immutable URI authorization policy.

use std::collections::HashMap;

use budgetkeep_core::config::AuthorizationConfig;
use budgetkeep_core::config::authorization::split_patterns;
use budgetkeep_entity::user::{AuthorizationRole, Identity};

use super::pattern::UriPattern;

/// Public patterns plus one pattern list per authorization bucket.
///
/// Built once at startup and never mutated; share it behind an `Arc` and
/// read it from any thread without locking.
#[derive(Debug, Clone)]
pub struct AuthorizationPolicy {
    /// Patterns reachable without a token.
    public: Vec<UriPattern>,
    /// Bucket → patterns.
    per_role: HashMap<AuthorizationRole, Vec<UriPattern>>,
    /// Refresh endpoint, allowed for any presented token.
    refresh_uri: String,
    /// Error-page prefix, allowed for any presented token.
    error_prefix: String,
}

impl AuthorizationPolicy {
    /// Starts an empty policy.
    pub fn builder() -> PolicyBuilder {
        PolicyBuilder::default()
    }

    /// Builds the policy from its configuration section.
    pub fn from_config(config: &AuthorizationConfig) -> Self {
        let policy = Self::builder()
            .public(split_patterns(&config.public_uris))
            .role(AuthorizationRole::User, split_patterns(&config.user_uris))
            .role(AuthorizationRole::Admin, split_patterns(&config.admin_uris))
            .role(AuthorizationRole::IsAuth, split_patterns(&config.is_auth_uris))
            .refresh_uri(config.refresh_uri.clone())
            .error_prefix(config.error_prefix.clone())
            .build();

        tracing::info!(
            public = policy.public.len(),
            user = policy.patterns(AuthorizationRole::User).len(),
            admin = policy.patterns(AuthorizationRole::Admin).len(),
            is_auth = policy.patterns(AuthorizationRole::IsAuth).len(),
            "Authorization policy loaded"
        );
        policy
    }

    /// Patterns reachable without a token.
    pub fn public_patterns(&self) -> &[UriPattern] {
        &self.public
    }

    /// Patterns for one bucket (empty if none configured).
    pub fn patterns(&self, role: AuthorizationRole) -> &[UriPattern] {
        self.per_role.get(&role).map(Vec::as_slice).unwrap_or(&[])
    }

    /// The refresh endpoint.
    pub fn refresh_uri(&self) -> &str {
        &self.refresh_uri
    }

    /// The error-page prefix.
    pub fn error_prefix(&self) -> &str {
        &self.error_prefix
    }

    /// Whether `uri` is reachable without any token.
    pub fn is_public(&self, uri: &str) -> bool {
        self.public.iter().any(|p| p.matches(uri, None))
    }

    /// Whether `uri` is allowed for any presented token without decoding it.
    ///
    /// An empty refresh URI or error prefix matches nothing.
    pub fn is_always_allowed(&self, uri: &str) -> bool {
        let is_refresh = !self.refresh_uri.is_empty() && uri == self.refresh_uri;
        let is_error = !self.error_prefix.is_empty() && uri.starts_with(&self.error_prefix);
        is_refresh || is_error
    }

    /// Whether `identity` may reach `uri`: its own role's bucket or the
    /// shared IS_AUTH bucket.
    pub fn permits(&self, identity: &Identity, uri: &str) -> bool {
        let id = Some(identity.id);
        let matches_any = |role: AuthorizationRole| {
            self.patterns(role).iter().any(|p| p.matches(uri, id))
        };
        matches_any(identity.role.authorization_role()) || matches_any(AuthorizationRole::IsAuth)
    }
}

/// Assembles an [`AuthorizationPolicy`].
#[derive(Debug)]
pub struct PolicyBuilder {
    public: Vec<UriPattern>,
    per_role: HashMap<AuthorizationRole, Vec<UriPattern>>,
    refresh_uri: String,
    error_prefix: String,
}

impl Default for PolicyBuilder {
    fn default() -> Self {
        let defaults = AuthorizationConfig::default();
        Self {
            public: Vec::new(),
            per_role: HashMap::new(),
            refresh_uri: defaults.refresh_uri,
            error_prefix: defaults.error_prefix,
        }
    }
}

impl PolicyBuilder {
    /// Appends public patterns.
    pub fn public<I, P>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<UriPattern>,
    {
        self.public.extend(patterns.into_iter().map(Into::into));
        self
    }

    /// Appends patterns to one bucket.
    pub fn role<I, P>(mut self, role: AuthorizationRole, patterns: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<UriPattern>,
    {
        self.per_role
            .entry(role)
            .or_default()
            .extend(patterns.into_iter().map(Into::into));
        self
    }

    /// Overrides the refresh endpoint.
    pub fn refresh_uri(mut self, uri: impl Into<String>) -> Self {
        self.refresh_uri = uri.into();
        self
    }

    /// Overrides the error-page prefix.
    pub fn error_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.error_prefix = prefix.into();
        self
    }

    /// Freezes the policy.
    pub fn build(self) -> AuthorizationPolicy {
        AuthorizationPolicy {
            public: self.public,
            per_role: self.per_role,
            refresh_uri: self.refresh_uri,
            error_prefix: self.error_prefix,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use budgetkeep_entity::user::Role;

    fn policy() -> AuthorizationPolicy {
        AuthorizationPolicy::builder()
            .public(["/auth/login", "/error*"])
            .role(AuthorizationRole::User, ["/users/{id}", "/users/{id}/budget*"])
            .role(AuthorizationRole::Admin, ["/api/admin/*"])
            .role(AuthorizationRole::IsAuth, ["/api/is_auth"])
            .build()
    }

    #[test]
    fn test_public_patterns() {
        let policy = policy();
        assert!(policy.is_public("/auth/login"));
        assert!(policy.is_public("/error/500"));
        assert!(!policy.is_public("/users/1"));
    }

    #[test]
    fn test_always_allowed() {
        let policy = policy();
        assert!(policy.is_always_allowed("/auth/refresh"));
        assert!(policy.is_always_allowed("/error"));
        assert!(policy.is_always_allowed("/errors/anything"));
        assert!(!policy.is_always_allowed("/auth/refresh/extra"));
        assert!(!policy.is_always_allowed("/auth/login"));
    }

    #[test]
    fn test_empty_always_allowed_entries_match_nothing() {
        let policy = AuthorizationPolicy::builder()
            .refresh_uri("")
            .error_prefix("")
            .build();
        assert!(!policy.is_always_allowed("/api/admin/info"));
        assert!(!policy.is_always_allowed(""));
        assert!(!policy.is_always_allowed("/"));
    }

    #[test]
    fn test_user_bucket_binds_id() {
        let policy = policy();
        let user = Identity { id: 1, role: Role::User };
        assert!(policy.permits(&user, "/users/1"));
        assert!(policy.permits(&user, "/users/1/budget/total"));
        assert!(!policy.permits(&user, "/users/2"));
        assert!(!policy.permits(&user, "/api/admin/info"));
    }

    #[test]
    fn test_is_auth_bucket_is_additive() {
        let policy = policy();
        let admin = Identity { id: 9, role: Role::Admin };
        let user = Identity { id: 1, role: Role::User };
        assert!(policy.permits(&admin, "/api/is_auth"));
        assert!(policy.permits(&user, "/api/is_auth"));
        assert!(policy.permits(&admin, "/api/admin/info"));
    }

    #[test]
    fn test_roles_do_not_inherit_each_other() {
        let policy = policy();
        let admin = Identity { id: 1, role: Role::Admin };
        assert!(!policy.permits(&admin, "/users/1"));
    }

    #[test]
    fn test_from_config() {
        let config = AuthorizationConfig {
            public_uris: "/auth/login, /error*".to_string(),
            user_uris: "/users/{id}".to_string(),
            admin_uris: String::new(),
            is_auth_uris: "/api/is_auth".to_string(),
            refresh_uri: "/auth/refresh".to_string(),
            error_prefix: "/error".to_string(),
        };
        let policy = AuthorizationPolicy::from_config(&config);

        assert_eq!(policy.public_patterns().len(), 2);
        assert!(policy.is_public("/error/404"));
        assert!(policy.patterns(AuthorizationRole::Admin).is_empty());
        assert_eq!(policy.patterns(AuthorizationRole::User)[0].as_str(), "/users/{id}");
    }

    #[test]
    fn test_policy_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<AuthorizationPolicy>();
    }
}
