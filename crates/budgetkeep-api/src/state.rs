//! Application state shared across handlers and middleware.

use std::sync::Arc;

use budgetkeep_auth::directory::UserDirectory;
use budgetkeep_auth::rbac::AuthorizationEngine;
use budgetkeep_auth::token::TokenService;
use budgetkeep_core::config::AppConfig;

/// Shared dependencies, passed to every handler via `State<AppState>`.
///
/// Everything here is immutable after startup.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// Token issuance, validation, and refresh.
    pub token_service: Arc<TokenService>,
    /// Per-request authorization decisions.
    pub authorization: Arc<AuthorizationEngine>,
    /// User lookup for the info endpoints.
    pub directory: Arc<dyn UserDirectory>,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("token_service", &self.token_service)
            .field("authorization", &self.authorization)
            .finish_non_exhaustive()
    }
}
