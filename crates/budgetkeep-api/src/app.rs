//! Application builder: wires configuration, auth services, and the router.

use std::sync::Arc;

use axum::Router;

use budgetkeep_auth::directory::{InMemoryUserDirectory, UserDirectory};
use budgetkeep_auth::jwt::{SigningKey, TokenCodec};
use budgetkeep_auth::password::PasswordHasher;
use budgetkeep_auth::rbac::{AuthorizationEngine, AuthorizationPolicy};
use budgetkeep_auth::token::TokenService;
use budgetkeep_core::config::AppConfig;
use budgetkeep_core::error::AppError;
use budgetkeep_core::traits::{Clock, PasswordEncoder, SystemClock};

use crate::router::build_router;
use crate::state::AppState;

/// Builds the complete Axum application.
pub fn build_app(state: AppState) -> Router {
    build_router(state)
}

/// Builds the shared state from configuration, using the system clock.
pub fn build_state(config: AppConfig) -> Result<AppState, AppError> {
    build_state_with_clock(config, Arc::new(SystemClock))
}

/// Builds the shared state with an explicit clock.
pub fn build_state_with_clock(
    config: AppConfig,
    clock: Arc<dyn Clock>,
) -> Result<AppState, AppError> {
    // ── Step 1: Signing key ──────────────────────────────────────
    let key = SigningKey::from_config(config.tokens.secret.as_deref())?;

    // ── Step 2: User directory ───────────────────────────────────
    let hasher = PasswordHasher::new();
    for user in &config.users {
        hasher.check_digest(&user.password_hash).map_err(|e| {
            AppError::configuration(format!("Seed user '{}': {}", user.username, e.message))
        })?;
    }
    let directory: Arc<dyn UserDirectory> =
        Arc::new(InMemoryUserDirectory::from_seed(&config.users)?);

    // ── Step 3: Token service ────────────────────────────────────
    let encoder: Arc<dyn PasswordEncoder> = Arc::new(hasher);
    let token_service = Arc::new(TokenService::new(
        TokenCodec::new(&key),
        Arc::clone(&directory),
        encoder,
        clock,
        &config.tokens,
    ));

    // ── Step 4: Authorization policy, built once ─────────────────
    let policy = Arc::new(AuthorizationPolicy::from_config(&config.authorization));
    let authorization = Arc::new(AuthorizationEngine::new(
        Arc::clone(&token_service),
        policy,
    ));

    Ok(AppState {
        config: Arc::new(config),
        token_service,
        authorization,
        directory,
    })
}

/// Runs the BudgetKeep server until Ctrl+C or SIGTERM.
pub async fn run_server(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting BudgetKeep server...");

    let addr = config.server.bind_address();
    let app = build_app(build_state(config)?);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {}: {}", addr, e)))?;

    tracing::info!("BudgetKeep server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {}", e)))?;

    tracing::info!("BudgetKeep server stopped");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    tracing::info!("Shutdown signal received, starting graceful shutdown...");
}
