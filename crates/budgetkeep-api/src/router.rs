//! Route definitions for the BudgetKeep HTTP API.
//!
//! The authorization filter wraps every route, including the fallback, so
//! unknown paths are denied the same way unlisted ones are.

use axum::{Router, middleware as axum_middleware, routing::{get, post}};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(auth_routes())
        .merge(info_routes())
        .merge(error_routes())
        .layer(axum_middleware::from_fn_with_state(
            state.clone(),
            middleware::authorize::authorize,
        ))
        .layer(axum_middleware::from_fn(middleware::logging::request_logging))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Auth endpoints: login, refresh
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/login", post(handlers::auth::login))
        .route("/auth/refresh", post(handlers::auth::refresh))
}

/// Per-bucket info endpoints
fn info_routes() -> Router<AppState> {
    Router::new()
        .route("/api/user/info", get(handlers::info::user_info))
        .route("/api/admin/info", get(handlers::info::admin_info))
        .route("/api/is_auth", get(handlers::info::is_auth))
}

/// Error pages
fn error_routes() -> Router<AppState> {
    Router::new()
        .route("/error", get(handlers::error::error_index))
        .route("/error/{code}", get(handlers::error::error_page))
}
