//! The authorization filter run before every route.
//!
//! Reads the access token from its cookie, asks the engine for a decision
//! on the request path, and halts with 403 on any denial. On success the
//! [`Access`] is stored in the request extensions for handlers.

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;
use axum_extra::extract::cookie::CookieJar;

use budgetkeep_auth::rbac::Access;

use crate::cookies;
use crate::error::access_denied;
use crate::state::AppState;

/// Permits or halts the request.
pub async fn authorize(
    State(state): State<AppState>,
    jar: CookieJar,
    mut request: Request,
    next: Next,
) -> Response {
    let token = cookies::access_token(&jar, &state.config.cookies);
    let path = request.uri().path();

    let access: Access = match state.authorization.check(token, path).await {
        Ok(access) => access,
        Err(err) => {
            tracing::debug!(uri = %path, reason = err.code(), "Request halted");
            return access_denied();
        }
    };

    if let Some(identity) = access.identity() {
        tracing::trace!(user_id = identity.id, role = %identity.role, "Request authorized");
    }
    request.extensions_mut().insert(access);
    next.run(request).await
}
