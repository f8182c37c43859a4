//! Account info endpoints, one per authorization bucket.

use axum::Json;
use axum::extract::{Extension, State};

use budgetkeep_auth::AuthError;
use budgetkeep_auth::rbac::Access;
use budgetkeep_core::error::AppError;

use crate::dto::response::{InfoResponse, ResponseDto};
use crate::error::ApiError;
use crate::state::AppState;

/// GET /api/user/info
pub async fn user_info(
    State(state): State<AppState>,
    Extension(access): Extension<Access>,
) -> Result<Json<ResponseDto<InfoResponse>>, ApiError> {
    current_user(&state, access).await
}

/// GET /api/admin/info
pub async fn admin_info(
    State(state): State<AppState>,
    Extension(access): Extension<Access>,
) -> Result<Json<ResponseDto<InfoResponse>>, ApiError> {
    current_user(&state, access).await
}

/// GET /api/is_auth
pub async fn is_auth(
    State(state): State<AppState>,
    Extension(access): Extension<Access>,
) -> Result<Json<ResponseDto<InfoResponse>>, ApiError> {
    current_user(&state, access).await
}

async fn current_user(
    state: &AppState,
    access: Access,
) -> Result<Json<ResponseDto<InfoResponse>>, ApiError> {
    // Reachable only through a decoded token unless the route was made public.
    let identity = access.identity().ok_or(AuthError::Denied)?;
    let user = state
        .directory
        .find_by_id(identity.id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("User {} not found", identity.id)))?;
    Ok(Json(ResponseDto::ok(user.into())))
}
