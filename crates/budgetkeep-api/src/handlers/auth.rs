//! Login and refresh handlers.

use axum::Json;
use axum::extract::State;
use axum_extra::extract::cookie::CookieJar;

use crate::cookies;
use crate::dto::request::{LoginRequest, RefreshRequest};
use crate::dto::response::{ResponseDto, TokensResponse};
use crate::error::ApiError;
use crate::state::AppState;

/// POST /auth/login
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(req): Json<LoginRequest>,
) -> Result<(CookieJar, Json<ResponseDto<TokensResponse>>), ApiError> {
    let pair = state.token_service.issue(&req.into_credentials()).await?;
    let jar = cookies::with_token_pair(jar, &pair, &state.config.cookies);
    Ok((jar, Json(ResponseDto::ok(pair.into()))))
}

/// POST /auth/refresh
pub async fn refresh(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(req): Json<RefreshRequest>,
) -> Result<(CookieJar, Json<ResponseDto<TokensResponse>>), ApiError> {
    let pair = state.token_service.refresh(&req.token)?;
    let jar = cookies::with_token_pair(jar, &pair, &state.config.cookies);
    Ok((jar, Json(ResponseDto::ok(pair.into()))))
}
