//! Error pages, reachable whatever the caller's token state.

use axum::Json;
use axum::extract::Path;
use axum::http::StatusCode;

use crate::dto::response::{ErrorPageResponse, ResponseDto};

/// GET /error
pub async fn error_index() -> (StatusCode, Json<ResponseDto<ErrorPageResponse>>) {
    page(StatusCode::INTERNAL_SERVER_ERROR)
}

/// GET /error/{code}
///
/// Unknown or non-error codes render as 500.
pub async fn error_page(Path(code): Path<String>) -> (StatusCode, Json<ResponseDto<ErrorPageResponse>>) {
    let status = code
        .parse::<u16>()
        .ok()
        .and_then(|c| StatusCode::from_u16(c).ok())
        .filter(|s| s.is_client_error() || s.is_server_error())
        .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    page(status)
}

fn page(status: StatusCode) -> (StatusCode, Json<ResponseDto<ErrorPageResponse>>) {
    let reason = status.canonical_reason().unwrap_or("Error").to_string();
    let body = ResponseDto {
        data: Some(ErrorPageResponse {
            status: status.as_u16(),
            reason: reason.clone(),
        }),
        error: Some(reason),
        code: None,
    };
    (status, Json(body))
}
