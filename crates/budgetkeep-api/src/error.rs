//! Maps authentication and domain failures to HTTP responses.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use budgetkeep_auth::AuthError;
use budgetkeep_core::error::{AppError, ErrorKind};

use crate::dto::response::ResponseDto;

/// Message sent whenever the authorization filter halts a request.
pub const ACCESS_DENIED: &str = "Access denied!";

/// Error returned by handlers.
#[derive(Debug)]
pub enum ApiError {
    /// Token lifecycle or credential failure.
    Auth(AuthError),
    /// Any other domain failure.
    App(AppError),
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        Self::Auth(err)
    }
}

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self::App(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::Auth(err) => auth_response(&err),
            Self::App(err) => app_response(&err),
        }
    }
}

/// 403 with the fixed denial body.
pub fn access_denied() -> Response {
    (
        StatusCode::FORBIDDEN,
        Json(ResponseDto::<()>::error(ACCESS_DENIED, Some("DENIED"))),
    )
        .into_response()
}

fn auth_response(err: &AuthError) -> Response {
    let status = match err {
        AuthError::AuthenticationFailed(_)
        | AuthError::InvalidToken
        | AuthError::TokenExpired
        | AuthError::RefreshTokenExpired
        | AuthError::AccessWindowExpired => StatusCode::UNAUTHORIZED,
        AuthError::AuthorizationFailed | AuthError::Denied => StatusCode::FORBIDDEN,
        AuthError::Directory(_) | AuthError::Signing(_) => {
            tracing::error!(error = %err, "Token service failure");
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };

    let message = if status == StatusCode::INTERNAL_SERVER_ERROR {
        "Internal server error".to_string()
    } else {
        err.to_string()
    };

    (status, Json(ResponseDto::<()>::error(message, Some(err.code())))).into_response()
}

fn app_response(err: &AppError) -> Response {
    let (status, code) = match err.kind {
        ErrorKind::NotFound => (StatusCode::NOT_FOUND, "NOT_FOUND"),
        ErrorKind::Authentication => (StatusCode::UNAUTHORIZED, "UNAUTHORIZED"),
        ErrorKind::Authorization => (StatusCode::FORBIDDEN, "FORBIDDEN"),
        ErrorKind::Validation => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
        ErrorKind::Internal | ErrorKind::Configuration | ErrorKind::Serialization => {
            tracing::error!(error = %err.message, "Internal server error");
            (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR")
        }
    };

    (status, Json(ResponseDto::<()>::error(err.message.clone(), Some(code)))).into_response()
}
