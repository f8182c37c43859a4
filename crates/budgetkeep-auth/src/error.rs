//! Authentication and authorization failure taxonomy.

use thiserror::Error;

use budgetkeep_core::error::{AppError, ErrorKind};

/// Which credential check failed during login.
///
/// Kept for diagnostics only: it never changes the outward message of
/// [`AuthError::AuthenticationFailed`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialFailure {
    /// No user with the submitted username.
    UnknownUser,
    /// The user exists but the password does not match.
    PasswordMismatch,
}

/// Every way the token lifecycle or an authorization check can fail.
///
/// All variants are terminal for the current request.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Bad credentials. Same message regardless of which check failed.
    #[error("Authentication failed")]
    AuthenticationFailed(CredentialFailure),
    /// Token missing, malformed, tampered with, or signed by another key.
    #[error("Invalid token")]
    InvalidToken,
    /// Token signature is fine but its `exp` has passed.
    #[error("Token has expired")]
    TokenExpired,
    /// Refresh token's own `exp` has passed.
    #[error("Refresh token has expired")]
    RefreshTokenExpired,
    /// The access window recorded in the refresh token has already elapsed.
    #[error("Access token has expired")]
    AccessWindowExpired,
    /// Token subject no longer resolves to a user.
    #[error("Authorization failed")]
    AuthorizationFailed,
    /// Identity is valid but no pattern permits the requested URI.
    #[error("Access denied")]
    Denied,
    /// The user directory could not be queried.
    #[error("User directory unavailable: {0}")]
    Directory(#[source] AppError),
    /// A token could not be signed.
    #[error("Failed to sign token: {0}")]
    Signing(String),
}

impl AuthError {
    /// Stable machine-readable code for the boundary layer.
    pub fn code(&self) -> &'static str {
        match self {
            Self::AuthenticationFailed(_) => "AUTHENTICATION_FAILED",
            Self::InvalidToken => "INVALID_TOKEN",
            Self::TokenExpired => "TOKEN_EXPIRED",
            Self::RefreshTokenExpired => "REFRESH_TOKEN_EXPIRED",
            Self::AccessWindowExpired => "ACCESS_WINDOW_EXPIRED",
            Self::AuthorizationFailed => "AUTHORIZATION_FAILED",
            Self::Denied => "DENIED",
            Self::Directory(_) => "DIRECTORY_UNAVAILABLE",
            Self::Signing(_) => "SIGNING_FAILED",
        }
    }

    /// Whether the client should be sent back to the login form.
    pub fn requires_login(&self) -> bool {
        matches!(
            self,
            Self::AuthenticationFailed(_)
                | Self::RefreshTokenExpired
                | Self::AccessWindowExpired
                | Self::AuthorizationFailed
        )
    }

    fn kind(&self) -> ErrorKind {
        match self {
            Self::AuthenticationFailed(_)
            | Self::InvalidToken
            | Self::TokenExpired
            | Self::RefreshTokenExpired
            | Self::AccessWindowExpired => ErrorKind::Authentication,
            Self::AuthorizationFailed | Self::Denied => ErrorKind::Authorization,
            Self::Directory(_) | Self::Signing(_) => ErrorKind::Internal,
        }
    }
}

impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        let message = err.to_string();
        let mut app = match err.kind() {
            ErrorKind::Authentication => AppError::authentication(message),
            ErrorKind::Authorization => AppError::authorization(message),
            kind => AppError::new(kind, message),
        };
        app.source = Some(Box::new(err));
        app
    }
}
