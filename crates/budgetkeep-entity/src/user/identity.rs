//! Identity resolved from a validated token.

use serde::{Deserialize, Serialize};

use super::role::Role;

/// Who is behind a token: the user's numeric id and current role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// User id (the token subject).
    pub id: i64,
    /// Role as currently recorded in the user directory.
    pub role: Role,
}
