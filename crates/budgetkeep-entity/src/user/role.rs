//! User role and authorization bucket enumerations.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use budgetkeep_core::AppError;

/// Roles a user can be assigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    /// Regular account holder.
    User,
    /// Administrator.
    Admin,
}

impl Role {
    /// Check if this role is an admin.
    pub fn is_admin(&self) -> bool {
        matches!(self, Self::Admin)
    }

    /// The authorization bucket whose URI patterns apply to this role.
    pub fn authorization_role(&self) -> AuthorizationRole {
        match self {
            Self::User => AuthorizationRole::User,
            Self::Admin => AuthorizationRole::Admin,
        }
    }

    /// Return the role as an uppercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::User => "USER",
            Self::Admin => "ADMIN",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Role {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "user" => Ok(Self::User),
            "admin" => Ok(Self::Admin),
            _ => Err(AppError::validation(format!(
                "Invalid user role: '{s}'. Expected one of: user, admin"
            ))),
        }
    }
}

/// Buckets of URI patterns in the authorization policy.
///
/// `IsAuth` is never assigned to a user; its patterns apply to every
/// authenticated identity in addition to the identity's own role bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AuthorizationRole {
    /// Patterns for [`Role::User`].
    User,
    /// Patterns for [`Role::Admin`].
    Admin,
    /// Patterns for any authenticated identity.
    IsAuth,
}

impl AuthorizationRole {
    /// All buckets, in declaration order.
    pub const ALL: [AuthorizationRole; 3] = [Self::User, Self::Admin, Self::IsAuth];

    /// Return the bucket name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::User => "USER",
            Self::Admin => "ADMIN",
            Self::IsAuth => "IS_AUTH",
        }
    }
}

impl fmt::Display for AuthorizationRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<Role> for AuthorizationRole {
    fn from(role: Role) -> Self {
        role.authorization_role()
    }
}
