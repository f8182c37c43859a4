//! User entity model.

use serde::{Deserialize, Serialize};

use budgetkeep_core::config::SeedUserConfig;
use budgetkeep_core::error::AppError;

use super::identity::Identity;
use super::role::Role;

/// A registered BudgetKeep user as seen by the authentication core.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Numeric user identifier, used as the token subject.
    pub id: i64,
    /// Unique login name.
    pub username: String,
    /// Email address (optional).
    pub email: Option<String>,
    /// Password digest.
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Assigned role.
    pub role: Role,
}

impl User {
    /// The identity a token for this user resolves to.
    pub fn identity(&self) -> Identity {
        Identity {
            id: self.id,
            role: self.role,
        }
    }

    /// Check if this user has admin privileges.
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}

impl TryFrom<&SeedUserConfig> for User {
    type Error = AppError;

    fn try_from(seed: &SeedUserConfig) -> Result<Self, Self::Error> {
        Ok(Self {
            id: seed.id,
            username: seed.username.clone(),
            email: seed.email.clone(),
            password_hash: seed.password_hash.clone(),
            role: seed.role.parse()?,
        })
    }
}
