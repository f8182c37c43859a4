//! User lookup by id or username.

pub mod memory;

use async_trait::async_trait;

use budgetkeep_core::result::AppResult;
use budgetkeep_entity::user::User;

pub use memory::InMemoryUserDirectory;

/// Narrow read-only view of the user store needed by the token lifecycle.
///
/// `Ok(None)` means "no such user"; `Err` means the store itself failed.
#[async_trait]
pub trait UserDirectory: Send + Sync + 'static {
    /// Find a user by numeric id.
    async fn find_by_id(&self, id: i64) -> AppResult<Option<User>>;

    /// Find a user by login name.
    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>>;
}
