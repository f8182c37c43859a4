//! In-process user directory backed by `DashMap`.

use async_trait::async_trait;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;

use budgetkeep_core::config::SeedUserConfig;
use budgetkeep_core::error::AppError;
use budgetkeep_core::result::AppResult;
use budgetkeep_entity::user::User;

use super::UserDirectory;

/// Concurrent in-memory user directory.
#[derive(Debug, Default)]
pub struct InMemoryUserDirectory {
    /// Users keyed by id.
    users: DashMap<i64, User>,
    /// Username → id index.
    usernames: DashMap<String, i64>,
}

impl InMemoryUserDirectory {
    /// Creates an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a directory from configured seed users.
    pub fn from_seed(seed: &[SeedUserConfig]) -> AppResult<Self> {
        let directory = Self::new();
        for entry in seed {
            directory.insert(User::try_from(entry)?)?;
        }
        tracing::info!(users = directory.len(), "User directory seeded");
        Ok(directory)
    }

    /// Adds a user. Fails if the id or username is already taken.
    pub fn insert(&self, user: User) -> AppResult<()> {
        match self.usernames.entry(user.username.clone()) {
            Entry::Occupied(_) => Err(AppError::validation(format!(
                "Username '{}' is already taken",
                user.username
            ))),
            Entry::Vacant(name_slot) => match self.users.entry(user.id) {
                Entry::Occupied(_) => Err(AppError::validation(format!(
                    "User id {} is already taken",
                    user.id
                ))),
                Entry::Vacant(id_slot) => {
                    name_slot.insert(user.id);
                    id_slot.insert(user);
                    Ok(())
                }
            },
        }
    }

    /// Removes a user by id, returning it if present.
    pub fn remove(&self, id: i64) -> Option<User> {
        let (_, user) = self.users.remove(&id)?;
        self.usernames.remove(&user.username);
        Some(user)
    }

    /// Number of users.
    pub fn len(&self) -> usize {
        self.users.len()
    }

    /// Whether the directory is empty.
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

#[async_trait]
impl UserDirectory for InMemoryUserDirectory {
    async fn find_by_id(&self, id: i64) -> AppResult<Option<User>> {
        Ok(self.users.get(&id).map(|u| u.value().clone()))
    }

    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        let Some(id) = self.usernames.get(username).map(|e| *e.value()) else {
            return Ok(None);
        };
        self.find_by_id(id).await
    }
}
