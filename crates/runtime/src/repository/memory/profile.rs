//! In-memory ProfileRepository implementation.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use planner_core::{Profile, UserId};

use crate::repository::{ProfileRepository, RepositoryError, Result};

pub struct InMemoryProfileRepository {
    profiles: RwLock<HashMap<UserId, Profile>>,
}

impl InMemoryProfileRepository {
    pub fn new() -> Self {
        Self {
            profiles: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryProfileRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProfileRepository for InMemoryProfileRepository {
    async fn get(&self, user: UserId) -> Result<Option<Profile>> {
        let profiles = self
            .profiles
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(profiles.get(&user).cloned())
    }

    async fn upsert(&self, profile: Profile) -> Result<()> {
        let mut profiles = self
            .profiles
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        profiles.insert(profile.user_id, profile);
        Ok(())
    }

    async fn usernames(&self, users: &[UserId]) -> Result<HashMap<UserId, String>> {
        let profiles = self
            .profiles
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(users
            .iter()
            .filter_map(|user| {
                profiles
                    .get(user)
                    .map(|profile| (*user, profile.username.clone()))
            })
            .collect())
    }
}
