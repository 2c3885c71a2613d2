//! In-memory BuildRepository implementation.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use planner_core::{Build, BuildId, UserId};

use crate::repository::{BuildRepository, RepositoryError, Result, sort_newest_first};

/// In-memory implementation of BuildRepository.
pub struct InMemoryBuildRepository {
    builds: RwLock<HashMap<BuildId, Build>>,
}

impl InMemoryBuildRepository {
    /// Create a new empty in-memory repository.
    pub fn new() -> Self {
        Self {
            builds: RwLock::new(HashMap::new()),
        }
    }

    /// Create pre-populated with existing builds.
    pub fn with_builds(builds: impl IntoIterator<Item = Build>) -> Self {
        Self {
            builds: RwLock::new(builds.into_iter().map(|b| (b.id, b)).collect()),
        }
    }
}

impl Default for InMemoryBuildRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BuildRepository for InMemoryBuildRepository {
    async fn get(&self, id: BuildId) -> Result<Option<Build>> {
        let builds = self
            .builds
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(builds.get(&id).cloned())
    }

    async fn insert(&self, build: &Build) -> Result<()> {
        let mut builds = self
            .builds
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        builds.insert(build.id, build.clone());
        Ok(())
    }

    async fn update(&self, build: &Build) -> Result<bool> {
        let mut builds = self
            .builds
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        match builds.get_mut(&build.id) {
            Some(stored) => {
                *stored = build.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: BuildId) -> Result<bool> {
        let mut builds = self
            .builds
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(builds.remove(&id).is_some())
    }

    async fn list_recent(&self) -> Result<Vec<Build>> {
        let builds = self
            .builds
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        let mut all: Vec<Build> = builds.values().cloned().collect();
        sort_newest_first(&mut all);
        Ok(all)
    }

    async fn list_by_owner(&self, owner: UserId) -> Result<Vec<Build>> {
        let builds = self
            .builds
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        let mut owned: Vec<Build> = builds
            .values()
            .filter(|b| b.owner == owner)
            .cloned()
            .collect();
        sort_newest_first(&mut owned);
        Ok(owned)
    }
}
