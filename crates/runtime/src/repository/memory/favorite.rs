//! In-memory FavoriteRepository implementation.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use planner_core::{BuildId, Favorite, UserId};

use crate::repository::{FavoriteRepository, RepositoryError, Result};

/// In-memory implementation of FavoriteRepository, keyed by `(user, build)`.
pub struct InMemoryFavoriteRepository {
    edges: RwLock<HashMap<(UserId, BuildId), Favorite>>,
}

impl InMemoryFavoriteRepository {
    pub fn new() -> Self {
        Self {
            edges: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryFavoriteRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl FavoriteRepository for InMemoryFavoriteRepository {
    async fn contains(&self, user: UserId, build: BuildId) -> Result<bool> {
        let edges = self
            .edges
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(edges.contains_key(&(user, build)))
    }

    async fn insert(&self, favorite: Favorite) -> Result<bool> {
        let mut edges = self
            .edges
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        if edges.contains_key(&favorite.key()) {
            return Ok(false);
        }
        edges.insert(favorite.key(), favorite);
        Ok(true)
    }

    async fn remove(&self, user: UserId, build: BuildId) -> Result<bool> {
        let mut edges = self
            .edges
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(edges.remove(&(user, build)).is_some())
    }

    async fn toggle(&self, favorite: Favorite) -> Result<bool> {
        let mut edges = self
            .edges
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        if edges.remove(&favorite.key()).is_some() {
            return Ok(false);
        }
        edges.insert(favorite.key(), favorite);
        Ok(true)
    }

    async fn count_for_build(&self, build: BuildId) -> Result<usize> {
        let edges = self
            .edges
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(edges.keys().filter(|(_, b)| *b == build).count())
    }

    async fn builds_for_user(&self, user: UserId) -> Result<Vec<Favorite>> {
        let edges = self
            .edges
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        let mut favorites: Vec<Favorite> = edges
            .values()
            .filter(|f| f.user_id == user)
            .copied()
            .collect();
        favorites.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.build_id.cmp(&a.build_id))
        });
        Ok(favorites)
    }

    async fn remove_for_build(&self, build: BuildId) -> Result<usize> {
        let mut edges = self
            .edges
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        let before = edges.len();
        edges.retain(|(_, b), _| *b != build);
        Ok(before - edges.len())
    }
}
