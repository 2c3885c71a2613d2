//! Repository contracts for builds, favorites and profiles.
//!
//! These traits stand in for the hosted relational store. Every method is
//! async so that a networked implementation can sit behind them unchanged.

use std::collections::HashMap;

use async_trait::async_trait;
use planner_core::{Build, BuildId, Favorite, Profile, UserId};

use super::error::Result;

/// Repository for saved builds.
#[async_trait]
pub trait BuildRepository: Send + Sync {
    /// Load a build by id.
    async fn get(&self, id: BuildId) -> Result<Option<Build>>;

    /// Store a new build.
    async fn insert(&self, build: &Build) -> Result<()>;

    /// Replace a stored build. Returns false if no build has that id.
    async fn update(&self, build: &Build) -> Result<bool>;

    /// Delete a build. Returns false if it did not exist.
    async fn delete(&self, id: BuildId) -> Result<bool>;

    /// Every build, newest first.
    async fn list_recent(&self) -> Result<Vec<Build>>;

    /// Builds owned by one user, newest first.
    async fn list_by_owner(&self, owner: UserId) -> Result<Vec<Build>> {
        let mut builds = self.list_recent().await?;
        builds.retain(|build| build.owner == owner);
        Ok(builds)
    }
}

/// Repository for `(user, build)` favorite edges.
#[async_trait]
pub trait FavoriteRepository: Send + Sync {
    async fn contains(&self, user: UserId, build: BuildId) -> Result<bool>;

    /// Store an edge. Returns false if it already existed.
    async fn insert(&self, favorite: Favorite) -> Result<bool>;

    /// Remove an edge. Returns false if it did not exist.
    async fn remove(&self, user: UserId, build: BuildId) -> Result<bool>;

    /// Flip an edge. Returns true if the edge exists afterwards.
    ///
    /// Stores that can should override this with a single atomic step. The
    /// fallback flips back when another writer inserted the same edge first.
    async fn toggle(&self, favorite: Favorite) -> Result<bool> {
        if self.remove(favorite.user_id, favorite.build_id).await? {
            return Ok(false);
        }
        if self.insert(favorite).await? {
            return Ok(true);
        }
        self.remove(favorite.user_id, favorite.build_id).await?;
        Ok(false)
    }

    async fn count_for_build(&self, build: BuildId) -> Result<usize>;

    /// A user's favorites, newest first.
    async fn builds_for_user(&self, user: UserId) -> Result<Vec<Favorite>>;

    /// Remove every edge pointing at a build. Returns how many were removed.
    async fn remove_for_build(&self, build: BuildId) -> Result<usize>;
}

/// Repository for user profiles.
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    async fn get(&self, user: UserId) -> Result<Option<Profile>>;

    async fn upsert(&self, profile: Profile) -> Result<()>;

    /// Usernames for a set of users. Users without a profile are absent.
    async fn usernames(&self, users: &[UserId]) -> Result<HashMap<UserId, String>>;
}
