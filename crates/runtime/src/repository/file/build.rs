//! File-based BuildRepository implementation.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use planner_core::{Build, BuildId};
use tokio::fs;

use crate::repository::{BuildRepository, RepositoryError, Result, sort_newest_first};

/// File-based implementation of BuildRepository.
///
/// # File Format
///
/// Each build is stored as `build_{uuid}.json` (pretty-printed JSON). Writes go
/// to a `.json.tmp` sibling first and are renamed into place, so a crash never
/// leaves a half-written build behind.
pub struct FileBuildRepository {
    base_dir: PathBuf,
}

impl FileBuildRepository {
    /// Create a new file-based build repository, creating the directory if needed.
    pub fn new(base_dir: impl AsRef<Path>) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        std::fs::create_dir_all(&base_dir).map_err(RepositoryError::Io)?;
        Ok(Self { base_dir })
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    fn build_path(&self, id: BuildId) -> PathBuf {
        self.base_dir.join(format!("build_{}.json", id))
    }

    async fn write(&self, build: &Build) -> Result<()> {
        let path = self.build_path(build.id);
        let temp_path = path.with_extension("json.tmp");

        let bytes = serde_json::to_vec_pretty(build)?;
        fs::write(&temp_path, bytes).await?;
        fs::rename(&temp_path, &path).await?;

        tracing::debug!("Saved build[{}] to {}", build.id, path.display());
        Ok(())
    }

    async fn read(path: &Path) -> Result<Build> {
        let bytes = fs::read(path).await?;
        let build: Build = serde_json::from_slice(&bytes)?;
        Ok(build)
    }
}

#[async_trait]
impl BuildRepository for FileBuildRepository {
    async fn get(&self, id: BuildId) -> Result<Option<Build>> {
        let path = self.build_path(id);
        if !fs::try_exists(&path).await? {
            return Ok(None);
        }
        let build = Self::read(&path).await?;
        tracing::debug!("Loaded build[{}] from {}", id, path.display());
        Ok(Some(build))
    }

    async fn insert(&self, build: &Build) -> Result<()> {
        self.write(build).await
    }

    async fn update(&self, build: &Build) -> Result<bool> {
        if !fs::try_exists(self.build_path(build.id)).await? {
            return Ok(false);
        }
        self.write(build).await?;
        Ok(true)
    }

    async fn delete(&self, id: BuildId) -> Result<bool> {
        let path = self.build_path(id);
        if !fs::try_exists(&path).await? {
            return Ok(false);
        }
        fs::remove_file(&path).await?;
        tracing::debug!("Deleted build[{}]", id);
        Ok(true)
    }

    async fn list_recent(&self) -> Result<Vec<Build>> {
        let mut builds = Vec::new();
        let mut entries = fs::read_dir(&self.base_dir).await?;

        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            let is_build = path
                .file_name()
                .and_then(|s| s.to_str())
                .and_then(|name| name.strip_prefix("build_"))
                .and_then(|rest| rest.strip_suffix(".json"))
                .is_some_and(|id| id.parse::<BuildId>().is_ok());

            if !is_build {
                continue;
            }
            match Self::read(&path).await {
                Ok(build) => builds.push(build),
                Err(RepositoryError::Serialization(err)) => {
                    tracing::warn!("Skipping unreadable build file {}: {}", path.display(), err);
                }
                Err(err) => return Err(err),
            }
        }

        sort_newest_first(&mut builds);
        Ok(builds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use planner_core::{AttributeBlock, BuildName, EquipmentSlot, ItemId, Loadout, UserId};

    fn build(name: &str, age_minutes: i64) -> Build {
        let mut loadout = Loadout::default();
        loadout
            .equipment
            .equip(EquipmentSlot::RightHand1, ItemId::new_v4());
        loadout.tears[1] = Some(ItemId::new_v4());
        Build::new(
            BuildId::new_v4(),
            UserId::new_v4(),
            BuildName::parse(name).unwrap(),
            AttributeBlock::default().with(planner_core::Attribute::Mind, 30).unwrap(),
            loadout,
            Utc::now() - Duration::minutes(age_minutes),
        )
    }

    #[tokio::test]
    async fn persists_across_instances() {
        let dir = tempfile::tempdir().unwrap();
        let stored = build("Persistent", 0);

        FileBuildRepository::new(dir.path())
            .unwrap()
            .insert(&stored)
            .await
            .unwrap();

        let reopened = FileBuildRepository::new(dir.path()).unwrap();
        let loaded = reopened.get(stored.id).await.unwrap().unwrap();
        assert_eq!(loaded, stored);
        assert!(dir.path().join(format!("build_{}.json", stored.id)).exists());
        assert!(!dir.path().join(format!("build_{}.json.tmp", stored.id)).exists());
    }

    #[tokio::test]
    async fn lists_newest_first_and_ignores_foreign_files() {
        let dir = tempfile::tempdir().unwrap();
        let repo = FileBuildRepository::new(dir.path()).unwrap();
        let old = build("Older", 60);
        let new = build("Newer", 5);
        repo.insert(&old).await.unwrap();
        repo.insert(&new).await.unwrap();
        std::fs::write(dir.path().join("notes.txt"), "not a build").unwrap();

        let ids: Vec<BuildId> = repo.list_recent().await.unwrap().iter().map(|b| b.id).collect();
        assert_eq!(ids, [new.id, old.id]);
    }

    #[tokio::test]
    async fn update_and_delete_missing_build() {
        let dir = tempfile::tempdir().unwrap();
        let repo = FileBuildRepository::new(dir.path()).unwrap();
        let b = build("Ghost", 0);

        assert!(!repo.update(&b).await.unwrap());
        assert!(!repo.delete(b.id).await.unwrap());
        assert!(repo.get(b.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn corrupted_file_is_a_serialization_error() {
        let dir = tempfile::tempdir().unwrap();
        let repo = FileBuildRepository::new(dir.path()).unwrap();
        let id = BuildId::new_v4();
        std::fs::write(dir.path().join(format!("build_{}.json", id)), "{ nope").unwrap();

        assert!(matches!(
            repo.get(id).await,
            Err(RepositoryError::Serialization(_))
        ));
    }

    #[tokio::test]
    async fn listing_skips_corrupted_files() {
        let dir = tempfile::tempdir().unwrap();
        let repo = FileBuildRepository::new(dir.path()).unwrap();
        let good = build("Readable", 0);
        repo.insert(&good).await.unwrap();
        std::fs::write(
            dir.path().join(format!("build_{}.json", BuildId::new_v4())),
            "{ nope",
        )
        .unwrap();

        let listed = repo.list_recent().await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, good.id);
    }
}
