//! Content factory for loading planner data from a directory.

use std::path::{Path, PathBuf};

use planner_core::{Item, PlannerConfig};

use crate::loaders::{ConfigLoader, ItemLoader, LoadResult};

/// Content factory that loads all planner content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml      (optional)
/// └── items.ron        (or items.json)
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load planner configuration from `config.toml`, or defaults if absent.
    pub fn load_config(&self) -> LoadResult<PlannerConfig> {
        let path = self.data_dir.join("config.toml");
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Ok(PlannerConfig::default());
        }
        ConfigLoader::load(&path)
    }

    /// Load the item catalog from `items.ron`, falling back to `items.json`.
    pub fn load_items(&self) -> LoadResult<Vec<Item>> {
        let ron = self.data_dir.join("items.ron");
        if ron.exists() {
            return ItemLoader::load(&ron);
        }
        let json = self.data_dir.join("items.json");
        if json.exists() {
            return ItemLoader::load(&json);
        }
        anyhow::bail!("No item catalog (items.ron or items.json) in {}", self.data_dir.display())
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
