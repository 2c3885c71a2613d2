//! Assembles a ready [`Planner`] from a [`BootstrapConfig`].
use std::path::Path;

use anyhow::{Context, Result, bail};
use planner_content::{ConfigLoader, ContentFactory, ItemLoader};
use planner_core::{Item, PlannerConfig};
use planner_runtime::{FileBuildRepository, ItemOracleImpl, Planner};

use crate::config::{BootstrapConfig, BuildStore};

/// Loads content and wires repositories for a planner instance.
pub struct PlannerSetup;

impl PlannerSetup {
    /// Load the catalog and configuration, open the build store, and build the planner.
    ///
    /// Favorites and profiles are always kept in memory.
    pub fn from_config(config: &BootstrapConfig) -> Result<Planner> {
        let items = load_catalog(config)?;
        let planner_config = load_planner_config(config)?;

        tracing::info!(
            items = items.len(),
            page_size = planner_config.listing_page_size,
            "Catalog loaded"
        );

        let builder = Planner::builder()
            .config(planner_config)
            .catalog(ItemOracleImpl::from_items(items))
            .event_capacity(config.event_buffer);

        let builder = match &config.build_store {
            BuildStore::Memory => {
                tracing::info!("Using in-memory build store");
                builder
            }
            BuildStore::Files(dir) => {
                let repo = FileBuildRepository::new(dir).with_context(|| {
                    format!("Failed to open build store at {}", dir.display())
                })?;
                tracing::info!("Using file build store at {}", dir.display());
                builder.build_repository(repo)
            }
        };

        Ok(builder.in_memory_repositories().build()?)
    }
}

fn load_catalog(config: &BootstrapConfig) -> Result<Vec<Item>> {
    if let Some(path) = &config.catalog_path {
        return ItemLoader::load(path);
    }
    match &config.content_dir {
        Some(dir) => content(dir)?.load_items(),
        None => bail!("No item catalog configured; set PLANNER_CATALOG or PLANNER_CONTENT_DIR"),
    }
}

fn load_planner_config(config: &BootstrapConfig) -> Result<PlannerConfig> {
    if let Some(path) = &config.config_path {
        return ConfigLoader::load(path);
    }
    match &config.content_dir {
        Some(dir) => content(dir)?.load_config(),
        None => Ok(PlannerConfig::default()),
    }
}

fn content(dir: &Path) -> Result<ContentFactory> {
    if !dir.is_dir() {
        bail!("Content directory not found: {}", dir.display());
    }
    Ok(ContentFactory::new(dir))
}
