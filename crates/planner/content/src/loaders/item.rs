//! Item catalog loader.

use std::collections::HashSet;
use std::path::Path;

use planner_core::Item;
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Item catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemCatalog {
    pub items: Vec<Item>,
}

/// On-disk encoding of a catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CatalogFormat {
    Ron,
    /// Either a bare array of items or `{ "items": [...] }`.
    Json,
}

impl CatalogFormat {
    /// Picks the format from the file extension. Anything but `.json` is RON.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Ron,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum JsonCatalog {
    Wrapped(ItemCatalog),
    Bare(Vec<Item>),
}

/// Loader for item catalogs.
pub struct ItemLoader;

impl ItemLoader {
    /// Load an item catalog, choosing the format from the extension.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to a `.ron` or `.json` catalog
    ///
    /// # Returns
    ///
    /// Returns the catalog entries in file order.
    pub fn load(path: &Path) -> LoadResult<Vec<Item>> {
        let content = read_file(path)?;
        let items = Self::parse(&content, CatalogFormat::from_path(path))
            .map_err(|e| anyhow::anyhow!("{}: {}", path.display(), e))?;
        tracing::debug!(path = %path.display(), count = items.len(), "Loaded item catalog");
        Ok(items)
    }

    /// Parse catalog text and check it for duplicate ids and bad weights.
    pub fn parse(content: &str, format: CatalogFormat) -> LoadResult<Vec<Item>> {
        let items = match format {
            CatalogFormat::Ron => {
                let catalog: ItemCatalog = ron::from_str(content)
                    .map_err(|e| anyhow::anyhow!("Failed to parse item catalog RON: {}", e))?;
                catalog.items
            }
            CatalogFormat::Json => {
                match serde_json::from_str(content)
                    .map_err(|e| anyhow::anyhow!("Failed to parse item catalog JSON: {}", e))?
                {
                    JsonCatalog::Wrapped(catalog) => catalog.items,
                    JsonCatalog::Bare(items) => items,
                }
            }
        };
        Self::check(&items)?;
        Ok(items)
    }

    fn check(items: &[Item]) -> LoadResult<()> {
        let mut seen = HashSet::with_capacity(items.len());
        for item in items {
            if !seen.insert(item.id) {
                anyhow::bail!("Duplicate item id {} ({})", item.id, item.name);
            }
            if item.name.trim().is_empty() {
                anyhow::bail!("Item {} has an empty name", item.id);
            }
            if let Some(weight) = item.weight.filter(|w| !w.is_finite() || *w < 0.0) {
                anyhow::bail!("Item {} ({}) has invalid weight {}", item.id, item.name, weight);
            }
        }
        Ok(())
    }
}
