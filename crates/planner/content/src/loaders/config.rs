//! Planner configuration loader.

use std::path::Path;

use planner_core::PlannerConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for planner configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// Missing keys take their defaults. A page size outside
    /// `1..=MAX_LISTING_PAGE_SIZE` is rejected rather than clamped.
    pub fn load(path: &Path) -> LoadResult<PlannerConfig> {
        let content = read_file(path)?;
        Self::parse(&content).map_err(|e| anyhow::anyhow!("{}: {}", path.display(), e))
    }

    pub fn parse(content: &str) -> LoadResult<PlannerConfig> {
        let config: PlannerConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        if !(1..=PlannerConfig::MAX_LISTING_PAGE_SIZE).contains(&config.listing_page_size) {
            anyhow::bail!(
                "listing_page_size must be between 1 and {} (got {})",
                PlannerConfig::MAX_LISTING_PAGE_SIZE,
                config.listing_page_size
            );
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_gives_defaults() {
        assert_eq!(ConfigLoader::parse("").unwrap(), PlannerConfig::default());
    }

    #[test]
    fn reads_page_size() {
        let config = ConfigLoader::parse("listing_page_size = 12\n").unwrap();
        assert_eq!(config.listing_page_size, 12);
    }

    #[test]
    fn rejects_out_of_range_page_size() {
        assert!(ConfigLoader::parse("listing_page_size = 0").is_err());
        assert!(ConfigLoader::parse("listing_page_size = 101").is_err());
        assert!(ConfigLoader::parse("listing_page_size = \"ten\"").is_err());
    }
}
