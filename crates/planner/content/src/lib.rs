//! Data-driven catalog and configuration loaders.
//!
//! This crate reads the static data a planner instance starts from:
//! - Item catalogs (RON, or the JSON dump produced by the catalog import)
//! - Planner configuration (TOML)
//!
//! Content is consumed by the runtime's item oracle and never appears in
//! build state.
//!
//! All loaders use planner-core types directly with serde for deserialization.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{CatalogFormat, ConfigLoader, ContentFactory, ItemCatalog, ItemLoader, LoadResult};
