//! Build state representation.
//!
//! This module owns the data structures that describe a saved build, its
//! equipment, and the catalog items it references. The runtime persists and
//! queries these records; the stats engine only reads attributes and weights.
pub mod build;
pub mod equipment;
pub mod error;
pub mod ids;
pub mod item;
pub mod payload;
pub mod profile;

pub use build::{Build, BuildName};
pub use equipment::{
    EquipPosition, EquipmentSlot, EquipmentSlots, ItemList, Loadout, MAX_LOADOUT_REFS,
    MAX_WEIGHTED_REFS,
};
pub use error::ValidationError;
pub use ids::{BuildId, ItemId, UserId};
pub use item::{EquippedItem, Item, ItemCategory};
pub use payload::{BuildPayload, ValidatedBuild};
pub use profile::{Favorite, Profile, author_name};
