//! Build state and the derived-stats engine.
//!
//! `planner-core` defines the canonical rules (attribute formulas, load tiers,
//! build validation) and exposes pure APIs shared by the runtime service and
//! offline tools. Nothing here performs I/O; collaborators (build store,
//! catalog, auth) live behind the runtime crate's traits.
pub mod catalog;
pub mod config;
pub mod error;
pub mod state;
pub mod stats;

pub use catalog::ItemOracle;
pub use config::{BuildRules, PlannerConfig};
pub use error::{ErrorSeverity, PlannerError};
pub use state::{
    Build, BuildId, BuildName, BuildPayload, EquipPosition, EquipmentSlot, EquipmentSlots,
    EquippedItem, Favorite, Item, ItemCategory, ItemId, ItemList, Loadout, Profile, UserId,
    ValidatedBuild, ValidationError, author_name,
};
pub use stats::{
    Attribute, AttributeBlock, AttributeParseError, DerivedStats, EquipLoad, LoadTier,
    ResourceMaximums, StatsError, aggregate_carry_weight, classify_load_tier,
    compute_derived_stats, focus_points, hit_points, load_ratio, max_load, stamina,
};
