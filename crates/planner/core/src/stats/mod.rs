//! Stat System - the derived-stats engine.
//!
//! # Architecture
//!
//! ```text
//! [ Attributes (Layer 1) ]      vigor … arcane, soul level
//!      ↓
//! [ Resources (Layer 2) ]       HP / FP / stamina
//!      ↓
//! [ Equip Load (Layer 3) ]      max load, carry weight, ratio, tier
//!      ↓
//! [ DerivedStats ]              flat output record
//! ```
//!
//! ## Principles
//!
//! 1. **SSOT**: Attributes and equipped item weights are the only inputs
//! 2. **Deterministic**: Pure functions, no I/O, no hidden state
//! 3. **Strict inputs**: Out-of-contract values are rejected, never clamped

pub mod attributes;
pub mod derived;
pub mod error;
pub mod load;
pub mod resources;

pub use attributes::{Attribute, AttributeBlock, AttributeParseError};
pub use derived::{DerivedStats, compute_derived_stats};
pub use error::StatsError;
pub use load::{
    EquipLoad, LoadTier, aggregate_carry_weight, classify_load_tier, load_ratio, max_load,
};
pub use resources::{ResourceMaximums, focus_points, hit_points, stamina};
