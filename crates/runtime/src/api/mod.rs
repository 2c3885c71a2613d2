//! Public runtime API surface.
//!
//! This module gathers the types exposed to consumers of the runtime crate so
//! other layers can stay focused on orchestration or infrastructure.

pub mod errors;
pub mod views;

pub use errors::{Result, RuntimeError};
pub use views::{BuildQuery, BuildSheet, BuildSummary, SlotView};
