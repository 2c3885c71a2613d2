//! Read-only access to the item catalog.
//!
//! The catalog is populated once by an import and never mutated by the
//! planner. Implementations live in the runtime (`ItemOracleImpl`); tests may
//! provide their own.

use crate::state::{Item, ItemCategory, ItemId};

/// Item catalog lookups.
pub trait ItemOracle: Send + Sync {
    /// Look up a single item.
    fn item(&self, id: ItemId) -> Option<Item>;

    /// Look up several items. Unresolved ids are simply absent from the result.
    fn items(&self, ids: &[ItemId]) -> Vec<Item> {
        ids.iter().filter_map(|id| self.item(*id)).collect()
    }

    /// Every item of one category, in no particular order.
    fn by_category(&self, category: ItemCategory) -> Vec<Item>;
}
