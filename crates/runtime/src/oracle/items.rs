//! [`planner_core::ItemOracle`] backed by an in-memory map.
use std::collections::HashMap;

use planner_core::{Item, ItemCategory, ItemId, ItemOracle};

/// ItemOracle implementation with a static catalog.
pub struct ItemOracleImpl {
    items: HashMap<ItemId, Item>,
}

impl ItemOracleImpl {
    pub fn new() -> Self {
        Self {
            items: HashMap::new(),
        }
    }

    /// Build an oracle from loaded catalog entries. Later duplicates win.
    pub fn from_items(items: impl IntoIterator<Item = Item>) -> Self {
        Self {
            items: items.into_iter().map(|item| (item.id, item)).collect(),
        }
    }

    /// Add a catalog entry
    pub fn add_item(&mut self, item: Item) {
        self.items.insert(item.id, item);
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Default for ItemOracleImpl {
    fn default() -> Self {
        Self::new()
    }
}

impl ItemOracle for ItemOracleImpl {
    fn item(&self, id: ItemId) -> Option<Item> {
        self.items.get(&id).cloned()
    }

    fn by_category(&self, category: ItemCategory) -> Vec<Item> {
        self.items
            .values()
            .filter(|item| item.category == category)
            .cloned()
            .collect()
    }
}
