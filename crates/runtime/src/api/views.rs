//! Read models returned by the planner service.

use chrono::{DateTime, Utc};
use planner_core::{
    Attribute, Build, BuildId, DerivedStats, EquipPosition, Item, ItemId, UserId,
};
use serde::{Deserialize, Serialize};

/// One loadout position of a build sheet.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SlotView {
    pub position: EquipPosition,
    pub item_id: ItemId,
    /// `None` when the reference no longer resolves in the catalog.
    pub item: Option<Item>,
}

/// Everything needed to render one build.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BuildSheet {
    pub build: Build,
    pub author: String,
    /// Occupied positions in display order.
    pub slots: Vec<SlotView>,
    pub stats: DerivedStats,
    pub favorite_count: usize,
    pub is_owner: bool,
    pub is_favorited: bool,
}

/// Card shown in listings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BuildSummary {
    pub id: BuildId,
    pub name: String,
    pub owner: UserId,
    pub author: String,
    pub soul_level: u32,
    pub dominant_attribute: Attribute,
    /// Item in `rightHand1`, if it resolves.
    pub main_weapon: Option<Item>,
    pub favorite_count: usize,
    pub created_at: DateTime<Utc>,
}

/// Public listing query.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildQuery {
    /// Case-insensitive substring matched against build name or author.
    pub search: Option<String>,
    /// Zero-based page index.
    pub page: usize,
    /// Falls back to the configured page size; clamped to the maximum.
    pub page_size: Option<usize>,
}

impl BuildQuery {
    pub fn search(term: impl Into<String>) -> Self {
        Self {
            search: Some(term.into()),
            ..Self::default()
        }
    }

    pub fn page(mut self, page: usize, page_size: usize) -> Self {
        self.page = page;
        self.page_size = Some(page_size);
        self
    }

    /// Lowercased, trimmed search term; `None` when blank.
    pub(crate) fn normalized_search(&self) -> Option<String> {
        self.search
            .as_deref()
            .map(str::trim)
            .filter(|term| !term.is_empty())
            .map(str::to_lowercase)
    }
}
