//! Catalog items as seen by the planner.
//!
//! Items are created once by the catalog import and are read-only afterwards.
//! The engine only cares about an item's category and weight.

use super::ids::ItemId;

/// Category tag of a catalog item.
///
/// Spelled exactly as the store spells it (`snake_case`).
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ItemCategory {
    Weapons,
    Helm,
    Chest,
    Hands,
    Legs,
    Talismans,
    Spirits,
    Spells,
    CrystalTears,
}

impl ItemCategory {
    pub const ALL: [ItemCategory; 9] = [
        Self::Weapons,
        Self::Helm,
        Self::Chest,
        Self::Hands,
        Self::Legs,
        Self::Talismans,
        Self::Spirits,
        Self::Spells,
        Self::CrystalTears,
    ];

    /// Whether items of this category count toward equip load.
    ///
    /// Weapons, armor, and talismans are physical equipment. Summons, spells,
    /// and tears weigh nothing.
    pub const fn carries_weight(&self) -> bool {
        matches!(
            self,
            Self::Weapons | Self::Helm | Self::Chest | Self::Hands | Self::Legs | Self::Talismans
        )
    }
}

/// A catalog entry.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub image: Option<String>,
    pub category: ItemCategory,
    /// Weight in load units. Missing weight counts as zero.
    #[cfg_attr(feature = "serde", serde(default))]
    pub weight: Option<f64>,
}

impl Item {
    pub fn new(id: ItemId, name: impl Into<String>, category: ItemCategory) -> Self {
        Self {
            id,
            name: name.into(),
            image: None,
            category,
            weight: None,
        }
    }

    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = Some(weight);
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    /// The `(category, weight)` view the load calculation consumes.
    pub fn as_equipped(&self) -> EquippedItem {
        EquippedItem {
            category: self.category,
            weight: self.weight,
        }
    }
}

/// Minimal view of an equipped item for carry-weight aggregation.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EquippedItem {
    pub category: ItemCategory,
    pub weight: Option<f64>,
}

impl EquippedItem {
    pub const fn new(category: ItemCategory, weight: Option<f64>) -> Self {
        Self { category, weight }
    }
}

impl From<&Item> for EquippedItem {
    fn from(item: &Item) -> Self {
        item.as_equipped()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_names_match_store_spelling() {
        assert_eq!(ItemCategory::CrystalTears.as_ref(), "crystal_tears");
        assert_eq!("helm".parse::<ItemCategory>().unwrap(), ItemCategory::Helm);
        assert!("shields".parse::<ItemCategory>().is_err());
    }

    #[test]
    fn only_physical_categories_carry_weight() {
        assert!(ItemCategory::Weapons.carries_weight());
        assert!(ItemCategory::Legs.carries_weight());
        assert!(ItemCategory::Talismans.carries_weight());
        assert!(!ItemCategory::Spirits.carries_weight());
        assert!(!ItemCategory::Spells.carries_weight());
        assert!(!ItemCategory::CrystalTears.carries_weight());
    }
}
