//! Equipment slots and the full loadout of a build.
//!
//! Slots form a closed set: two weapon hands with three slots each, four armor
//! pieces, and one spirit summon. Talismans, spells, and crystal tears are
//! fixed-capacity lists. Every position holds an optional item reference.

use arrayvec::ArrayVec;

use crate::config::BuildRules;

use super::ids::ItemId;
use super::item::ItemCategory;

/// A named equipment slot.
///
/// Slot names are spelled the way the build store keys its equipment map.
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
pub enum EquipmentSlot {
    #[strum(serialize = "rightHand1")]
    #[cfg_attr(feature = "serde", serde(rename = "rightHand1"))]
    RightHand1,
    #[strum(serialize = "rightHand2")]
    #[cfg_attr(feature = "serde", serde(rename = "rightHand2"))]
    RightHand2,
    #[strum(serialize = "rightHand3")]
    #[cfg_attr(feature = "serde", serde(rename = "rightHand3"))]
    RightHand3,
    #[strum(serialize = "leftHand1")]
    #[cfg_attr(feature = "serde", serde(rename = "leftHand1"))]
    LeftHand1,
    #[strum(serialize = "leftHand2")]
    #[cfg_attr(feature = "serde", serde(rename = "leftHand2"))]
    LeftHand2,
    #[strum(serialize = "leftHand3")]
    #[cfg_attr(feature = "serde", serde(rename = "leftHand3"))]
    LeftHand3,
    #[strum(serialize = "head")]
    #[cfg_attr(feature = "serde", serde(rename = "head"))]
    Head,
    #[strum(serialize = "chest")]
    #[cfg_attr(feature = "serde", serde(rename = "chest"))]
    Chest,
    #[strum(serialize = "hands")]
    #[cfg_attr(feature = "serde", serde(rename = "hands"))]
    Hands,
    #[strum(serialize = "legs")]
    #[cfg_attr(feature = "serde", serde(rename = "legs"))]
    Legs,
    #[strum(serialize = "spirit")]
    #[cfg_attr(feature = "serde", serde(rename = "spirit"))]
    Spirit,
}

impl EquipmentSlot {
    /// All slots in display order (armaments, armor, summon).
    pub const ALL: [EquipmentSlot; 11] = [
        EquipmentSlot::RightHand1,
        EquipmentSlot::LeftHand1,
        EquipmentSlot::RightHand2,
        EquipmentSlot::LeftHand2,
        EquipmentSlot::RightHand3,
        EquipmentSlot::LeftHand3,
        EquipmentSlot::Head,
        EquipmentSlot::Chest,
        EquipmentSlot::Hands,
        EquipmentSlot::Legs,
        EquipmentSlot::Spirit,
    ];

    /// Item category this slot accepts.
    pub const fn accepts(&self) -> ItemCategory {
        match self {
            Self::RightHand1
            | Self::RightHand2
            | Self::RightHand3
            | Self::LeftHand1
            | Self::LeftHand2
            | Self::LeftHand3 => ItemCategory::Weapons,
            Self::Head => ItemCategory::Helm,
            Self::Chest => ItemCategory::Chest,
            Self::Hands => ItemCategory::Hands,
            Self::Legs => ItemCategory::Legs,
            Self::Spirit => ItemCategory::Spirits,
        }
    }

    /// Whether an item in this slot counts toward equip load.
    pub const fn carries_weight(&self) -> bool {
        !matches!(self, Self::Spirit)
    }
}

/// Fixed-field equipment record, one optional reference per slot.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct EquipmentSlots {
    pub right_hand1: Option<ItemId>,
    pub right_hand2: Option<ItemId>,
    pub right_hand3: Option<ItemId>,
    pub left_hand1: Option<ItemId>,
    pub left_hand2: Option<ItemId>,
    pub left_hand3: Option<ItemId>,
    pub head: Option<ItemId>,
    pub chest: Option<ItemId>,
    pub hands: Option<ItemId>,
    pub legs: Option<ItemId>,
    pub spirit: Option<ItemId>,
}

impl EquipmentSlots {
    /// Creates empty equipment.
    pub fn empty() -> Self {
        Self::default()
    }

    pub const fn get(&self, slot: EquipmentSlot) -> Option<ItemId> {
        match slot {
            EquipmentSlot::RightHand1 => self.right_hand1,
            EquipmentSlot::RightHand2 => self.right_hand2,
            EquipmentSlot::RightHand3 => self.right_hand3,
            EquipmentSlot::LeftHand1 => self.left_hand1,
            EquipmentSlot::LeftHand2 => self.left_hand2,
            EquipmentSlot::LeftHand3 => self.left_hand3,
            EquipmentSlot::Head => self.head,
            EquipmentSlot::Chest => self.chest,
            EquipmentSlot::Hands => self.hands,
            EquipmentSlot::Legs => self.legs,
            EquipmentSlot::Spirit => self.spirit,
        }
    }

    fn slot_mut(&mut self, slot: EquipmentSlot) -> &mut Option<ItemId> {
        match slot {
            EquipmentSlot::RightHand1 => &mut self.right_hand1,
            EquipmentSlot::RightHand2 => &mut self.right_hand2,
            EquipmentSlot::RightHand3 => &mut self.right_hand3,
            EquipmentSlot::LeftHand1 => &mut self.left_hand1,
            EquipmentSlot::LeftHand2 => &mut self.left_hand2,
            EquipmentSlot::LeftHand3 => &mut self.left_hand3,
            EquipmentSlot::Head => &mut self.head,
            EquipmentSlot::Chest => &mut self.chest,
            EquipmentSlot::Hands => &mut self.hands,
            EquipmentSlot::Legs => &mut self.legs,
            EquipmentSlot::Spirit => &mut self.spirit,
        }
    }

    /// Equips an item, returning the previously equipped reference if any.
    pub fn equip(&mut self, slot: EquipmentSlot, item: ItemId) -> Option<ItemId> {
        self.slot_mut(slot).replace(item)
    }

    /// Empties a slot, returning its reference if one was equipped.
    pub fn unequip(&mut self, slot: EquipmentSlot) -> Option<ItemId> {
        self.slot_mut(slot).take()
    }

    pub(crate) fn set(&mut self, slot: EquipmentSlot, item: Option<ItemId>) {
        *self.slot_mut(slot) = item;
    }

    /// Occupied slots in display order.
    pub fn occupied(&self) -> impl Iterator<Item = (EquipmentSlot, ItemId)> + '_ {
        EquipmentSlot::ALL
            .into_iter()
            .filter_map(|slot| self.get(slot).map(|id| (slot, id)))
    }
}

/// The fixed-capacity item lists of a build.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case")]
pub enum ItemList {
    Talismans,
    Spells,
    CrystalTears,
}

impl ItemList {
    pub const fn capacity(&self) -> usize {
        match self {
            Self::Talismans => BuildRules::TALISMAN_SLOTS,
            Self::Spells => BuildRules::SPELL_SLOTS,
            Self::CrystalTears => BuildRules::TEAR_SLOTS,
        }
    }

    pub const fn accepts(&self) -> ItemCategory {
        match self {
            Self::Talismans => ItemCategory::Talismans,
            Self::Spells => ItemCategory::Spells,
            Self::CrystalTears => ItemCategory::CrystalTears,
        }
    }
}

/// Where a reference sits inside a loadout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EquipPosition {
    Slot(EquipmentSlot),
    List(ItemList, usize),
}

impl EquipPosition {
    pub const fn accepts(&self) -> ItemCategory {
        match self {
            Self::Slot(slot) => slot.accepts(),
            Self::List(list, _) => list.accepts(),
        }
    }

    /// Weapons, armor, and talismans carry weight.
    pub const fn carries_weight(&self) -> bool {
        match self {
            Self::Slot(slot) => slot.carries_weight(),
            Self::List(list, _) => matches!(list, ItemList::Talismans),
        }
    }
}

impl core::fmt::Display for EquipPosition {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Slot(slot) => write!(f, "{slot}"),
            Self::List(list, index) => write!(f, "{list}[{index}]"),
        }
    }
}

/// Upper bound on references in one loadout (11 slots + 4 + 4 + 2).
pub const MAX_LOADOUT_REFS: usize = 21;
/// Upper bound on weight-bearing references (6 weapons + 4 armor + 4 talismans).
pub const MAX_WEIGHTED_REFS: usize = 14;

/// Everything a build has equipped.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Loadout {
    pub equipment: EquipmentSlots,
    pub talismans: [Option<ItemId>; BuildRules::TALISMAN_SLOTS],
    pub spells: [Option<ItemId>; BuildRules::SPELL_SLOTS],
    #[cfg_attr(feature = "serde", serde(rename = "crystal_tears"))]
    pub tears: [Option<ItemId>; BuildRules::TEAR_SLOTS],
}

impl Loadout {
    pub fn list(&self, list: ItemList) -> &[Option<ItemId>] {
        match list {
            ItemList::Talismans => &self.talismans,
            ItemList::Spells => &self.spells,
            ItemList::CrystalTears => &self.tears,
        }
    }

    pub(crate) fn list_mut(&mut self, list: ItemList) -> &mut [Option<ItemId>] {
        match list {
            ItemList::Talismans => &mut self.talismans,
            ItemList::Spells => &mut self.spells,
            ItemList::CrystalTears => &mut self.tears,
        }
    }

    /// Every non-empty reference with its position.
    pub fn all_refs(&self) -> ArrayVec<(EquipPosition, ItemId), MAX_LOADOUT_REFS> {
        let mut refs = ArrayVec::new();
        for (slot, id) in self.equipment.occupied() {
            refs.push((EquipPosition::Slot(slot), id));
        }
        for list in [ItemList::Talismans, ItemList::Spells, ItemList::CrystalTears] {
            for (index, id) in self.list(list).iter().enumerate() {
                if let Some(id) = id {
                    refs.push((EquipPosition::List(list, index), *id));
                }
            }
        }
        refs
    }

    /// Non-empty references in positions that count toward equip load.
    ///
    /// An item equipped in two positions appears twice and weighs twice.
    pub fn weighted_refs(&self) -> ArrayVec<(EquipPosition, ItemId), MAX_WEIGHTED_REFS> {
        self.all_refs()
            .into_iter()
            .filter(|(position, _)| position.carries_weight())
            .collect()
    }
}
