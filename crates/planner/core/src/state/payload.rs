//! Create/update request shape and its validation.
//!
//! The payload mirrors what a form or JSON client sends: a string-keyed
//! equipment map, string id lists, and an attribute map. [`BuildPayload::validate`]
//! turns it into typed state or reports the first failing field. Whether the
//! references exist in the catalog is a second step
//! ([`ValidatedBuild::check_references`]) because it needs the catalog.

use std::collections::BTreeMap;

use crate::stats::AttributeBlock;

use super::build::{Build, BuildName};
use super::equipment::{EquipPosition, EquipmentSlot, ItemList, Loadout};
use super::error::ValidationError;
use super::ids::ItemId;
use super::item::ItemCategory;

/// Raw build write request.
///
/// Empty strings and nulls both mean "empty slot".
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BuildPayload {
    pub name: String,
    pub attributes: BTreeMap<String, i64>,
    pub equipment: BTreeMap<String, Option<String>>,
    pub talismans: Vec<Option<String>>,
    pub spells: Vec<Option<String>>,
    pub crystal_tears: Vec<Option<String>>,
}

/// A payload that passed shape validation.
#[derive(Clone, Debug, PartialEq)]
pub struct ValidatedBuild {
    pub name: BuildName,
    pub attributes: AttributeBlock,
    pub loadout: Loadout,
}

impl BuildPayload {
    /// Payload for a build named `name` with default attributes and nothing equipped.
    pub fn named(name: impl Into<String>) -> Self {
        let attributes = AttributeBlock::default()
            .iter()
            .map(|(attribute, value)| (attribute.to_string(), i64::from(value)))
            .collect();
        Self {
            name: name.into(),
            attributes,
            ..Self::default()
        }
    }

    /// Sets one equipment slot by its store key.
    pub fn with_slot(mut self, slot: EquipmentSlot, item: ItemId) -> Self {
        self.equipment
            .insert(slot.to_string(), Some(item.to_string()));
        self
    }

    /// Sets one attribute by name.
    pub fn with_attribute(mut self, name: &str, value: i64) -> Self {
        self.attributes.insert(name.to_string(), value);
        self
    }

    /// Payload that reproduces an existing build, e.g. to prefill an edit form.
    pub fn from_build(build: &Build) -> Self {
        let to_strings = |refs: &[Option<ItemId>]| -> Vec<Option<String>> {
            refs.iter().map(|r| r.map(|id| id.to_string())).collect()
        };
        Self {
            name: build.name.to_string(),
            attributes: build
                .attributes
                .iter()
                .map(|(attribute, value)| (attribute.to_string(), i64::from(value)))
                .collect(),
            equipment: build
                .loadout
                .equipment
                .occupied()
                .map(|(slot, id)| (slot.to_string(), Some(id.to_string())))
                .collect(),
            talismans: to_strings(&build.loadout.talismans),
            spells: to_strings(&build.loadout.spells),
            crystal_tears: to_strings(&build.loadout.tears),
        }
    }

    /// Checks name, attributes, slot keys, id formats and list capacities.
    pub fn validate(&self) -> Result<ValidatedBuild, ValidationError> {
        let name = BuildName::parse(&self.name)?;
        let attributes =
            AttributeBlock::from_pairs(self.attributes.iter().map(|(k, v)| (k.as_str(), *v)))?;

        let mut loadout = Loadout::default();
        for (key, value) in &self.equipment {
            let slot: EquipmentSlot = key
                .parse()
                .map_err(|_| ValidationError::UnknownSlot(key.clone()))?;
            let item = parse_ref(EquipPosition::Slot(slot), value.as_deref())?;
            loadout.equipment.set(slot, item);
        }

        for (list, raw) in [
            (ItemList::Talismans, &self.talismans),
            (ItemList::Spells, &self.spells),
            (ItemList::CrystalTears, &self.crystal_tears),
        ] {
            let max = list.capacity();
            if raw.len() > max {
                return Err(ValidationError::TooManyEntries {
                    list,
                    max,
                    got: raw.len(),
                });
            }
            let target = loadout.list_mut(list);
            for (index, value) in raw.iter().enumerate() {
                target[index] = parse_ref(EquipPosition::List(list, index), value.as_deref())?;
            }
        }

        Ok(ValidatedBuild {
            name,
            attributes,
            loadout,
        })
    }
}

fn parse_ref(position: EquipPosition, raw: Option<&str>) -> Result<Option<ItemId>, ValidationError> {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return Ok(None);
    };
    raw.parse::<ItemId>()
        .map(Some)
        .map_err(|_| ValidationError::MalformedItemId {
            position,
            value: raw.to_string(),
        })
}

impl ValidatedBuild {
    /// Checks that every reference resolves and fits its position.
    ///
    /// `category_of` looks an item up in the catalog and returns its category.
    pub fn check_references<F>(&self, mut category_of: F) -> Result<(), ValidationError>
    where
        F: FnMut(ItemId) -> Option<ItemCategory>,
    {
        for (position, id) in self.loadout.all_refs() {
            let found = category_of(id).ok_or(ValidationError::UnknownItem { position, id })?;
            let expected = position.accepts();
            if found != expected {
                return Err(ValidationError::CategoryMismatch {
                    position,
                    id,
                    expected,
                    found,
                });
            }
        }
        Ok(())
    }
}
