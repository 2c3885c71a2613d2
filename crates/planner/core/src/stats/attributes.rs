//! Attributes - Layer 1 of the stat system.
//!
//! The eight attributes are the only stats a build stores. Everything else
//! (soul level, resources, load) is derived from them on every read.

use crate::config::BuildRules;

use super::error::StatsError;

/// The eight attribute categories a build invests points into.
///
/// - **Vigor**: hit points
/// - **Mind**: focus points
/// - **Endurance**: stamina and equip load
/// - **Strength / Dexterity / Intelligence / Faith / Arcane**: scaling only,
///   they feed the soul level but no derived resource
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
pub enum Attribute {
    Vigor,
    Mind,
    Endurance,
    Strength,
    Dexterity,
    Intelligence,
    Faith,
    Arcane,
}

impl Attribute {
    /// All attributes in display order.
    pub const ALL: [Attribute; 8] = [
        Attribute::Vigor,
        Attribute::Mind,
        Attribute::Endurance,
        Attribute::Strength,
        Attribute::Dexterity,
        Attribute::Intelligence,
        Attribute::Faith,
        Attribute::Arcane,
    ];
}

/// Checks a single attribute value against `[MIN_ATTRIBUTE, MAX_ATTRIBUTE]`.
pub fn check_attribute(attribute: Attribute, value: i64) -> Result<u8, StatsError> {
    let min = i64::from(BuildRules::MIN_ATTRIBUTE);
    let max = i64::from(BuildRules::MAX_ATTRIBUTE);
    if (min..=max).contains(&value) {
        // In range, so the narrowing cannot truncate.
        Ok(value as u8)
    } else {
        Err(StatsError::AttributeOutOfRange { attribute, value })
    }
}

/// The attribute investment of one build.
///
/// Constructed through [`AttributeBlock::new`] or [`AttributeBlock::from_pairs`],
/// both of which validate. Deserialized blocks are re-checked by the engine
/// via [`AttributeBlock::validate`] before any formula runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttributeBlock {
    pub vigor: u8,
    pub mind: u8,
    pub endurance: u8,
    pub strength: u8,
    pub dexterity: u8,
    pub intelligence: u8,
    pub faith: u8,
    pub arcane: u8,
}

impl AttributeBlock {
    /// Create a validated block. Arguments follow [`Attribute::ALL`] order.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        vigor: u8,
        mind: u8,
        endurance: u8,
        strength: u8,
        dexterity: u8,
        intelligence: u8,
        faith: u8,
        arcane: u8,
    ) -> Result<Self, StatsError> {
        let block = Self {
            vigor,
            mind,
            endurance,
            strength,
            dexterity,
            intelligence,
            faith,
            arcane,
        };
        block.validate()?;
        Ok(block)
    }

    /// Build a block from `(name, value)` pairs, e.g. a JSON attribute map.
    ///
    /// Every attribute must appear exactly once; unknown names are rejected.
    pub fn from_pairs<'a, I>(pairs: I) -> Result<Self, AttributeParseError>
    where
        I: IntoIterator<Item = (&'a str, i64)>,
    {
        let mut values: [Option<u8>; 8] = [None; 8];
        for (name, value) in pairs {
            let attribute: Attribute = name
                .parse()
                .map_err(|_| AttributeParseError::Unknown(name.to_string()))?;
            let index = attribute as usize;
            if values[index].is_some() {
                return Err(AttributeParseError::Duplicate(attribute));
            }
            values[index] = Some(check_attribute(attribute, value)?);
        }

        let mut block = Self::default();
        for attribute in Attribute::ALL {
            let value = values[attribute as usize].ok_or(AttributeParseError::Missing(attribute))?;
            block.set_unchecked(attribute, value);
        }
        Ok(block)
    }

    /// Value of one attribute.
    pub const fn get(&self, attribute: Attribute) -> u8 {
        match attribute {
            Attribute::Vigor => self.vigor,
            Attribute::Mind => self.mind,
            Attribute::Endurance => self.endurance,
            Attribute::Strength => self.strength,
            Attribute::Dexterity => self.dexterity,
            Attribute::Intelligence => self.intelligence,
            Attribute::Faith => self.faith,
            Attribute::Arcane => self.arcane,
        }
    }

    /// Returns a copy with one attribute replaced, validating the new value.
    pub fn with(mut self, attribute: Attribute, value: i64) -> Result<Self, StatsError> {
        let value = check_attribute(attribute, value)?;
        self.set_unchecked(attribute, value);
        Ok(self)
    }

    fn set_unchecked(&mut self, attribute: Attribute, value: u8) {
        let slot = match attribute {
            Attribute::Vigor => &mut self.vigor,
            Attribute::Mind => &mut self.mind,
            Attribute::Endurance => &mut self.endurance,
            Attribute::Strength => &mut self.strength,
            Attribute::Dexterity => &mut self.dexterity,
            Attribute::Intelligence => &mut self.intelligence,
            Attribute::Faith => &mut self.faith,
            Attribute::Arcane => &mut self.arcane,
        };
        *slot = value;
    }

    /// Iterate `(attribute, value)` in display order.
    pub fn iter(&self) -> impl Iterator<Item = (Attribute, u8)> + '_ {
        Attribute::ALL.into_iter().map(|a| (a, self.get(a)))
    }

    /// Check every attribute against the contract, reporting the first offender.
    pub fn validate(&self) -> Result<(), StatsError> {
        for (attribute, value) in self.iter() {
            check_attribute(attribute, i64::from(value))?;
        }
        Ok(())
    }

    /// Sum of all eight attribute values.
    pub fn total(&self) -> u32 {
        self.iter().map(|(_, v)| u32::from(v)).sum()
    }

    /// Highest-invested attribute; ties go to the earlier one in display order.
    ///
    /// Used to label a build ("Strength build") in listings.
    pub fn dominant(&self) -> Attribute {
        let mut best = (Attribute::Vigor, self.vigor);
        for (attribute, value) in self.iter() {
            if value > best.1 {
                best = (attribute, value);
            }
        }
        best.0
    }

    /// Soul level: `total - 79`, reported as at least 1.
    ///
    /// The floor is a display rule; a valid block always sums to at least 8.
    pub fn soul_level(&self) -> u32 {
        let level = self.total() as i32 - BuildRules::SOUL_LEVEL_BASELINE;
        level.max(1) as u32
    }
}

impl Default for AttributeBlock {
    /// Default build: every attribute at 10, soul level 1.
    fn default() -> Self {
        let v = BuildRules::DEFAULT_ATTRIBUTE;
        Self {
            vigor: v,
            mind: v,
            endurance: v,
            strength: v,
            dexterity: v,
            intelligence: v,
            faith: v,
            arcane: v,
        }
    }
}

/// Failure to assemble an [`AttributeBlock`] from named values.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum AttributeParseError {
    #[error("unknown attribute '{0}'")]
    Unknown(String),

    #[error("attribute {0} given more than once")]
    Duplicate(Attribute),

    #[error("attribute {0} is missing")]
    Missing(Attribute),

    #[error(transparent)]
    OutOfRange(#[from] StatsError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_build_is_soul_level_one() {
        let block = AttributeBlock::default();
        assert_eq!(block.total(), 80);
        assert_eq!(block.soul_level(), 1);
    }

    #[test]
    fn soul_level_floor_applies_to_minimum_build() {
        let block = AttributeBlock::new(1, 1, 1, 1, 1, 1, 1, 1).unwrap();
        assert_eq!(block.total(), 8);
        assert_eq!(block.soul_level(), 1);
    }

    #[test]
    fn soul_level_counts_investment() {
        let block = AttributeBlock::new(40, 20, 30, 10, 10, 10, 10, 10).unwrap();
        assert_eq!(block.total(), 140);
        assert_eq!(block.soul_level(), 61);

        let maxed = AttributeBlock::new(99, 99, 99, 99, 99, 99, 99, 99).unwrap();
        assert_eq!(maxed.soul_level(), 713);
    }

    #[test]
    fn new_rejects_out_of_range_naming_the_attribute() {
        let err = AttributeBlock::new(10, 0, 10, 10, 10, 10, 10, 10).unwrap_err();
        assert_eq!(
            err,
            StatsError::AttributeOutOfRange {
                attribute: Attribute::Mind,
                value: 0
            }
        );
        assert!(err.to_string().contains("mind"));

        assert!(AttributeBlock::new(10, 10, 10, 10, 10, 10, 10, 100).is_err());
    }

    #[test]
    fn from_pairs_requires_every_attribute() {
        let names: Vec<String> = Attribute::ALL.iter().map(|a| a.to_string()).collect();
        let mut pairs: Vec<(&str, i64)> = names.iter().map(|n| (n.as_str(), 12)).collect();
        let block = AttributeBlock::from_pairs(pairs.iter().copied()).unwrap();
        assert_eq!(block.total(), 96);

        pairs.pop();
        assert_eq!(
            AttributeBlock::from_pairs(pairs.iter().copied()),
            Err(AttributeParseError::Missing(Attribute::Arcane))
        );
    }

    #[test]
    fn from_pairs_rejects_unknown_and_duplicate_names() {
        let err = AttributeBlock::from_pairs([("luck", 10)]).unwrap_err();
        assert_eq!(err, AttributeParseError::Unknown("luck".to_string()));

        let err = AttributeBlock::from_pairs([("vigor", 10), ("Vigor", 11)]).unwrap_err();
        assert_eq!(err, AttributeParseError::Duplicate(Attribute::Vigor));
    }

    #[test]
    fn from_pairs_rejects_out_of_range_values() {
        let err = AttributeBlock::from_pairs([("vigor", -5)]).unwrap_err();
        assert!(matches!(
            err,
            AttributeParseError::OutOfRange(StatsError::AttributeOutOfRange {
                attribute: Attribute::Vigor,
                value: -5
            })
        ));
    }

    #[test]
    fn with_replaces_a_single_value() {
        let block = AttributeBlock::default()
            .with(Attribute::Faith, 45)
            .unwrap();
        assert_eq!(block.faith, 45);
        assert_eq!(block.get(Attribute::Faith), 45);
        assert!(AttributeBlock::default().with(Attribute::Faith, 120).is_err());
    }

    #[test]
    fn validate_catches_blocks_built_without_new() {
        let mut block = AttributeBlock::default();
        block.endurance = 0;
        assert!(matches!(
            block.validate(),
            Err(StatsError::AttributeOutOfRange {
                attribute: Attribute::Endurance,
                ..
            })
        ));
    }

    #[test]
    fn dominant_prefers_highest_then_earliest() {
        assert_eq!(AttributeBlock::default().dominant(), Attribute::Vigor);
        let block = AttributeBlock::new(20, 10, 15, 40, 40, 9, 9, 7).unwrap();
        assert_eq!(block.dominant(), Attribute::Strength);
    }
}
