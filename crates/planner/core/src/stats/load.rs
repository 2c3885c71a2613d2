//! Equip Load - Layer 3 of the stat system.
//!
//! Load is the only layer that mixes attributes with equipment:
//! - Max load from Endurance (three bands, breakpoints 8/25/60/99)
//! - Current load = sum of weight-bearing equipped items
//! - Ratio = current / max, classified into a load tier
//!
//! Formulas:
//! - `endurance <= 25`: `45 + 27 × (endurance-8)/17`
//! - `endurance <= 60`: `72 + 48 × ((endurance-25)/35)^1.1`
//! - otherwise:         `120 + 40 × (endurance-60)/39`

use crate::config::BuildRules;
use crate::state::EquippedItem;

use super::attributes::{Attribute, check_attribute};
use super::error::{StatsError, check_weight};

/// Coarse movement classification derived from the load ratio.
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
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LoadTier {
    /// ratio < 0.30
    Light,
    /// 0.30 <= ratio < 0.70
    Medium,
    /// 0.70 <= ratio <= 1.00
    Heavy,
    /// ratio > 1.00
    Overloaded,
}

impl LoadTier {
    /// Roll name players know the tier by.
    pub const fn roll_label(&self) -> &'static str {
        match self {
            Self::Light => "Light Load",
            Self::Medium => "Med. Roll",
            Self::Heavy => "Fat Roll",
            Self::Overloaded => "Overloaded",
        }
    }
}

/// Maximum equip load for an endurance value, rounded to one decimal.
///
/// Rounds half away from zero. The value is compared against a continuous
/// weight sum, so it is never floored to an integer.
pub fn max_load(endurance: u8) -> Result<f64, StatsError> {
    let e = f64::from(check_attribute(Attribute::Endurance, i64::from(endurance))?);

    let load = if e <= 25.0 {
        45.0 + 27.0 * ((e - 8.0) / 17.0)
    } else if e <= 60.0 {
        72.0 + 48.0 * ((e - 25.0) / 35.0).powf(1.1)
    } else {
        120.0 + 40.0 * ((e - 60.0) / 39.0)
    };

    Ok(round_tenths(load))
}

fn round_tenths(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Total weight of the equipped items that carry weight.
///
/// Spirit summons, spells, and crystal tears contribute nothing. Items with no
/// recorded weight contribute zero; negative or non-finite weights are rejected.
pub fn aggregate_carry_weight(equipped: &[EquippedItem]) -> Result<f64, StatsError> {
    let mut total = 0.0;
    for item in equipped {
        let weight = check_weight(item.weight.unwrap_or(0.0))?;
        if item.category.carries_weight() {
            total += weight;
        }
    }
    Ok(total)
}

/// `carry_weight / max_load`, or 0 when `max_load` is not positive.
pub fn load_ratio(carry_weight: f64, max_load: f64) -> f64 {
    if max_load <= 0.0 {
        return 0.0;
    }
    carry_weight / max_load
}

/// Classify a load ratio.
///
/// Lower bounds are closed and upper bounds open, except that exactly 1.00 is
/// still Heavy. Negative or NaN ratios fall into Light.
pub fn classify_load_tier(ratio: f64) -> LoadTier {
    if ratio > BuildRules::OVERLOAD_RATIO {
        LoadTier::Overloaded
    } else if ratio >= BuildRules::HEAVY_LOAD_RATIO {
        LoadTier::Heavy
    } else if ratio >= BuildRules::MEDIUM_LOAD_RATIO {
        LoadTier::Medium
    } else {
        LoadTier::Light
    }
}

/// Current load, capacity, ratio and tier for one build.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EquipLoad {
    pub current: f64,
    pub max: f64,
    pub ratio: f64,
    pub tier: LoadTier,
}

impl EquipLoad {
    /// Compute the load for an endurance value and an already aggregated weight.
    pub fn compute(endurance: u8, carry_weight: f64) -> Result<Self, StatsError> {
        let current = check_weight(carry_weight)?;
        let max = max_load(endurance)?;
        let ratio = load_ratio(current, max);
        let tier = if max <= 0.0 {
            LoadTier::Light
        } else {
            classify_load_tier(ratio)
        };
        Ok(Self {
            current,
            max,
            ratio,
            tier,
        })
    }

    /// Ratio as a percentage capped at 100, for load bars.
    pub fn capacity_percent(&self) -> f64 {
        (self.ratio * 100.0).min(100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::ItemCategory;

    #[test]
    fn max_load_at_breakpoints() {
        assert_eq!(max_load(8).unwrap(), 45.0);
        assert_eq!(max_load(25).unwrap(), 72.0);
        assert_eq!(max_load(60).unwrap(), 120.0);
        assert_eq!(max_load(99).unwrap(), 160.0);
    }

    #[test]
    fn max_load_is_reported_to_one_decimal() {
        // 45 + 27 × 2/17 = 48.176…
        assert_eq!(max_load(10).unwrap(), 48.2);
        // 72 + 48 × (5/35)^1.1 = 77.644…
        assert_eq!(max_load(30).unwrap(), 77.6);
        // 72 + 48 × (15/35)^1.1 = 90.900…
        assert_eq!(max_load(40).unwrap(), 90.9);
        // 120 + 40 × 20/39 = 140.512…
        assert_eq!(max_load(80).unwrap(), 140.5);
        // Below the endurance floor of the first band the line keeps going down.
        assert_eq!(max_load(1).unwrap(), 33.9);
    }

    #[test]
    fn max_load_is_monotonic_from_eight() {
        let mut previous = max_load(8).unwrap();
        for endurance in 9..=99u8 {
            let load = max_load(endurance).unwrap();
            assert!(load >= previous, "max load dropped at endurance {endurance}");
            previous = load;
        }
    }

    #[test]
    fn tier_boundaries_are_exact() {
        assert_eq!(classify_load_tier(0.0), LoadTier::Light);
        assert_eq!(classify_load_tier(0.2999), LoadTier::Light);
        assert_eq!(classify_load_tier(0.3), LoadTier::Medium);
        assert_eq!(classify_load_tier(0.6999), LoadTier::Medium);
        assert_eq!(classify_load_tier(0.7), LoadTier::Heavy);
        assert_eq!(classify_load_tier(1.0), LoadTier::Heavy);
        assert_eq!(classify_load_tier(1.0001), LoadTier::Overloaded);
        assert_eq!(classify_load_tier(4.2), LoadTier::Overloaded);
    }

    #[test]
    fn tiers_partition_the_ratio_line() {
        // Deterministic LCG sweep over [0, 5].
        let mut seed: u64 = 0x5eed_1234_abcd_0001;
        for _ in 0..10_000 {
            seed = seed
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            let ratio = (seed >> 11) as f64 / (1u64 << 53) as f64 * 5.0;

            let matches = [
                ratio < 0.30,
                (0.30..0.70).contains(&ratio),
                (0.70..=1.00).contains(&ratio),
                ratio > 1.00,
            ];
            assert_eq!(matches.iter().filter(|m| **m).count(), 1, "ratio {ratio}");

            let expected = match matches.iter().position(|m| *m) {
                Some(0) => LoadTier::Light,
                Some(1) => LoadTier::Medium,
                Some(2) => LoadTier::Heavy,
                _ => LoadTier::Overloaded,
            };
            assert_eq!(classify_load_tier(ratio), expected, "ratio {ratio}");
        }
    }

    #[test]
    fn ratio_guards_against_zero_capacity() {
        assert_eq!(load_ratio(12.0, 0.0), 0.0);
        assert_eq!(load_ratio(12.0, -1.0), 0.0);
        assert_eq!(load_ratio(30.0, 60.0), 0.5);
    }

    #[test]
    fn aggregate_skips_weightless_categories() {
        let equipped = [
            EquippedItem::new(ItemCategory::Weapons, Some(10.5)),
            EquippedItem::new(ItemCategory::Chest, Some(8.0)),
            EquippedItem::new(ItemCategory::Talismans, Some(0.5)),
            EquippedItem::new(ItemCategory::Spirits, Some(50.0)),
            EquippedItem::new(ItemCategory::Spells, Some(3.0)),
            EquippedItem::new(ItemCategory::CrystalTears, Some(1.0)),
        ];
        assert_eq!(aggregate_carry_weight(&equipped).unwrap(), 19.0);
    }

    #[test]
    fn aggregate_counts_missing_weight_as_zero() {
        let equipped = [
            EquippedItem::new(ItemCategory::Weapons, None),
            EquippedItem::new(ItemCategory::Helm, Some(4.0)),
        ];
        assert_eq!(aggregate_carry_weight(&equipped).unwrap(), 4.0);
        assert_eq!(aggregate_carry_weight(&[]).unwrap(), 0.0);
    }

    #[test]
    fn aggregate_rejects_bad_weights() {
        let negative = [EquippedItem::new(ItemCategory::Legs, Some(-1.0))];
        assert_eq!(
            aggregate_carry_weight(&negative),
            Err(StatsError::NegativeWeight { weight: -1.0 })
        );
        let nan = [EquippedItem::new(ItemCategory::Hands, Some(f64::NAN))];
        assert_eq!(aggregate_carry_weight(&nan), Err(StatsError::NonFiniteWeight));
    }

    #[test]
    fn equip_load_at_exact_capacity_is_heavy() {
        let load = EquipLoad::compute(25, 72.0).unwrap();
        assert_eq!(load.ratio, 1.0);
        assert_eq!(load.tier, LoadTier::Heavy);
        assert_eq!(load.capacity_percent(), 100.0);

        let over = EquipLoad::compute(25, 90.0).unwrap();
        assert_eq!(over.tier, LoadTier::Overloaded);
        assert_eq!(over.capacity_percent(), 100.0);
    }

    #[test]
    fn roll_labels() {
        assert_eq!(LoadTier::Medium.roll_label(), "Med. Roll");
        assert_eq!(LoadTier::Heavy.roll_label(), "Fat Roll");
    }
}
