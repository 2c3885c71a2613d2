//! Derived Stats - the engine's output record.
//!
//! Combines every layer into one flat record for rendering and comparison.
//! NOT stored - recomputed on every read.

use super::attributes::AttributeBlock;
use super::error::StatsError;
use super::load::{EquipLoad, LoadTier};
use super::resources::ResourceMaximums;

/// Everything the planner derives from a build.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DerivedStats {
    pub soul_level: u32,
    pub hit_points: u32,
    pub focus_points: u32,
    pub stamina: u32,
    /// Sum of weight-bearing equipped items.
    pub carry_weight: f64,
    /// Maximum equip load, one decimal.
    pub max_load: f64,
    pub load_ratio: f64,
    pub load_tier: LoadTier,
}

impl DerivedStats {
    /// Compute derived stats from attributes and an aggregated carry weight.
    ///
    /// Fails only on input-contract violations: an attribute outside `[1, 99]`
    /// or a negative / non-finite carry weight.
    pub fn compute(attributes: &AttributeBlock, carry_weight: f64) -> Result<Self, StatsError> {
        attributes.validate()?;

        let resources = ResourceMaximums::compute(attributes)?;
        let load = EquipLoad::compute(attributes.endurance, carry_weight)?;

        Ok(Self {
            soul_level: attributes.soul_level(),
            hit_points: resources.hit_points,
            focus_points: resources.focus_points,
            stamina: resources.stamina,
            carry_weight: load.current,
            max_load: load.max,
            load_ratio: load.ratio,
            load_tier: load.tier,
        })
    }

    /// Resource view of this record.
    pub fn resources(&self) -> ResourceMaximums {
        ResourceMaximums {
            hit_points: self.hit_points,
            focus_points: self.focus_points,
            stamina: self.stamina,
        }
    }

    /// Load view of this record.
    pub fn equip_load(&self) -> EquipLoad {
        EquipLoad {
            current: self.carry_weight,
            max: self.max_load,
            ratio: self.load_ratio,
            tier: self.load_tier,
        }
    }
}

/// Free-function form of [`DerivedStats::compute`].
pub fn compute_derived_stats(
    attributes: &AttributeBlock,
    carry_weight: f64,
) -> Result<DerivedStats, StatsError> {
    DerivedStats::compute(attributes, carry_weight)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::attributes::Attribute;

    #[test]
    fn default_build_unloaded() {
        let stats = compute_derived_stats(&AttributeBlock::default(), 0.0).unwrap();
        assert_eq!(stats.soul_level, 1);
        assert_eq!(stats.hit_points, 414);
        assert_eq!(stats.focus_points, 78);
        assert_eq!(stats.stamina, 95);
        assert_eq!(stats.max_load, 48.2);
        assert_eq!(stats.load_ratio, 0.0);
        assert_eq!(stats.load_tier, LoadTier::Light);
    }

    #[test]
    fn end_to_end_scenario() {
        let attributes = AttributeBlock::new(40, 20, 30, 10, 10, 10, 10, 10).unwrap();
        let stats = compute_derived_stats(&attributes, 50.0).unwrap();

        assert_eq!(stats.soul_level, 61);
        assert_eq!(stats.hit_points, 1450);
        assert_eq!(stats.focus_points, 121);
        assert_eq!(stats.stamina, 125);
        assert_eq!(stats.max_load, 77.6);
        assert_eq!(stats.carry_weight, 50.0);
        assert!((stats.load_ratio - 0.644).abs() < 0.001);
        assert_eq!(stats.load_tier, LoadTier::Medium);
    }

    #[test]
    fn identical_inputs_give_bit_identical_output() {
        let attributes = AttributeBlock::new(33, 17, 41, 22, 19, 9, 12, 8).unwrap();
        let first = compute_derived_stats(&attributes, 63.7).unwrap();
        let second = compute_derived_stats(&attributes, 63.7).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.load_ratio.to_bits(), second.load_ratio.to_bits());
        assert_eq!(first.max_load.to_bits(), second.max_load.to_bits());
    }

    #[test]
    fn rejects_invalid_block_and_weight() {
        let mut attributes = AttributeBlock::default();
        attributes.arcane = 0;
        assert_eq!(
            compute_derived_stats(&attributes, 0.0),
            Err(StatsError::AttributeOutOfRange {
                attribute: Attribute::Arcane,
                value: 0
            })
        );

        assert_eq!(
            compute_derived_stats(&AttributeBlock::default(), -0.5),
            Err(StatsError::NegativeWeight { weight: -0.5 })
        );
        assert_eq!(
            compute_derived_stats(&AttributeBlock::default(), f64::INFINITY),
            Err(StatsError::NonFiniteWeight)
        );
    }

    #[test]
    fn views_round_trip_fields() {
        let stats = compute_derived_stats(&AttributeBlock::default(), 20.0).unwrap();
        assert_eq!(stats.resources().stamina, stats.stamina);
        assert_eq!(stats.equip_load().tier, stats.load_tier);
    }
}
