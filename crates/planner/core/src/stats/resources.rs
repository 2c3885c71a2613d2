//! Resources - Layer 2 of the stat system.
//!
//! Resource pools are pure functions of a single attribute:
//! - HP from Vigor (four bands, breakpoints 1/25/40/60/99)
//! - FP from Mind (four bands, breakpoints 1/15/35/60/99)
//! - Stamina from Endurance (linear)
//!
//! Every band result is floored to an integer. The exponents are part of the
//! shared contract and must not be simplified.

use super::attributes::{Attribute, AttributeBlock, check_attribute};
use super::error::StatsError;

/// Maximum hit points for a vigor value.
///
/// - `vigor <= 25`: `300 + 500 × ((vigor-1)/24)^1.5`
/// - `vigor <= 40`: `800 + 650 × ((vigor-25)/15)^1.1`
/// - `vigor <= 60`: `1450 + 450 × (1 - (1 - (vigor-40)/20)^1.2)`
/// - otherwise:     `1900 + 200 × (1 - (1 - (vigor-60)/39)^1.2)`
pub fn hit_points(vigor: u8) -> Result<u32, StatsError> {
    let v = f64::from(check_attribute(Attribute::Vigor, i64::from(vigor))?);

    let hp = if v <= 25.0 {
        300.0 + 500.0 * ((v - 1.0) / 24.0).powf(1.5)
    } else if v <= 40.0 {
        800.0 + 650.0 * ((v - 25.0) / 15.0).powf(1.1)
    } else if v <= 60.0 {
        1450.0 + 450.0 * (1.0 - (1.0 - (v - 40.0) / 20.0).powf(1.2))
    } else {
        1900.0 + 200.0 * (1.0 - (1.0 - (v - 60.0) / 39.0).powf(1.2))
    };

    Ok(hp.floor() as u32)
}

/// Maximum focus points for a mind value.
///
/// - `mind <= 15`: `50 + 45 × (mind-1)/14`
/// - `mind <= 35`: `95 + 105 × (mind-15)/20`
/// - `mind <= 60`: `200 + 150 × (1 - (1 - (mind-35)/25)^1.2)`
/// - otherwise:    `350 + 100 × (mind-60)/39`
pub fn focus_points(mind: u8) -> Result<u32, StatsError> {
    let m = f64::from(check_attribute(Attribute::Mind, i64::from(mind))?);

    let fp = if m <= 15.0 {
        50.0 + 45.0 * ((m - 1.0) / 14.0)
    } else if m <= 35.0 {
        95.0 + 105.0 * ((m - 15.0) / 20.0)
    } else if m <= 60.0 {
        200.0 + 150.0 * (1.0 - (1.0 - (m - 35.0) / 25.0).powf(1.2))
    } else {
        350.0 + 100.0 * ((m - 60.0) / 39.0)
    };

    Ok(fp.floor() as u32)
}

/// Stamina for an endurance value: `floor(80 + endurance × 1.5)`.
pub fn stamina(endurance: u8) -> Result<u32, StatsError> {
    let e = f64::from(check_attribute(Attribute::Endurance, i64::from(endurance))?);
    Ok((80.0 + e * 1.5).floor() as u32)
}

/// Resource maximums computed from an attribute block.
///
/// These are NOT stored - always recomputed from the attributes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResourceMaximums {
    pub hit_points: u32,
    pub focus_points: u32,
    pub stamina: u32,
}

impl ResourceMaximums {
    pub fn compute(attributes: &AttributeBlock) -> Result<Self, StatsError> {
        Ok(Self {
            hit_points: hit_points(attributes.vigor)?,
            focus_points: focus_points(attributes.mind)?,
            stamina: stamina(attributes.endurance)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hit_points_at_breakpoints() {
        assert_eq!(hit_points(1).unwrap(), 300);
        assert_eq!(hit_points(25).unwrap(), 800);
        assert_eq!(hit_points(40).unwrap(), 1450);
        assert_eq!(hit_points(60).unwrap(), 1900);
        assert_eq!(hit_points(99).unwrap(), 2100);
    }

    #[test]
    fn hit_points_inside_bands() {
        // 300 + 500 × (9/24)^1.5 = 414.82
        assert_eq!(hit_points(10).unwrap(), 414);
        // 800 + 650 × (5/15)^1.1 = 994.12
        assert_eq!(hit_points(30).unwrap(), 994);
        // 1450 + 450 × (1 - 0.5^1.2) = 1704.13
        assert_eq!(hit_points(50).unwrap(), 1704);
        // 1900 + 200 × (1 - (19/39)^1.2) = 2015.62
        assert_eq!(hit_points(80).unwrap(), 2015);
    }

    #[test]
    fn hit_points_is_monotonic_and_continuous() {
        let mut previous = hit_points(1).unwrap();
        for vigor in 2..=99u8 {
            let hp = hit_points(vigor).unwrap();
            assert!(hp >= previous, "hp dropped at vigor {vigor}");
            previous = hp;
        }

        // The upper band evaluated at its lower bound lands on the previous
        // band's end value (within the flooring tolerance).
        let upper_at = |v: f64, base: f64, span: f64, width: f64, start: f64, exp: f64| {
            base + span * ((v - start) / width).powf(exp)
        };
        assert!((upper_at(25.0, 800.0, 650.0, 15.0, 25.0, 1.1) - 800.0).abs() <= 1.0);
        let third_lower = 1450.0 + 450.0 * (1.0 - (1.0f64 - 0.0).powf(1.2));
        assert!((third_lower - f64::from(hit_points(40).unwrap())).abs() <= 1.0);
        let fourth_lower = 1900.0 + 200.0 * (1.0 - (1.0f64 - 0.0).powf(1.2));
        assert!((fourth_lower - f64::from(hit_points(60).unwrap())).abs() <= 1.0);
    }

    #[test]
    fn focus_points_at_breakpoints() {
        assert_eq!(focus_points(1).unwrap(), 50);
        assert_eq!(focus_points(15).unwrap(), 95);
        assert_eq!(focus_points(35).unwrap(), 200);
        assert_eq!(focus_points(60).unwrap(), 350);
        assert_eq!(focus_points(99).unwrap(), 450);
    }

    #[test]
    fn focus_points_inside_bands() {
        assert_eq!(focus_points(10).unwrap(), 78);
        assert_eq!(focus_points(20).unwrap(), 121);
        assert_eq!(focus_points(40).unwrap(), 235);
        assert_eq!(focus_points(80).unwrap(), 401);
    }

    #[test]
    fn focus_points_is_monotonic() {
        let mut previous = focus_points(1).unwrap();
        for mind in 2..=99u8 {
            let fp = focus_points(mind).unwrap();
            assert!(fp >= previous, "fp dropped at mind {mind}");
            previous = fp;
        }
    }

    #[test]
    fn stamina_is_linear() {
        assert_eq!(stamina(10).unwrap(), 95);
        assert_eq!(stamina(30).unwrap(), 125);
        assert_eq!(stamina(11).unwrap(), 96);
        for endurance in 1..=99u8 {
            let expected = (80.0 + 1.5 * f64::from(endurance)).floor() as u32;
            assert_eq!(stamina(endurance).unwrap(), expected);
        }
    }

    #[test]
    fn formulas_reject_out_of_range_input() {
        assert_eq!(
            hit_points(0),
            Err(StatsError::AttributeOutOfRange {
                attribute: Attribute::Vigor,
                value: 0
            })
        );
        assert!(focus_points(100).is_err());
        assert!(stamina(0).is_err());
    }

    #[test]
    fn maximums_from_default_block() {
        let max = ResourceMaximums::compute(&AttributeBlock::default()).unwrap();
        assert_eq!(max.hit_points, 414);
        assert_eq!(max.focus_points, 78);
        assert_eq!(max.stamina, 95);
    }
}
