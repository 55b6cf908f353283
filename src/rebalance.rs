//! Constrained-proportion rebalancing
//!
//! When the user moves one material's slider, the other four materials are
//! scaled so the mix still totals 100%. Each sibling keeps its pre-update
//! relative share of whatever total remains.

use thiserror::Error;
use tracing::warn;

use crate::types::{Material, ProportionSet, SUM_TOLERANCE};

// ============================================================================
// Error Types
// ============================================================================

#[derive(Error, Debug, PartialEq)]
pub enum RebalanceError {
    /// All sibling proportions are zero; the proportional formula would
    /// divide by zero. The set is left unchanged.
    #[error("cannot redistribute {remaining:.1}% — all other materials are at zero")]
    ZeroSiblingTotal { remaining: f64 },

    /// New value outside the slider range [0, 100].
    #[error("{material} = {value} is outside the valid range 0..=100")]
    ValueOutOfRange { material: Material, value: f64 },
}

// ============================================================================
// Rebalancer
// ============================================================================

/// Set `changed` to `new_value` and scale the remaining materials so the mix
/// still totals 100.
///
/// Sibling scaling preserves pre-update relative shares:
/// `new = (100 - new_value) * old / total_others`.
///
/// Fails without touching `proportions` when `new_value` is out of range or
/// when every sibling is zero (the redistribution would divide by zero).
pub fn rebalance(
    proportions: &mut ProportionSet,
    changed: Material,
    new_value: f64,
) -> Result<(), RebalanceError> {
    if !(0.0..=100.0).contains(&new_value) || !new_value.is_finite() {
        warn!(material = changed.short_code(), value = new_value, "Rejected out-of-range slider update");
        return Err(RebalanceError::ValueOutOfRange {
            material: changed,
            value: new_value,
        });
    }

    let remaining = 100.0 - new_value;
    let changed_idx = changed.index();
    let total_others: f64 = proportions
        .values()
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != changed_idx)
        .map(|(_, v)| *v)
        .sum();

    if total_others <= 0.0 {
        warn!(material = changed.short_code(), "Rejected update — sibling total is zero");
        return Err(RebalanceError::ZeroSiblingTotal { remaining });
    }

    let values = proportions.values_mut();
    for i in 0..values.len() {
        if i != changed_idx {
            values[i] = remaining * values[i] / total_others;
        }
    }
    values[changed_idx] = new_value;

    debug_assert!((proportions.total() - 100.0).abs() < SUM_TOLERANCE);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn documented_cement_to_30_example() {
        // Cement 15 -> 30 against the default mix: siblings keep their
        // relative shares of the remaining 70%.
        let mut mix = ProportionSet::default();
        rebalance(&mut mix, Material::Cement, 30.0).unwrap();

        assert_eq!(mix.get(Material::Cement), 30.0);
        assert!((mix.get(Material::Water) - 70.0 * 10.0 / 85.0).abs() < 1e-9);
        assert!((mix.get(Material::Sand) - 70.0 * 25.0 / 85.0).abs() < 1e-9);
        assert!((mix.get(Material::CoarseAggregate) - 70.0 * 50.0 / 85.0).abs() < 1e-9);
        assert_eq!(mix.get(Material::Additives), 0.0);
        assert!((mix.total() - 100.0).abs() < 1e-6, "sum must stay at 100");
    }

    #[test]
    fn sum_invariant_holds_across_repeated_updates() {
        let mut mix = ProportionSet::default();
        for (material, value) in [
            (Material::Water, 18.0),
            (Material::Sand, 3.0),
            (Material::Additives, 7.5),
            (Material::Cement, 0.0),
            (Material::CoarseAggregate, 62.0),
        ] {
            rebalance(&mut mix, material, value).unwrap();
            assert!(
                (mix.total() - 100.0).abs() < 1e-6,
                "sum drifted after setting {material} to {value}"
            );
        }
    }

    #[test]
    fn all_zero_siblings_is_rejected_not_nan() {
        let mut mix = ProportionSet::from_values([100.0, 0.0, 0.0, 0.0, 0.0]).unwrap();
        let before = mix.clone();
        let err = rebalance(&mut mix, Material::Cement, 50.0).unwrap_err();
        assert!(matches!(err, RebalanceError::ZeroSiblingTotal { .. }));
        assert_eq!(mix, before, "failed update must leave the set unchanged");
        assert!(mix.entries().all(|(_, v)| v.is_finite()));
    }

    #[test]
    fn out_of_range_value_is_rejected() {
        let mut mix = ProportionSet::default();
        let before = mix.clone();
        assert!(matches!(
            rebalance(&mut mix, Material::Water, 101.0),
            Err(RebalanceError::ValueOutOfRange { .. })
        ));
        assert!(matches!(
            rebalance(&mut mix, Material::Water, -0.5),
            Err(RebalanceError::ValueOutOfRange { .. })
        ));
        assert_eq!(mix, before);
    }

    #[test]
    fn setting_full_100_zeroes_all_siblings() {
        let mut mix = ProportionSet::default();
        rebalance(&mut mix, Material::Sand, 100.0).unwrap();
        assert_eq!(mix.get(Material::Sand), 100.0);
        assert_eq!(mix.get(Material::Cement), 0.0);
        assert_eq!(mix.get(Material::CoarseAggregate), 0.0);
    }
}
