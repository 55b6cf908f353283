//! Strength classification from the water-cement ratio
//!
//! The water-cement ratio is the dominant qualitative predictor of
//! compressive strength; the coarse aggregate share adds a secondary
//! workability/integrity advisory. Pure and deterministic.

use crate::types::{AggregateAdvisory, Material, ProportionSet, StrengthClass, StrengthVerdict};

/// Coarse aggregate above this share hurts workability (%).
const HIGH_COARSE_LIMIT: f64 = 55.0;
/// Coarse aggregate below this share hurts structural integrity (%).
const LOW_COARSE_LIMIT: f64 = 40.0;

/// Classify a mix into a strength band plus optional aggregate advisory.
///
/// A zero-cement mix has an infinite water-cement ratio and is reported as
/// [`StrengthClass::Invalid`] rather than crashing on the division.
pub fn classify(proportions: &ProportionSet) -> StrengthVerdict {
    let ratio = proportions.water_cement_ratio();

    let class = if !ratio.is_finite() {
        StrengthClass::Invalid
    } else if ratio < 0.4 {
        StrengthClass::High
    } else if ratio <= 0.6 {
        StrengthClass::Moderate
    } else {
        StrengthClass::Low
    };

    let coarse = proportions.get(Material::CoarseAggregate);
    let advisory = if coarse > HIGH_COARSE_LIMIT {
        Some(AggregateAdvisory::HighCoarseContent)
    } else if coarse < LOW_COARSE_LIMIT {
        Some(AggregateAdvisory::LowCoarseContent)
    } else {
        None
    };

    StrengthVerdict {
        class,
        advisory,
        water_cement_ratio: ratio,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mix(cement: f64, water: f64, sand: f64, coarse: f64, additives: f64) -> ProportionSet {
        ProportionSet::from_values([cement, water, sand, coarse, additives]).unwrap()
    }

    #[test]
    fn default_mix_is_low_strength_without_advisory() {
        // w/c = 10/15 ≈ 0.667, coarse = 50 sits inside [40, 55]
        let verdict = classify(&ProportionSet::default());
        assert_eq!(verdict.class, StrengthClass::Low);
        assert_eq!(verdict.advisory, None);
        assert!((verdict.water_cement_ratio - 0.667).abs() < 1e-3);
        assert!(verdict.feedback().starts_with("Low strength mix:"));
    }

    #[test]
    fn ratio_bands_classify_as_documented() {
        // w/c = 8/22 ≈ 0.36 → high strength
        assert_eq!(classify(&mix(22.0, 8.0, 20.0, 50.0, 0.0)).class, StrengthClass::High);
        // w/c = 10/20 = 0.5 → moderate
        assert_eq!(classify(&mix(20.0, 10.0, 20.0, 50.0, 0.0)).class, StrengthClass::Moderate);
        // Band edges are inclusive: w/c = 0.4 and 0.6 are both moderate
        assert_eq!(classify(&mix(25.0, 10.0, 15.0, 50.0, 0.0)).class, StrengthClass::Moderate);
        assert_eq!(classify(&mix(20.0, 12.0, 18.0, 50.0, 0.0)).class, StrengthClass::Moderate);
    }

    #[test]
    fn zero_cement_is_invalid_not_a_crash() {
        let verdict = classify(&mix(0.0, 15.0, 30.0, 50.0, 5.0));
        assert_eq!(verdict.class, StrengthClass::Invalid);
        assert!(verdict.water_cement_ratio.is_infinite());
        assert_eq!(verdict.feedback(), "Invalid mix: Check proportions.");
    }

    #[test]
    fn coarse_aggregate_advisories_trigger_outside_window() {
        let high = classify(&mix(15.0, 9.0, 18.0, 56.0, 2.0));
        assert_eq!(high.advisory, Some(AggregateAdvisory::HighCoarseContent));

        let low = classify(&mix(20.0, 9.0, 33.0, 36.0, 2.0));
        assert_eq!(low.advisory, Some(AggregateAdvisory::LowCoarseContent));

        // Window edges carry no advisory
        assert_eq!(classify(&mix(15.0, 9.0, 21.0, 55.0, 0.0)).advisory, None);
        assert_eq!(classify(&mix(15.0, 9.0, 36.0, 40.0, 0.0)).advisory, None);
    }

    #[test]
    fn classification_is_deterministic() {
        let mix = ProportionSet::default();
        assert_eq!(classify(&mix), classify(&mix));
    }
}
