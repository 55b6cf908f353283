//! Random mix generation within code-compliant ranges
//!
//! Draws cement, water, and additives from bounded integer ranges, splits
//! the remainder between sand and coarse aggregate, and always lands on an
//! exact 100% total. The random source is injected so tests can seed it.

use rand::Rng;
use thiserror::Error;
use tracing::info;

use crate::config::MixRanges;
use crate::types::{Material, ProportionSet};

// ============================================================================
// Error Types
// ============================================================================

#[derive(Error, Debug, PartialEq)]
pub enum GenerateError {
    /// The configured draw maxima left a negative remainder for the
    /// aggregates; a random draw over the inverted range is never attempted.
    #[error("cement + water + additives consumed {drawn}% — no remainder left for aggregates")]
    InvalidRange { drawn: u32 },
}

// ============================================================================
// Mix Generator
// ============================================================================

/// Generates random code-compliant mixes from configured draw ranges.
#[derive(Debug, Clone, Default)]
pub struct MixGenerator {
    ranges: MixRanges,
}

impl MixGenerator {
    pub fn new(ranges: MixRanges) -> Self {
        Self { ranges }
    }

    /// Draw one mix from the injected random source.
    ///
    /// Draw order: cement, water, additives, then sand as a 30-50% share of
    /// the remainder; coarse aggregate absorbs the rest, so the total is
    /// exactly 100.
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<ProportionSet, GenerateError> {
        let r = &self.ranges;
        let cement = rng.gen_range(r.cement_min..=r.cement_max);
        let water = rng.gen_range(r.water_min..=r.water_max);
        let additives = rng.gen_range(r.additives_min..=r.additives_max);

        let drawn = cement + water + additives;
        if drawn > 100 {
            return Err(GenerateError::InvalidRange { drawn });
        }
        let remaining = 100 - drawn;

        let sand_min = (r.sand_fraction_min * f64::from(remaining)).floor() as u32;
        let sand_max = (r.sand_fraction_max * f64::from(remaining)).floor() as u32;
        let sand = rng.gen_range(sand_min..=sand_max);
        let coarse_aggregate = remaining - sand;

        info!(
            cement,
            water,
            sand,
            coarse_aggregate,
            additives,
            "Generated mix"
        );

        let mix = ProportionSet::from_values([
            f64::from(cement),
            f64::from(water),
            f64::from(sand),
            f64::from(coarse_aggregate),
            f64::from(additives),
        ]);
        // Exact-total construction: drawn + sand + coarse_aggregate == 100.
        debug_assert!(mix.is_some());
        mix.ok_or(GenerateError::InvalidRange { drawn })
    }
}
