//! ProportionSet: the five material percentages constrained to total 100

use serde::{Deserialize, Serialize};

use super::Material;

/// Tolerance for the sum-to-100 invariant after floating-point rebalancing.
pub const SUM_TOLERANCE: f64 = 1e-6;

/// The five material proportions of a concrete mix, in percent.
///
/// Invariant: all values are non-negative and sum to 100 (within
/// [`SUM_TOLERANCE`]) at every observable point. Mutation goes through
/// [`crate::rebalance::rebalance`] or wholesale replacement by the generator;
/// there is deliberately no public setter for a single entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProportionSet {
    values: [f64; Material::COUNT],
}

impl Default for ProportionSet {
    /// The baseline mix shown before any user interaction:
    /// Cement 15, Water 10, Sand 25, Coarse Aggregate 50, Additives 0.
    fn default() -> Self {
        Self {
            values: [15.0, 10.0, 25.0, 50.0, 0.0],
        }
    }
}

impl ProportionSet {
    /// Build from explicit per-material values, in canonical order.
    ///
    /// Returns `None` if any value is negative or the total is not 100
    /// within tolerance.
    pub fn from_values(values: [f64; Material::COUNT]) -> Option<Self> {
        let sum: f64 = values.iter().sum();
        if values.iter().any(|v| *v < 0.0) || (sum - 100.0).abs() > SUM_TOLERANCE {
            return None;
        }
        Some(Self { values })
    }

    /// Percentage for one material.
    pub fn get(&self, material: Material) -> f64 {
        self.values[material.index()]
    }

    /// Sum of all five percentages. 100 within tolerance by invariant.
    pub fn total(&self) -> f64 {
        self.values.iter().sum()
    }

    /// Ordered `(material, percentage)` pairs for tabular/chart display.
    pub fn entries(&self) -> impl Iterator<Item = (Material, f64)> + '_ {
        Material::ALL
            .into_iter()
            .map(move |m| (m, self.values[m.index()]))
    }

    /// Water-cement ratio; `f64::INFINITY` for a zero-cement mix.
    pub fn water_cement_ratio(&self) -> f64 {
        let cement = self.get(Material::Cement);
        if cement > 0.0 {
            self.get(Material::Water) / cement
        } else {
            f64::INFINITY
        }
    }

    pub(crate) fn values(&self) -> &[f64; Material::COUNT] {
        &self.values
    }

    pub(crate) fn values_mut(&mut self) -> &mut [f64; Material::COUNT] {
        &mut self.values
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_mix_totals_100() {
        let mix = ProportionSet::default();
        assert!((mix.total() - 100.0).abs() < SUM_TOLERANCE);
        assert_eq!(mix.get(Material::CoarseAggregate), 50.0);
    }

    #[test]
    fn from_values_rejects_bad_totals() {
        assert!(ProportionSet::from_values([20.0, 20.0, 20.0, 20.0, 20.0]).is_some());
        assert!(ProportionSet::from_values([20.0, 20.0, 20.0, 20.0, 21.0]).is_none());
        assert!(ProportionSet::from_values([-1.0, 21.0, 20.0, 30.0, 30.0]).is_none());
    }

    #[test]
    fn entries_follow_canonical_order() {
        let mix = ProportionSet::default();
        let names: Vec<&str> = mix.entries().map(|(m, _)| m.display_name()).collect();
        assert_eq!(
            names,
            vec!["Cement", "Water", "Sand", "Coarse Aggregate", "Additives"]
        );
    }

    #[test]
    fn water_cement_ratio_handles_zero_cement() {
        let mix = ProportionSet::from_values([0.0, 10.0, 30.0, 55.0, 5.0]).unwrap();
        assert!(mix.water_cement_ratio().is_infinite());
    }
}
