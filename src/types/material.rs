//! Core material identity: the fixed, ordered set of mix components

use serde::{Deserialize, Serialize};

/// One of the five materials tracked in a concrete mix.
///
/// The set is fixed and ordered; every `ProportionSet` carries exactly one
/// percentage per material, in this order.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Material {
    Cement,
    Water,
    Sand,
    CoarseAggregate,
    Additives,
}

impl Material {
    /// All materials in canonical display order.
    pub const ALL: [Material; 5] = [
        Material::Cement,
        Material::Water,
        Material::Sand,
        Material::CoarseAggregate,
        Material::Additives,
    ];

    /// Number of tracked materials.
    pub const COUNT: usize = Self::ALL.len();

    /// Position in the canonical order; used as the storage index.
    pub fn index(&self) -> usize {
        match self {
            Material::Cement => 0,
            Material::Water => 1,
            Material::Sand => 2,
            Material::CoarseAggregate => 3,
            Material::Additives => 4,
        }
    }

    /// Get display name for UI
    pub fn display_name(&self) -> &'static str {
        match self {
            Material::Cement => "Cement",
            Material::Water => "Water",
            Material::Sand => "Sand",
            Material::CoarseAggregate => "Coarse Aggregate",
            Material::Additives => "Additives",
        }
    }

    /// Get short code for logging
    pub fn short_code(&self) -> &'static str {
        match self {
            Material::Cement => "CEM",
            Material::Water => "WTR",
            Material::Sand => "SND",
            Material::CoarseAggregate => "AGG",
            Material::Additives => "ADD",
        }
    }

    /// Parse from string (for CLI/config)
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().replace([' ', '-'], "_").as_str() {
            "cement" | "cem" => Some(Material::Cement),
            "water" | "wtr" => Some(Material::Water),
            "sand" | "snd" => Some(Material::Sand),
            "coarse_aggregate" | "coarse" | "aggregate" | "agg" => Some(Material::CoarseAggregate),
            "additives" | "additive" | "add" => Some(Material::Additives),
            _ => None,
        }
    }
}

impl std::fmt::Display for Material {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_order_matches_indices() {
        for (i, material) in Material::ALL.iter().enumerate() {
            assert_eq!(material.index(), i);
        }
    }

    #[test]
    fn parse_accepts_display_and_short_forms() {
        assert_eq!(Material::parse("Cement"), Some(Material::Cement));
        assert_eq!(Material::parse("coarse aggregate"), Some(Material::CoarseAggregate));
        assert_eq!(Material::parse("AGG"), Some(Material::CoarseAggregate));
        assert_eq!(Material::parse("gravel"), None);
    }
}
