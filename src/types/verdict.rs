//! Strength verdict types: StrengthClass, AggregateAdvisory, StrengthVerdict

use serde::{Deserialize, Serialize};

/// Qualitative strength band derived from the water-cement ratio.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum StrengthClass {
    /// w/c < 0.4 — structural load-bearing quality
    High,
    /// w/c in [0.4, 0.6] — general-purpose quality
    Moderate,
    /// w/c > 0.6 — workable but weak
    Low,
    /// Degenerate mix (no cement)
    Invalid,
}

impl StrengthClass {
    /// Get short code for logging
    pub fn short_code(&self) -> &'static str {
        match self {
            StrengthClass::High => "HIGH",
            StrengthClass::Moderate => "MOD",
            StrengthClass::Low => "LOW",
            StrengthClass::Invalid => "INVALID",
        }
    }

    /// The primary feedback sentence for this band.
    pub fn feedback(&self) -> &'static str {
        match self {
            StrengthClass::High => {
                "High strength mix: Suitable for structural applications like columns and beams."
            }
            StrengthClass::Moderate => {
                "Moderate strength mix: Suitable for general-purpose applications like slabs and pavements."
            }
            StrengthClass::Low => {
                "Low strength mix: May have high workability but reduced strength. Suitable for non-load-bearing elements."
            }
            StrengthClass::Invalid => "Invalid mix: Check proportions.",
        }
    }
}

impl std::fmt::Display for StrengthClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.short_code())
    }
}

/// Secondary advisory keyed off the coarse aggregate share.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum AggregateAdvisory {
    /// Coarse aggregate above 55% — workability suffers
    HighCoarseContent,
    /// Coarse aggregate below 40% — structural integrity suffers
    LowCoarseContent,
}

impl AggregateAdvisory {
    /// The advisory note appended to the feedback string.
    pub fn note(&self) -> &'static str {
        match self {
            AggregateAdvisory::HighCoarseContent => {
                "Note: High coarse aggregate content may reduce workability."
            }
            AggregateAdvisory::LowCoarseContent => {
                "Note: Low coarse aggregate content may affect structural integrity."
            }
        }
    }
}

/// Complete classifier output for one mix.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StrengthVerdict {
    /// Primary strength band
    pub class: StrengthClass,
    /// Coarse-aggregate advisory, if the share left the [40, 55] window
    pub advisory: Option<AggregateAdvisory>,
    /// Water-cement ratio the verdict was derived from (infinite if no cement)
    pub water_cement_ratio: f64,
}

impl StrengthVerdict {
    /// Assembled human-readable feedback: primary sentence plus any
    /// aggregate advisory note.
    pub fn feedback(&self) -> String {
        match self.advisory {
            Some(advisory) => format!("{} {}", self.class.feedback(), advisory.note()),
            None => self.class.feedback().to_string(),
        }
    }
}

impl std::fmt::Display for StrengthVerdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.feedback())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feedback_appends_advisory_note() {
        let verdict = StrengthVerdict {
            class: StrengthClass::Moderate,
            advisory: Some(AggregateAdvisory::HighCoarseContent),
            water_cement_ratio: 0.5,
        };
        let text = verdict.feedback();
        assert!(text.starts_with("Moderate strength mix:"));
        assert!(text.ends_with("may reduce workability."));
    }

    #[test]
    fn feedback_without_advisory_is_primary_sentence_only() {
        let verdict = StrengthVerdict {
            class: StrengthClass::Low,
            advisory: None,
            water_cement_ratio: 0.667,
        };
        assert_eq!(verdict.feedback(), StrengthClass::Low.feedback());
    }
}
