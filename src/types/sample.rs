//! Compression test output types: CompressionSample, FailureEvent, TestReport

use serde::{Deserialize, Serialize};

/// One load step of a simulated compression test.
///
/// Immutable once produced; `stress_pa` is always `load_n / area` for the
/// rig that generated it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct CompressionSample {
    /// Applied load (N)
    pub load_n: f64,
    /// Resulting uniaxial stress (Pa)
    pub stress_pa: f64,
    /// Normalized specimen compression in [0, 1]; animation pacing only
    pub deformation: f64,
}

/// Marker for the first sample whose stress exceeded the failure threshold.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct FailureEvent {
    /// Load at failure (N)
    pub ultimate_load_n: f64,
    /// Stress at failure (Pa) — the reported compressive strength
    pub compressive_strength_pa: f64,
}

impl FailureEvent {
    /// Compressive strength in MPa, as reported to the user.
    pub fn compressive_strength_mpa(&self) -> f64 {
        self.compressive_strength_pa / 1e6
    }
}

/// A complete test run: the ordered sample sequence and the failure marker,
/// if the specimen failed before the load ramp ended.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TestReport {
    pub samples: Vec<CompressionSample>,
    pub failure: Option<FailureEvent>,
}

impl TestReport {
    /// Peak stress reached during the run (Pa); 0 for an empty run.
    pub fn peak_stress_pa(&self) -> f64 {
        self.samples.last().map_or(0.0, |s| s.stress_pa)
    }
}
