//! Simulated uniaxial compression test
//!
//! Ramps load on a standard test cube in fixed increments, converting each
//! load step to stress (load / area) and a clamped deformation fraction for
//! animation pacing. The ramp halts at the first sample whose stress exceeds
//! the failure threshold. Fully deterministic: re-running with the same
//! parameters yields the same sequence.

use thiserror::Error;
use tracing::info;

use crate::config::TestRigConfig;
use crate::types::{CompressionSample, FailureEvent, TestReport};

// ============================================================================
// Error Types
// ============================================================================

#[derive(Error, Debug, PartialEq)]
pub enum CompressionError {
    /// Non-positive or non-finite rig parameter; running with it would
    /// divide by zero or loop forever.
    #[error("test rig parameter {name} must be positive and finite, got {value}")]
    InvalidParameter { name: &'static str, value: f64 },
}

// ============================================================================
// Compression Test
// ============================================================================

/// A configured compression test: fixed specimen geometry plus load schedule.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompressionTest {
    area_m2: f64,
    load_increment_n: f64,
    max_load_n: f64,
    failure_stress_pa: f64,
}

impl CompressionTest {
    /// Build a test from explicit parameters, rejecting degenerate values.
    pub fn new(
        area_m2: f64,
        load_increment_n: f64,
        max_load_n: f64,
        failure_stress_pa: f64,
    ) -> Result<Self, CompressionError> {
        for (name, value) in [
            ("area_m2", area_m2),
            ("load_increment_n", load_increment_n),
            ("max_load_n", max_load_n),
            ("failure_stress_pa", failure_stress_pa),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(CompressionError::InvalidParameter { name, value });
            }
        }
        Ok(Self {
            area_m2,
            load_increment_n,
            max_load_n,
            failure_stress_pa,
        })
    }

    /// Build a test for a configured rig (area derived from the cube edge).
    pub fn from_rig(rig: &TestRigConfig) -> Result<Self, CompressionError> {
        Self::new(
            rig.cross_sectional_area_m2(),
            rig.load_increment_n,
            rig.max_load_n,
            rig.failure_stress_pa,
        )
    }

    /// Cross-sectional area the stress conversion uses (m²).
    pub fn area_m2(&self) -> f64 {
        self.area_m2
    }

    /// Lazy sample sequence for load = 0, inc, 2·inc, … ≤ max_load.
    ///
    /// Restartable: every call yields a fresh, identical iterator. The
    /// sequence includes the failing sample and nothing after it.
    pub fn run(&self) -> LoadRamp {
        LoadRamp {
            test: *self,
            step: 0,
            last_step: (self.max_load_n / self.load_increment_n).floor() as u64,
            halted: false,
        }
    }

    /// Run the full ramp and collect it into a report with the failure
    /// marker, if the specimen failed.
    pub fn report(&self) -> TestReport {
        info!(
            area_m2 = self.area_m2,
            increment_n = self.load_increment_n,
            max_load_n = self.max_load_n,
            "Starting compression test"
        );
        let samples: Vec<CompressionSample> = self.run().collect();
        let failure = samples
            .last()
            .filter(|s| s.stress_pa > self.failure_stress_pa)
            .map(|s| FailureEvent {
                ultimate_load_n: s.load_n,
                compressive_strength_pa: s.stress_pa,
            });
        if let Some(f) = &failure {
            info!(
                ultimate_load_n = f.ultimate_load_n,
                strength_mpa = f.compressive_strength_mpa(),
                "Failure condition reached"
            );
        }
        TestReport { samples, failure }
    }

    fn sample_at(&self, load_n: f64) -> CompressionSample {
        let stress_pa = load_n / self.area_m2;
        let deformation = (load_n / (self.area_m2 * self.failure_stress_pa)).min(1.0);
        CompressionSample {
            load_n,
            stress_pa,
            deformation,
        }
    }
}

// ============================================================================
// Load Ramp Iterator
// ============================================================================

/// Iterator over the load ramp; halts after the failing sample.
#[derive(Debug, Clone)]
pub struct LoadRamp {
    test: CompressionTest,
    step: u64,
    last_step: u64,
    halted: bool,
}

impl Iterator for LoadRamp {
    type Item = CompressionSample;

    fn next(&mut self) -> Option<CompressionSample> {
        if self.halted || self.step > self.last_step {
            return None;
        }
        // Integer step count keeps loads exact; no float accumulation drift.
        let load_n = self.step as f64 * self.test.load_increment_n;
        let sample = self.test.sample_at(load_n);
        if sample.stress_pa > self.test.failure_stress_pa {
            self.halted = true;
        }
        self.step += 1;
        Some(sample)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.halted || self.step > self.last_step {
            return (0, Some(0));
        }
        let remaining = (self.last_step - self.step + 1) as usize;
        // Failure may truncate early, so only the upper bound is tight.
        (1, Some(remaining))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_test() -> CompressionTest {
        CompressionTest::from_rig(&TestRigConfig::default()).unwrap()
    }

    #[test]
    fn default_rig_yields_eleven_samples_failing_on_the_last() {
        // 0..=1 MN in 100 kN steps over 0.0225 m²; stress first exceeds
        // 40 MPa at the final 1 MN sample (~44.4 MPa).
        let report = default_test().report();
        assert_eq!(report.samples.len(), 11);

        let first = report.samples[0];
        assert_eq!((first.load_n, first.stress_pa, first.deformation), (0.0, 0.0, 0.0));

        for pair in report.samples.windows(2) {
            assert!(pair[1].load_n > pair[0].load_n, "loads must strictly increase");
        }
        assert!(report.samples.iter().all(|s| s.load_n <= 1_000_000.0));

        let failure = report.failure.unwrap();
        assert_eq!(failure.ultimate_load_n, 1_000_000.0);
        assert!((failure.compressive_strength_mpa() - 44.44).abs() < 0.01);
    }

    #[test]
    fn stress_is_load_over_area_at_every_sample() {
        for sample in default_test().run() {
            assert!((sample.stress_pa - sample.load_n / 0.0225).abs() < 1e-6);
            assert!((0.0..=1.0).contains(&sample.deformation));
        }
    }

    #[test]
    fn ramp_halts_at_first_failing_sample() {
        // Failure threshold of 10 MPa is crossed at 300 kN (13.3 MPa):
        // samples 0, 100k, 200k, 300k and nothing after.
        let test = CompressionTest::new(0.0225, 100_000.0, 1_000_000.0, 10e6).unwrap();
        let report = test.report();
        assert_eq!(report.samples.len(), 4);
        assert_eq!(report.samples.last().unwrap().load_n, 300_000.0);
        assert_eq!(report.failure.unwrap().ultimate_load_n, 300_000.0);
        assert_eq!(report.samples.last().unwrap().deformation, 1.0);
    }

    #[test]
    fn run_below_threshold_completes_without_failure() {
        // 900 kN max stays at exactly 40 MPa — strictly-exceeds never fires.
        let test = CompressionTest::new(0.0225, 100_000.0, 900_000.0, 40e6).unwrap();
        let report = test.report();
        assert_eq!(report.samples.len(), 10);
        assert!(report.failure.is_none());
        assert!((report.peak_stress_pa() - 40e6).abs() < 1e-6);
    }

    #[test]
    fn ramp_is_restartable_and_deterministic() {
        let test = default_test();
        let a: Vec<_> = test.run().collect();
        let b: Vec<_> = test.run().collect();
        assert_eq!(a, b);
    }

    #[test]
    fn degenerate_parameters_are_rejected_at_construction() {
        assert!(matches!(
            CompressionTest::new(0.0, 100.0, 1000.0, 40e6),
            Err(CompressionError::InvalidParameter { name: "area_m2", .. })
        ));
        assert!(matches!(
            CompressionTest::new(0.0225, -1.0, 1000.0, 40e6),
            Err(CompressionError::InvalidParameter { name: "load_increment_n", .. })
        ));
        assert!(matches!(
            CompressionTest::new(0.0225, 100.0, 1000.0, f64::NAN),
            Err(CompressionError::InvalidParameter { name: "failure_stress_pa", .. })
        ));
    }
}
