//! Per-session mix state
//!
//! A `MixSession` owns one `ProportionSet` and a seedable random source for
//! the duration of a user interaction session. State is explicit: every
//! operation reads or mutates the session it was called on, never a hidden
//! global. Sessions are independent; a multi-user front-end holds one
//! session per user and mutates each serially.

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

use crate::classifier;
use crate::config::LabConfig;
use crate::compression::{CompressionError, CompressionTest};
use crate::generator::{GenerateError, MixGenerator};
use crate::rebalance::{rebalance, RebalanceError};
use crate::types::{Material, ProportionSet, StrengthVerdict, TestReport};

/// One user's interaction session: current proportions plus the lab
/// configuration and RNG behind the generate/compress triggers.
#[derive(Debug)]
pub struct MixSession {
    proportions: ProportionSet,
    generator: MixGenerator,
    test: CompressionTest,
    rng: StdRng,
}

impl MixSession {
    /// Start a session with the default mix and an entropy-seeded RNG.
    pub fn new(config: &LabConfig) -> Result<Self, CompressionError> {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Start a session with a fixed seed; generated mixes are reproducible.
    pub fn with_seed(config: &LabConfig, seed: u64) -> Result<Self, CompressionError> {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: &LabConfig, rng: StdRng) -> Result<Self, CompressionError> {
        let test = CompressionTest::from_rig(&config.test_rig)?;
        info!("Mix session started");
        Ok(Self {
            proportions: ProportionSet::default(),
            generator: MixGenerator::new(config.mix.clone()),
            test,
            rng,
        })
    }

    /// Current proportions, for display or further queries.
    pub fn proportions(&self) -> &ProportionSet {
        &self.proportions
    }

    /// Replace the whole mix (e.g. from a CLI `--mix` argument).
    pub fn set_proportions(&mut self, proportions: ProportionSet) {
        self.proportions = proportions;
    }

    /// Slider move: set one material and proportionally rebalance the rest.
    pub fn set_proportion(
        &mut self,
        material: Material,
        value: f64,
    ) -> Result<(), RebalanceError> {
        rebalance(&mut self.proportions, material, value)
    }

    /// "Generate mix" trigger: replace the session mix with a random
    /// code-compliant one.
    pub fn generate_mix(&mut self) -> Result<&ProportionSet, GenerateError> {
        self.proportions = self.generator.generate(&mut self.rng)?;
        Ok(&self.proportions)
    }

    /// Strength verdict for the current mix.
    pub fn verdict(&self) -> StrengthVerdict {
        classifier::classify(&self.proportions)
    }

    /// "Run compression test" trigger: deterministic, independent of the
    /// current mix proportions.
    pub fn run_compression_test(&self) -> TestReport {
        self.test.report()
    }
}
