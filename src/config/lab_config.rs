//! Lab Configuration - generator ranges and test rig geometry as TOML values
//!
//! Every constant that was previously hardcoded is a field here. Each struct
//! implements `Default` with values matching the original constants, so
//! behavior is unchanged when no config file is present.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

// ============================================================================
// Error Types
// ============================================================================

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {0}: {1}")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config value: {0}")]
    Validation(String),
}

// ============================================================================
// Top-Level Config
// ============================================================================

/// Root configuration for a mix lab session.
///
/// Load with `LabConfig::load()` which searches:
/// 1. `$MIXLAB_CONFIG` env var
/// 2. `./mixlab.toml`
/// 3. Built-in defaults
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LabConfig {
    /// Random mix generation ranges (ACI-style bounds)
    #[serde(default)]
    pub mix: MixRanges,

    /// Compression test rig geometry and load schedule
    #[serde(default)]
    pub test_rig: TestRigConfig,
}

impl LabConfig {
    /// Load configuration using the standard search order:
    /// 1. `$MIXLAB_CONFIG` environment variable
    /// 2. `./mixlab.toml` in the current working directory
    /// 3. Built-in defaults (original hardcoded values)
    pub fn load() -> Self {
        if let Ok(path) = std::env::var("MIXLAB_CONFIG") {
            let p = PathBuf::from(&path);
            if p.exists() {
                match Self::load_from_file(&p) {
                    Ok(config) => {
                        info!(path = %p.display(), "Loaded lab config from MIXLAB_CONFIG");
                        return config;
                    }
                    Err(e) => {
                        warn!(path = %p.display(), error = %e, "Failed to load config from MIXLAB_CONFIG, falling back");
                    }
                }
            } else {
                warn!(path = %path, "MIXLAB_CONFIG points to non-existent file, falling back");
            }
        }

        let local = PathBuf::from("mixlab.toml");
        if local.exists() {
            match Self::load_from_file(&local) {
                Ok(config) => {
                    info!("Loaded lab config from ./mixlab.toml");
                    return config;
                }
                Err(e) => {
                    warn!(error = %e, "Failed to load ./mixlab.toml, using defaults");
                }
            }
        }

        Self::default()
    }

    /// Load from a specific TOML file path, rejecting physically
    /// impossible values.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| ConfigError::Io(path.to_path_buf(), e))?;
        let config: Self = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate physical ranges across all sections.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.mix.validate()?;
        self.test_rig.validate()
    }
}

// ============================================================================
// Mix Generation Ranges
// ============================================================================

/// Bounded draw ranges for random mix generation, in percent of total mix.
///
/// Defaults follow typical ACI proportioning guidance: cement 12-20%,
/// water 8-12%, additives 0-5%, sand taking 30-50% of whatever remains.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MixRanges {
    /// Cement draw bounds (%, inclusive)
    pub cement_min: u32,
    pub cement_max: u32,
    /// Water draw bounds (%, inclusive)
    pub water_min: u32,
    pub water_max: u32,
    /// Additives draw bounds (%, inclusive)
    pub additives_min: u32,
    pub additives_max: u32,
    /// Sand share of the remaining percentage after cement/water/additives
    pub sand_fraction_min: f64,
    pub sand_fraction_max: f64,
}

impl Default for MixRanges {
    fn default() -> Self {
        Self {
            cement_min: 12,
            cement_max: 20,
            water_min: 8,
            water_max: 12,
            additives_min: 0,
            additives_max: 5,
            sand_fraction_min: 0.3,
            sand_fraction_max: 0.5,
        }
    }
}

impl MixRanges {
    fn validate(&self) -> Result<(), ConfigError> {
        for (name, min, max) in [
            ("cement", self.cement_min, self.cement_max),
            ("water", self.water_min, self.water_max),
            ("additives", self.additives_min, self.additives_max),
        ] {
            if min > max {
                return Err(ConfigError::Validation(format!(
                    "mix.{name}_min ({min}) exceeds mix.{name}_max ({max})"
                )));
            }
        }
        if self.cement_max + self.water_max + self.additives_max > 100 {
            return Err(ConfigError::Validation(format!(
                "mix maxima sum to {} — cement + water + additives can exceed 100%",
                self.cement_max + self.water_max + self.additives_max
            )));
        }
        if !(0.0..=1.0).contains(&self.sand_fraction_min)
            || !(0.0..=1.0).contains(&self.sand_fraction_max)
            || self.sand_fraction_min > self.sand_fraction_max
        {
            return Err(ConfigError::Validation(format!(
                "mix.sand_fraction range [{}, {}] is not an ordered sub-range of [0, 1]",
                self.sand_fraction_min, self.sand_fraction_max
            )));
        }
        Ok(())
    }
}

// ============================================================================
// Test Rig Configuration
// ============================================================================

/// Compression test rig: standard cube geometry plus load schedule.
///
/// Defaults describe the standard 15 cm test cube loaded in 100 kN steps up
/// to 1 MN, with a 40 MPa failure threshold.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TestRigConfig {
    /// Cube edge length (m)
    pub cube_edge_m: f64,
    /// Load step between samples (N)
    pub load_increment_n: f64,
    /// Maximum applied load (N)
    pub max_load_n: f64,
    /// Stress at which the specimen fails (Pa)
    pub failure_stress_pa: f64,
}

impl Default for TestRigConfig {
    fn default() -> Self {
        Self {
            cube_edge_m: 0.15,
            load_increment_n: 100_000.0,
            max_load_n: 1_000_000.0,
            failure_stress_pa: 40e6,
        }
    }
}

impl TestRigConfig {
    /// Cross-sectional area of the cube face (m²).
    pub fn cross_sectional_area_m2(&self) -> f64 {
        self.cube_edge_m * self.cube_edge_m
    }

    fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("cube_edge_m", self.cube_edge_m),
            ("load_increment_n", self.load_increment_n),
            ("max_load_n", self.max_load_n),
            ("failure_stress_pa", self.failure_stress_pa),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::Validation(format!(
                    "test_rig.{name} must be a positive finite number, got {value}"
                )));
            }
        }
        if self.load_increment_n > self.max_load_n {
            return Err(ConfigError::Validation(format!(
                "test_rig.load_increment_n ({}) exceeds test_rig.max_load_n ({})",
                self.load_increment_n, self.max_load_n
            )));
        }
        Ok(())
    }
}
