//! Lab Configuration Module
//!
//! Provides lab configuration loaded from TOML files, replacing the
//! hardcoded generator ranges and test rig constants with tunable values.
//!
//! ## Loading Order
//!
//! 1. `MIXLAB_CONFIG` environment variable (path to TOML file)
//! 2. `mixlab.toml` in the current working directory
//! 3. Built-in defaults (matching the original hardcoded values)
//!
//! There is no process-wide config singleton: a `LabConfig` is loaded once
//! at startup and threaded explicitly into the session and simulator, so
//! each session stays self-contained.

mod lab_config;

pub use lab_config::*;
