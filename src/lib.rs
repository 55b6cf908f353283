//! mixlab: Concrete Mix Design Core
//!
//! Educational concrete mix design and compression testing logic.
//!
//! ## Architecture
//!
//! - **Rebalancer**: Proportional slider rebalancing keeping the mix at 100%
//! - **MixGenerator**: Random code-compliant mixes from bounded ranges
//! - **StrengthClassifier**: Water-cement-ratio strength verdicts
//! - **CompressionSimulator**: Deterministic load/stress ramp on a standard
//!   test cube with a fixed failure threshold
//!
//! Rendering (charts, tables, animation) is an external collaborator; this
//! crate emits ordered data for it.

pub mod classifier;
pub mod compression;
pub mod config;
pub mod generator;
pub mod rebalance;
pub mod session;
pub mod types;

// Re-export lab configuration
pub use config::LabConfig;

// Re-export commonly used types
pub use types::{
    AggregateAdvisory, CompressionSample, FailureEvent, Material, ProportionSet, StrengthClass,
    StrengthVerdict, TestReport,
};

// Re-export pipeline entry points
pub use classifier::classify;
pub use compression::{CompressionError, CompressionTest, LoadRamp};
pub use generator::{GenerateError, MixGenerator};
pub use rebalance::{rebalance, RebalanceError};
pub use session::MixSession;
