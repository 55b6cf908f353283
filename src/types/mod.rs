//! Shared data structures for the concrete mix design core
//!
//! This module defines the types flowing through the mix pipeline:
//! - `Material`, `ProportionSet` — the mix state mutated by the rebalancer
//!   and generator
//! - `StrengthClass`, `StrengthVerdict` — classifier output
//! - `CompressionSample`, `FailureEvent`, `TestReport` — compression
//!   simulator output consumed by the presentation layer

mod material;
mod mix;
mod sample;
mod verdict;

pub use material::*;
pub use mix::*;
pub use sample::*;
pub use verdict::*;
