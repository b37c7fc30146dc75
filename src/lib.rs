//! Self-avoiding walk generation on the two-dimensional square lattice
//!
//! Provides an unconstrained random walk baseline, myopic (greedy) growth,
//! global rejection sampling and recursive dimerization, all sharing one
//! self-avoidance validator and an explicit, substitutable randomness source.

#![forbid(unsafe_code)]

/// Walk generators and the randomness source they draw from
pub mod algorithm;
/// Monte-Carlo estimators over the generators
pub mod analysis;
/// Input/output operations and error handling
pub mod io;
/// Lattice points, directions, walks and visited-point tracking
pub mod spatial;

pub use io::error::{Result, WalkError};
