/// Recursive dimerization generator
pub mod dimerization;
/// Shared generator interface, retry limits and algorithm selection
pub mod generator;
/// Myopic (greedy, no-backtrack) self-avoiding walk growth
pub mod myopic;
/// Global restart-on-collision sampler
pub mod rejection;
/// Unconstrained simple random walk
pub mod simple;
/// Uniform randomness sources
pub mod source;

pub use generator::{Algorithm, Generation, RetryLimit, WalkGenerator};
pub use source::{RandomSelector, ScriptedSource, UniformSource};
