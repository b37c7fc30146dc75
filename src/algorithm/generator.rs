//! Shared generator interface, retry limits and algorithm selection

use crate::algorithm::dimerization::Dimerization;
use crate::algorithm::myopic::MyopicGenerator;
use crate::algorithm::rejection::RejectionSampler;
use crate::algorithm::simple::SimpleRandomWalk;
use crate::algorithm::source::UniformSource;
use crate::io::configuration::MAX_WALK_LENGTH;
use crate::io::error::{Result, WalkError, invalid_parameter};
use crate::spatial::Walk;

/// Generator that always returns a walk of exactly the requested length
pub trait WalkGenerator {
    /// Produce a walk of `length` steps rooted at the origin
    ///
    /// # Errors
    ///
    /// Returns an error if `length` is out of range, the randomness source
    /// fails, or a retry limit is exceeded
    fn generate<S: UniformSource + ?Sized>(&self, length: usize, source: &mut S) -> Result<Walk>;
}

/// Reject lengths whose coordinates could leave `i32`
///
/// # Errors
///
/// Returns an error if `length` exceeds [`MAX_WALK_LENGTH`]
pub fn validate_length(length: usize) -> Result<()> {
    if length > MAX_WALK_LENGTH {
        return Err(invalid_parameter(
            "length",
            &length,
            &format!("must not exceed {MAX_WALK_LENGTH}"),
        ));
    }
    Ok(())
}

/// Cap on the number of attempts a retrying generator may make
///
/// The default is unbounded, which terminates with probability one but has
/// no hard guarantee.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RetryLimit {
    max_attempts: Option<usize>,
}

impl RetryLimit {
    /// Retry until success
    pub const fn unbounded() -> Self {
        Self { max_attempts: None }
    }

    /// Give up once `max_attempts` attempts have failed
    pub const fn at_most(max_attempts: usize) -> Self {
        Self {
            max_attempts: Some(max_attempts),
        }
    }

    /// Configured cap, if any
    pub const fn max_attempts(&self) -> Option<usize> {
        self.max_attempts
    }

    /// Decide whether another attempt may follow `attempts` failed ones
    ///
    /// # Errors
    ///
    /// Returns [`WalkError::RetriesExceeded`] once the cap is reached
    pub fn check(&self, generator: &'static str, length: usize, attempts: usize) -> Result<()> {
        match self.max_attempts {
            Some(max) if attempts >= max => Err(WalkError::RetriesExceeded {
                generator,
                length,
                attempts,
            }),
            _ => Ok(()),
        }
    }
}

/// Walk generation strategy
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum Algorithm {
    /// Unconstrained random walk
    Simple,
    /// Greedy self-avoiding growth that may trap itself
    Myopic,
    /// Restart from the origin on every collision
    Rejection,
    /// Recursive halving with join validation
    Dimerization,
}

/// Walk plus completion metadata, uniform across algorithms
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Generation {
    /// The generated walk
    pub walk: Walk,
    /// Whether myopic growth trapped itself before reaching the target length
    pub stuck: bool,
    /// Myopic step count, otherwise the number of points
    pub steps: usize,
    /// Whole-walk attempts used (top-level joins for dimerization)
    pub attempts: usize,
}

impl Algorithm {
    /// Lowercase name used in file names and messages
    pub const fn name(self) -> &'static str {
        match self {
            Self::Simple => "simple",
            Self::Myopic => "myopic",
            Self::Rejection => "rejection",
            Self::Dimerization => "dimerization",
        }
    }

    /// Whether the algorithm can stop short of the requested length
    pub const fn may_trap(self) -> bool {
        matches!(self, Self::Myopic)
    }

    /// Generate one walk with this algorithm
    ///
    /// # Errors
    ///
    /// Returns an error if the chosen generator fails
    pub fn run<S: UniformSource + ?Sized>(
        self,
        length: usize,
        limit: RetryLimit,
        source: &mut S,
    ) -> Result<Generation> {
        match self {
            Self::Simple => {
                let walk = SimpleRandomWalk.generate(length, source)?;
                Ok(Generation {
                    steps: walk.len(),
                    walk,
                    stuck: false,
                    attempts: 1,
                })
            }
            Self::Myopic => {
                let outcome = MyopicGenerator.generate(length, source)?;
                Ok(Generation {
                    walk: outcome.walk,
                    stuck: outcome.stuck,
                    steps: outcome.steps,
                    attempts: 1,
                })
            }
            Self::Rejection => {
                let (walk, attempts) =
                    RejectionSampler::new(limit).generate_counted(length, source)?;
                Ok(Generation {
                    steps: walk.len(),
                    walk,
                    stuck: false,
                    attempts,
                })
            }
            Self::Dimerization => {
                let (walk, attempts) = Dimerization::new(limit).generate_counted(length, source)?;
                Ok(Generation {
                    steps: walk.len(),
                    walk,
                    stuck: false,
                    attempts,
                })
            }
        }
    }
}
