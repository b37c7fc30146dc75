//! Monte-Carlo estimators for walk behaviour
//!
//! These make the generators' characteristic phenomena measurable: the
//! trap probability of myopic growth, the end-to-end scaling that separates
//! self-avoiding walks (ν ≈ 3/4 in two dimensions) from the diffusive simple
//! walk (ν = 1/2), and the attempt cost of rejection sampling.

use crate::algorithm::generator::WalkGenerator;
use crate::algorithm::myopic::MyopicGenerator;
use crate::algorithm::rejection::RejectionSampler;
use crate::algorithm::source::UniformSource;
use crate::io::error::{Result, invalid_parameter};

/// Observed trapping of myopic growth at one length
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrapEstimate {
    /// Requested walk length
    pub length: usize,
    /// Walks generated
    pub trials: usize,
    /// Walks that trapped before reaching `length`
    pub trapped: usize,
    /// Mean reported step count over trapped walks
    pub mean_trapped_steps: Option<f64>,
}

impl TrapEstimate {
    /// Fraction of walks that trapped
    pub fn rate(&self) -> f64 {
        if self.trials == 0 {
            return 0.0;
        }
        self.trapped as f64 / self.trials as f64
    }
}

/// Mean squared end-to-end distance at one length
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DistanceEstimate {
    /// Walk length
    pub length: usize,
    /// Walks generated
    pub trials: usize,
    /// Sample mean of the squared end-to-end distance
    pub mean_squared: f64,
    /// Standard error of `mean_squared`
    pub standard_error: f64,
}

impl DistanceEstimate {
    /// Exponent ν solving `mean_squared = length^(2ν)`
    ///
    /// Undefined for lengths below 2 and for a zero mean.
    pub fn apparent_exponent(&self) -> Option<f64> {
        if self.length < 2 || self.mean_squared <= 0.0 {
            return None;
        }
        Some(self.mean_squared.ln() / (2.0 * (self.length as f64).ln()))
    }
}

/// Attempts needed by rejection sampling at one length
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AttemptEstimate {
    /// Walk length
    pub length: usize,
    /// Walks generated
    pub trials: usize,
    /// Mean attempts per accepted walk
    pub mean_attempts: f64,
    /// Largest attempt count observed
    pub max_attempts: usize,
}

fn require_trials(trials: usize) -> Result<()> {
    if trials == 0 {
        return Err(invalid_parameter("trials", &trials, &"must be at least 1"));
    }
    Ok(())
}

/// Estimate how often myopic growth traps itself before `length` steps
///
/// # Errors
///
/// Returns an error if `trials` is zero or generation fails
pub fn estimate_trap_rate<S: UniformSource + ?Sized>(
    generator: &MyopicGenerator,
    length: usize,
    trials: usize,
    source: &mut S,
) -> Result<TrapEstimate> {
    require_trials(trials)?;

    let mut trapped = 0;
    let mut trapped_steps = 0;
    for _ in 0..trials {
        let outcome = generator.generate(length, source)?;
        if outcome.stuck {
            trapped += 1;
            trapped_steps += outcome.steps;
        }
    }

    Ok(TrapEstimate {
        length,
        trials,
        trapped,
        mean_trapped_steps: (trapped > 0).then(|| trapped_steps as f64 / trapped as f64),
    })
}

/// Estimate the mean squared end-to-end distance of a generator's walks
///
/// # Errors
///
/// Returns an error if `trials` is zero or generation fails
pub fn estimate_end_to_end<G: WalkGenerator, S: UniformSource + ?Sized>(
    generator: &G,
    length: usize,
    trials: usize,
    source: &mut S,
) -> Result<DistanceEstimate> {
    require_trials(trials)?;

    let mut samples = Vec::with_capacity(trials);
    for _ in 0..trials {
        let walk = generator.generate(length, source)?;
        samples.push(walk.end_to_end_squared() as f64);
    }

    let (mean, standard_error) = mean_and_standard_error(&samples);
    Ok(DistanceEstimate {
        length,
        trials,
        mean_squared: mean,
        standard_error,
    })
}

/// Estimate the attempt cost of rejection sampling
///
/// # Errors
///
/// Returns an error if `trials` is zero or generation fails
pub fn estimate_rejection_cost<S: UniformSource + ?Sized>(
    sampler: &RejectionSampler,
    length: usize,
    trials: usize,
    source: &mut S,
) -> Result<AttemptEstimate> {
    require_trials(trials)?;

    let mut total = 0;
    let mut max_attempts = 0;
    for _ in 0..trials {
        let (_, attempts) = sampler.generate_counted(length, source)?;
        total += attempts;
        max_attempts = max_attempts.max(attempts);
    }

    Ok(AttemptEstimate {
        length,
        trials,
        mean_attempts: total as f64 / trials as f64,
        max_attempts,
    })
}

/// Sample mean and its standard error; zero error for fewer than two samples
pub fn mean_and_standard_error(samples: &[f64]) -> (f64, f64) {
    if samples.is_empty() {
        return (0.0, 0.0);
    }

    let count = samples.len() as f64;
    let mean = samples.iter().sum::<f64>() / count;
    if samples.len() < 2 {
        return (mean, 0.0);
    }

    let variance = samples
        .iter()
        .map(|sample| (sample - mean).powi(2))
        .sum::<f64>()
        / (count - 1.0);
    (mean, (variance / count).sqrt())
}
