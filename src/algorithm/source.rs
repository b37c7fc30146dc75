use crate::io::error::{Result, WalkError, invalid_parameter};
use rand::{Rng, SeedableRng, rngs::StdRng};
use std::collections::VecDeque;

/// Source of uniform choices among a small number of alternatives
///
/// Every generator draws its randomness through this trait, so a run is
/// reproducible from the source alone and tests can substitute scripted
/// choices. Sources are not synchronised; share one across threads only
/// behind external locking.
pub trait UniformSource {
    /// Draw an index uniformly from `0..alternatives`
    ///
    /// # Errors
    ///
    /// Returns an error if `alternatives` is zero or the source cannot
    /// produce another draw
    fn choose(&mut self, alternatives: usize) -> Result<usize>;
}

impl<S: UniformSource + ?Sized> UniformSource for &mut S {
    fn choose(&mut self, alternatives: usize) -> Result<usize> {
        (**self).choose(alternatives)
    }
}

/// Seeded random selector for reproducible stochastic choices
pub struct RandomSelector {
    rng: StdRng,
}

impl RandomSelector {
    /// Create a deterministic random selector
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl UniformSource for RandomSelector {
    fn choose(&mut self, alternatives: usize) -> Result<usize> {
        if alternatives == 0 {
            return Err(invalid_parameter(
                "alternatives",
                &alternatives,
                &"at least one alternative is required",
            ));
        }
        Ok(self.rng.random_range(0..alternatives))
    }
}

/// Replays a fixed sequence of choices
///
/// Each draw consumes the next scripted index. Used to force exact walks in
/// tests and to replay a recorded sequence of decisions.
#[derive(Clone, Debug, Default)]
pub struct ScriptedSource {
    choices: VecDeque<usize>,
    served: usize,
}

impl ScriptedSource {
    /// Create a source that will return `choices` in order
    pub fn new(choices: impl IntoIterator<Item = usize>) -> Self {
        Self {
            choices: choices.into_iter().collect(),
            served: 0,
        }
    }

    /// Number of scripted choices consumed so far, including rejected ones
    pub const fn served(&self) -> usize {
        self.served
    }

    /// Number of scripted choices not yet drawn
    pub fn remaining(&self) -> usize {
        self.choices.len()
    }
}

impl UniformSource for ScriptedSource {
    fn choose(&mut self, alternatives: usize) -> Result<usize> {
        let choice = self
            .choices
            .pop_front()
            .ok_or(WalkError::RandomnessExhausted {
                draws: self.served,
            })?;
        self.served += 1;
        if choice >= alternatives {
            return Err(WalkError::InvalidChoice {
                choice,
                alternatives,
            });
        }
        Ok(choice)
    }
}
