use crate::algorithm::generator::{RetryLimit, WalkGenerator, validate_length};
use crate::algorithm::source::UniformSource;
use crate::io::error::{Result, WalkError};
use crate::spatial::{Direction, VisitedSet, Walk};

const GENERATOR: &str = "rejection sampling";

/// Global restart-on-collision sampler
///
/// Steps are drawn from all four directions; the first step onto a visited
/// point discards the whole attempt and growth restarts at the origin. The
/// accepted walks are uniform over self-avoiding walks of the requested
/// length, but the expected number of attempts grows roughly exponentially,
/// which limits this sampler to short walks.
#[derive(Clone, Copy, Debug, Default)]
pub struct RejectionSampler {
    limit: RetryLimit,
}

impl RejectionSampler {
    /// Create a sampler giving up after the attempts allowed by `limit`
    pub const fn new(limit: RetryLimit) -> Self {
        Self { limit }
    }

    /// Generate a walk, also reporting how many attempts it took
    ///
    /// # Errors
    ///
    /// Returns an error if `length` is out of range, the randomness source
    /// fails, or the retry limit is exceeded
    pub fn generate_counted<S: UniformSource + ?Sized>(
        &self,
        length: usize,
        source: &mut S,
    ) -> Result<(Walk, usize)> {
        validate_length(length)?;

        let mut attempts = 0;
        loop {
            attempts += 1;
            if let Some(walk) = attempt(length, source)? {
                return Ok((walk, attempts));
            }
            self.limit.check(GENERATOR, length, attempts)?;
        }
    }
}

impl WalkGenerator for RejectionSampler {
    fn generate<S: UniformSource + ?Sized>(&self, length: usize, source: &mut S) -> Result<Walk> {
        self.generate_counted(length, source).map(|(walk, _)| walk)
    }
}

/// Single growth attempt; `None` when it collided with itself
fn attempt<S: UniformSource + ?Sized>(length: usize, source: &mut S) -> Result<Option<Walk>> {
    let mut walk = Walk::with_capacity(length);
    let mut visited = VisitedSet::rooted(length);

    for _ in 0..length {
        let choice = source.choose(Direction::ALL.len())?;
        let direction = Direction::from_index(choice).ok_or(WalkError::InvalidChoice {
            choice,
            alternatives: Direction::ALL.len(),
        })?;
        let next = walk.end().step(direction);
        if !visited.insert(next) {
            return Ok(None);
        }
        walk.push(next);
    }

    Ok(Some(walk))
}
