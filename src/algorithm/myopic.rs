use crate::algorithm::generator::validate_length;
use crate::algorithm::source::UniformSource;
use crate::io::error::{Result, WalkError};
use crate::spatial::{Direction, Point, VisitedSet, Walk};

/// Result of one myopic growth attempt
///
/// `steps` always equals `walk.len()`: `length + 1` when growth completed,
/// and the 1-based index of the step that found no free neighbour when it
/// trapped itself.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MyopicOutcome {
    /// Points reached before completion or trapping
    pub walk: Walk,
    /// Whether growth ended with no free neighbour
    pub stuck: bool,
    /// Step count as described above
    pub steps: usize,
}

impl MyopicOutcome {
    /// Whether the walk reached the requested length
    pub const fn is_complete(&self) -> bool {
        !self.stuck
    }
}

/// Greedy self-avoiding walk growth without backtracking
///
/// Each step chooses uniformly among the neighbours not yet visited. When
/// none remain the walk is trapped and returned as-is; the trap probability
/// grows with the requested length, so callers must check
/// [`MyopicOutcome::stuck`].
#[derive(Clone, Copy, Debug, Default)]
pub struct MyopicGenerator;

impl MyopicGenerator {
    /// Grow a walk of up to `length` steps
    ///
    /// # Errors
    ///
    /// Returns an error if `length` is out of range or the randomness source fails
    pub fn generate<S: UniformSource + ?Sized>(
        &self,
        length: usize,
        source: &mut S,
    ) -> Result<MyopicOutcome> {
        validate_length(length)?;

        let mut walk = Walk::with_capacity(length);
        let mut visited = VisitedSet::rooted(length);
        let mut feasible: Vec<Point> = Vec::with_capacity(Direction::ALL.len());

        for step in 0..length {
            let current = walk.end();
            feasible.clear();
            feasible.extend(
                Direction::ALL
                    .into_iter()
                    .map(|direction| current.step(direction))
                    .filter(|&point| !visited.contains(point)),
            );

            if feasible.is_empty() {
                return Ok(MyopicOutcome {
                    walk,
                    stuck: true,
                    steps: step + 1,
                });
            }

            let choice = source.choose(feasible.len())?;
            let next = feasible
                .get(choice)
                .copied()
                .ok_or(WalkError::InvalidChoice {
                    choice,
                    alternatives: feasible.len(),
                })?;
            visited.insert(next);
            walk.push(next);
        }

        Ok(MyopicOutcome {
            walk,
            stuck: false,
            steps: length + 1,
        })
    }
}
