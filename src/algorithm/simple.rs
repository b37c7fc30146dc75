use crate::algorithm::generator::{WalkGenerator, validate_length};
use crate::algorithm::source::UniformSource;
use crate::io::error::{Result, WalkError};
use crate::spatial::{Direction, Walk};

/// Unconstrained random walk
///
/// Every step picks one of the four directions uniformly, with no regard
/// for points already visited. Consumes exactly one draw per step and
/// never rejects; serves as the diffusive baseline SAWs are compared with.
#[derive(Clone, Copy, Debug, Default)]
pub struct SimpleRandomWalk;

impl WalkGenerator for SimpleRandomWalk {
    fn generate<S: UniformSource + ?Sized>(&self, length: usize, source: &mut S) -> Result<Walk> {
        validate_length(length)?;

        let mut walk = Walk::with_capacity(length);
        for _ in 0..length {
            let choice = source.choose(Direction::ALL.len())?;
            let direction = Direction::from_index(choice).ok_or(WalkError::InvalidChoice {
                choice,
                alternatives: Direction::ALL.len(),
            })?;
            walk.push(walk.end().step(direction));
        }
        Ok(walk)
    }
}
