use crate::algorithm::generator::{RetryLimit, WalkGenerator, validate_length};
use crate::algorithm::myopic::MyopicGenerator;
use crate::algorithm::source::UniformSource;
use crate::io::configuration::DIMERIZATION_BASE_CASE_LENGTH;
use crate::io::error::{Result, invalid_parameter};
use crate::spatial::{Walk, is_saw};

const JOIN: &str = "dimerization join";
const BASE_CASE: &str = "dimerization base case";

/// Divide-and-conquer self-avoiding walk generator
///
/// A walk of `n` steps is built from two independently generated walks of
/// `n / 2` and `n - n / 2` steps. The second is translated onto the end of
/// the first and the concatenation is validated; since each half is already
/// self-avoiding only collisions across the join can reject it, in which
/// case both halves are redrawn. Short walks come straight from the myopic
/// generator, retried until one completes.
///
/// Recursion depth is logarithmic in `n` and each level does linear work per
/// candidate, excluding join retries.
#[derive(Clone, Copy, Debug)]
pub struct Dimerization {
    base: MyopicGenerator,
    base_case_length: usize,
    limit: RetryLimit,
}

impl Default for Dimerization {
    fn default() -> Self {
        Self::new(RetryLimit::default())
    }
}

impl Dimerization {
    /// Create a generator with the standard base case
    ///
    /// `limit` applies separately to every join loop and every base-case loop.
    pub const fn new(limit: RetryLimit) -> Self {
        Self {
            base: MyopicGenerator,
            base_case_length: DIMERIZATION_BASE_CASE_LENGTH,
            limit,
        }
    }

    /// Hand walks of up to `length` steps to the myopic generator
    ///
    /// # Errors
    ///
    /// Returns an error if `length` is zero, which would never stop splitting
    pub fn with_base_case_length(self, length: usize) -> Result<Self> {
        if length == 0 {
            return Err(invalid_parameter(
                "base_case_length",
                &length,
                &"must be at least 1",
            ));
        }
        Ok(Self {
            base_case_length: length,
            ..self
        })
    }

    /// Largest length built directly by the myopic generator
    pub const fn base_case_length(&self) -> usize {
        self.base_case_length
    }

    /// Generate a walk, also reporting how many top-level joins it took
    ///
    /// For lengths handled by the base case the count is the number of
    /// myopic attempts instead.
    ///
    /// # Errors
    ///
    /// Returns an error if `length` is out of range, the randomness source
    /// fails, or any retry loop exceeds the limit
    pub fn generate_counted<S: UniformSource + ?Sized>(
        &self,
        length: usize,
        source: &mut S,
    ) -> Result<(Walk, usize)> {
        validate_length(length)?;
        self.build(length, source)
    }

    fn build<S: UniformSource + ?Sized>(
        &self,
        length: usize,
        source: &mut S,
    ) -> Result<(Walk, usize)> {
        if length <= self.base_case_length() {
            return self.base_case(length, source);
        }

        let head_length = length / 2;
        let tail_length = length - head_length;

        let mut attempts = 0;
        loop {
            attempts += 1;
            let (head, _) = self.build(head_length, source)?;
            let (tail, _) = self.build(tail_length, source)?;

            let candidate = head.join(&tail);
            if is_saw(&candidate, length) {
                return Ok((candidate, attempts));
            }
            self.limit.check(JOIN, length, attempts)?;
        }
    }

    /// Myopic growth, discarding trapped walks
    fn base_case<S: UniformSource + ?Sized>(
        &self,
        length: usize,
        source: &mut S,
    ) -> Result<(Walk, usize)> {
        let mut attempts = 0;
        loop {
            attempts += 1;
            let outcome = self.base.generate(length, source)?;
            if outcome.is_complete() && is_saw(&outcome.walk, length) {
                return Ok((outcome.walk, attempts));
            }
            self.limit.check(BASE_CASE, length, attempts)?;
        }
    }
}

impl WalkGenerator for Dimerization {
    fn generate<S: UniformSource + ?Sized>(&self, length: usize, source: &mut S) -> Result<Walk> {
        self.generate_counted(length, source).map(|(walk, _)| walk)
    }
}
