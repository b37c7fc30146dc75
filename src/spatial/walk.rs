//! Walk representation, composition and the self-avoidance validator

use crate::spatial::lattice::{Direction, Point, squared_length};
use std::collections::HashSet;

/// Ordered sequence of lattice points
///
/// A walk of `k` steps holds `k + 1` points. Generators always root their
/// walks at [`Point::ORIGIN`] and only ever append unit steps; walks built
/// through [`Walk::from_points`] carry no such guarantee and can be checked
/// with [`Walk::is_rooted`] and [`Walk::has_unit_steps`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Walk {
    points: Vec<Point>,
}

impl Default for Walk {
    fn default() -> Self {
        Self::new()
    }
}

impl Walk {
    /// Zero-step walk sitting at the origin
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Zero-step walk with room for `steps` further points
    pub fn with_capacity(steps: usize) -> Self {
        let mut points = Vec::with_capacity(steps + 1);
        points.push(Point::ORIGIN);
        Self { points }
    }

    /// Wrap an arbitrary point sequence without checking it
    ///
    /// Composition wraps coordinates at the `i32` boundary, so walks far
    /// from the origin stay well defined but may not stay contiguous.
    pub const fn from_points(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// Append a point to the end of the walk
    pub(crate) fn push(&mut self, point: Point) {
        self.points.push(point);
    }

    /// All points in walk order
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Consume the walk, returning its points
    pub fn into_points(self) -> Vec<Point> {
        self.points
    }

    /// Number of points
    pub const fn len(&self) -> usize {
        self.points.len()
    }

    /// True only for a walk with no points at all
    pub const fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Number of steps, one less than the number of points
    pub const fn steps(&self) -> usize {
        self.points.len().saturating_sub(1)
    }

    /// First point, the origin for generated walks
    pub fn start(&self) -> Point {
        self.points.first().copied().unwrap_or(Point::ORIGIN)
    }

    /// Last point
    pub fn end(&self) -> Point {
        self.points.last().copied().unwrap_or(Point::ORIGIN)
    }

    /// Whether the walk begins at the origin
    pub fn is_rooted(&self) -> bool {
        self.points.first() == Some(&Point::ORIGIN)
    }

    /// Whether every consecutive pair of points is one unit step apart
    pub fn has_unit_steps(&self) -> bool {
        self.points
            .windows(2)
            .all(|pair| matches!(pair, [a, b] if Direction::between(*a, *b).is_some()))
    }

    /// Whether all points are pairwise distinct
    pub fn is_self_avoiding(&self) -> bool {
        is_saw(self, self.steps())
    }

    /// Squared distance between the first and last point, saturating at `i64::MAX`
    pub fn end_to_end_squared(&self) -> i64 {
        let start = self.start();
        let end = self.end();
        squared_length(
            i64::from(end.x) - i64::from(start.x),
            i64::from(end.y) - i64::from(start.y),
        )
    }

    /// Smallest axis-aligned box containing every point
    pub fn bounds(&self) -> Option<Bounds> {
        let first = *self.points.first()?;
        Some(
            self.points
                .iter()
                .fold(Bounds::at(first), |bounds, &point| bounds.including(point)),
        )
    }

    /// Shift every point by `by`
    #[must_use]
    pub fn translated(&self, by: Point) -> Self {
        Self {
            points: self.points.iter().map(|point| point.offset(by)).collect(),
        }
    }

    /// Concatenate `tail` onto the end of this walk
    ///
    /// `tail` is translated so its first point lands on this walk's last
    /// point, and that duplicated point is dropped. Joining an `a`-step walk
    /// with a `b`-step walk yields `a + b` steps. The result is not checked
    /// for self-avoidance.
    #[must_use]
    pub fn join(&self, tail: &Self) -> Self {
        let shift = Point::new(
            self.end().x.wrapping_sub(tail.start().x),
            self.end().y.wrapping_sub(tail.start().y),
        );
        let mut points = Vec::with_capacity(self.len() + tail.len().saturating_sub(1));
        points.extend_from_slice(&self.points);
        points.extend(tail.points.iter().skip(1).map(|point| point.offset(shift)));
        Self { points }
    }
}

/// Self-avoidance check for a walk intended to have `steps` steps
///
/// Counts distinct points and compares against `steps + 1`. For a walk
/// built from unit steps this is exactly the absence of repeated points.
/// A `steps` that does not match the walk's real length can validate a walk
/// that is not self-avoiding.
pub fn is_saw(walk: &Walk, steps: usize) -> bool {
    let distinct: HashSet<&Point> = walk.points.iter().collect();
    distinct.len() == steps + 1
}

/// Inclusive bounding box of a set of points
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bounds {
    /// Smallest x and y
    pub min: Point,
    /// Largest x and y
    pub max: Point,
}

impl Bounds {
    /// Box containing a single point
    pub const fn at(point: Point) -> Self {
        Self {
            min: point,
            max: point,
        }
    }

    /// Grow the box to contain `point`
    #[must_use]
    pub fn including(self, point: Point) -> Self {
        Self {
            min: Point::new(self.min.x.min(point.x), self.min.y.min(point.y)),
            max: Point::new(self.max.x.max(point.x), self.max.y.max(point.y)),
        }
    }

    /// Number of lattice columns covered
    pub const fn width(&self) -> u32 {
        self.max.x.abs_diff(self.min.x).saturating_add(1)
    }

    /// Number of lattice rows covered
    pub const fn height(&self) -> u32 {
        self.max.y.abs_diff(self.min.y).saturating_add(1)
    }
}
