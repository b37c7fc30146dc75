//! Points of the square lattice and the four unit steps between them

use std::fmt;
use std::ops::Add;

/// Integer lattice point
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Point {
    /// Horizontal coordinate, growing East
    pub x: i32,
    /// Vertical coordinate, growing North
    pub y: i32,
}

impl Point {
    /// Root of every generated walk
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    /// Create a point from its coordinates
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Neighbouring point one unit step away in `direction`
    ///
    /// Coordinates wrap at the `i32` boundary.
    #[must_use]
    pub const fn step(self, direction: Direction) -> Self {
        let [dx, dy] = direction.delta();
        Self {
            x: self.x.wrapping_add(dx),
            y: self.y.wrapping_add(dy),
        }
    }

    /// Translate by the vector from the origin to `by`, wrapping like [`Point::step`]
    #[must_use]
    pub const fn offset(self, by: Self) -> Self {
        Self {
            x: self.x.wrapping_add(by.x),
            y: self.y.wrapping_add(by.y),
        }
    }

    /// Squared Euclidean distance from the origin, saturating at `i64::MAX`
    pub const fn squared_norm(self) -> i64 {
        squared_length(self.x as i64, self.y as i64)
    }
}

/// `dx² + dy²`, saturating at `i64::MAX`
pub(crate) const fn squared_length(dx: i64, dy: i64) -> i64 {
    dx.saturating_mul(dx).saturating_add(dy.saturating_mul(dy))
}

impl Add for Point {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        self.offset(rhs)
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Unit move on the square lattice
///
/// The declaration order is the order in which generators enumerate
/// directions, so index `i` drawn from a randomness source always means the
/// same move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// (1, 0)
    East,
    /// (0, 1)
    North,
    /// (-1, 0)
    West,
    /// (0, -1)
    South,
}

impl Direction {
    /// All four directions in enumeration order
    pub const ALL: [Self; 4] = [Self::East, Self::North, Self::West, Self::South];

    /// Coordinate change of one step
    pub const fn delta(self) -> [i32; 2] {
        match self {
            Self::East => [1, 0],
            Self::North => [0, 1],
            Self::West => [-1, 0],
            Self::South => [0, -1],
        }
    }

    /// Direction at position `index` of [`Direction::ALL`]
    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::East),
            1 => Some(Self::North),
            2 => Some(Self::West),
            3 => Some(Self::South),
            _ => None,
        }
    }

    /// The direction taking `from` to `to`, if they are lattice neighbours
    pub fn between(from: Point, to: Point) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|&direction| from.step(direction) == to)
    }
}
