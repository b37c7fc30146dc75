use crate::io::configuration::MAX_DENSE_VISITED_RADIUS;
use crate::spatial::lattice::Point;
use bitvec::prelude::*;
use std::collections::HashSet;

/// Points already occupied during a single generation attempt
///
/// A walk of `n` steps from the origin never leaves the square of radius
/// `n`. Short walks track occupancy in a dense bit grid over that square
/// with O(1) membership tests; the grid costs O(n²) to clear, so longer
/// walks hash instead and pay only for the points they actually visit.
#[derive(Clone, Debug)]
pub struct VisitedSet {
    storage: Storage,
    count: usize,
}

#[derive(Clone, Debug)]
enum Storage {
    Dense { bits: BitVec, radius: i32 },
    Sparse(HashSet<Point>),
}

impl VisitedSet {
    /// Whether a walk of `length` steps is tracked in the dense bit grid
    pub const fn fits_dense_grid(length: usize) -> bool {
        length <= MAX_DENSE_VISITED_RADIUS
    }

    /// Create a set sized for a walk of `length` steps, already holding the origin
    pub fn rooted(length: usize) -> Self {
        let storage = if Self::fits_dense_grid(length) {
            let side = 2 * length + 1;
            Storage::Dense {
                bits: bitvec![0; side * side],
                radius: length as i32,
            }
        } else {
            Storage::Sparse(HashSet::with_capacity(length + 1))
        };

        let mut set = Self { storage, count: 0 };
        set.insert(Point::ORIGIN);
        set
    }

    /// Test point membership
    pub fn contains(&self, point: Point) -> bool {
        match &self.storage {
            Storage::Dense { bits, radius } => dense_index(*radius, point)
                .and_then(|index| bits.get(index).as_deref().copied())
                .unwrap_or(false),
            Storage::Sparse(points) => points.contains(&point),
        }
    }

    /// Insert a point, returning whether it was not already present
    pub fn insert(&mut self, point: Point) -> bool {
        if let Storage::Dense { radius, .. } = &self.storage
            && dense_index(*radius, point).is_none()
        {
            self.promote();
        }

        let inserted = match &mut self.storage {
            Storage::Dense { bits, radius } => match dense_index(*radius, point) {
                Some(index) if bits.get(index).as_deref() == Some(&false) => {
                    bits.set(index, true);
                    true
                }
                _ => false,
            },
            Storage::Sparse(points) => points.insert(point),
        };

        if inserted {
            self.count += 1;
        }
        inserted
    }

    /// Number of points held
    pub const fn len(&self) -> usize {
        self.count
    }

    /// Test if no points are held
    pub const fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Move every held point into hashed storage
    fn promote(&mut self) {
        if let Storage::Dense { bits, radius } = &self.storage {
            let side = (2 * radius + 1) as usize;
            let points = bits
                .iter_ones()
                .map(|index| {
                    Point::new(
                        (index % side) as i32 - radius,
                        (index / side) as i32 - radius,
                    )
                })
                .collect();
            self.storage = Storage::Sparse(points);
        }
    }
}

/// Row-major bit index of `point` inside the square of half-width `radius`
fn dense_index(radius: i32, point: Point) -> Option<usize> {
    let reach = radius.unsigned_abs();
    if point.x.unsigned_abs() > reach || point.y.unsigned_abs() > reach {
        return None;
    }
    let side = (2 * radius + 1) as usize;
    let col = (point.x + radius) as usize;
    let row = (point.y + radius) as usize;
    Some(row * side + col)
}
