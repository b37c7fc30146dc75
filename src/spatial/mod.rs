//! Spatial primitives for lattice walks
//!
//! This module contains:
//! - Lattice points and the four unit directions
//! - The walk type and the self-avoidance validator
//! - Visited-point tracking used while a walk grows

/// Lattice points and unit directions
pub mod lattice;
/// Visited-point set with dense and sparse storage
pub mod visited;
/// Walk representation, composition and validation
pub mod walk;

pub use lattice::{Direction, Point};
pub use visited::VisitedSet;
pub use walk::{Bounds, Walk, is_saw};
