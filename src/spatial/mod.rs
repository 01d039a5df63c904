//! Spatial data structures for the occupancy grid
//!
//! This module contains:
//! - Coordinates and the fixed neighbour order
//! - The grid of wall, source and target flags

/// Grid coordinates and orthogonal directions
pub mod coordinate;
/// Occupancy grid state and mutation
pub mod grid;

pub use coordinate::{Coordinate, Direction};
pub use grid::{Cell, Grid};
