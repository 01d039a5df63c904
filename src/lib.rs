//! Breadth-first grid pathfinding and recursive-division maze generation
//!
//! The core works on an owned occupancy grid and returns plain coordinate
//! sequences: the order cells were explored, the shortest path, and the
//! order maze walls were placed. Rendering those sequences is left to the
//! caller; the bundled CLI turns them into an animated GIF.

#![forbid(unsafe_code)]

/// Search, maze generation and board state
pub mod algorithm;
/// Input/output operations and error handling
pub mod io;
/// Grid coordinates and occupancy state
pub mod spatial;

pub use io::error::{GridError, Result};
