//! Breadth-first shortest-path search over the occupancy grid
//!
//! Expansion follows the fixed up, right, down, left order, so the visited
//! sequence and the tie-break between equally short paths are fully
//! determined by the grid contents.

use std::collections::{HashMap, VecDeque};
use std::hash::BuildHasher;

use log::{debug, trace};

use crate::algorithm::bitset::CellBitset;
use crate::spatial::{Coordinate, Grid};

/// Result of one breadth-first search
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchOutcome {
    /// Cells in the order they were dequeued, target included when reached
    pub visited: Vec<Coordinate>,
    /// Shortest path from target back to source, empty when unreachable
    pub path: Vec<Coordinate>,
}

impl SearchOutcome {
    /// Whether the target was reached
    pub const fn found(&self) -> bool {
        !self.path.is_empty()
    }

    /// Number of steps on the shortest path, `None` when unreachable
    pub const fn distance(&self) -> Option<usize> {
        self.path.len().checked_sub(1)
    }

    /// Path cells ordered from source to target
    pub fn path_from_source(&self) -> impl Iterator<Item = Coordinate> + '_ {
        self.path.iter().rev().copied()
    }
}

/// Run breadth-first search from `source` to `target`
///
/// Walls are never entered. The source itself is expanded even when it is a
/// wall, though the grid never lets that happen. An out-of-bounds source
/// produces an empty outcome.
pub fn breadth_first_search(grid: &Grid, source: Coordinate, target: Coordinate) -> SearchOutcome {
    let mut outcome = SearchOutcome::default();
    if !grid.is_in_bounds(source) {
        debug!("Search source {source} outside {}x{} grid", grid.rows(), grid.cols());
        return outcome;
    }

    let mut frontier = VecDeque::from([source]);
    let mut visited = CellBitset::for_grid(grid);
    let mut parents: HashMap<Coordinate, Coordinate> = HashMap::new();
    visited.insert(source);

    while let Some(current) = frontier.pop_front() {
        outcome.visited.push(current);

        if current == target {
            outcome.path = reconstruct_path(&parents, target);
            debug!(
                "Reached {target} from {source} after {} cells, path length {}",
                outcome.visited.len(),
                outcome.path.len()
            );
            return outcome;
        }

        for neighbour in current.neighbours() {
            if grid.is_passable(neighbour) && visited.insert(neighbour) {
                trace!("Discovered {neighbour} from {current}");
                parents.insert(neighbour, current);
                frontier.push_back(neighbour);
            }
        }
    }

    debug!(
        "Target {target} unreachable from {source}, explored {} cells",
        outcome.visited.len()
    );
    outcome
}

/// Follow parent links from `target` until a cell with no parent
///
/// The returned cells run from target to source.
pub fn reconstruct_path<S: BuildHasher>(
    parents: &HashMap<Coordinate, Coordinate, S>,
    target: Coordinate,
) -> Vec<Coordinate> {
    let mut path = vec![target];
    let mut current = target;
    while let Some(&parent) = parents.get(&current) {
        path.push(parent);
        current = parent;
    }
    path
}
