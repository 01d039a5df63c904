use bitvec::prelude::*;
use std::fmt;

use crate::spatial::{Coordinate, Grid};

/// Fixed-size bitset over the cells of one grid
///
/// Cells are addressed by row-major index, so membership testing is O(1)
/// and the whole set costs one bit per cell. Coordinates outside the grid
/// are never members.
#[derive(Clone, Debug)]
pub struct CellBitset {
    bits: BitVec,
    cols: usize,
}

impl CellBitset {
    /// Create an empty set sized for `grid`
    pub fn for_grid(grid: &Grid) -> Self {
        Self {
            bits: bitvec![0; grid.len()],
            cols: grid.cols(),
        }
    }

    fn index(&self, coord: Coordinate) -> Option<usize> {
        (coord.col < self.cols)
            .then(|| coord.row * self.cols + coord.col)
            .filter(|&index| index < self.bits.len())
    }

    /// Insert a coordinate
    ///
    /// Returns `true` if it was not already present.
    pub fn insert(&mut self, coord: Coordinate) -> bool {
        let Some(index) = self.index(coord) else {
            return false;
        };
        !self.bits.replace(index, true)
    }

    /// Test coordinate membership
    pub fn contains(&self, coord: Coordinate) -> bool {
        self.index(coord)
            .and_then(|index| self.bits.get(index).as_deref().copied())
            .unwrap_or(false)
    }

    /// Test if no cells are present
    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }

    /// Count cells in the set
    pub fn count(&self) -> usize {
        self.bits.count_ones()
    }

    /// Extract all member coordinates in row-major order
    pub fn to_vec(&self) -> Vec<Coordinate> {
        let cols = self.cols.max(1);
        self.bits
            .iter_ones()
            .map(|index| Coordinate::new(index / cols, index % cols))
            .collect()
    }
}

impl fmt::Display for CellBitset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CellBitset({} cells)", self.count())
    }
}
