//! Occupancy grid with wall, source and target flags
//!
//! The grid owns the per-cell flags and the authoritative source and target
//! locations. Both are updated together so they never disagree, and neither
//! endpoint can ever be covered by a wall.

use ndarray::Array2;

use crate::io::error::{Result, out_of_bounds};
use crate::spatial::Coordinate;

/// Per-cell state
///
/// The flags are independent booleans. A cell may hold both the source and
/// the target, but an endpoint is never also a wall.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cell {
    /// Blocks movement through this cell
    pub wall: bool,
    /// Search starts here
    pub source: bool,
    /// Search ends here
    pub target: bool,
}

impl Cell {
    /// Whether this cell is the source or the target
    pub const fn is_endpoint(&self) -> bool {
        self.source || self.target
    }
}

/// Fixed-size rectangular grid of cells
///
/// Dimensions are set once at construction. Resizing means building a new
/// grid, the way a board re-render replaces the old one.
#[derive(Debug, Clone)]
pub struct Grid {
    cells: Array2<Cell>,
    source: Option<Coordinate>,
    target: Option<Coordinate>,
}

impl Grid {
    /// Create a grid with every cell open and no endpoints placed
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            cells: Array2::from_elem((rows, cols), Cell::default()),
            source: None,
            target: None,
        }
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.cells.nrows()
    }

    /// Number of columns
    pub fn cols(&self) -> usize {
        self.cells.ncols()
    }

    /// Grid dimensions as (rows, cols)
    pub fn dimensions(&self) -> (usize, usize) {
        self.cells.dim()
    }

    /// Total number of cells
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the grid has no cells at all
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Current source location, if one has been placed
    pub const fn source(&self) -> Option<Coordinate> {
        self.source
    }

    /// Current target location, if one has been placed
    pub const fn target(&self) -> Option<Coordinate> {
        self.target
    }

    /// Check that `coord` lies inside the grid
    pub fn is_in_bounds(&self, coord: Coordinate) -> bool {
        coord.row < self.rows() && coord.col < self.cols()
    }

    /// Check that `coord` is inside the grid and not a wall
    pub fn is_passable(&self, coord: Coordinate) -> bool {
        self.cell(coord).is_some_and(|cell| !cell.wall)
    }

    /// Cell state at `coord`, or `None` when out of bounds
    pub fn cell(&self, coord: Coordinate) -> Option<&Cell> {
        self.cells.get([coord.row, coord.col])
    }

    /// Whether `coord` is an in-bounds wall
    pub fn is_wall(&self, coord: Coordinate) -> bool {
        self.cell(coord).is_some_and(|cell| cell.wall)
    }

    /// Whether `coord` holds the source
    pub fn is_source(&self, coord: Coordinate) -> bool {
        self.source == Some(coord)
    }

    /// Whether `coord` holds the target
    pub fn is_target(&self, coord: Coordinate) -> bool {
        self.target == Some(coord)
    }

    /// Whether `coord` holds the source or the target
    pub fn is_endpoint(&self, coord: Coordinate) -> bool {
        self.cell(coord).is_some_and(Cell::is_endpoint)
    }

    /// Row-major linear index of an in-bounds coordinate
    pub fn index_of(&self, coord: Coordinate) -> Option<usize> {
        self.is_in_bounds(coord)
            .then(|| coord.row * self.cols() + coord.col)
    }

    /// Set or clear the wall flag at `coord`
    ///
    /// Walling the source or target is refused without mutation. Returns
    /// whether the cell changed.
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` if `coord` is outside the grid
    pub fn set_wall(&mut self, coord: Coordinate, wall: bool) -> Result<bool> {
        let dimensions = self.dimensions();
        let cell = self
            .cells
            .get_mut([coord.row, coord.col])
            .ok_or_else(|| out_of_bounds(coord, dimensions))?;

        if cell.wall == wall || (wall && cell.is_endpoint()) {
            return Ok(false);
        }

        cell.wall = wall;
        Ok(true)
    }

    /// Flip the wall flag at `coord`
    ///
    /// Endpoints stay open. Returns whether the cell changed.
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` if `coord` is outside the grid
    pub fn toggle_wall(&mut self, coord: Coordinate) -> Result<bool> {
        let wall = self.is_wall(coord);
        self.set_wall(coord, !wall)
    }

    /// Move the source to `coord`
    ///
    /// The previous source cell loses its flag and any wall at `coord` is
    /// removed.
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` if `coord` is outside the grid
    pub fn set_source(&mut self, coord: Coordinate) -> Result<()> {
        let previous = self.source;
        self.relocate(coord, previous, |cell, present| cell.source = present)?;
        self.source = Some(coord);
        Ok(())
    }

    /// Move the target to `coord`
    ///
    /// The previous target cell loses its flag and any wall at `coord` is
    /// removed.
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` if `coord` is outside the grid
    pub fn set_target(&mut self, coord: Coordinate) -> Result<()> {
        let previous = self.target;
        self.relocate(coord, previous, |cell, present| cell.target = present)?;
        self.target = Some(coord);
        Ok(())
    }

    fn relocate(
        &mut self,
        coord: Coordinate,
        previous: Option<Coordinate>,
        flag: impl Fn(&mut Cell, bool),
    ) -> Result<()> {
        if !self.is_in_bounds(coord) {
            return Err(out_of_bounds(coord, self.dimensions()));
        }

        if let Some(old) = previous.and_then(|old| self.cells.get_mut([old.row, old.col])) {
            flag(old, false);
        }

        if let Some(cell) = self.cells.get_mut([coord.row, coord.col]) {
            cell.wall = false;
            flag(cell, true);
        }

        Ok(())
    }

    /// Remove every wall, keeping the endpoints where they are
    pub fn clear_walls(&mut self) {
        for cell in &mut self.cells {
            cell.wall = false;
        }
    }

    /// Number of wall cells
    pub fn wall_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.wall).count()
    }

    /// Iterate over wall coordinates in row-major order
    pub fn walls(&self) -> impl Iterator<Item = Coordinate> + '_ {
        self.cells
            .indexed_iter()
            .filter(|(_, cell)| cell.wall)
            .map(|((row, col), _)| Coordinate::new(row, col))
    }

    /// Whether `coord` lies on the outer edge of the grid
    pub fn is_border(&self, coord: Coordinate) -> bool {
        self.is_in_bounds(coord)
            && (coord.row == 0
                || coord.col == 0
                || coord.row + 1 == self.rows()
                || coord.col + 1 == self.cols())
    }
}
