//! Maze generation by recursive rectangular division
//!
//! A region is a rectangle of candidate divider rows and columns. Each step
//! walls one candidate row (or column) across the region, leaving a single
//! passage cell, then continues with the two sub-regions on either side.
//! Dividers sit on even offsets from the region start and passages on odd
//! offsets, so a passage can never be blocked by a later divider.
//!
//! Sub-regions are processed from an explicit stack in the same depth-first
//! order a recursive implementation would use, which keeps the sequence of
//! random choices (and therefore the output) identical while bounding call
//! depth.

use log::{debug, trace};

use crate::algorithm::random::{Chooser, pick};
use crate::spatial::{Coordinate, Grid};

/// Axis of the dividing wall
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Divider runs along a row, splitting the region into upper and lower parts
    Horizontal,
    /// Divider runs along a column, splitting the region into left and right parts
    Vertical,
}

impl Orientation {
    /// Divide across the longer side so chambers stay roughly square
    pub const fn for_region(region: &Region) -> Self {
        if region.height() > region.width() {
            Self::Horizontal
        } else {
            Self::Vertical
        }
    }
}

/// Inclusive rectangle of candidate divider positions
///
/// Bounds are signed because sub-region bounds are computed two cells beyond
/// a divider and may fall below zero, which simply makes the region empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    /// First row (inclusive)
    pub row_start: isize,
    /// Last row (inclusive)
    pub row_end: isize,
    /// First column (inclusive)
    pub col_start: isize,
    /// Last column (inclusive)
    pub col_end: isize,
}

impl Region {
    /// Create a region from inclusive bounds
    pub const fn new(row_start: isize, row_end: isize, col_start: isize, col_end: isize) -> Self {
        Self {
            row_start,
            row_end,
            col_start,
            col_end,
        }
    }

    /// The whole grid
    pub fn full(grid: &Grid) -> Self {
        Self::new(0, grid.rows() as isize - 1, 0, grid.cols() as isize - 1)
    }

    /// A region with no rows or no columns
    pub const fn is_empty(&self) -> bool {
        self.row_start > self.row_end || self.col_start > self.col_end
    }

    /// Row span, measured as the difference of the bounds
    pub const fn height(&self) -> isize {
        self.row_end - self.row_start
    }

    /// Column span, measured as the difference of the bounds
    pub const fn width(&self) -> isize {
        self.col_end - self.col_start
    }
}

/// Generate a maze over the whole grid
///
/// Starts with a horizontal division and places the outer border first.
/// Returns newly walled cells in placement order.
pub fn generate_maze(grid: &mut Grid, chooser: &mut impl Chooser) -> Vec<Coordinate> {
    let region = Region::full(grid);
    recursive_division(grid, chooser, region, false, Orientation::Horizontal)
}

/// Divide `region` recursively, walling cells on `grid` as they are decided
///
/// When `border_placed` is false and the region is non-empty, every edge
/// cell of the grid is walled first. Source and target cells are never
/// walled, and cells that were already walls are not reported again.
/// Returns newly walled cells in placement order.
pub fn recursive_division(
    grid: &mut Grid,
    chooser: &mut impl Chooser,
    region: Region,
    border_placed: bool,
    orientation: Orientation,
) -> Vec<Coordinate> {
    let mut divider = Divider {
        grid,
        chooser,
        walls: Vec::new(),
    };

    let mut pending = vec![(region, orientation)];
    let mut border_done = border_placed;
    let mut divisions = 0_usize;

    while let Some((next, next_orientation)) = pending.pop() {
        if next.is_empty() {
            continue;
        }

        if !border_done {
            divider.place_border();
            border_done = true;
        }

        let [first, second] = match next_orientation {
            Orientation::Horizontal => divider.divide_horizontally(next),
            Orientation::Vertical => divider.divide_vertically(next),
        };
        divisions += 1;

        // Second half goes underneath so the first is fully divided before it
        pending.push((second, Orientation::for_region(&second)));
        pending.push((first, Orientation::for_region(&first)));
    }

    debug!(
        "Recursive division walled {} cells over {divisions} divisions",
        divider.walls.len()
    );
    divider.walls
}

struct Divider<'g, C> {
    grid: &'g mut Grid,
    chooser: &'g mut C,
    walls: Vec<Coordinate>,
}

impl<C: Chooser> Divider<'_, C> {
    fn place(&mut self, row: isize, col: isize) {
        let (Ok(row), Ok(col)) = (usize::try_from(row), usize::try_from(col)) else {
            return;
        };
        let coord = Coordinate::new(row, col);
        if matches!(self.grid.set_wall(coord, true), Ok(true)) {
            self.walls.push(coord);
        }
    }

    fn place_border(&mut self) {
        let rows = self.grid.rows() as isize;
        let cols = self.grid.cols() as isize;

        for col in 0..cols {
            self.place(0, col);
            self.place(rows - 1, col);
        }
        for row in 0..rows {
            self.place(row, 0);
            self.place(row, cols - 1);
        }
    }

    fn divide_horizontally(&mut self, region: Region) -> [Region; 2] {
        let cols = self.grid.cols() as isize;
        let rows: Vec<isize> = (region.row_start..=region.row_end).step_by(2).collect();
        let passages: Vec<isize> = (region.col_start - 1..=region.col_end + 1)
            .step_by(2)
            .filter(|&col| col > 0 && col < cols - 1)
            .collect();

        let divider_row = pick(&mut *self.chooser, &rows).unwrap_or(region.row_start);
        let passage_col = pick(&mut *self.chooser, &passages);
        trace!("Horizontal divider at row {divider_row}, passage {passage_col:?}");

        for col in region.col_start - 1..=region.col_end + 1 {
            if Some(col) != passage_col {
                self.place(divider_row, col);
            }
        }

        [
            Region::new(
                region.row_start,
                divider_row - 2,
                region.col_start,
                region.col_end,
            ),
            Region::new(
                divider_row + 2,
                region.row_end,
                region.col_start,
                region.col_end,
            ),
        ]
    }

    fn divide_vertically(&mut self, region: Region) -> [Region; 2] {
        let rows = self.grid.rows() as isize;
        let cols: Vec<isize> = (region.col_start..=region.col_end).step_by(2).collect();
        let passages: Vec<isize> = (region.row_start - 1..=region.row_end + 1)
            .step_by(2)
            .filter(|&row| row > 0 && row < rows - 1)
            .collect();

        let divider_col = pick(&mut *self.chooser, &cols).unwrap_or(region.col_start);
        let passage_row = pick(&mut *self.chooser, &passages);
        trace!("Vertical divider at column {divider_col}, passage {passage_row:?}");

        for row in region.row_start - 1..=region.row_end + 1 {
            if Some(row) != passage_row {
                self.place(row, divider_col);
            }
        }

        [
            Region::new(
                region.row_start,
                region.row_end,
                region.col_start,
                divider_col - 2,
            ),
            Region::new(
                region.row_start,
                region.row_end,
                divider_col + 2,
                region.col_end,
            ),
        ]
    }
}
