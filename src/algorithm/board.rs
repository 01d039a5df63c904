//! Owned board state and the pathfinding and maze triggers
//!
//! A board bundles the grid with its endpoints and the selected search
//! algorithm. Rendering a board sizes the grid from a viewport and drops the
//! source and target on random cells; editing operations paint walls and drag
//! the endpoints the way the pointer handlers of a visual front end would.

use std::fmt;
use std::str::FromStr;

use log::{debug, info};

use crate::algorithm::maze::generate_maze;
use crate::algorithm::random::Chooser;
use crate::algorithm::search::{SearchOutcome, breadth_first_search};
use crate::io::error::{GridError, Result, invalid_parameter};
use crate::spatial::{Coordinate, Grid};

/// Search algorithms selectable by name
///
/// Only breadth-first search is implemented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Algorithm {
    /// Breadth-first search
    #[default]
    Bfs,
}

impl Algorithm {
    /// Caption for the trigger that runs this algorithm
    pub fn visualize_label(self) -> String {
        format!("visualize {self}")
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bfs => write!(f, "BFS"),
        }
    }
}

// Menu entries read like "BFS algorithm"; only the first word names it
impl FromStr for Algorithm {
    type Err = GridError;

    fn from_str(label: &str) -> Result<Self> {
        let name = label.split_whitespace().next().unwrap_or_default();
        if name.eq_ignore_ascii_case("bfs") {
            Ok(Self::Bfs)
        } else {
            Err(invalid_parameter(
                "algorithm",
                &label,
                &"only BFS is available",
            ))
        }
    }
}

/// Grid size in cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardDimensions {
    rows: usize,
    cols: usize,
}

impl BoardDimensions {
    /// Explicit dimensions
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` when either dimension is zero
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        if rows == 0 {
            return Err(invalid_parameter("rows", &rows, &"must be at least 1"));
        }
        if cols == 0 {
            return Err(invalid_parameter("cols", &cols, &"must be at least 1"));
        }
        Ok(Self { rows, cols })
    }

    /// Fit as many whole cells of `pitch` pixels as the viewport holds
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` when the pitch is zero or the viewport is
    /// smaller than one cell
    pub fn from_viewport(width_px: usize, height_px: usize, pitch: usize) -> Result<Self> {
        if pitch == 0 {
            return Err(invalid_parameter("pixel", &pitch, &"must be at least 1"));
        }
        Self::new(height_px / pitch, width_px / pitch)
    }

    /// Number of rows
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns
    pub const fn cols(&self) -> usize {
        self.cols
    }
}

/// Grid plus algorithm selection
///
/// The endpoints live on the grid; a board always has both placed.
#[derive(Debug, Clone)]
pub struct Board {
    grid: Grid,
    algorithm: Algorithm,
}

impl Board {
    /// Render a fresh board with randomly placed source and target
    ///
    /// The target lands on a different cell from the source whenever the
    /// grid has more than one cell.
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` if the chooser leads to an endpoint outside the
    /// grid
    pub fn render(dimensions: BoardDimensions, chooser: &mut impl Chooser) -> Result<Self> {
        let cells = dimensions.rows() * dimensions.cols();
        let cols = dimensions.cols();

        let source_index = chooser.choose(cells).min(cells - 1);
        let target_index = if cells > 1 {
            let index = chooser.choose(cells - 1).min(cells - 2);
            if index >= source_index { index + 1 } else { index }
        } else {
            source_index
        };

        let source = Coordinate::new(source_index / cols, source_index % cols);
        let target = Coordinate::new(target_index / cols, target_index % cols);
        let board = Self::with_endpoints(dimensions, source, target)?;

        info!(
            "Rendered {}x{} board, source {source}, target {target}",
            dimensions.rows(),
            dimensions.cols()
        );
        Ok(board)
    }

    /// Build a board with explicit endpoints
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` if either endpoint lies outside the grid
    pub fn with_endpoints(
        dimensions: BoardDimensions,
        source: Coordinate,
        target: Coordinate,
    ) -> Result<Self> {
        let mut grid = Grid::new(dimensions.rows(), dimensions.cols());
        grid.set_source(source)?;
        grid.set_target(target)?;
        Ok(Self {
            grid,
            algorithm: Algorithm::default(),
        })
    }

    /// Replace the grid with a freshly rendered one of new dimensions
    ///
    /// Walls are discarded and endpoints re-placed at random; the algorithm
    /// selection is kept.
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` if rendering fails; the board is left unchanged
    pub fn rerender(
        &mut self,
        dimensions: BoardDimensions,
        chooser: &mut impl Chooser,
    ) -> Result<()> {
        let algorithm = self.algorithm;
        *self = Self::render(dimensions, chooser)?;
        self.algorithm = algorithm;
        Ok(())
    }

    /// Read-only view of the grid
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Current source location
    pub fn source(&self) -> Coordinate {
        self.grid.source().unwrap_or_default()
    }

    /// Current target location
    pub fn target(&self) -> Coordinate {
        self.grid.target().unwrap_or_default()
    }

    /// Selected algorithm
    pub const fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Select an algorithm by menu label
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` for names other than BFS
    pub fn select_algorithm(&mut self, label: &str) -> Result<Algorithm> {
        self.algorithm = label.parse()?;
        Ok(self.algorithm)
    }

    /// Wall a cell, as when dragging across the board
    ///
    /// Returns whether the cell changed; endpoints are left open.
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` if `coord` is outside the grid
    pub fn paint_wall(&mut self, coord: Coordinate) -> Result<bool> {
        self.grid.set_wall(coord, true)
    }

    /// Remove a wall
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` if `coord` is outside the grid
    pub fn erase_wall(&mut self, coord: Coordinate) -> Result<bool> {
        self.grid.set_wall(coord, false)
    }

    /// Flip a wall, as when clicking a cell
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` if `coord` is outside the grid
    pub fn toggle_wall(&mut self, coord: Coordinate) -> Result<bool> {
        self.grid.toggle_wall(coord)
    }

    /// Drag the source to `coord`, clearing any wall there
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` if `coord` is outside the grid; the source stays put
    pub fn move_source(&mut self, coord: Coordinate) -> Result<()> {
        self.grid.set_source(coord)?;
        debug!("Source moved to {coord}");
        Ok(())
    }

    /// Drag the target to `coord`, clearing any wall there
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` if `coord` is outside the grid; the target stays put
    pub fn move_target(&mut self, coord: Coordinate) -> Result<()> {
        self.grid.set_target(coord)?;
        debug!("Target moved to {coord}");
        Ok(())
    }

    /// Remove every wall; endpoints stay where they are
    pub fn clear_board(&mut self) {
        self.grid.clear_walls();
    }

    /// Search from source to target with the selected algorithm
    pub fn run_pathfind(&self) -> SearchOutcome {
        match self.algorithm {
            Algorithm::Bfs => breadth_first_search(&self.grid, self.source(), self.target()),
        }
    }

    /// Generate a maze over the whole board
    ///
    /// Existing walls stay. Returns newly walled cells in placement order.
    pub fn run_maze_generation(&mut self, chooser: &mut impl Chooser) -> Vec<Coordinate> {
        generate_maze(&mut self.grid, chooser)
    }
}
