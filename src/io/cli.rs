//! Command-line interface for running a search and exporting its animation

use crate::algorithm::board::{Board, BoardDimensions};
use crate::algorithm::random::RandomSelector;
use crate::io::configuration::{
    DEFAULT_CELL_PITCH, DEFAULT_OUTPUT, DEFAULT_VIEWPORT_HEIGHT, DEFAULT_VIEWPORT_WIDTH, Speed,
};
use crate::io::error::Result;
use crate::io::image::{ensure_renderable, export_snapshot};
use crate::io::progress::ProgressManager;
use crate::io::visualization::VisualizationCapture;
use crate::spatial::Coordinate;
use clap::Parser;
use log::info;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "gridpath")]
#[command(
    author,
    version,
    about = "Breadth-first search and recursive-division mazes on a grid, rendered as an animated GIF"
)]
/// Command-line arguments for the grid pathfinding tool
pub struct Cli {
    /// Number of grid rows (overrides the viewport height)
    #[arg(short, long)]
    pub rows: Option<usize>,

    /// Number of grid columns (overrides the viewport width)
    #[arg(short, long)]
    pub cols: Option<usize>,

    /// Viewport width in pixels
    #[arg(short = 'W', long, default_value_t = DEFAULT_VIEWPORT_WIDTH)]
    pub width: usize,

    /// Viewport height in pixels
    #[arg(short = 'H', long, default_value_t = DEFAULT_VIEWPORT_HEIGHT)]
    pub height: usize,

    /// Cell pitch in pixels used to fit the grid to the viewport
    #[arg(short, long, default_value_t = DEFAULT_CELL_PITCH)]
    pub pixel: usize,

    /// Random seed for reproducible endpoints and mazes
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Source cell as `row,col` (random when omitted)
    #[arg(long, value_name = "ROW,COL")]
    pub source: Option<Coordinate>,

    /// Target cell as `row,col` (random when omitted)
    #[arg(long, value_name = "ROW,COL")]
    pub target: Option<Coordinate>,

    /// Generate a recursive-division maze before searching
    #[arg(short, long)]
    pub maze: bool,

    /// Search algorithm, by menu label
    #[arg(short, long, default_value = "BFS")]
    pub algorithm: String,

    /// Animation speed: slow, normal or fast
    #[arg(long, default_value_t = Speed::Normal)]
    pub speed: Speed,

    /// Animated GIF output path
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Also write a PNG snapshot of the final board
    #[arg(long, value_name = "PATH")]
    pub snapshot: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Grid dimensions from explicit rows/cols or the viewport and pitch
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` for zero dimensions, a zero pitch, or a side
    /// longer than `MAX_GRID_DIMENSION`
    pub fn dimensions(&self) -> Result<BoardDimensions> {
        let fitted = BoardDimensions::from_viewport(self.width, self.height, self.pixel);
        let dimensions = match (self.rows, self.cols) {
            (Some(rows), Some(cols)) => BoardDimensions::new(rows, cols)?,
            (Some(rows), None) => BoardDimensions::new(rows, fitted?.cols())?,
            (None, Some(cols)) => BoardDimensions::new(fitted?.rows(), cols)?,
            (None, None) => fitted?,
        };

        ensure_renderable(dimensions.rows(), dimensions.cols())?;
        Ok(dimensions)
    }
}

/// Totals reported after a run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Walls placed by maze generation
    pub walls: usize,
    /// Cells explored by the search
    pub visited: usize,
    /// Steps on the shortest path, `None` when unreachable
    pub distance: Option<usize>,
}

/// Runs one board through maze generation, search and export
pub struct RunProcessor {
    cli: Cli,
    progress_manager: ProgressManager,
}

impl RunProcessor {
    /// Create a new processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = ProgressManager::for_mode(!cli.should_show_progress());

        Self {
            cli,
            progress_manager,
        }
    }

    /// Build the board, run the requested steps and write the outputs
    ///
    /// # Errors
    ///
    /// Returns an error if argument validation, endpoint placement or any
    /// export fails
    pub fn process(&self) -> Result<RunSummary> {
        let start_time = Instant::now();
        let dimensions = self.cli.dimensions()?;
        let mut selector = RandomSelector::from_seed_option(self.cli.seed);

        let mut board = Board::render(dimensions, &mut selector)?;
        board.select_algorithm(&self.cli.algorithm)?;
        if let Some(source) = self.cli.source {
            board.move_source(source)?;
        }
        if let Some(target) = self.cli.target {
            board.move_target(target)?;
        }

        let mut capture = VisualizationCapture::new(board.grid(), self.cli.speed);

        let walls = if self.cli.maze {
            let placed = board.run_maze_generation(&mut selector);
            capture.record_walls(&placed);
            placed.len()
        } else {
            0
        };

        let outcome = board.run_pathfind();
        capture.record_search(&outcome);

        capture.export_gif(&self.cli.output, &self.progress_manager)?;

        if let Some(ref snapshot) = self.cli.snapshot {
            export_snapshot(board.grid(), Some(&outcome), snapshot)?;
        }

        let summary = RunSummary {
            walls,
            visited: outcome.visited.len(),
            distance: outcome.distance(),
        };

        info!(
            "{} from {} to {}: {} walls, {} explored, distance {:?} in {:.2?}",
            board.algorithm(),
            board.source(),
            board.target(),
            summary.walls,
            summary.visited,
            summary.distance,
            start_time.elapsed()
        );

        Ok(summary)
    }
}
