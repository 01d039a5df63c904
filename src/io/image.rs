//! PNG snapshot of the board with search results overlaid

use std::path::Path;

use image::{Rgba, RgbaImage};
use log::info;

use crate::algorithm::search::SearchOutcome;
use crate::io::configuration::{
    MAX_GRID_DIMENSION, OPEN_COLOR, PATH_COLOR, RENDER_CELL_SIZE, SOURCE_COLOR, TARGET_COLOR, VISITED_COLOR,
    WALL_COLOR,
};
use crate::io::error::{GridError, Result, invalid_parameter};
use crate::spatial::{Coordinate, Grid};

/// Check that a `rows` x `cols` grid renders to a non-empty image a GIF can hold
///
/// # Errors
///
/// Returns `InvalidParameter` when either side is zero or longer than
/// `MAX_GRID_DIMENSION` cells
pub fn ensure_renderable(rows: usize, cols: usize) -> Result<()> {
    if rows == 0 || cols == 0 {
        return Err(invalid_parameter(
            "grid",
            &format!("{rows}x{cols}"),
            &"cannot render an empty grid",
        ));
    }
    if rows > MAX_GRID_DIMENSION || cols > MAX_GRID_DIMENSION {
        return Err(invalid_parameter(
            "grid",
            &format!("{rows}x{cols}"),
            &format!("each side must be at most {MAX_GRID_DIMENSION} cells"),
        ));
    }
    Ok(())
}

/// Blank canvas sized for `grid` at the render cell size
pub fn blank_canvas(grid: &Grid) -> RgbaImage {
    let width = grid.cols() as u32 * RENDER_CELL_SIZE;
    let height = grid.rows() as u32 * RENDER_CELL_SIZE;
    RgbaImage::from_pixel(width, height, Rgba(OPEN_COLOR))
}

/// Fill one cell's square with `color`
///
/// Cells beyond the canvas are ignored.
pub fn paint_cell(img: &mut RgbaImage, coord: Coordinate, color: [u8; 4]) {
    let x0 = coord.col as u32 * RENDER_CELL_SIZE;
    let y0 = coord.row as u32 * RENDER_CELL_SIZE;
    for y in y0..y0 + RENDER_CELL_SIZE {
        for x in x0..x0 + RENDER_CELL_SIZE {
            if let Some(pixel) = img.get_pixel_mut_checked(x, y) {
                *pixel = Rgba(color);
            }
        }
    }
}

/// Paint walls and endpoints of `grid`
pub fn paint_grid(img: &mut RgbaImage, grid: &Grid) {
    for wall in grid.walls() {
        paint_cell(img, wall, WALL_COLOR);
    }
    paint_endpoints(img, grid);
}

/// Paint source and target over whatever is beneath them
pub fn paint_endpoints(img: &mut RgbaImage, grid: &Grid) {
    if let Some(source) = grid.source() {
        paint_cell(img, source, SOURCE_COLOR);
    }
    if let Some(target) = grid.target() {
        paint_cell(img, target, TARGET_COLOR);
    }
}

/// Render the grid's final state, optionally with a search overlaid
pub fn render_snapshot(grid: &Grid, outcome: Option<&SearchOutcome>) -> RgbaImage {
    let mut img = blank_canvas(grid);
    paint_grid(&mut img, grid);

    if let Some(outcome) = outcome {
        for &coord in &outcome.visited {
            paint_cell(&mut img, coord, VISITED_COLOR);
        }
        for &coord in &outcome.path {
            paint_cell(&mut img, coord, PATH_COLOR);
        }
        paint_endpoints(&mut img, grid);
    }

    img
}

/// Export the board as a PNG image
///
/// # Errors
///
/// Returns an error if:
/// - The grid has no cells or is too large to render
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_snapshot(
    grid: &Grid,
    outcome: Option<&SearchOutcome>,
    output_path: &Path,
) -> Result<()> {
    ensure_renderable(grid.rows(), grid.cols())?;

    let img = render_snapshot(grid, outcome);
    create_parent_dir(output_path)?;

    img.save(output_path).map_err(|e| GridError::ImageExport {
        path: output_path.to_path_buf(),
        source: e,
    })?;

    info!("Snapshot written to {}", output_path.display());
    Ok(())
}

/// Create the directory that will hold `output_path`
///
/// # Errors
///
/// Returns `FileSystem` if the directory cannot be created
pub fn create_parent_dir(output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| GridError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }
    Ok(())
}
