//! Animated GIF replay of maze walls, search exploration and the shortest path

use std::fs::File;
use std::path::Path;

use image::codecs::gif::GifEncoder;
use image::{Delay, Frame, RgbaImage};
use log::info;

use crate::algorithm::search::SearchOutcome;
use crate::io::configuration::{
    BASE_STEP_DELAY_MS, FINAL_FRAME_HOLD, PATH_DELAY_FACTOR, PATH_COLOR, Speed,
    VIEWER_MIN_FRAME_DELAY_MS, VISITED_COLOR, WALL_COLOR,
};
use crate::io::error::{GridError, Result, invalid_parameter};
use crate::io::image::{blank_canvas, create_parent_dir, ensure_renderable, paint_cell, paint_grid};
use crate::io::progress::ProgressManager;
use crate::spatial::{Coordinate, Grid};

/// What a step turns a cell into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellMark {
    /// Newly placed maze wall
    Wall,
    /// Cell explored by the search
    Visited,
    /// Cell on the shortest path
    Path,
}

impl CellMark {
    /// Colour the cell takes once the step is shown
    pub const fn color(self) -> [u8; 4] {
        match self {
            Self::Wall => WALL_COLOR,
            Self::Visited => VISITED_COLOR,
            Self::Path => PATH_COLOR,
        }
    }
}

/// One cell change in the replay
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationStep {
    /// Cell being changed
    pub coordinate: Coordinate,
    /// New appearance
    pub mark: CellMark,
    /// Time to wait after the previous step
    pub delay_ms: f64,
}

/// Captures output sequences for replay as an animation
///
/// Steps replay in recording order on top of the grid as it looked before
/// recording started. Source and target cells are never painted over.
pub struct VisualizationCapture {
    base: Grid,
    steps: Vec<AnimationStep>,
    speed: Speed,
}

impl VisualizationCapture {
    /// Start a capture from the current look of `grid`
    pub fn new(grid: &Grid, speed: Speed) -> Self {
        Self {
            base: grid.clone(),
            steps: Vec::new(),
            speed,
        }
    }

    fn record(&mut self, coordinates: impl IntoIterator<Item = Coordinate>, mark: CellMark) {
        let factor = if mark == CellMark::Path {
            PATH_DELAY_FACTOR
        } else {
            1.0
        };
        let delay_ms = BASE_STEP_DELAY_MS * factor * self.speed.delay_multiplier();

        self.steps
            .extend(coordinates.into_iter().map(|coordinate| AnimationStep {
                coordinate,
                mark,
                delay_ms,
            }));
    }

    /// Records maze walls in placement order
    pub fn record_walls(&mut self, walls: &[Coordinate]) {
        self.record(walls.iter().copied(), CellMark::Wall);
    }

    /// Records the exploration order, then the path from source to target
    pub fn record_search(&mut self, outcome: &SearchOutcome) {
        self.record(outcome.visited.iter().copied(), CellMark::Visited);
        self.record(outcome.path_from_source(), CellMark::Path);
    }

    /// Returns all recorded steps
    pub fn steps(&self) -> &[AnimationStep] {
        &self.steps
    }

    /// Returns the total number of recorded steps
    pub const fn step_count(&self) -> usize {
        self.steps.len()
    }

    /// Sum of all step delays
    pub fn total_duration_ms(&self) -> f64 {
        self.steps.iter().map(|step| step.delay_ms).sum()
    }

    /// Group steps into frames viewers can display
    ///
    /// Consecutive steps are merged until their combined delay reaches the
    /// viewer minimum, which keeps the apparent speed while dropping frames
    /// no viewer would show. Each entry is (exclusive end step index, frame
    /// delay in milliseconds).
    pub fn frame_plan(&self) -> Vec<(usize, u32)> {
        let minimum = f64::from(VIEWER_MIN_FRAME_DELAY_MS);
        let mut plan = Vec::new();
        let mut pending = 0.0;

        for (index, step) in self.steps.iter().enumerate() {
            pending += step.delay_ms;
            if pending >= minimum {
                plan.push((index + 1, pending.round() as u32));
                pending = 0.0;
            }
        }

        if pending > 0.0 {
            plan.push((self.steps.len(), VIEWER_MIN_FRAME_DELAY_MS));
        }

        plan
    }

    /// Number of frames an export writes: the opening frame, one per plan
    /// entry and the held final frame
    pub fn frame_count(&self) -> usize {
        self.frame_plan().len() + 2
    }

    /// Frames of the replay, rendered one at a time on a single canvas
    pub fn frames(&self) -> FrameStream<'_> {
        let mut canvas = blank_canvas(&self.base);
        paint_grid(&mut canvas, &self.base);

        FrameStream {
            capture: self,
            canvas,
            plan: self.frame_plan().into_iter(),
            shown: 0,
            stage: StreamStage::Opening,
        }
    }

    /// Export the replay as an animated GIF
    ///
    /// Frames are encoded as they are rendered, so memory use stays at one
    /// canvas regardless of the number of steps.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No steps were captured
    /// - The grid is empty or too large for a GIF frame
    /// - File system operations fail
    /// - GIF encoding fails
    pub fn export_gif(&self, output_path: &Path, progress: &ProgressManager) -> Result<()> {
        if self.steps.is_empty() {
            return Err(invalid_parameter(
                "animation",
                &0,
                &"no steps captured for visualization",
            ));
        }
        ensure_renderable(self.base.rows(), self.base.cols())?;

        create_parent_dir(output_path)?;
        let file = File::create(output_path).map_err(|e| GridError::FileSystem {
            path: output_path.to_path_buf(),
            operation: "create file",
            source: e,
        })?;

        let mut encoder = GifEncoder::new(file);
        progress.start("Rendering", self.frame_count());

        let mut frame_count = 0_usize;
        for frame in self.frames() {
            encoder
                .encode_frame(frame)
                .map_err(|e| GridError::ImageExport {
                    path: output_path.to_path_buf(),
                    source: e,
                })?;
            frame_count += 1;
            progress.advance();
        }
        progress.finish();

        info!(
            "Animation with {frame_count} frames written to {}",
            output_path.display()
        );
        Ok(())
    }

    fn frame(canvas: &RgbaImage, delay_ms: u32) -> Frame {
        Frame::from_parts(
            canvas.clone(),
            0,
            0,
            Delay::from_numer_denom_ms(delay_ms, 1),
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StreamStage {
    Opening,
    Replay,
    Hold,
    Done,
}

/// Lazily rendered replay frames
///
/// Each frame is a snapshot of one shared canvas after the next group of
/// steps is painted. Source and target cells keep their own colours.
pub struct FrameStream<'a> {
    capture: &'a VisualizationCapture,
    canvas: RgbaImage,
    plan: std::vec::IntoIter<(usize, u32)>,
    shown: usize,
    stage: StreamStage,
}

impl Iterator for FrameStream<'_> {
    type Item = Frame;

    fn next(&mut self) -> Option<Frame> {
        match self.stage {
            StreamStage::Opening => {
                self.stage = StreamStage::Replay;
                Some(VisualizationCapture::frame(
                    &self.canvas,
                    VIEWER_MIN_FRAME_DELAY_MS,
                ))
            }
            StreamStage::Replay => {
                let Some((end, delay_ms)) = self.plan.next() else {
                    self.stage = StreamStage::Hold;
                    return self.next();
                };
                let base = &self.capture.base;
                for step in self.capture.steps.get(self.shown..end).unwrap_or_default() {
                    if !base.is_endpoint(step.coordinate) {
                        paint_cell(&mut self.canvas, step.coordinate, step.mark.color());
                    }
                }
                self.shown = end;
                Some(VisualizationCapture::frame(&self.canvas, delay_ms))
            }
            // Final frame displays longer for better visibility
            StreamStage::Hold => {
                self.stage = StreamStage::Done;
                Some(VisualizationCapture::frame(
                    &self.canvas,
                    VIEWER_MIN_FRAME_DELAY_MS * FINAL_FRAME_HOLD,
                ))
            }
            StreamStage::Done => None,
        }
    }
}
