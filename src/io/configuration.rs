//! Board, animation and output defaults

use std::fmt;
use std::str::FromStr;

use crate::io::error::{GridError, invalid_parameter};

// Board sizing
/// Default cell pitch in pixels
pub const DEFAULT_CELL_PITCH: usize = 22;
/// Cell pitches offered by the size menu
pub const CELL_PITCH_OPTIONS: [usize; 5] = [14, 18, 22, 26, 30];
/// Default viewport width in pixels
pub const DEFAULT_VIEWPORT_WIDTH: usize = 1320;
/// Default viewport height in pixels
pub const DEFAULT_VIEWPORT_HEIGHT: usize = 660;

// GIF frames are limited to 65535 pixels per side
/// Maximum grid dimension whose rendered side still fits a GIF frame
pub const MAX_GRID_DIMENSION: usize = u16::MAX as usize / RENDER_CELL_SIZE as usize;

// Animation timing
/// Delay between consecutive wall or visited cells at normal speed
pub const BASE_STEP_DELAY_MS: f64 = 6.0;
/// Path cells are revealed this many times slower than visited cells
pub const PATH_DELAY_FACTOR: f64 = 3.5;
/// Minimum frame delay that viewers reliably support (in milliseconds)
pub const VIEWER_MIN_FRAME_DELAY_MS: u32 = 20;
/// The final frame is held this many base frame delays
pub const FINAL_FRAME_HOLD: u32 = 50;

// Rendering
/// Side length of one cell in exported images, in pixels
pub const RENDER_CELL_SIZE: u32 = 8;
/// Open cell colour
pub const OPEN_COLOR: [u8; 4] = [255, 255, 255, 255];
/// Wall colour
pub const WALL_COLOR: [u8; 4] = [12, 53, 71, 255];
/// Explored cell colour
pub const VISITED_COLOR: [u8; 4] = [64, 206, 227, 255];
/// Shortest path colour
pub const PATH_COLOR: [u8; 4] = [255, 254, 106, 255];
/// Source colour
pub const SOURCE_COLOR: [u8; 4] = [34, 139, 34, 255];
/// Target colour
pub const TARGET_COLOR: [u8; 4] = [220, 20, 60, 255];

// Progress bar display settings
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;

// Output settings
/// Default animation output path
pub const DEFAULT_OUTPUT: &str = "gridpath.gif";

/// Animation speed preset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Speed {
    /// Twice the normal delay
    Slow,
    /// Base delay
    #[default]
    Normal,
    /// Half the normal delay
    Fast,
}

impl Speed {
    /// Multiplier applied to every step delay
    pub const fn delay_multiplier(self) -> f64 {
        match self {
            Self::Slow => 2.0,
            Self::Normal => 1.0,
            Self::Fast => 0.5,
        }
    }
}

impl fmt::Display for Speed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Slow => "slow",
            Self::Normal => "normal",
            Self::Fast => "fast",
        };
        write!(f, "{name}")
    }
}

impl FromStr for Speed {
    type Err = GridError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        match text.trim().to_ascii_lowercase().as_str() {
            "slow" => Ok(Self::Slow),
            "normal" => Ok(Self::Normal),
            "fast" => Ok(Self::Fast),
            _ => Err(invalid_parameter(
                "speed",
                &text,
                &"expected slow, normal or fast",
            )),
        }
    }
}
