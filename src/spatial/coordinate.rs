//! Grid coordinates and the fixed four-neighbour expansion order

use std::fmt;
use std::str::FromStr;

use crate::io::error::GridError;

/// A `(row, col)` position on the grid
///
/// Ordering is row-major so coordinates sort the way cells are laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Coordinate {
    /// Zero-based row index
    pub row: usize,
    /// Zero-based column index
    pub col: usize,
}

impl Coordinate {
    /// Create a coordinate from a row and column
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Neighbouring coordinate one step in `direction`
    ///
    /// Returns `None` when the step would leave the non-negative quadrant.
    /// Upper bounds are the grid's concern, not the coordinate's.
    pub const fn step(self, direction: Direction) -> Option<Self> {
        let (row_delta, col_delta) = direction.delta();
        let Some(row) = self.row.checked_add_signed(row_delta) else {
            return None;
        };
        let Some(col) = self.col.checked_add_signed(col_delta) else {
            return None;
        };
        Some(Self { row, col })
    }

    /// All neighbours in expansion order, skipping those below zero
    pub fn neighbours(self) -> impl Iterator<Item = Self> {
        Direction::ALL
            .into_iter()
            .filter_map(move |direction| self.step(direction))
    }

    /// Manhattan distance to another coordinate
    pub const fn manhattan_distance(self, other: Self) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }

    /// Parse a `row,col` or `row-col` pair
    ///
    /// # Errors
    ///
    /// Returns an `InvalidParameter` error when the text is not two
    /// non-negative integers separated by a comma or hyphen
    pub fn parse(text: &str) -> crate::Result<Self> {
        let malformed = || {
            crate::io::error::invalid_parameter(
                "coordinate",
                &text,
                &"expected two non-negative integers as `row,col`",
            )
        };

        let (row, col) = text
            .split_once(',')
            .or_else(|| text.split_once('-'))
            .ok_or_else(malformed)?;
        let row = row.trim().parse().map_err(|_parse| malformed())?;
        let col = col.trim().parse().map_err(|_parse| malformed())?;
        Ok(Self { row, col })
    }
}

impl From<(usize, usize)> for Coordinate {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

impl FromStr for Coordinate {
    type Err = GridError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        Self::parse(text)
    }
}

// Matches the `row-col` cell key format used by the board markup
impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.row, self.col)
    }
}

/// One of the four orthogonal moves
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Towards row zero
    Up,
    /// Towards the last column
    Right,
    /// Towards the last row
    Down,
    /// Towards column zero
    Left,
}

impl Direction {
    /// Expansion order for breadth-first search
    ///
    /// Breaks ties between equally short paths and fixes the visited order.
    pub const ALL: [Self; 4] = [Self::Up, Self::Right, Self::Down, Self::Left];

    /// Row and column offsets for this move
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Self::Up => (-1, 0),
            Self::Right => (0, 1),
            Self::Down => (1, 0),
            Self::Left => (0, -1),
        }
    }
}
