//! Board coordinates.
//!
//! Rows grow downward and columns grow rightward: `(0, 0)` is the top-left
//! cell, `(row - 1, col)` is the cell above. A `Position` is always on the
//! board, so board operations never need a bounds check.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cards::Side;
use crate::core::error::{GameError, Result};

/// Width and height of the board.
pub const BOARD_SIZE: usize = 3;

/// Number of cells on the board.
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// A cell on the 3x3 board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "(usize, usize)", into = "(usize, usize)")]
pub struct Position {
    row: u8,
    col: u8,
}

impl Position {
    /// Create a position.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is not below 3.
    #[must_use]
    pub fn new(row: usize, col: usize) -> Self {
        match Self::try_new(row, col) {
            Ok(pos) => pos,
            Err(err) => panic!("{err}"),
        }
    }

    /// Create a position, rejecting coordinates off the board.
    pub fn try_new(row: usize, col: usize) -> Result<Self> {
        if row >= BOARD_SIZE || col >= BOARD_SIZE {
            return Err(GameError::OutOfRange { row, col });
        }
        Ok(Self {
            row: row as u8,
            col: col as u8,
        })
    }

    /// Position from a row-major index in `0..9`.
    pub fn from_index(index: usize) -> Result<Self> {
        Self::try_new(index / BOARD_SIZE, index % BOARD_SIZE)
    }

    /// Row-major index in `0..9`.
    #[must_use]
    pub fn index(self) -> usize {
        self.row() * BOARD_SIZE + self.col()
    }

    #[must_use]
    pub fn row(self) -> usize {
        self.row as usize
    }

    #[must_use]
    pub fn col(self) -> usize {
        self.col as usize
    }

    /// The adjacent cell across `side`, if it is on the board.
    #[must_use]
    pub fn neighbor(self, side: Side) -> Option<Self> {
        let (row, col) = (self.row(), self.col());
        let (row, col) = match side {
            Side::Up => (row.checked_sub(1)?, col),
            Side::Down => (row + 1, col),
            Side::Left => (row, col.checked_sub(1)?),
            Side::Right => (row, col + 1),
        };
        Self::try_new(row, col).ok()
    }

    /// Every cell, row-major.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..CELL_COUNT).map(|i| Self {
            row: (i / BOARD_SIZE) as u8,
            col: (i % BOARD_SIZE) as u8,
        })
    }
}

impl TryFrom<(usize, usize)> for Position {
    type Error = GameError;

    fn try_from((row, col): (usize, usize)) -> Result<Self> {
        Self::try_new(row, col)
    }
}

impl From<Position> for (usize, usize) {
    fn from(pos: Position) -> Self {
        (pos.row(), pos.col())
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
