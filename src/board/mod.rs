//! The 3x3 board and its capture rule.
//!
//! ## Key Types
//!
//! - `Position`: a cell coordinate that is always on the board
//! - `Board`: grid of optional cards; placement, queries, majority count
//! - `Capture`: one neighbor that changed owner after a placement

mod capture;
mod grid;
mod position;

pub use capture::{Capture, Captures};
pub use grid::{Board, PlacementRejected, MAJORITY};
pub use position::{Position, BOARD_SIZE, CELL_COUNT};
