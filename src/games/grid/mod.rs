//! The 3x3 capture game.
//!
//! - Two players, five random cards each (strengths 1-10)
//! - Players alternate placing one card on an empty cell
//! - A placed card flips adjacent cards it beats on the shared edge
//! - When the board is full, whoever owns five or more cells wins

mod game;

pub use game::{GridGame, GridGameBuilder};
