//! Error types for the engine.
//!
//! Every variant except the contract violations (`OutOfRange`,
//! `StrengthOutOfRange`) is recoverable: the caller asks the acting player
//! for another choice. No error leaves the game state partially modified.

use thiserror::Error;

use super::player::PlayerId;
use crate::board::Position;

/// Errors that can occur while configuring or playing a game.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum GameError {
    #[error("cell {0} is already occupied")]
    CellOccupied(Position),

    #[error("hand slot {slot} holds no playable card")]
    InvalidSelection { slot: usize },

    #[error("coordinates ({row}, {col}) are outside the 3x3 board")]
    OutOfRange { row: usize, col: usize },

    #[error("strength {0} is outside the valid card range")]
    StrengthOutOfRange(u8),

    #[error("it is {expected}'s turn, not {actual}'s")]
    NotYourTurn { expected: PlayerId, actual: PlayerId },

    #[error("the game is over")]
    GameOver,

    #[error("invalid game configuration: {0}")]
    InvalidConfig(String),
}

/// Convenience Result type for engine operations.
pub type Result<T> = std::result::Result<T, GameError>;
