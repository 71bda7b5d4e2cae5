//! Actions: which hand slot to play, and where.
//!
//! There is exactly one kind of move in this game. A presentation layer
//! collects the two choices from the acting player and submits them as an
//! `Action`; a rejected action means "ask again".

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::player::PlayerId;
use crate::board::Position;

/// Play the card in `slot` onto the cell at `position`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Action {
    /// Hand slot of the card to play.
    pub slot: usize,
    /// Target cell.
    pub position: Position,
}

impl Action {
    #[must_use]
    pub const fn play(slot: usize, position: Position) -> Self {
        Self { slot, position }
    }
}

/// A completed action with what it caused.
///
/// Used for replays and debugging.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The player who took this action.
    pub player: PlayerId,

    /// The action taken.
    pub action: Action,

    /// Turn number when the action was taken (starts at 1).
    pub turn: u32,

    /// Cells that changed owner as a result.
    pub captured: SmallVec<[Position; 4]>,
}

impl ActionRecord {
    #[must_use]
    pub fn new(player: PlayerId, action: Action, turn: u32, captured: &[Position]) -> Self {
        Self {
            player,
            action,
            turn,
            captured: SmallVec::from_slice(captured),
        }
    }
}
