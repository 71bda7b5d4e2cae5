//! Capture resolution.
//!
//! Runs once, right after a card lands. For each orthogonal neighbor that
//! holds a card, the placed card's facing value on the shared edge is
//! compared with the neighbor's opposite facing value:
//!
//! | Neighbor | Captured when |
//! |---|---|
//! | above | `placed.up > neighbor.down` |
//! | below | `placed.down > neighbor.up` |
//! | left | `placed.left > neighbor.right` |
//! | right | `placed.right > neighbor.left` |
//!
//! A captured neighbor takes the placed card's owner. Captures do not chain:
//! a flipped card's own neighbors are not re-examined, and the placed card
//! itself never changes owner here.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::{debug, trace};

use super::grid::Board;
use super::position::Position;
use crate::cards::Side;
use crate::core::player::Color;

/// A neighbor that changed hands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Capture {
    /// Cell of the captured card.
    pub position: Position,
    /// Owner before the capture.
    pub from: Color,
    /// Owner after the capture.
    pub to: Color,
}

/// Captures from a single placement. At most four.
pub type Captures = SmallVec<[Capture; 4]>;

/// Resolve captures around the card just placed at `at`.
///
/// A beaten neighbor that already belongs to the placer keeps its owner and
/// is not reported.
pub(super) fn resolve_captures(board: &mut Board, at: Position) -> Captures {
    let mut captures = Captures::new();

    let Some(placed) = board.card_at(at).cloned() else {
        return captures;
    };

    for side in Side::ALL {
        let Some(neighbor_pos) = at.neighbor(side) else {
            continue;
        };
        let Some(neighbor) = board.card_at_mut(neighbor_pos) else {
            continue;
        };

        trace!(
            %at,
            neighbor = %neighbor_pos,
            ?side,
            attack = placed.value(side),
            defend = neighbor.value(side.opposite()),
            "compare"
        );

        if !placed.beats(neighbor, side) {
            continue;
        }

        let from = neighbor.owner();
        neighbor.set_owner(placed.owner());
        if from != placed.owner() {
            debug!(position = %neighbor_pos, %from, to = %placed.owner(), "captured");
            captures.push(Capture {
                position: neighbor_pos,
                from,
                to: placed.owner(),
            });
        }
    }

    captures
}
