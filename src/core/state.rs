//! Game state.
//!
//! Everything that changes during play lives here:
//! - The board
//! - Both players and their hands
//! - Whose turn it is and the turn counter
//! - Action history
//! - The RNG hands are dealt from
//!
//! The rules (`GridGame`) are kept separately and read or mutate a
//! `GameState` passed in by the caller.

use im::Vector;

use super::action::ActionRecord;
use super::player::{Player, PlayerId, PlayerMap};
use super::rng::GameRng;
use crate::board::Board;

/// Complete state of one game session.
#[derive(Clone, Debug)]
pub struct GameState {
    /// The grid.
    pub board: Board,

    /// Seated players, in turn order.
    pub players: PlayerMap<Player>,

    /// Whose turn it is.
    pub active_player: PlayerId,

    /// Turn number (starts at 1, increments after each placement).
    pub turn_number: u32,

    /// Every accepted action, oldest first.
    pub history: Vector<ActionRecord>,

    /// Source of all randomness.
    pub rng: GameRng,
}

impl GameState {
    /// Create a state around already-dealt players.
    #[must_use]
    pub fn new(players: PlayerMap<Player>, rng: GameRng) -> Self {
        Self {
            board: Board::new(),
            players,
            active_player: PlayerId::new(0),
            turn_number: 1,
            history: Vector::new(),
            rng,
        }
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.player_count()
    }

    #[must_use]
    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id]
    }

    pub fn player_mut(&mut self, id: PlayerId) -> &mut Player {
        &mut self.players[id]
    }

    /// The player whose turn it is.
    #[must_use]
    pub fn active(&self) -> &Player {
        &self.players[self.active_player]
    }

    /// Pass the turn to the next seat.
    pub fn advance_turn(&mut self) {
        self.active_player = self.active_player.next(self.player_count());
        self.turn_number += 1;
    }

    /// Record an accepted action.
    pub fn record_action(&mut self, record: ActionRecord) {
        self.history.push_back(record);
    }

    /// Clear the board and history; first seat to move on turn 1.
    ///
    /// Hands are left alone.
    pub fn reset(&mut self) {
        self.board.reset_board();
        self.active_player = PlayerId::new(0);
        self.turn_number = 1;
        self.history.clear();
    }
}
