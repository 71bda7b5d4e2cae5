//! The 3x3 board.

use std::fmt;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use super::capture::{resolve_captures, Captures};
use super::position::{Position, BOARD_SIZE, CELL_COUNT};
use crate::cards::Card;
use crate::core::error::GameError;
use crate::core::player::{Color, Player};

/// Cells a color must own to win: a strict majority of the board.
pub const MAJORITY: usize = CELL_COUNT / 2 + 1;

/// A placement onto an occupied cell. The card is handed back untouched.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
#[error("cell {position} is already occupied")]
pub struct PlacementRejected {
    pub position: Position,
    pub card: Card,
}

impl From<PlacementRejected> for GameError {
    fn from(rejected: PlacementRejected) -> Self {
        GameError::CellOccupied(rejected.position)
    }
}

/// Grid of optional cards. Occupied cells stay occupied until
/// [`Board::reset_board`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cells: [[Option<Card>; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// An empty board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_position_empty(&self, position: Position) -> bool {
        self.card_at(position).is_none()
    }

    #[must_use]
    pub fn card_at(&self, position: Position) -> Option<&Card> {
        self.cells[position.row()][position.col()].as_ref()
    }

    pub(super) fn card_at_mut(&mut self, position: Position) -> Option<&mut Card> {
        self.cells[position.row()][position.col()].as_mut()
    }

    /// Put a card on an empty cell and resolve captures around it.
    ///
    /// An occupied cell rejects the card and leaves the board unchanged.
    pub fn place_card(
        &mut self,
        card: Card,
        position: Position,
    ) -> Result<Captures, PlacementRejected> {
        let cell = &mut self.cells[position.row()][position.col()];
        if cell.is_some() {
            return Err(PlacementRejected { position, card });
        }

        debug!(%position, %card, owner = %card.owner(), "placed");
        *cell = Some(card);

        Ok(resolve_captures(self, position))
    }

    /// Number of occupied cells.
    #[must_use]
    pub fn occupied_count(&self) -> usize {
        self.cards().count()
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.occupied_count() == CELL_COUNT
    }

    /// Empty cells, row-major.
    pub fn empty_positions(&self) -> impl Iterator<Item = Position> + '_ {
        Position::all().filter(move |&pos| self.is_position_empty(pos))
    }

    /// Occupied cells with their cards, row-major.
    pub fn cards(&self) -> impl Iterator<Item = (Position, &Card)> {
        Position::all().filter_map(move |pos| self.card_at(pos).map(|card| (pos, card)))
    }

    /// Cells currently owned by `color`.
    #[must_use]
    pub fn count_owned(&self, color: Color) -> usize {
        self.cards().filter(|(_, card)| card.owner() == color).count()
    }

    /// Owned-cell count for every color on the board.
    #[must_use]
    pub fn tally(&self) -> FxHashMap<Color, usize> {
        let mut counts = FxHashMap::default();
        for (_, card) in self.cards() {
            *counts.entry(card.owner()).or_insert(0) += 1;
        }
        counts
    }

    /// Does `player` own a majority of the board?
    #[must_use]
    pub fn check_winner(&self, player: &Player) -> bool {
        self.count_owned(player.color()) >= MAJORITY
    }

    /// Clear every cell.
    pub fn reset_board(&mut self) {
        self.cells = Default::default();
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.cells {
            let line: Vec<String> = row
                .iter()
                .map(|cell| match cell {
                    Some(card) => format!("{}{}", card.owner().initial(), card),
                    None => format!("{:^13}", "."),
                })
                .collect();
            writeln!(f, "{}", line.join(" | "))?;
        }
        Ok(())
    }
}
