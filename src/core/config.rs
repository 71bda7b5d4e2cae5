//! Game configuration.
//!
//! A `GameConfig` names the two players, their colors, the hand size and the
//! strength range cards are dealt from. The defaults reproduce the classic
//! setup: Red against Blue, five cards each, strengths 1 to 10.
//!
//! Configs are plain serde data so a front end can load them from wherever
//! it likes; `validate` is the single gate before a game is built.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use super::error::{GameError, Result};
use super::player::Color;
use crate::board::CELL_COUNT;
use crate::cards::{DEFAULT_HAND_SIZE, MAX_STRENGTH, MIN_STRENGTH};

/// Number of players in a game.
pub const PLAYER_COUNT: usize = 2;

/// One seat at the table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerConfig {
    /// Display name.
    pub name: String,
    /// Owner tag for this player's cards.
    pub color: Color,
}

impl PlayerConfig {
    pub fn new(name: impl Into<String>, color: Color) -> Self {
        Self {
            name: name.into(),
            color,
        }
    }
}

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Seats in turn order. The first entry moves first.
    pub players: Vec<PlayerConfig>,
    /// Cards dealt to each player.
    pub hand_size: usize,
    /// Lowest strength a dealt card may have.
    pub min_strength: u8,
    /// Highest strength a dealt card may have.
    pub max_strength: u8,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            players: vec![
                PlayerConfig::new("Red", Color::Red),
                PlayerConfig::new("Blue", Color::Blue),
            ],
            hand_size: DEFAULT_HAND_SIZE,
            min_strength: MIN_STRENGTH,
            max_strength: MAX_STRENGTH,
        }
    }
}

impl GameConfig {
    /// Strength range cards are dealt from.
    #[must_use]
    pub fn strengths(&self) -> RangeInclusive<u8> {
        self.min_strength..=self.max_strength
    }

    /// Check that a game built from this config can always be played out.
    pub fn validate(&self) -> Result<()> {
        if self.players.len() != PLAYER_COUNT {
            return Err(GameError::InvalidConfig(format!(
                "expected {PLAYER_COUNT} players, got {}",
                self.players.len()
            )));
        }

        for (i, a) in self.players.iter().enumerate() {
            if self.players[i + 1..].iter().any(|b| b.color == a.color) {
                return Err(GameError::InvalidConfig(format!(
                    "color {} is used by more than one player",
                    a.color
                )));
            }
        }

        if self.min_strength < MIN_STRENGTH || self.max_strength > MAX_STRENGTH {
            return Err(GameError::InvalidConfig(format!(
                "strengths must lie within {MIN_STRENGTH}..={MAX_STRENGTH}"
            )));
        }
        if self.min_strength > self.max_strength {
            return Err(GameError::InvalidConfig(format!(
                "min strength {} exceeds max strength {}",
                self.min_strength, self.max_strength
            )));
        }

        // The first player places the odd cell, so needs the larger share.
        let needed = CELL_COUNT.div_ceil(PLAYER_COUNT);
        if self.hand_size < needed {
            return Err(GameError::InvalidConfig(format!(
                "hand size {} cannot cover {needed} placements",
                self.hand_size
            )));
        }
        if self.hand_size > CELL_COUNT {
            return Err(GameError::InvalidConfig(format!(
                "hand size {} exceeds the {CELL_COUNT} board cells",
                self.hand_size
            )));
        }

        Ok(())
    }
}
