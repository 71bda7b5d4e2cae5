//! Players: identity, color and hand.
//!
//! ## PlayerId
//!
//! Seat index used for turn order. The first player is `PlayerId(0)`.
//!
//! ## Color
//!
//! The owner tag carried by cards. Each player has a distinct color, and
//! board majority is counted by color.
//!
//! ## PlayerMap
//!
//! Per-player storage backed by a `Vec`, indexed by `PlayerId`.

use std::fmt;
use std::ops::{Index, IndexMut, RangeInclusive};

use serde::{Deserialize, Serialize};

use super::error::{GameError, Result};
use super::rng::GameRng;
use crate::cards::{Card, Hand, DEFAULT_HAND_SIZE, MAX_STRENGTH, MIN_STRENGTH};

/// Player seat identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Raw 0-based seat index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all seats of a game with `player_count` players.
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }

    /// Next seat in turn order.
    #[must_use]
    pub fn next(self, player_count: usize) -> Self {
        Self(((self.index() + 1) % player_count) as u8)
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Owner tag of a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Color {
    Red,
    Blue,
    Green,
    Yellow,
}

impl Color {
    /// Single-letter tag used when rendering the board.
    #[must_use]
    pub const fn initial(self) -> char {
        match self {
            Color::Red => 'R',
            Color::Blue => 'B',
            Color::Green => 'G',
            Color::Yellow => 'Y',
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Color::Red => "red",
            Color::Blue => "blue",
            Color::Green => "green",
            Color::Yellow => "yellow",
        };
        f.write_str(name)
    }
}

/// A participant: name, color and the cards still in hand.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    id: PlayerId,
    name: String,
    color: Color,
    hand: Hand,
}

impl Player {
    /// Create a player holding a fresh hand of five cards in `1..=10`.
    pub fn new(id: PlayerId, name: impl Into<String>, color: Color, rng: &mut GameRng) -> Self {
        Self::with_hand_size(id, name, color, DEFAULT_HAND_SIZE, MIN_STRENGTH..=MAX_STRENGTH, rng)
    }

    /// Create a player with a custom deal.
    pub fn with_hand_size(
        id: PlayerId,
        name: impl Into<String>,
        color: Color,
        hand_size: usize,
        strengths: RangeInclusive<u8>,
        rng: &mut GameRng,
    ) -> Self {
        let hand = Hand::deal(rng, hand_size, strengths, color);
        Self::with_hand(id, name, color, hand)
    }

    /// Create a player holding a prepared hand.
    pub fn with_hand(id: PlayerId, name: impl Into<String>, color: Color, hand: Hand) -> Self {
        Self {
            id,
            name: name.into(),
            color,
            hand,
        }
    }

    #[must_use]
    pub fn id(&self) -> PlayerId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn color(&self) -> Color {
        self.color
    }

    #[must_use]
    pub fn hand(&self) -> &Hand {
        &self.hand
    }

    /// Card in a hand slot, `None` if already played or out of range.
    #[must_use]
    pub fn card_at(&self, index: usize) -> Option<&Card> {
        self.hand.get(index)
    }

    /// Clear a hand slot. Removing an empty slot is a no-op.
    pub fn remove_card(&mut self, index: usize) -> Option<Card> {
        self.hand.remove(index)
    }

    /// Take the card out of a slot for play.
    pub fn take_card(&mut self, index: usize) -> Result<Card> {
        self.hand
            .remove(index)
            .ok_or(GameError::InvalidSelection { slot: index })
    }

    /// Replace the hand with a fresh deal of the same size.
    pub fn redeal(&mut self, rng: &mut GameRng, strengths: RangeInclusive<u8>) {
        self.hand = Hand::deal(rng, self.hand.size(), strengths, self.color);
    }
}

/// Per-player data storage with O(1) access.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: Vec<T>,
}

impl<T> PlayerMap<T> {
    /// Create a map with values from a factory function.
    pub fn new(player_count: usize, factory: impl FnMut(PlayerId) -> T) -> Self {
        assert!(player_count > 0, "Must have at least 1 player");
        assert!(player_count <= 255, "At most 255 players supported");

        let data = PlayerId::all(player_count).map(factory).collect();

        Self { data }
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.data.len()
    }

    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (PlayerId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }

    /// Iterate over (PlayerId, &mut T) pairs.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (PlayerId, &mut T)> {
        self.data
            .iter_mut()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}
