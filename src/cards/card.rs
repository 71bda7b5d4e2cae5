//! Cards: four fixed facing values and a mutable owner.
//!
//! A card's strengths are set once when it is dealt. Only the owner tag
//! changes afterwards, and only through capture.

use std::fmt;
use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::core::error::{GameError, Result};
use crate::core::player::Color;
use crate::core::rng::GameRng;

/// Weakest facing value a card may have.
pub const MIN_STRENGTH: u8 = 1;

/// Strongest facing value a card may have.
pub const MAX_STRENGTH: u8 = 10;

/// One of the four edges of a card (and of a board cell).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Up,
    Down,
    Left,
    Right,
}

impl Side {
    /// All sides, in the order capture resolution visits them.
    pub const ALL: [Side; 4] = [Side::Up, Side::Down, Side::Left, Side::Right];

    /// The edge that faces this one across a shared border.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Side::Up => Side::Down,
            Side::Down => Side::Up,
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// A playing card.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "CardData")]
pub struct Card {
    up: u8,
    down: u8,
    left: u8,
    right: u8,
    owner: Color,
}

impl Card {
    /// Create a card.
    ///
    /// # Panics
    ///
    /// Panics if any strength is outside `MIN_STRENGTH..=MAX_STRENGTH`.
    #[must_use]
    pub fn new(up: u8, down: u8, left: u8, right: u8, owner: Color) -> Self {
        match Self::try_new(up, down, left, right, owner) {
            Ok(card) => card,
            Err(err) => panic!("{err}"),
        }
    }

    /// Create a card, rejecting strengths outside the valid range.
    pub fn try_new(up: u8, down: u8, left: u8, right: u8, owner: Color) -> Result<Self> {
        if let Some(&bad) = [up, down, left, right]
            .iter()
            .find(|v| !(MIN_STRENGTH..=MAX_STRENGTH).contains(*v))
        {
            return Err(GameError::StrengthOutOfRange(bad));
        }

        Ok(Self {
            up,
            down,
            left,
            right,
            owner,
        })
    }

    /// Deal a card with four independent uniform strengths from `strengths`.
    ///
    /// `strengths` must lie within `MIN_STRENGTH..=MAX_STRENGTH`; the game
    /// configuration guarantees this.
    pub fn random(rng: &mut GameRng, strengths: RangeInclusive<u8>, owner: Color) -> Self {
        Self::new(
            rng.gen_strength(strengths.clone()),
            rng.gen_strength(strengths.clone()),
            rng.gen_strength(strengths.clone()),
            rng.gen_strength(strengths),
            owner,
        )
    }

    #[must_use]
    pub fn up(&self) -> u8 {
        self.up
    }

    #[must_use]
    pub fn down(&self) -> u8 {
        self.down
    }

    #[must_use]
    pub fn left(&self) -> u8 {
        self.left
    }

    #[must_use]
    pub fn right(&self) -> u8 {
        self.right
    }

    /// Facing value on the given side.
    #[must_use]
    pub fn value(&self, side: Side) -> u8 {
        match side {
            Side::Up => self.up,
            Side::Down => self.down,
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    /// Current owner.
    #[must_use]
    pub fn owner(&self) -> Color {
        self.owner
    }

    /// Hand the card to a new owner.
    pub fn set_owner(&mut self, owner: Color) {
        self.owner = owner;
    }

    /// Does this card, facing `side`, beat `other` across that edge?
    ///
    /// Ties never win.
    #[must_use]
    pub fn beats(&self, other: &Card, side: Side) -> bool {
        self.value(side) > other.value(side.opposite())
    }
}

/// Unchecked wire form of a [`Card`].
#[derive(Deserialize)]
struct CardData {
    up: u8,
    down: u8,
    left: u8,
    right: u8,
    owner: Color,
}

impl TryFrom<CardData> for Card {
    type Error = GameError;

    fn try_from(data: CardData) -> Result<Self> {
        Self::try_new(data.up, data.down, data.left, data.right, data.owner)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}, {}, {}]", self.up, self.down, self.left, self.right)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_values() {
        let card = Card::new(1, 2, 3, 4, Color::Red);

        assert_eq!(card.up(), 1);
        assert_eq!(card.down(), 2);
        assert_eq!(card.left(), 3);
        assert_eq!(card.right(), 4);
        assert_eq!(card.value(Side::Left), 3);
        assert_eq!(card.owner(), Color::Red);
    }

    #[test]
    fn test_set_owner_keeps_values() {
        let mut card = Card::new(9, 8, 7, 6, Color::Red);
        card.set_owner(Color::Blue);
        card.set_owner(Color::Blue);

        assert_eq!(card.owner(), Color::Blue);
        assert_eq!(card.to_string(), "[9, 8, 7, 6]");
    }

    #[test]
    fn test_try_new_rejects_out_of_range() {
        assert_eq!(
            Card::try_new(0, 5, 5, 5, Color::Red),
            Err(GameError::StrengthOutOfRange(0))
        );
        assert_eq!(
            Card::try_new(5, 5, 5, 11, Color::Red),
            Err(GameError::StrengthOutOfRange(11))
        );
        assert!(Card::try_new(1, 10, 1, 10, Color::Red).is_ok());
    }

    #[test]
    #[should_panic(expected = "strength 11 is outside")]
    fn test_new_panics_out_of_range() {
        let _ = Card::new(11, 1, 1, 1, Color::Blue);
    }

    #[test]
    fn test_serde_rejects_out_of_range() {
        let card = Card::new(3, 10, 1, 7, Color::Blue);
        let json = serde_json::to_string(&card).unwrap();
        assert_eq!(serde_json::from_str::<Card>(&json).unwrap(), card);

        let zero = r#"{"up":0,"down":5,"left":5,"right":5,"owner":"Red"}"#;
        let huge = r#"{"up":5,"down":200,"left":5,"right":5,"owner":"Red"}"#;
        let err = serde_json::from_str::<Card>(zero).unwrap_err();
        assert!(err.to_string().contains("strength 0 is outside"));
        assert!(serde_json::from_str::<Card>(huge).is_err());
    }

    #[test]
    fn test_opposite_sides() {
        for side in Side::ALL {
            assert_ne!(side, side.opposite());
            assert_eq!(side, side.opposite().opposite());
        }
    }

    #[test]
    fn test_beats_is_strict() {
        let attacker = Card::new(7, 1, 1, 1, Color::Red);
        let weaker = Card::new(1, 5, 1, 1, Color::Blue);
        let stronger = Card::new(1, 8, 1, 1, Color::Blue);
        let equal = Card::new(1, 7, 1, 1, Color::Blue);

        assert!(attacker.beats(&weaker, Side::Up));
        assert!(!attacker.beats(&stronger, Side::Up));
        assert!(!attacker.beats(&equal, Side::Up));
    }

    #[test]
    fn test_random_card_in_range() {
        let mut rng = GameRng::new(11);
        for _ in 0..200 {
            let card = Card::random(&mut rng, MIN_STRENGTH..=MAX_STRENGTH, Color::Blue);
            for side in Side::ALL {
                assert!((MIN_STRENGTH..=MAX_STRENGTH).contains(&card.value(side)));
            }
            assert_eq!(card.owner(), Color::Blue);
        }
    }
}
