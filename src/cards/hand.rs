//! A player's hand: a fixed row of slots, emptied as cards are played.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::card::Card;
use crate::core::player::Color;
use crate::core::rng::GameRng;

/// Number of cards dealt to each player by default.
pub const DEFAULT_HAND_SIZE: usize = 5;

/// Hand slots. A played slot stays `None` until the next deal.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand {
    slots: SmallVec<[Option<Card>; DEFAULT_HAND_SIZE]>,
}

impl Hand {
    /// Deal `size` random cards owned by `owner`.
    pub fn deal(
        rng: &mut GameRng,
        size: usize,
        strengths: RangeInclusive<u8>,
        owner: Color,
    ) -> Self {
        let slots = (0..size)
            .map(|_| Some(Card::random(rng, strengths.clone(), owner)))
            .collect();
        Self { slots }
    }

    /// Build a hand from explicit cards.
    #[must_use]
    pub fn from_cards(cards: impl IntoIterator<Item = Card>) -> Self {
        Self {
            slots: cards.into_iter().map(Some).collect(),
        }
    }

    /// Number of slots, played or not.
    #[must_use]
    pub fn size(&self) -> usize {
        self.slots.len()
    }

    /// Card in a slot, or `None` if played or out of range.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Card> {
        self.slots.get(index).and_then(Option::as_ref)
    }

    /// Clear a slot, returning its card. Clearing twice yields `None`.
    pub fn remove(&mut self, index: usize) -> Option<Card> {
        self.slots.get_mut(index).and_then(Option::take)
    }

    /// Indices of slots still holding a card.
    pub fn playable_slots(&self) -> impl Iterator<Item = usize> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.as_ref().map(|_| i))
    }

    /// Number of cards left to play.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    /// Iterate over all slots.
    pub fn iter(&self) -> impl Iterator<Item = Option<&Card>> {
        self.slots.iter().map(Option::as_ref)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::card::{MAX_STRENGTH, MIN_STRENGTH};

    fn dealt() -> Hand {
        let mut rng = GameRng::new(5);
        Hand::deal(&mut rng, DEFAULT_HAND_SIZE, MIN_STRENGTH..=MAX_STRENGTH, Color::Red)
    }

    #[test]
    fn test_deal() {
        let hand = dealt();

        assert_eq!(hand.size(), 5);
        assert_eq!(hand.remaining(), 5);
        assert!(hand.iter().all(|c| c.is_some_and(|c| c.owner() == Color::Red)));
    }

    #[test]
    fn test_remove_is_idempotent() {
        let mut hand = dealt();
        let expected = hand.get(2).cloned();

        assert_eq!(hand.remove(2), expected);
        assert_eq!(hand.remove(2), None);
        assert_eq!(hand.get(2), None);
        assert_eq!(hand.size(), 5);
        assert_eq!(hand.remaining(), 4);
    }

    #[test]
    fn test_out_of_range_slot() {
        let mut hand = dealt();

        assert_eq!(hand.get(5), None);
        assert_eq!(hand.remove(99), None);
        assert_eq!(hand.remaining(), 5);
    }

    #[test]
    fn test_playable_slots() {
        let mut hand = dealt();
        hand.remove(0);
        hand.remove(3);

        let slots: Vec<_> = hand.playable_slots().collect();
        assert_eq!(slots, vec![1, 2, 4]);
    }

    #[test]
    fn test_from_cards() {
        let hand = Hand::from_cards([Card::new(1, 2, 3, 4, Color::Blue)]);

        assert_eq!(hand.size(), 1);
        assert_eq!(hand.get(0).map(Card::up), Some(1));
    }
}
