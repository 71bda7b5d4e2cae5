//! Card system: cards and hands.
//!
//! ## Key Types
//!
//! - `Card`: four fixed facing values plus a mutable owner
//! - `Side`: the four edges a card can face
//! - `Hand`: a player's slots, emptied as cards are played

pub mod card;
pub mod hand;

pub use card::{Card, Side, MAX_STRENGTH, MIN_STRENGTH};
pub use hand::{Hand, DEFAULT_HAND_SIZE};
