//! # grid-duel
//!
//! A deterministic rules engine for a two-player card game on a 3x3 grid.
//!
//! Each card carries four facing values (up, down, left, right) in 1-10
//! and an owner color. Placing a card flips every orthogonal neighbor whose
//! facing value on the shared edge is strictly lower. Once all nine cells
//! are filled, the color holding five or more cells wins.
//!
//! ## Design Principles
//!
//! 1. **Rules apart from state**: `GridGame` holds configuration and
//!    implements `RulesEngine`; all mutable data lives in `GameState`.
//!
//! 2. **Injected randomness**: hands are dealt from a seeded `GameRng`, so a
//!    seed reproduces a whole session.
//!
//! 3. **Reject, don't corrupt**: an illegal action returns a `GameError`
//!    and leaves the state exactly as it was.
//!
//! ## Modules
//!
//! - `core`: Players, state, actions, RNG, configuration, errors
//! - `cards`: Cards and hands
//! - `board`: Grid, positions, capture resolution
//! - `rules`: RulesEngine trait and game results
//! - `games`: The grid game itself
//!
//! ## Example
//!
//! ```
//! use grid_duel::{Action, GridGameBuilder, PlayerId, Position, RulesEngine};
//!
//! let (mut game, mut state) = GridGameBuilder::new().build(42)?;
//!
//! let captures = game.apply_action(&mut state, PlayerId::new(0), &Action::play(0, Position::new(1, 1)))?;
//! assert!(captures.is_empty());
//! assert_eq!(state.active_player, PlayerId::new(1));
//! # Ok::<(), grid_duel::GameError>(())
//! ```

pub mod board;
pub mod cards;
pub mod core;
pub mod games;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    Action, ActionRecord, Color, GameConfig, GameError, GameRng, GameState, Player, PlayerConfig,
    PlayerId, PlayerMap, Result,
};

pub use crate::board::{Board, Capture, Captures, PlacementRejected, Position};

pub use crate::cards::{Card, Hand, Side};

pub use crate::rules::{GameResult, RulesEngine};

pub use crate::games::grid::{GridGame, GridGameBuilder};
