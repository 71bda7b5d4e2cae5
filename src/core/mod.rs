//! Core engine types: players, state, actions, RNG, configuration, errors.

pub mod action;
pub mod config;
pub mod error;
pub mod player;
pub mod rng;
pub mod state;

pub use action::{Action, ActionRecord};
pub use config::{GameConfig, PlayerConfig, PLAYER_COUNT};
pub use error::{GameError, Result};
pub use player::{Color, Player, PlayerId, PlayerMap};
pub use rng::GameRng;
pub use state::GameState;
