//! Grid game implementation.

use tracing::{debug, info};

use crate::board::Captures;
use crate::cards::{Hand, Side};
use crate::core::{
    Action, ActionRecord, Color, GameConfig, GameError, GameRng, GameState, Player, PlayerConfig,
    PlayerId, PlayerMap, Result, PLAYER_COUNT,
};
use crate::rules::{GameResult, RulesEngine};

/// The rules of the grid capture game.
///
/// Holds only configuration; everything that changes during play is in the
/// `GameState` passed to each call.
#[derive(Clone, Debug)]
pub struct GridGame {
    config: GameConfig,
}

/// Builder for creating a GridGame and its initial state.
#[derive(Clone, Debug, Default)]
pub struct GridGameBuilder {
    config: GameConfig,
    players: Vec<PlayerConfig>,
    hands: Option<[Hand; PLAYER_COUNT]>,
}

impl GridGameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing configuration.
    pub fn config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    /// Add a seat. Seats added here replace the configured players.
    pub fn player(mut self, name: impl Into<String>, color: Color) -> Self {
        self.players.push(PlayerConfig::new(name, color));
        self
    }

    pub fn hand_size(mut self, size: usize) -> Self {
        self.config.hand_size = size;
        self
    }

    pub fn strength_range(mut self, min: u8, max: u8) -> Self {
        self.config.min_strength = min;
        self.config.max_strength = max;
        self
    }

    /// Seat players with prepared hands instead of dealing at random.
    ///
    /// Card owners are reassigned to each seat's color. Hands must be unplayed
    /// and their strengths must lie in the configured range. Only the first
    /// game uses them: [`GridGame::new_game`] deals fresh random hands.
    pub fn hands(mut self, hands: [Hand; PLAYER_COUNT]) -> Self {
        self.hands = Some(hands);
        self
    }

    /// Build the game and initial state.
    pub fn build(self, seed: u64) -> Result<(GridGame, GameState)> {
        let mut config = self.config;
        if !self.players.is_empty() {
            config.players = self.players;
        }
        if let Some(hands) = &self.hands {
            config.hand_size = hands.iter().map(Hand::remaining).min().unwrap_or(0);
        }
        config.validate()?;
        if let Some(hands) = &self.hands {
            check_prepared_hands(hands, &config)?;
        }

        let mut rng = GameRng::new(seed);
        let mut deal = rng.fork();
        let mut hands = self.hands.map(|hands| hands.into_iter());

        let players = PlayerMap::new(PLAYER_COUNT, |id| {
            let seat = &config.players[id.index()];
            match hands.as_mut().and_then(|it| it.next()) {
                Some(hand) => {
                    let cards = hand.iter().flatten().cloned().map(|mut card| {
                        card.set_owner(seat.color);
                        card
                    });
                    Player::with_hand(id, seat.name.clone(), seat.color, Hand::from_cards(cards))
                }
                None => Player::with_hand_size(
                    id,
                    seat.name.clone(),
                    seat.color,
                    config.hand_size,
                    config.strengths(),
                    &mut deal,
                ),
            }
        });

        info!(seed, first = %players[PlayerId::new(0)].name(), "game started");

        let state = GameState::new(players, rng);
        Ok((GridGame { config }, state))
    }
}

/// Prepared hands must be fresh deals within the configured strengths.
fn check_prepared_hands(hands: &[Hand], config: &GameConfig) -> Result<()> {
    let strengths = config.strengths();
    for (seat, hand) in hands.iter().enumerate() {
        if hand.remaining() != hand.size() {
            return Err(GameError::InvalidConfig(format!(
                "prepared hand for seat {seat} has played slots"
            )));
        }
        let out_of_range = hand
            .iter()
            .flatten()
            .flat_map(|card| Side::ALL.map(|side| card.value(side)))
            .find(|value| !strengths.contains(value));
        if let Some(value) = out_of_range {
            return Err(GameError::InvalidConfig(format!(
                "prepared hand for seat {seat} holds strength {value} outside {}..={}",
                config.min_strength, config.max_strength
            )));
        }
    }
    Ok(())
}

impl GridGame {
    /// Start another round: clear the board and deal both players fresh
    /// hands from a new fork of the game RNG. The first seat moves first.
    pub fn new_game(&self, state: &mut GameState) {
        state.reset();

        let mut deal = state.rng.fork();
        for (_, player) in state.players.iter_mut() {
            player.redeal(&mut deal, self.config.strengths());
        }

        info!(seed = deal.seed(), "new game");
    }

    /// Cells owned by each player.
    pub fn scores(&self, state: &GameState) -> PlayerMap<usize> {
        PlayerMap::new(state.player_count(), |id| {
            state.board.count_owned(state.player(id).color())
        })
    }

    /// Check that `action` can be applied without changing anything.
    fn check_action(&self, state: &GameState, player: PlayerId, action: &Action) -> Result<()> {
        if state.board.is_full() {
            return Err(GameError::GameOver);
        }
        if player != state.active_player {
            return Err(GameError::NotYourTurn {
                expected: state.active_player,
                actual: player,
            });
        }
        if !state.board.is_position_empty(action.position) {
            return Err(GameError::CellOccupied(action.position));
        }
        if state.player(player).card_at(action.slot).is_none() {
            return Err(GameError::InvalidSelection { slot: action.slot });
        }
        Ok(())
    }
}

impl RulesEngine for GridGame {
    fn config(&self) -> &GameConfig {
        &self.config
    }

    fn legal_actions(&self, state: &GameState, player: PlayerId) -> Vec<Action> {
        if player != state.active_player || state.board.is_full() {
            return vec![];
        }

        let board = &state.board;
        state
            .player(player)
            .hand()
            .playable_slots()
            .flat_map(move |slot| {
                board
                    .empty_positions()
                    .map(move |position| Action::play(slot, position))
            })
            .collect()
    }

    fn apply_action(
        &mut self,
        state: &mut GameState,
        player: PlayerId,
        action: &Action,
    ) -> Result<Captures> {
        self.check_action(state, player, action)?;

        let card = state.player_mut(player).take_card(action.slot)?;
        debug!(%player, slot = action.slot, %card, "card played");
        let captures = state.board.place_card(card, action.position)?;

        let captured: Vec<_> = captures.iter().map(|c| c.position).collect();
        let turn = state.turn_number;
        state.record_action(ActionRecord::new(player, *action, turn, &captured));

        if let Some(result) = self.is_terminal(state) {
            info!(?result, "game over");
        } else {
            state.advance_turn();
        }

        Ok(captures)
    }

    fn is_terminal(&self, state: &GameState) -> Option<GameResult> {
        if !state.board.is_full() {
            return None;
        }

        let winner = state
            .players
            .iter()
            .find(|(_, player)| state.board.check_winner(player))
            .map(|(id, _)| id);

        Some(winner.map_or(GameResult::Draw, GameResult::Winner))
    }
}
