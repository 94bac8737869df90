//! Synchronous game rules.
//!
//! The [`Engine`] owns the whole [`GameState`] and applies one intent at a
//! time. Every operation either succeeds and bumps the state version, or
//! returns a [`GameError`](crate::error::GameError) without touching state.

pub mod flavor;
mod guess;
mod progression;
mod round;
mod stats;
mod turn;
pub mod wheel;

use crate::error::{GameError, GameResult};
use crate::types::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

pub use wheel::Wheel;

pub struct Engine {
    state: GameState,
    config: GameConfig,
    wheel: Wheel,
    rng: StdRng,
    next_player_id: PlayerId,
    spin_seq: u64,
    pending_spin: Option<PendingSpin>,
}

impl Engine {
    pub fn new(config: GameConfig) -> Self {
        Self::with_wheel(config, Wheel::standard())
    }

    /// Create an engine with a custom sector table
    pub fn with_wheel(config: GameConfig, wheel: Wheel) -> Self {
        let rng = match config.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        Self {
            state: GameState::new(),
            config,
            wheel,
            rng,
            next_player_id: 1,
            spin_seq: 0,
            pending_spin: None,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn wheel(&self) -> &Wheel {
        &self.wheel
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Owned copy of the current state for the presentation layer
    pub fn snapshot(&self) -> GameState {
        self.state.clone()
    }

    pub fn pending_spin(&self) -> Option<&PendingSpin> {
        self.pending_spin.as_ref()
    }

    pub fn current_round(&self) -> Option<&Round> {
        self.state
            .current_round_index
            .and_then(|idx| self.state.rounds.get(idx))
    }

    pub fn current_player(&self) -> Option<&Player> {
        self.current_round()
            .filter(|round| !round.is_complete)
            .and_then(|round| round.current_player())
    }

    pub fn active_players(&self) -> Vec<&Player> {
        self.current_round()
            .map(|round| round.active_players().collect())
            .unwrap_or_default()
    }

    /// Index of the current round if it is still being played
    fn playable_round_index(&self) -> GameResult<usize> {
        let idx = self
            .state
            .current_round_index
            .filter(|&idx| idx < self.state.rounds.len())
            .ok_or(GameError::NoActiveRound)?;

        if self.state.rounds[idx].is_complete {
            return Err(GameError::RoundComplete);
        }
        Ok(idx)
    }

    /// Id of the player whose turn it is in round `idx`
    fn acting_player_id(&self, idx: usize) -> GameResult<PlayerId> {
        self.state.rounds[idx]
            .current_player()
            .map(|p| p.id)
            .ok_or(GameError::NoActiveRound)
    }

    fn touch(&mut self) {
        self.state.version += 1;
    }

    fn stats_mut(&mut self, player_id: PlayerId) -> &mut StatCounters {
        self.state.stats.entry(player_id).or_default()
    }

    fn allocate_player_id(&mut self) -> PlayerId {
        let id = self.next_player_id;
        self.next_player_id += 1;
        id
    }

    /// Hand the turn to the next active player.
    ///
    /// Clears the pending spin and the open-letter side-mode. Completes the
    /// round without a winner when nobody is left.
    fn pass_turn(&mut self, idx: usize, reset_streak: bool) -> Option<PlayerId> {
        self.state.last_spin = None;
        self.state.must_open_letter = false;

        let round = &mut self.state.rounds[idx];
        if reset_streak {
            if let Some(player) = round.current_player_mut() {
                player.consecutive_correct_guesses = 0;
            }
        }

        let next = round.advance_turn();
        if next.is_none() {
            tracing::info!("Round {} ended with no active players left", round.number);
            self.clear_side_modes();
        }
        next
    }

    /// Finish round `idx` with the given winner
    fn complete_round(&mut self, idx: usize, winner: Option<PlayerId>) {
        let round = &mut self.state.rounds[idx];
        round.complete(winner);
        tracing::info!(
            "Round {} complete (word: {}, winner: {:?})",
            round.number,
            round.word,
            winner
        );

        if let Some(winner_id) = winner {
            self.stats_mut(winner_id).rounds_won += 1;
        }
        self.state.last_spin = None;
        self.clear_side_modes();
    }

    fn clear_side_modes(&mut self) {
        self.state.must_guess_word = false;
        self.state.must_open_letter = false;
    }

    /// Reset everything that only lives for one round
    fn reset_round_consumables(&mut self) {
        self.state.used_gifts.clear();
        self.state.double_uses = 0;
        self.state.double_pending = false;
        self.state.last_spin = None;
        self.state.is_spinning = false;
        self.pending_spin = None;
        self.clear_side_modes();
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}
