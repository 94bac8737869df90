//! Game setup, player order and phase transitions

use super::Engine;
use crate::error::{GameError, GameResult};
use crate::letters::{distinct_letters, is_always_revealed, normalize_word};
use crate::types::*;
use rand::seq::SliceRandom;

impl Engine {
    /// Create the qualifying rounds and start the first one
    pub fn setup_game(&mut self, rounds: Vec<RoundSetup>) -> GameResult<()> {
        if self.state.phase != GamePhase::Setup {
            return Err(GameError::InvalidPhase(self.state.phase));
        }
        validate_setup(&rounds)?;

        let mut built = Vec::with_capacity(rounds.len());
        for (i, setup) in rounds.into_iter().enumerate() {
            let players = setup
                .players
                .into_iter()
                .map(|p| Player {
                    id: self.allocate_player_id(),
                    name: p.name.trim().to_string(),
                    image_ref: p.image_ref,
                    score: 0,
                    is_eliminated: false,
                    consecutive_correct_guesses: 0,
                })
                .collect();

            built.push(Round::new(
                i as u32 + 1,
                normalize_word(setup.word.trim()),
                setup.hint.trim().to_string(),
                players,
            ));
        }

        self.state.rounds = built;
        self.state.phase = GamePhase::Qualifying1;
        self.state.current_round_index = Some(0);
        self.reset_round_consumables();
        self.touch();

        tracing::info!(
            "Game {} set up with {} rounds",
            self.state.id,
            self.state.rounds.len()
        );
        Ok(())
    }

    /// Fix the turn order of the current round before play starts
    pub fn set_players_order(&mut self, order: Vec<PlayerId>) -> GameResult<()> {
        let idx = self.playable_round_index()?;
        let round = &mut self.state.rounds[idx];

        if round.order_locked {
            return Err(GameError::InvalidPlayerOrder(
                "play has already started in this round".to_string(),
            ));
        }

        round.reorder(&order)?;
        round.order_locked = true;
        tracing::debug!("Round {} order set to {:?}", round.number, order);
        self.touch();
        Ok(())
    }

    /// Randomize the turn order of the current round
    pub fn shuffle_players(&mut self) -> GameResult<Vec<PlayerId>> {
        let idx = self.playable_round_index()?;
        let mut order: Vec<PlayerId> = self.state.rounds[idx]
            .players
            .iter()
            .map(|p| p.id)
            .collect();
        order.shuffle(&mut self.rng);

        self.set_players_order(order.clone())?;
        Ok(order)
    }

    /// Advance to the next phase. From the last qualifying round this ends the game.
    pub fn next_round(&mut self) -> GameResult<GamePhase> {
        let next = match self.state.phase {
            GamePhase::Qualifying1 | GamePhase::Qualifying2 | GamePhase::Qualifying3 => {
                self.state.phase.next()
            }
            _ => None,
        }
        .ok_or(GameError::InvalidPhase(self.state.phase))?;

        if let Some(round) = self.current_round().filter(|r| !r.is_complete) {
            tracing::warn!("Leaving round {} unfinished", round.number);
        }

        self.state.phase = next;
        self.state.current_round_index = next.round_index();
        self.reset_round_consumables();
        self.touch();

        tracing::info!("Phase changed to {:?}", next);
        Ok(next)
    }

    /// Throw the whole game away and return to setup
    pub fn reset(&mut self) {
        self.state = GameState::new();
        self.pending_spin = None;
        self.next_player_id = 1;
        tracing::info!("Game reset, new id {}", self.state.id);
    }
}

fn validate_setup(rounds: &[RoundSetup]) -> GameResult<()> {
    if rounds.len() != QUALIFYING_ROUNDS {
        return Err(GameError::InvalidSetup(format!(
            "expected {} rounds, got {}",
            QUALIFYING_ROUNDS,
            rounds.len()
        )));
    }

    for (i, round) in rounds.iter().enumerate() {
        let number = i + 1;
        if distinct_letters(round.word.trim()).is_empty() {
            return Err(GameError::InvalidSetup(format!(
                "round {} has no word to guess",
                number
            )));
        }
        if let Some(bad) = round
            .word
            .trim()
            .chars()
            .find(|&ch| !ch.is_alphabetic() && !is_always_revealed(ch))
        {
            return Err(GameError::InvalidSetup(format!(
                "round {} word contains {:?}",
                number, bad
            )));
        }
        if round.hint.trim().is_empty() {
            return Err(GameError::InvalidSetup(format!(
                "round {} has no hint",
                number
            )));
        }
        if round.players.is_empty() {
            return Err(GameError::InvalidSetup(format!(
                "round {} has no players",
                number
            )));
        }
        if round.players.iter().any(|p| p.name.trim().is_empty()) {
            return Err(GameError::InvalidSetup(format!(
                "round {} has a player without a name",
                number
            )));
        }
    }
    Ok(())
}
