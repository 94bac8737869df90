//! Spin lifecycle and the consequences of each wheel sector

use super::Engine;
use crate::error::{GameError, GameResult};
use crate::letters::{count_occurrences, normalize_letter};
use crate::types::*;

impl Engine {
    /// Draw a sector for the active player.
    ///
    /// The outcome is decided now; its effects wait for [`Engine::finish_spin`].
    pub fn begin_spin(&mut self) -> GameResult<PendingSpin> {
        let idx = self.playable_round_index()?;

        if self.state.is_spinning {
            return Err(GameError::SpinInProgress);
        }
        if self.state.must_guess_word || self.state.must_open_letter {
            return Err(GameError::SideModePending);
        }

        let player_id = self.acting_player_id(idx)?;
        let outcome = self.wheel.resolve(&self.state.used_gifts, &mut self.rng)?;

        self.spin_seq += 1;
        let pending = PendingSpin {
            id: self.spin_seq,
            player_id,
            outcome,
        };

        self.state.rounds[idx].order_locked = true;
        self.state.is_spinning = true;
        self.pending_spin = Some(pending.clone());
        self.touch();

        tracing::debug!("Spin {} resolved to {:?}", pending.id, pending.outcome);
        Ok(pending)
    }

    /// Apply the pending spin with the given id
    pub fn finish_spin(&mut self, spin_id: u64) -> GameResult<SpinEffect> {
        self.playable_round_index()?;

        let outcome = match self.pending_spin.take() {
            Some(pending) if pending.id == spin_id => pending.outcome,
            other => {
                self.pending_spin = other;
                return Err(GameError::NoSpinPending);
            }
        };

        self.state.is_spinning = false;
        self.apply_spin_outcome(outcome)
    }

    /// Drop the pending spin without applying it
    pub fn cancel_spin(&mut self) {
        if let Some(pending) = self.pending_spin.take() {
            tracing::info!("Cancelled pending spin {}", pending.id);
            self.state.is_spinning = false;
            self.touch();
        }
    }

    /// Apply a sector to the current round
    pub fn apply_spin_outcome(&mut self, outcome: SpinOutcome) -> GameResult<SpinEffect> {
        let idx = self.playable_round_index()?;
        let player_id = self.acting_player_id(idx)?;
        self.state.rounds[idx].order_locked = true;

        let mut effect = SpinEffect {
            outcome: outcome.clone(),
            player_id,
            turn_passed: false,
            next_player_id: Some(player_id),
            must_open_letter: false,
            gift: None,
        };

        match outcome {
            SpinOutcome::Points(_) => {
                self.state.last_spin = Some(outcome);
            }
            SpinOutcome::Bankrupt => {
                if let Some(player) = self.state.rounds[idx].current_player_mut() {
                    player.score = 0;
                }
                self.stats_mut(player_id).bankruptcies += 1;
                effect.next_player_id = self.pass_turn(idx, true);
                effect.turn_passed = true;
            }
            SpinOutcome::Zero => {
                effect.next_player_id = self.pass_turn(idx, true);
                effect.turn_passed = true;
            }
            SpinOutcome::OpenAnyLetter => {
                self.state.must_open_letter = true;
                self.state.last_spin = Some(outcome);
                effect.must_open_letter = true;
            }
            SpinOutcome::DoubleNextScore => {
                if self.state.double_uses >= self.config.double_score_limit {
                    let fallback = SpinOutcome::Points(self.config.double_fallback_points);
                    tracing::debug!(
                        "Doubling limit reached, granting {} instead",
                        fallback.label()
                    );
                    self.state.last_spin = Some(fallback.clone());
                    effect.outcome = fallback;
                } else {
                    self.state.double_uses += 1;
                    self.state.double_pending = true;
                    self.state.last_spin = Some(outcome);
                }
            }
            SpinOutcome::Gift(ref name) => {
                if !self.state.used_gifts.contains(name) {
                    self.state.used_gifts.push(name.clone());
                }
                self.state
                    .collected_gifts
                    .entry(player_id)
                    .or_default()
                    .push(name.clone());
                self.stats_mut(player_id).gifts_received += 1;
                effect.gift = Some(name.clone());
                self.state.last_spin = Some(outcome);
            }
        }

        self.touch();
        Ok(effect)
    }

    /// Open a hidden letter of the player's choice after landing on the plus sector
    pub fn use_plus_to_open_letter(&mut self, letter: char) -> GameResult<OpenLetterReport> {
        let idx = self.playable_round_index()?;
        if !self.state.must_open_letter {
            return Err(GameError::OpenLetterNotAllowed);
        }

        let player_id = self.acting_player_id(idx)?;
        let letter = normalize_letter(letter);
        let round = &self.state.rounds[idx];
        let count = count_occurrences(&round.word, letter);

        if count == 0 || round.revealed_letters.contains(&letter) {
            tracing::debug!("Cannot open {}: not hidden in the word", letter);
            return Ok(OpenLetterReport {
                player_id,
                letter,
                success: false,
                count: 0,
                round_complete: false,
            });
        }

        let round = &mut self.state.rounds[idx];
        round.reveal(letter);
        let solved = round.is_fully_revealed();

        self.state.must_open_letter = false;
        self.state.last_spin = None;
        if solved {
            self.complete_round(idx, Some(player_id));
        }
        self.touch();

        Ok(OpenLetterReport {
            player_id,
            letter,
            success: true,
            count,
            round_complete: solved,
        })
    }
}
