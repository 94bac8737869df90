//! Letter and word guesses, turn passing and eliminations

use super::flavor::{self, CommentKind};
use super::Engine;
use crate::error::{GameError, GameResult};
use crate::letters::{count_occurrences, normalize_letter, normalize_word};
use crate::types::*;

impl Engine {
    /// Guess a single letter for the active player.
    ///
    /// Points come from the pending points sector (none pending scores 0) and
    /// are multiplied by the number of occurrences.
    pub fn guess_letter(&mut self, letter: char) -> GameResult<LetterGuessReport> {
        let idx = self.playable_round_index()?;
        if self.state.must_guess_word || self.state.must_open_letter {
            return Err(GameError::SideModePending);
        }
        let player_id = self.acting_player_id(idx)?;
        let letter = normalize_letter(letter);

        self.state.rounds[idx].order_locked = true;

        if self.state.rounds[idx].revealed_letters.contains(&letter) {
            tracing::debug!("Player {} repeated letter {}", player_id, letter);
            self.pass_turn(idx, false);
            self.touch();
            return Ok(LetterGuessReport {
                player_id,
                letter,
                success: false,
                count: 0,
                already_guessed: true,
                points_awarded: 0,
                round_complete: self.state.rounds[idx].is_complete,
                must_guess_word: false,
                comment: flavor::pick(CommentKind::LetterRepeat, &mut self.rng),
            });
        }

        let count = count_occurrences(&self.state.rounds[idx].word, letter);

        if count == 0 {
            self.state.rounds[idx].missed_letters.insert(letter);
            self.stats_mut(player_id).wrong_letters += 1;
            self.pass_turn(idx, true);
            self.touch();
            return Ok(LetterGuessReport {
                player_id,
                letter,
                success: false,
                count: 0,
                already_guessed: false,
                points_awarded: 0,
                round_complete: self.state.rounds[idx].is_complete,
                must_guess_word: false,
                comment: flavor::pick(CommentKind::LetterMiss, &mut self.rng),
            });
        }

        let per_letter = match self.state.last_spin {
            Some(SpinOutcome::Points(value)) => value,
            _ => 0,
        };
        let mut points = per_letter.saturating_mul(count as u32);
        if self.state.double_pending {
            points = points.saturating_mul(2);
            self.state.double_pending = false;
        }

        let streak_limit = self.config.must_guess_streak;
        let round = &mut self.state.rounds[idx];
        round.reveal(letter);
        let sole_survivor = round.active_count() == 1;
        let streak = match round.current_player_mut() {
            Some(player) => {
                player.score = player.score.saturating_add(points);
                player.consecutive_correct_guesses += 1;
                player.consecutive_correct_guesses
            }
            None => 0,
        };
        let solved = round.is_fully_revealed();

        self.stats_mut(player_id).correct_letters += 1;
        self.state.last_spin = None;

        if solved {
            self.complete_round(idx, Some(player_id));
        } else if streak >= streak_limit && sole_survivor {
            tracing::info!(
                "Player {} must now guess the whole word ({} correct in a row)",
                player_id,
                streak
            );
            self.state.must_guess_word = true;
        }
        self.touch();

        Ok(LetterGuessReport {
            player_id,
            letter,
            success: true,
            count,
            already_guessed: false,
            points_awarded: points,
            round_complete: solved,
            must_guess_word: self.state.must_guess_word,
            comment: flavor::pick(CommentKind::LetterHit, &mut self.rng),
        })
    }

    /// Guess the whole word. A wrong guess eliminates the player.
    pub fn guess_word(&mut self, candidate: &str) -> GameResult<WordGuessReport> {
        let idx = self.playable_round_index()?;
        let candidate = normalize_word(candidate);
        if candidate.trim().is_empty() {
            return Err(GameError::EmptyWordGuess);
        }
        let player_id = self.acting_player_id(idx)?;

        self.state.rounds[idx].order_locked = true;
        self.state.must_guess_word = false;

        if candidate.trim() == self.state.rounds[idx].word {
            self.state.rounds[idx].reveal_all();
            self.stats_mut(player_id).words_guessed += 1;
            self.complete_round(idx, Some(player_id));
            self.touch();

            return Ok(WordGuessReport {
                player_id,
                success: true,
                eliminated: false,
                round_complete: true,
                winner_id: Some(player_id),
                comment: flavor::pick(CommentKind::WordHit, &mut self.rng),
            });
        }

        self.state.rounds[idx].eliminate_current();
        self.stats_mut(player_id).words_failed += 1;
        tracing::info!("Player {} eliminated after a wrong word guess", player_id);
        self.pass_turn(idx, true);
        self.touch();

        let round = &self.state.rounds[idx];
        Ok(WordGuessReport {
            player_id,
            success: false,
            eliminated: true,
            round_complete: round.is_complete,
            winner_id: round.winner_id,
            comment: flavor::pick(CommentKind::WordMiss, &mut self.rng),
        })
    }

    /// Hand the turn to the next active player
    pub fn next_player(&mut self) -> GameResult<TurnReport> {
        let idx = self.playable_round_index()?;
        self.state.rounds[idx].order_locked = true;
        let next_player_id = self.pass_turn(idx, true);
        self.touch();

        Ok(TurnReport {
            next_player_id,
            round_complete: self.state.rounds[idx].is_complete,
        })
    }

    /// Eliminate the active player unconditionally
    pub fn eliminate_current_player(&mut self) -> GameResult<TurnReport> {
        let idx = self.playable_round_index()?;
        self.state.rounds[idx].order_locked = true;
        let player_id = self.state.rounds[idx].eliminate_current();
        tracing::info!("Player {:?} eliminated by the host", player_id);

        self.state.must_guess_word = false;
        let next_player_id = self.pass_turn(idx, true);
        self.touch();

        Ok(TurnReport {
            next_player_id,
            round_complete: self.state.rounds[idx].is_complete,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use super::*;

    #[test]
    fn test_correct_letter_scores_per_occurrence() {
        let mut engine = started_engine();
        engine.apply_spin_outcome(SpinOutcome::Points(100)).unwrap();

        let report = engine.guess_letter('о').unwrap();

        // О appears three times in МОЛОКО
        assert!(report.success);
        assert_eq!(report.letter, 'О');
        assert_eq!(report.count, 3);
        assert_eq!(report.points_awarded, 300);
        assert!(!report.round_complete);
        assert!(!report.comment.is_empty());

        let round = engine.current_round().unwrap();
        assert_eq!(round.players[0].score, 300);
        assert!(round.revealed_letters.contains(&'О'));
        assert!(!round.is_fully_revealed());
        // Turn is held and the spin is consumed
        assert_eq!(engine.current_player().unwrap().id, 1);
        assert_eq!(engine.state().last_spin, None);
    }

    #[test]
    fn test_correct_letter_without_spin_scores_nothing() {
        let mut engine = started_engine();

        let report = engine.guess_letter('М').unwrap();

        assert!(report.success);
        assert_eq!(report.points_awarded, 0);
        assert_eq!(engine.current_round().unwrap().players[0].score, 0);
        assert_eq!(
            engine.current_round().unwrap().players[0].consecutive_correct_guesses,
            1
        );
    }

    #[test]
    fn test_doubling_applies_to_next_hit_only() {
        let mut engine = started_engine();
        engine
            .apply_spin_outcome(SpinOutcome::DoubleNextScore)
            .unwrap();

        // A miss does not consume the doubling
        engine.guess_letter('Я').unwrap();
        assert!(engine.state().double_pending);

        engine.apply_spin_outcome(SpinOutcome::Points(200)).unwrap();
        let report = engine.guess_letter('К').unwrap();
        assert_eq!(report.points_awarded, 400);
        assert!(!engine.state().double_pending);

        engine.apply_spin_outcome(SpinOutcome::Points(200)).unwrap();
        let report = engine.guess_letter('М').unwrap();
        assert_eq!(report.points_awarded, 200);
    }

    #[test]
    fn test_capped_doubling_grants_fallback_points() {
        let mut engine = started_engine();
        for _ in 0..3 {
            engine
                .apply_spin_outcome(SpinOutcome::DoubleNextScore)
                .unwrap();
        }
        // Two doublings granted, the third became +500
        let report = engine.guess_letter('Л').unwrap();
        assert_eq!(report.points_awarded, 1000);
    }

    #[test]
    fn test_wrong_letter_passes_turn() {
        let mut engine = started_engine();
        engine.apply_spin_outcome(SpinOutcome::Points(500)).unwrap();
        engine.guess_letter('М').unwrap();
        engine.apply_spin_outcome(SpinOutcome::Points(500)).unwrap();

        let report = engine.guess_letter('ж').unwrap();

        assert!(!report.success);
        assert!(!report.already_guessed);
        assert_eq!(report.count, 0);
        let round = engine.current_round().unwrap();
        assert_eq!(round.players[0].score, 500);
        assert_eq!(round.players[0].consecutive_correct_guesses, 0);
        assert!(round.missed_letters.contains(&'Ж'));
        assert_eq!(engine.current_player().unwrap().id, 2);
        assert_eq!(engine.state().last_spin, None);
        assert_eq!(engine.state().stats[&1].wrong_letters, 1);
    }

    #[test]
    fn test_repeated_letter_never_changes_score_and_passes_turn() {
        for prior_score in [0, 300, 9000] {
            let mut engine = started_engine();
            engine.guess_letter('О').unwrap();
            engine.state.rounds[0].players[0].score = prior_score;
            engine.apply_spin_outcome(SpinOutcome::Points(1000)).unwrap();

            let report = engine.guess_letter('о').unwrap();

            assert!(report.already_guessed);
            assert!(!report.success);
            assert_eq!(report.count, 0);
            let round = engine.current_round().unwrap();
            assert_eq!(round.players[0].score, prior_score);
            // Streak is left alone
            assert_eq!(round.players[0].consecutive_correct_guesses, 1);
            assert_eq!(engine.current_player().unwrap().id, 2);
            assert_eq!(engine.state().last_spin, None);
        }
    }

    #[test]
    fn test_letter_order_does_not_matter_for_completion() {
        let orders = [['М', 'О', 'Л', 'К'], ['К', 'Л', 'О', 'М'], ['О', 'К', 'М', 'Л']];

        for order in orders {
            let mut engine = started_engine();
            for (i, letter) in order.iter().enumerate() {
                assert!(!engine.current_round().unwrap().is_fully_revealed());
                let report = engine.guess_letter(*letter).unwrap();
                assert_eq!(report.round_complete, i == order.len() - 1);
            }
            let round = engine.current_round().unwrap();
            assert!(round.is_complete);
            assert_eq!(round.winner_id, Some(1));
        }
    }

    #[test]
    fn test_streak_forces_word_guess_only_for_sole_survivor() {
        // Three players still active: no forced guess
        let mut engine = started_engine();
        for letter in ['М', 'О', 'Л'] {
            let report = engine.guess_letter(letter).unwrap();
            assert!(!report.must_guess_word);
        }
        assert!(!engine.state().must_guess_word);

        // Sole survivor
        let mut engine = started_engine();
        engine.eliminate_current_player().unwrap();
        engine.eliminate_current_player().unwrap();
        assert_eq!(engine.current_player().unwrap().id, 3);

        assert!(!engine.guess_letter('М').unwrap().must_guess_word);
        assert!(!engine.guess_letter('О').unwrap().must_guess_word);
        let report = engine.guess_letter('Л').unwrap();
        assert!(report.must_guess_word);
        assert!(engine.state().must_guess_word);

        // Letters and spins are refused until the word is attempted
        assert_eq!(engine.guess_letter('К'), Err(GameError::SideModePending));
        assert_eq!(engine.begin_spin(), Err(GameError::SideModePending));
    }

    #[test]
    fn test_forced_word_guess_wrong_ends_round_without_winner() {
        let mut engine = started_engine();
        engine.eliminate_current_player().unwrap();
        engine.eliminate_current_player().unwrap();
        for letter in ['М', 'О', 'Л'] {
            engine.guess_letter(letter).unwrap();
        }
        assert!(engine.state().must_guess_word);

        let report = engine.guess_word("малина").unwrap();

        assert!(!report.success);
        assert!(report.eliminated);
        assert!(report.round_complete);
        assert_eq!(report.winner_id, None);
        assert!(!engine.state().must_guess_word);
        let round = engine.current_round().unwrap();
        assert!(round.is_complete);
        assert_eq!(round.winner_id, None);
        assert!(engine.current_player().is_none());
    }

    #[test]
    fn test_correct_word_wins_round() {
        let mut engine = started_engine();
        engine.next_player().unwrap();

        let report = engine.guess_word("  Молоко ").unwrap();

        assert!(report.success);
        assert_eq!(report.winner_id, Some(2));
        let round = engine.current_round().unwrap();
        assert!(round.is_complete);
        assert!(round.is_fully_revealed());
        assert_eq!(engine.state().stats[&2].words_guessed, 1);
        assert_eq!(engine.state().stats[&2].rounds_won, 1);

        assert_eq!(engine.guess_letter('О'), Err(GameError::RoundComplete));
    }

    #[test]
    fn test_word_guess_folds_lookalike_letters() {
        let mut engine = started_engine();
        engine.next_round().unwrap();

        // Round two word is ЁЛКА, stored as ЕЛКА
        let report = engine.guess_word("елка").unwrap();
        assert!(report.success);
    }

    #[test]
    fn test_multi_word_phrase_ignores_spaces() {
        let mut engine = started_engine();
        engine.next_round().unwrap();
        engine.next_round().unwrap();

        for letter in ['Д', 'Е', 'М', 'О', 'Р'] {
            engine.guess_letter(letter).unwrap();
        }
        let report = engine.guess_letter('З').unwrap();
        assert!(report.round_complete);
    }

    #[test]
    fn test_wrong_word_eliminates_and_advances() {
        let mut engine = started_engine();

        let report = engine.guess_word("сметана").unwrap();

        assert!(report.eliminated);
        assert!(!report.round_complete);
        assert_eq!(engine.current_player().unwrap().id, 2);
        assert_eq!(engine.active_players().len(), 2);
        assert_eq!(engine.state().stats[&1].words_failed, 1);
    }

    #[test]
    fn test_empty_word_guess_is_refused() {
        let mut engine = started_engine();
        let version = engine.state().version;

        assert_eq!(engine.guess_word("   "), Err(GameError::EmptyWordGuess));
        assert_eq!(engine.state().version, version);
        assert_eq!(engine.active_players().len(), 3);
    }

    #[test]
    fn test_next_player_clears_turn_state() {
        let mut engine = started_engine();
        engine.apply_spin_outcome(SpinOutcome::OpenAnyLetter).unwrap();

        let report = engine.next_player().unwrap();

        assert_eq!(report.next_player_id, Some(2));
        assert!(!report.round_complete);
        assert!(!engine.state().must_open_letter);
        assert_eq!(engine.state().last_spin, None);
    }

    #[test]
    fn test_eliminating_everyone_completes_round() {
        let mut engine = started_engine();

        engine.eliminate_current_player().unwrap();
        engine.eliminate_current_player().unwrap();
        let report = engine.eliminate_current_player().unwrap();

        assert_eq!(report.next_player_id, None);
        assert!(report.round_complete);
        assert_eq!(engine.current_round().unwrap().winner_id, None);
        assert_eq!(engine.next_player(), Err(GameError::RoundComplete));
    }

    #[test]
    fn test_guess_without_round_fails() {
        let mut engine = super::super::Engine::new(seeded_config());
        assert_eq!(engine.guess_letter('А'), Err(GameError::NoActiveRound));
        assert_eq!(engine.guess_word("кот"), Err(GameError::NoActiveRound));
        assert_eq!(engine.next_player(), Err(GameError::NoActiveRound));
    }
}
