use crate::error::{GameError, GameResult};
use crate::letters::{distinct_letters, is_word_fully_revealed};
use crate::types::*;
use std::collections::BTreeSet;

impl Round {
    /// Create a fresh round; `word` must already be normalized
    pub fn new(number: u32, word: String, hint: String, players: Vec<Player>) -> Self {
        Self {
            number,
            word,
            hint,
            players,
            current_player_index: 0,
            revealed_letters: BTreeSet::new(),
            missed_letters: BTreeSet::new(),
            is_complete: false,
            winner_id: None,
            order_locked: false,
            completed_at: None,
        }
    }

    pub fn current_player(&self) -> Option<&Player> {
        self.players.get(self.current_player_index)
    }

    pub fn current_player_mut(&mut self) -> Option<&mut Player> {
        self.players.get_mut(self.current_player_index)
    }

    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    /// Players not yet eliminated, in play order
    pub fn active_players(&self) -> impl Iterator<Item = &Player> {
        self.players.iter().filter(|p| !p.is_eliminated)
    }

    pub fn active_count(&self) -> usize {
        self.active_players().count()
    }

    /// Move the cursor to the next active player, wrapping around.
    ///
    /// The current player is considered last, so a sole survivor keeps the
    /// turn. With no active players left the round completes without a winner.
    pub fn advance_turn(&mut self) -> Option<PlayerId> {
        let len = self.players.len();
        for step in 1..=len {
            let idx = (self.current_player_index + step) % len;
            if !self.players[idx].is_eliminated {
                self.current_player_index = idx;
                return Some(self.players[idx].id);
            }
        }

        self.complete(None);
        None
    }

    /// Mark the current player eliminated, returning their id
    pub fn eliminate_current(&mut self) -> Option<PlayerId> {
        let player = self.current_player_mut()?;
        player.is_eliminated = true;
        player.consecutive_correct_guesses = 0;
        Some(player.id)
    }

    /// Add a normalized letter to the board. Returns false if it was already there.
    pub fn reveal(&mut self, letter: char) -> bool {
        self.revealed_letters.insert(letter)
    }

    /// Reveal every guessable letter of the word
    pub fn reveal_all(&mut self) {
        self.revealed_letters.extend(distinct_letters(&self.word));
    }

    pub fn is_fully_revealed(&self) -> bool {
        is_word_fully_revealed(&self.word, &self.revealed_letters)
    }

    pub fn complete(&mut self, winner: Option<PlayerId>) {
        if self.is_complete {
            return;
        }
        self.is_complete = true;
        self.winner_id = winner;
        self.completed_at = Some(chrono::Utc::now().to_rfc3339());
    }

    /// Put the players in the given order and hand the turn to the first active one
    pub fn reorder(&mut self, order: &[PlayerId]) -> GameResult<()> {
        let requested: BTreeSet<PlayerId> = order.iter().copied().collect();
        let existing: BTreeSet<PlayerId> = self.players.iter().map(|p| p.id).collect();

        if requested.len() != order.len() {
            return Err(GameError::InvalidPlayerOrder(
                "order contains duplicate players".to_string(),
            ));
        }
        if requested != existing {
            return Err(GameError::InvalidPlayerOrder(
                "order must list exactly the players of this round".to_string(),
            ));
        }

        self.players
            .sort_by_key(|p| order.iter().position(|id| *id == p.id).unwrap_or(usize::MAX));
        self.current_player_index = self
            .players
            .iter()
            .position(|p| !p.is_eliminated)
            .unwrap_or(0);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player(id: PlayerId) -> Player {
        Player {
            id,
            name: format!("P{}", id),
            image_ref: String::new(),
            score: 0,
            is_eliminated: false,
            consecutive_correct_guesses: 0,
        }
    }

    fn round_with(ids: &[PlayerId]) -> Round {
        Round::new(
            1,
            "КОТ".to_string(),
            "Мяукает".to_string(),
            ids.iter().map(|&id| player(id)).collect(),
        )
    }

    #[test]
    fn test_advance_turn_wraps_around() {
        let mut round = round_with(&[1, 2, 3]);

        assert_eq!(round.advance_turn(), Some(2));
        assert_eq!(round.advance_turn(), Some(3));
        assert_eq!(round.advance_turn(), Some(1));
    }

    #[test]
    fn test_advance_turn_skips_eliminated() {
        let mut round = round_with(&[1, 2, 3]);
        round.players[1].is_eliminated = true;

        assert_eq!(round.advance_turn(), Some(3));
        assert_eq!(round.advance_turn(), Some(1));
    }

    #[test]
    fn test_sole_survivor_keeps_turn() {
        let mut round = round_with(&[1, 2]);
        round.players[1].is_eliminated = true;

        assert_eq!(round.advance_turn(), Some(1));
        assert_eq!(round.current_player_index, 0);
        assert!(!round.is_complete);
    }

    #[test]
    fn test_advance_with_nobody_left_completes_round() {
        let mut round = round_with(&[1, 2]);
        round.eliminate_current();
        round.players[1].is_eliminated = true;

        assert_eq!(round.advance_turn(), None);
        assert!(round.is_complete);
        assert_eq!(round.winner_id, None);
        assert!(round.completed_at.is_some());
    }

    #[test]
    fn test_complete_is_terminal() {
        let mut round = round_with(&[1, 2]);
        round.complete(Some(2));
        round.complete(None);

        assert_eq!(round.winner_id, Some(2));
    }

    #[test]
    fn test_reveal_all_and_full_reveal() {
        let mut round = round_with(&[1]);
        assert!(round.reveal('К'));
        assert!(!round.reveal('К'));
        assert!(!round.is_fully_revealed());

        round.reveal_all();
        assert!(round.is_fully_revealed());
        assert_eq!(round.revealed_letters.len(), 3);
    }

    #[test]
    fn test_reorder() {
        let mut round = round_with(&[1, 2, 3]);
        round.current_player_index = 2;

        round.reorder(&[3, 1, 2]).unwrap();
        let ids: Vec<_> = round.players.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
        assert_eq!(round.current_player_index, 0);
    }

    #[test]
    fn test_reorder_skips_eliminated_lead() {
        let mut round = round_with(&[1, 2, 3]);
        round.players[1].is_eliminated = true;

        round.reorder(&[2, 3, 1]).unwrap();
        assert_eq!(round.current_player_index, 1);
        assert_eq!(round.current_player().map(|p| p.id), Some(3));
    }

    #[test]
    fn test_reorder_rejects_bad_orders() {
        let mut round = round_with(&[1, 2, 3]);

        let result = round.reorder(&[1, 1, 2]);
        assert!(matches!(result, Err(GameError::InvalidPlayerOrder(_))));

        let result = round.reorder(&[1, 2]);
        assert!(matches!(result, Err(GameError::InvalidPlayerOrder(_))));

        let result = round.reorder(&[1, 2, 4]);
        assert!(matches!(result, Err(GameError::InvalidPlayerOrder(_))));

        // Untouched after failures
        let ids: Vec<_> = round.players.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }
}
