//! End-of-game statistics and playful awards

use super::Engine;
use crate::types::*;
use std::cmp::Reverse;

impl Engine {
    /// Aggregate per-player statistics over every round played so far
    pub fn summary(&self) -> GameSummary {
        let mut players: Vec<PlayerStats> = self
            .state
            .rounds
            .iter()
            .flat_map(|round| {
                round.players.iter().map(|player| PlayerStats {
                    player_id: player.id,
                    name: player.name.clone(),
                    image_ref: player.image_ref.clone(),
                    round_number: round.number,
                    total_points: player.score,
                    counters: self
                        .state
                        .stats
                        .get(&player.id)
                        .cloned()
                        .unwrap_or_default(),
                })
            })
            .collect();
        players.sort_by_key(|p| Reverse(p.total_points));

        let rounds = self
            .state
            .rounds
            .iter()
            .map(|round| RoundHistory {
                number: round.number,
                word: round.word.clone(),
                hint: round.hint.clone(),
                winner_id: round.winner_id,
                winner_name: round
                    .winner_id
                    .and_then(|id| round.player(id))
                    .map(|p| p.name.clone()),
                completed_at: round.completed_at.clone(),
            })
            .collect();

        let awards = AWARD_KINDS
            .iter()
            .filter_map(|&kind| leader(&players, kind))
            .collect();

        let finalists = self
            .state
            .rounds
            .iter()
            .filter_map(|round| round.winner_id)
            .filter_map(|id| players.iter().find(|p| p.player_id == id).cloned())
            .collect();

        GameSummary {
            players,
            rounds,
            awards,
            finalists,
        }
    }
}

const AWARD_KINDS: [AwardKind; 8] = [
    AwardKind::TopScorer,
    AwardKind::LetterMaster,
    AwardKind::WordTelepath,
    AwardKind::RoundWinner,
    AwardKind::MisterBankrupt,
    AwardKind::GiftCollector,
    AwardKind::MissedLetters,
    AwardKind::BoldButWrong,
];

fn metric(stats: &PlayerStats, kind: AwardKind) -> u32 {
    let c = &stats.counters;
    match kind {
        AwardKind::TopScorer => stats.total_points,
        AwardKind::LetterMaster => c.correct_letters,
        AwardKind::WordTelepath => c.words_guessed,
        AwardKind::RoundWinner => c.rounds_won,
        AwardKind::MisterBankrupt => c.bankruptcies,
        AwardKind::GiftCollector => c.gifts_received,
        AwardKind::MissedLetters => c.wrong_letters,
        AwardKind::BoldButWrong => c.words_failed,
    }
}

/// Best player for an award; ties go to the earlier entry
fn leader(players: &[PlayerStats], kind: AwardKind) -> Option<Award> {
    players
        .iter()
        .filter(|p| metric(p, kind) > 0)
        .min_by_key(|p| Reverse(metric(p, kind)))
        .map(|p| Award {
            kind,
            player_id: p.player_id,
            name: p.name.clone(),
            value: metric(p, kind),
        })
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use super::*;

    fn award(summary: &GameSummary, kind: AwardKind) -> Option<&Award> {
        summary.awards.iter().find(|a| a.kind == kind)
    }

    #[test]
    fn test_summary_of_fresh_game_is_empty() {
        let engine = super::super::Engine::default();
        let summary = engine.summary();

        assert!(summary.players.is_empty());
        assert!(summary.rounds.is_empty());
        assert!(summary.awards.is_empty());
        assert!(summary.finalists.is_empty());
    }

    #[test]
    fn test_summary_ranks_players_and_awards_leaders() {
        let mut engine = started_engine();

        // Round 1: Аня scores, misses, Борис goes bankrupt, Вика solves
        engine.apply_spin_outcome(SpinOutcome::Points(100)).unwrap();
        engine.guess_letter('О').unwrap();
        engine.guess_letter('Ю').unwrap();
        engine.apply_spin_outcome(SpinOutcome::Bankrupt).unwrap();
        engine.apply_spin_outcome(SpinOutcome::Points(1000)).unwrap();
        engine.guess_letter('К').unwrap();
        engine.guess_word("молоко").unwrap();

        // Round 2: Глеб guesses a wrong word
        engine.next_round().unwrap();
        engine.guess_word("палка").unwrap();

        let summary = engine.summary();

        assert_eq!(summary.players.len(), 9);
        assert_eq!(summary.players[0].name, "Вика");
        assert_eq!(summary.players[0].total_points, 1000);
        assert_eq!(summary.players[1].name, "Аня");
        assert_eq!(summary.players[1].total_points, 300);

        assert_eq!(award(&summary, AwardKind::TopScorer).unwrap().player_id, 3);
        assert_eq!(award(&summary, AwardKind::MisterBankrupt).unwrap().player_id, 2);
        assert_eq!(award(&summary, AwardKind::MissedLetters).unwrap().player_id, 1);
        assert_eq!(award(&summary, AwardKind::BoldButWrong).unwrap().player_id, 4);
        assert_eq!(award(&summary, AwardKind::WordTelepath).unwrap().value, 1);
        assert!(award(&summary, AwardKind::GiftCollector).is_none());

        assert_eq!(summary.rounds[0].winner_name.as_deref(), Some("Вика"));
        assert!(summary.rounds[0].completed_at.is_some());
        assert_eq!(summary.rounds[1].winner_id, None);

        let finalists: Vec<_> = summary.finalists.iter().map(|p| p.player_id).collect();
        assert_eq!(finalists, vec![3]);
    }

    #[test]
    fn test_award_ties_go_to_higher_ranked_player() {
        let mut engine = started_engine();
        engine.guess_letter('М').unwrap();
        engine.next_player().unwrap();
        engine.guess_letter('Л').unwrap();

        let summary = engine.summary();
        let letter_master = award(&summary, AwardKind::LetterMaster).unwrap();
        assert_eq!(letter_master.value, 1);
        assert_eq!(letter_master.player_id, 1);
    }
}
