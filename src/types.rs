use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};

/// Opaque ID types for type safety
pub type GameId = String;
pub type PlayerId = u32;

/// Number of qualifying rounds played before the game is over
pub const QUALIFYING_ROUNDS: usize = 3;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum GamePhase {
    Setup,
    Qualifying1,
    Qualifying2,
    Qualifying3,
    GameOver,
}

impl GamePhase {
    /// Next phase in the fixed sequence (None once the game is over)
    pub fn next(self) -> Option<GamePhase> {
        use GamePhase::*;

        match self {
            Setup => Some(Qualifying1),
            Qualifying1 => Some(Qualifying2),
            Qualifying2 => Some(Qualifying3),
            Qualifying3 => Some(GameOver),
            GameOver => None,
        }
    }

    /// Index of the round played in this phase
    pub fn round_index(self) -> Option<usize> {
        match self {
            GamePhase::Qualifying1 => Some(0),
            GamePhase::Qualifying2 => Some(1),
            GamePhase::Qualifying3 => Some(2),
            GamePhase::Setup | GamePhase::GameOver => None,
        }
    }
}

/// Result of a wheel spin
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum SpinOutcome {
    /// Points per occurrence of the next correctly guessed letter
    Points(u32),
    /// Score reset to zero and the turn passes
    Bankrupt,
    /// Nothing gained, the turn passes
    Zero,
    /// The player opens any hidden letter of their choice
    OpenAnyLetter,
    /// The next correct letter scores double
    DoubleNextScore,
    /// A named gift; each gift can be won once per round
    Gift(String),
}

impl SpinOutcome {
    pub fn label(&self) -> String {
        match self {
            SpinOutcome::Points(value) => format!("+{}", value),
            SpinOutcome::Bankrupt => "Банкрот".to_string(),
            SpinOutcome::Zero => "0".to_string(),
            SpinOutcome::OpenAnyLetter => "+".to_string(),
            SpinOutcome::DoubleNextScore => "x2".to_string(),
            SpinOutcome::Gift(name) => format!("🎁 {}", name),
        }
    }

    /// Name of the gift if this is a one-shot gift sector
    pub fn gift_name(&self) -> Option<&str> {
        match self {
            SpinOutcome::Gift(name) => Some(name),
            _ => None,
        }
    }
}

/// Tunable rule constants
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Presentation delay between a spin and its effects
    pub spin_delay_ms: u64,
    /// How many times per round the doubling sector actually doubles
    pub double_score_limit: u32,
    /// Points sector that replaces the doubling sector once the limit is hit
    pub double_fallback_points: u32,
    /// Consecutive correct letters that force the last player to guess the word
    pub must_guess_streak: u32,
    /// Fixed seed for reproducible games
    pub rng_seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            spin_delay_ms: 4000,
            double_score_limit: 2,
            double_fallback_points: 500,
            must_guess_streak: 3,
            rng_seed: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    /// Reference to the player's picture, resolved by the presentation layer
    pub image_ref: String,
    pub score: u32,
    pub is_eliminated: bool,
    pub consecutive_correct_guesses: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Round {
    /// 1-based round number
    pub number: u32,
    /// Normalized uppercase word
    pub word: String,
    pub hint: String,
    /// Play order
    pub players: Vec<Player>,
    pub current_player_index: usize,
    pub revealed_letters: BTreeSet<char>,
    /// Letters called that are not in the word (display only)
    pub missed_letters: BTreeSet<char>,
    pub is_complete: bool,
    pub winner_id: Option<PlayerId>,
    /// Set once play has started; the order can no longer change
    pub order_locked: bool,
    pub completed_at: Option<String>, // ISO timestamp
}

/// Operator input for one player of a round
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerSetup {
    pub name: String,
    #[serde(default)]
    pub image_ref: String,
}

/// Operator input for one round
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoundSetup {
    pub word: String,
    pub hint: String,
    pub players: Vec<PlayerSetup>,
}

/// Per-player counters carried across rounds into the final statistics
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct StatCounters {
    pub correct_letters: u32,
    pub wrong_letters: u32,
    pub words_guessed: u32,
    pub words_failed: u32,
    pub rounds_won: u32,
    pub bankruptcies: u32,
    pub gifts_received: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub id: GameId,
    /// Bumped on every mutation
    pub version: u64,
    pub phase: GamePhase,
    pub rounds: Vec<Round>,
    pub current_round_index: Option<usize>,
    /// Most recently applied spin, cleared whenever the turn changes
    pub last_spin: Option<SpinOutcome>,
    pub is_spinning: bool,
    /// The active player must guess the whole word or be eliminated
    pub must_guess_word: bool,
    /// The active player must open one hidden letter of their choice
    pub must_open_letter: bool,
    /// The next correct letter scores double
    pub double_pending: bool,
    /// Doubling sectors granted in the current round
    pub double_uses: u32,
    /// Gift sectors already won in the current round
    pub used_gifts: Vec<String>,
    /// Gifts won per player, kept for the final statistics
    pub collected_gifts: HashMap<PlayerId, Vec<String>>,
    pub stats: HashMap<PlayerId, StatCounters>,
}

impl GameState {
    pub fn new() -> Self {
        Self {
            id: ulid::Ulid::new().to_string(),
            version: 1,
            phase: GamePhase::Setup,
            rounds: Vec::new(),
            current_round_index: None,
            last_spin: None,
            is_spinning: false,
            must_guess_word: false,
            must_open_letter: false,
            double_pending: false,
            double_uses: 0,
            used_gifts: Vec::new(),
            collected_gifts: HashMap::new(),
            stats: HashMap::new(),
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

// ========== Action Reports ==========

/// A spin whose outcome is known but not yet applied
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PendingSpin {
    pub id: u64,
    /// Player who spun
    pub player_id: PlayerId,
    pub outcome: SpinOutcome,
}

/// Consequences of applying a spin outcome
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SpinEffect {
    /// Outcome actually applied (a capped doubling becomes a points sector)
    pub outcome: SpinOutcome,
    pub player_id: PlayerId,
    pub turn_passed: bool,
    pub next_player_id: Option<PlayerId>,
    pub must_open_letter: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gift: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LetterGuessReport {
    /// Player who guessed
    pub player_id: PlayerId,
    pub letter: char,
    pub success: bool,
    pub count: usize,
    pub already_guessed: bool,
    pub points_awarded: u32,
    pub round_complete: bool,
    pub must_guess_word: bool,
    pub comment: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WordGuessReport {
    pub player_id: PlayerId,
    pub success: bool,
    pub eliminated: bool,
    pub round_complete: bool,
    pub winner_id: Option<PlayerId>,
    pub comment: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OpenLetterReport {
    pub player_id: PlayerId,
    pub letter: char,
    pub success: bool,
    pub count: usize,
    pub round_complete: bool,
}

/// Result of a turn-advancing action (next player / elimination)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TurnReport {
    pub next_player_id: Option<PlayerId>,
    pub round_complete: bool,
}

// ========== Final Statistics ==========

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlayerStats {
    pub player_id: PlayerId,
    pub name: String,
    pub image_ref: String,
    pub round_number: u32,
    pub total_points: u32,
    #[serde(flatten)]
    pub counters: StatCounters,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RoundHistory {
    pub number: u32,
    pub word: String,
    pub hint: String,
    pub winner_id: Option<PlayerId>,
    pub winner_name: Option<String>,
    pub completed_at: Option<String>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AwardKind {
    TopScorer,
    LetterMaster,
    WordTelepath,
    RoundWinner,
    MisterBankrupt,
    GiftCollector,
    MissedLetters,
    BoldButWrong,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Award {
    pub kind: AwardKind,
    pub player_id: PlayerId,
    pub name: String,
    pub value: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GameSummary {
    pub players: Vec<PlayerStats>,
    pub rounds: Vec<RoundHistory>,
    pub awards: Vec<Award>,
    pub finalists: Vec<PlayerStats>,
}
