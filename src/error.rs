//! Errors returned by game operations.
//!
//! Every refusal is recoverable: the engine leaves state untouched and the
//! caller reports the failure back to the operator.

use crate::types::GamePhase;

/// Result type for game operations
pub type GameResult<T> = Result<T, GameError>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("No round is currently in play")]
    NoActiveRound,

    #[error("The current round is already complete")]
    RoundComplete,

    #[error("A spin is still in progress")]
    SpinInProgress,

    #[error("No spin is pending")]
    NoSpinPending,

    #[error("The current player must resolve a pending action first")]
    SideModePending,

    #[error("Opening a letter is only allowed after landing on the plus sector")]
    OpenLetterNotAllowed,

    #[error("Invalid letter: {0:?}")]
    InvalidLetter(String),

    #[error("A word guess cannot be empty")]
    EmptyWordGuess,

    #[error("Operation not allowed in phase {0:?}")]
    InvalidPhase(GamePhase),

    #[error("Invalid game setup: {0}")]
    InvalidSetup(String),

    #[error("Invalid player order: {0}")]
    InvalidPlayerOrder(String),

    #[error("The wheel has no eligible sectors left")]
    EmptyOutcomePool,
}

impl GameError {
    /// Stable error code for the wire protocol
    pub fn code(&self) -> &'static str {
        match self {
            GameError::NoActiveRound => "NO_ACTIVE_ROUND",
            GameError::RoundComplete => "ROUND_COMPLETE",
            GameError::SpinInProgress => "SPIN_IN_PROGRESS",
            GameError::NoSpinPending => "NO_SPIN_PENDING",
            GameError::SideModePending => "SIDE_MODE_PENDING",
            GameError::OpenLetterNotAllowed => "OPEN_LETTER_NOT_ALLOWED",
            GameError::InvalidLetter(_) => "INVALID_LETTER",
            GameError::EmptyWordGuess => "EMPTY_WORD_GUESS",
            GameError::InvalidPhase(_) => "INVALID_PHASE",
            GameError::InvalidSetup(_) => "INVALID_SETUP",
            GameError::InvalidPlayerOrder(_) => "INVALID_PLAYER_ORDER",
            GameError::EmptyOutcomePool => "EMPTY_OUTCOME_POOL",
        }
    }
}
