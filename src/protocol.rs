use crate::error::GameError;
use crate::types::*;
use serde::{Deserialize, Serialize};

/// Intents sent by the operator console
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "t", rename_all = "snake_case")]
pub enum ClientMessage {
    SetupGame {
        rounds: Vec<RoundSetup>,
    },
    SetPlayersOrder {
        order: Vec<PlayerId>,
    },
    ShufflePlayers,
    Spin,
    GuessLetter {
        letter: String,
    },
    GuessWord {
        word: String,
    },
    OpenLetter {
        letter: String,
    },
    NextPlayer,
    EliminateCurrentPlayer,
    NextRound,
    ResetGame,
    GetState,
    GetSummary,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "t", rename_all = "snake_case")]
pub enum ServerMessage {
    Welcome {
        protocol: String,
        game: GameState,
        server_now: String,
    },
    /// Full snapshot, sent after every change
    State {
        game: GameState,
    },
    /// The wheel is turning; effects follow after `delay_ms`
    SpinStarted {
        spin_id: u64,
        player_id: PlayerId,
        outcome: SpinOutcome,
        label: String,
        delay_ms: u64,
    },
    SpinResolved {
        spin_id: u64,
        effect: SpinEffect,
    },
    LetterGuessed {
        report: LetterGuessReport,
    },
    WordGuessed {
        report: WordGuessReport,
    },
    LetterOpened {
        report: OpenLetterReport,
    },
    Summary {
        summary: GameSummary,
    },
    Error {
        code: String,
        msg: String,
    },
}

impl From<GameError> for ServerMessage {
    fn from(err: GameError) -> Self {
        ServerMessage::Error {
            code: err.code().to_string(),
            msg: err.to_string(),
        }
    }
}
