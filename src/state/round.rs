use super::AppState;
use crate::error::GameResult;
use crate::protocol::ServerMessage;
use crate::types::*;

impl AppState {
    pub async fn guess_letter(&self, letter: char) -> GameResult<LetterGuessReport> {
        let report = self.mutate(|engine| engine.guess_letter(letter)).await?;

        self.broadcast_to_all(ServerMessage::LetterGuessed {
            report: report.clone(),
        });
        Ok(report)
    }

    pub async fn guess_word(&self, word: &str) -> GameResult<WordGuessReport> {
        let report = self.mutate(|engine| engine.guess_word(word)).await?;

        self.broadcast_to_all(ServerMessage::WordGuessed {
            report: report.clone(),
        });
        Ok(report)
    }

    pub async fn open_letter(&self, letter: char) -> GameResult<OpenLetterReport> {
        let report = self
            .mutate(|engine| engine.use_plus_to_open_letter(letter))
            .await?;

        self.broadcast_to_all(ServerMessage::LetterOpened {
            report: report.clone(),
        });
        Ok(report)
    }

    pub async fn next_player(&self) -> GameResult<TurnReport> {
        self.mutate(|engine| engine.next_player()).await
    }

    pub async fn eliminate_current_player(&self) -> GameResult<TurnReport> {
        self.mutate(|engine| engine.eliminate_current_player()).await
    }
}
