//! WebSocket message dispatch
//!
//! Every intent maps onto one [`AppState`] operation. Successful actions
//! answer the sender directly; the shared snapshot reaches every screen
//! through the broadcast channel.

use crate::letters::parse_letter;
use crate::protocol::{ClientMessage, ServerMessage};
use crate::state::AppState;
use std::sync::Arc;

/// Handle client messages and return optional response
pub async fn handle_message(msg: ClientMessage, state: &Arc<AppState>) -> Option<ServerMessage> {
    let result = match msg {
        ClientMessage::GetState => {
            return Some(ServerMessage::State {
                game: state.snapshot().await,
            });
        }

        ClientMessage::GetSummary => {
            return Some(ServerMessage::Summary {
                summary: state.summary().await,
            });
        }

        ClientMessage::SetupGame { rounds } => {
            tracing::info!("Setting up game with {} rounds", rounds.len());
            state.setup_game(rounds).await.map(|_| None)
        }

        ClientMessage::SetPlayersOrder { order } => {
            state.set_players_order(order).await.map(|_| None)
        }

        ClientMessage::ShufflePlayers => state.shuffle_players().await.map(|_| None),

        ClientMessage::Spin => state.spin().await.map(|pending| {
            Some(ServerMessage::SpinStarted {
                spin_id: pending.id,
                player_id: pending.player_id,
                label: pending.outcome.label(),
                outcome: pending.outcome,
                delay_ms: state.config.spin_delay_ms,
            })
        }),

        ClientMessage::GuessLetter { letter } => match parse_letter(&letter) {
            Ok(letter) => state
                .guess_letter(letter)
                .await
                .map(|report| Some(ServerMessage::LetterGuessed { report })),
            Err(e) => Err(e),
        },

        ClientMessage::GuessWord { word } => state
            .guess_word(&word)
            .await
            .map(|report| Some(ServerMessage::WordGuessed { report })),

        ClientMessage::OpenLetter { letter } => match parse_letter(&letter) {
            Ok(letter) => state
                .open_letter(letter)
                .await
                .map(|report| Some(ServerMessage::LetterOpened { report })),
            Err(e) => Err(e),
        },

        ClientMessage::NextPlayer => state.next_player().await.map(|_| None),

        ClientMessage::EliminateCurrentPlayer => {
            state.eliminate_current_player().await.map(|_| None)
        }

        ClientMessage::NextRound => state.next_round().await.map(|phase| {
            tracing::info!("Moved on to {:?}", phase);
            None
        }),

        ClientMessage::ResetGame => {
            state.reset_game().await;
            Ok(None)
        }
    };

    match result {
        Ok(response) => response,
        Err(e) => {
            tracing::warn!("Action refused: {}", e);
            Some(e.into())
        }
    }
}
