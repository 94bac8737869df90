use super::AppState;
use crate::error::GameResult;
use crate::protocol::ServerMessage;
use crate::types::*;

impl AppState {
    pub async fn setup_game(&self, rounds: Vec<RoundSetup>) -> GameResult<()> {
        self.mutate(|engine| engine.setup_game(rounds)).await
    }

    pub async fn set_players_order(&self, order: Vec<PlayerId>) -> GameResult<()> {
        self.mutate(|engine| engine.set_players_order(order)).await
    }

    pub async fn shuffle_players(&self) -> GameResult<Vec<PlayerId>> {
        self.mutate(|engine| engine.shuffle_players()).await
    }

    pub async fn next_round(&self) -> GameResult<GamePhase> {
        self.mutate(|engine| engine.next_round()).await
    }

    /// Start over from setup, cancelling any spin still being presented
    pub async fn reset_game(&self) {
        if let Some(task) = self.spin_task.lock().await.take() {
            task.abort();
        }

        let game = {
            let mut engine = self.engine.write().await;
            engine.reset();
            engine.snapshot()
        };
        self.broadcast_to_all(ServerMessage::State { game });
    }
}
