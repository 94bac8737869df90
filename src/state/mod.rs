mod game;
mod round;
mod spin;

use crate::engine::Engine;
use crate::error::{GameError, GameResult};
use crate::protocol::ServerMessage;
use crate::types::*;
use std::sync::Arc;
use tokio::sync::{broadcast, Mutex, RwLock};
use tokio::task::JoinHandle;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<RwLock<Engine>>,
    pub config: GameConfig,
    /// Broadcast channel for sending messages to every connected screen
    pub broadcast: broadcast::Sender<ServerMessage>,
    /// The single outstanding deferred spin, if any
    spin_task: Arc<Mutex<Option<JoinHandle<()>>>>,
}

impl AppState {
    pub fn new(config: GameConfig) -> Self {
        Self::with_engine(Engine::new(config))
    }

    pub fn with_engine(engine: Engine) -> Self {
        let (tx, _rx) = broadcast::channel(100);
        Self {
            config: engine.config().clone(),
            engine: Arc::new(RwLock::new(engine)),
            broadcast: tx,
            spin_task: Arc::new(Mutex::new(None)),
        }
    }

    pub async fn snapshot(&self) -> GameState {
        self.engine.read().await.snapshot()
    }

    pub async fn summary(&self) -> GameSummary {
        self.engine.read().await.summary()
    }

    pub async fn current_player_id(&self) -> Option<PlayerId> {
        self.engine.read().await.current_player().map(|p| p.id)
    }

    /// Send a message to all connected clients
    pub fn broadcast_to_all(&self, msg: ServerMessage) {
        // Ignore send errors (no receivers connected is fine)
        let _ = self.broadcast.send(msg);
    }

    /// Run one engine operation unless a spin is still being presented.
    ///
    /// Broadcasts the new snapshot on success.
    async fn mutate<T>(&self, op: impl FnOnce(&mut Engine) -> GameResult<T>) -> GameResult<T> {
        let mut engine = self.engine.write().await;
        if engine.state().is_spinning {
            tracing::debug!("Rejecting action while the wheel is spinning");
            return Err(GameError::SpinInProgress);
        }

        let result = op(&mut *engine)?;
        let game = engine.snapshot();
        drop(engine);

        self.broadcast_to_all(ServerMessage::State { game });
        Ok(result)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use crate::engine::Wheel;

    pub fn round_setup(word: &str, names: &[&str]) -> RoundSetup {
        RoundSetup {
            word: word.to_string(),
            hint: format!("Подсказка: {}", word.chars().count()),
            players: names
                .iter()
                .map(|name| PlayerSetup {
                    name: name.to_string(),
                    image_ref: String::new(),
                })
                .collect(),
        }
    }

    pub fn three_rounds() -> Vec<RoundSetup> {
        vec![
            round_setup("снег", &["Аня", "Борис"]),
            round_setup("шарф", &["Вика", "Глеб"]),
            round_setup("каток", &["Даша", "Егор"]),
        ]
    }

    /// App state whose wheel only lands on `outcome`
    pub fn state_with_sector(outcome: SpinOutcome, spin_delay_ms: u64) -> AppState {
        let config = GameConfig {
            spin_delay_ms,
            rng_seed: Some(1),
            ..GameConfig::default()
        };
        AppState::with_engine(Engine::with_wheel(config, Wheel::new(vec![outcome])))
    }
}
