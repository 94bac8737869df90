use super::AppState;
use crate::broadcast::spawn_spin_resolution;
use crate::error::{GameError, GameResult};
use crate::protocol::ServerMessage;
use crate::types::*;

impl AppState {
    /// Start a spin. The outcome is returned immediately; its effects are
    /// applied by a background task once the presentation delay has passed.
    pub async fn spin(&self) -> GameResult<PendingSpin> {
        let pending = {
            let mut engine = self.engine.write().await;
            if engine.state().is_spinning {
                return Err(GameError::SpinInProgress);
            }
            engine.begin_spin()?
        };

        tracing::info!(
            "Player {} spun the wheel: {}",
            pending.player_id,
            pending.outcome.label()
        );
        self.broadcast_to_all(ServerMessage::SpinStarted {
            spin_id: pending.id,
            player_id: pending.player_id,
            outcome: pending.outcome.clone(),
            label: pending.outcome.label(),
            delay_ms: self.config.spin_delay_ms,
        });

        let task = spawn_spin_resolution(self.clone(), pending.id, self.config.spin_delay());
        if let Some(previous) = self.spin_task.lock().await.replace(task) {
            previous.abort();
        }

        Ok(pending)
    }

    /// Apply a pending spin. Called by the deferred task.
    pub async fn resolve_spin(&self, spin_id: u64) -> GameResult<SpinEffect> {
        let (effect, game) = {
            let mut engine = self.engine.write().await;
            let effect = engine.finish_spin(spin_id)?;
            (effect, engine.snapshot())
        };

        tracing::debug!("Spin {} applied: {:?}", spin_id, effect);
        self.broadcast_to_all(ServerMessage::SpinResolved {
            spin_id,
            effect: effect.clone(),
        });
        self.broadcast_to_all(ServerMessage::State { game });
        Ok(effect)
    }
}
