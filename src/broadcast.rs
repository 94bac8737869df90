use crate::state::AppState;
use std::time::Duration;
use tokio::task::JoinHandle;

/// Spawn the deferred half of a spin: wait out the presentation delay, then
/// apply the precomputed outcome.
///
/// The returned handle is aborted on reset so a superseded spin never lands.
pub fn spawn_spin_resolution(state: AppState, spin_id: u64, delay: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        tokio::time::sleep(delay).await;

        if let Err(e) = state.resolve_spin(spin_id).await {
            tracing::warn!("Spin {} could not be applied: {}", spin_id, e);
        }
    })
}
