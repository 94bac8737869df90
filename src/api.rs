//! Read-only HTTP endpoints.
//!
//! Presentation screens that cannot hold a WebSocket poll these instead.

use axum::{extract::State, routing::get, Json, Router};
use std::sync::Arc;

use crate::state::AppState;
use crate::types::{GameState, GameSummary};

/// Current game snapshot.
///
/// GET /api/state
pub async fn get_state(State(state): State<Arc<AppState>>) -> Json<GameState> {
    Json(state.snapshot().await)
}

/// End-of-game statistics and awards.
///
/// GET /api/summary
pub async fn get_summary(State(state): State<Arc<AppState>>) -> Json<GameSummary> {
    Json(state.summary().await)
}

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/state", get(get_state))
        .route("/api/summary", get(get_summary))
}
