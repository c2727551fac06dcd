//! Health check endpoints.

use axum::{Json, extract::State, http::StatusCode};
use serde::Serialize;

use crate::state::AppState;

/// Liveness payload. Never touches the counter, so it stays cheap at
/// any polling interval.
#[derive(Serialize)]
pub struct LivenessResponse {
    status: &'static str,
    service: &'static str,
    version: &'static str,
    uptime_secs: u64,
}

/// Liveness: the process is up and serving requests
pub async fn health_check(State(state): State<AppState>) -> Json<LivenessResponse> {
    Json(LivenessResponse {
        status: "ok",
        service: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
        uptime_secs: state.uptime_secs(),
    })
}

#[derive(Serialize)]
pub struct ReadyResponse {
    status: &'static str,
    counter_store: bool,
}

/// Readiness check (can passcodes be issued?)
pub async fn ready_check(
    State(state): State<AppState>,
) -> Result<Json<ReadyResponse>, StatusCode> {
    if state.counter.health_check().await {
        Ok(Json(ReadyResponse {
            status: "ready",
            counter_store: true,
        }))
    } else {
        // Return 503 if not ready
        Err(StatusCode::SERVICE_UNAVAILABLE)
    }
}
