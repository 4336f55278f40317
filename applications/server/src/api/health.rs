/// Health check API routes
use crate::state::AppState;
use axum::extract::State;
use axum::Json;
use chrono::Utc;
use serde_json::{json, Value};
use std::time::Instant;

/// GET / - Service info for anyone poking at the root URL
pub async fn service_info() -> Json<Value> {
    Json(json!({
        "name": "TuneLoop API",
        "version": env!("CARGO_PKG_VERSION"),
        "status": "running",
        "docs": "/health",
    }))
}

/// GET /health - Liveness plus one timed database round trip.
///
/// Always 200; a broken database shows up in the payload rather than the
/// status code so monitors can read the details.
pub async fn health(State(state): State<AppState>) -> Json<Value> {
    let start = Instant::now();
    let connected = tuneloop_storage::ping(&state.pool).await.is_ok();
    let latency_ms = start.elapsed().as_millis() as u64;

    Json(json!({
        "status": "ok",
        "data": {
            "database": if connected { "connected" } else { "disconnected" },
            "latency_ms": latency_ms,
            "uptime_secs": state.started_at.elapsed().as_secs(),
            "version": env!("CARGO_PKG_VERSION"),
            "timestamp": Utc::now().to_rfc3339(),
        },
    }))
}
