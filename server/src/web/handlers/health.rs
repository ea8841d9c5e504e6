//! Health check endpoint

use axum::{extract::State, response::Json};
use chrono::Utc;
use serde_json::{Value, json};

use crate::state::AppState;

/// Liveness probe with uptime
pub async fn health_check(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "timestamp": Utc::now().timestamp(),
        "uptime_seconds": state.uptime_seconds(),
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
