//! Liveness probe for deploy checks and local debugging.

use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// What `GET /health` reports.
#[derive(Serialize)]
pub struct HealthResponse {
    /// `"ok"` when the database responds, `"degraded"` otherwise.
    pub status: &'static str,
    /// Version baked in at compile time.
    pub version: &'static str,
    /// Result of the database ping.
    pub db_healthy: bool,
}

/// Ping the database and report overall service health.
///
/// Always answers 200; a dead database shows up in the body rather than
/// the status code so probes can tell "down" from "degraded".
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let db_healthy = playbill_db::health_check(&state.pool).await.is_ok();

    Json(HealthResponse {
        status: if db_healthy { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
    })
}

/// Health routes. Mounted outside the session guard.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
