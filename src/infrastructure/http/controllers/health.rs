use crate::infrastructure::http::middleware::AppState;
use crate::shared::format_timestamp;
use axum::{extract::State, Json};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub success: bool,
    pub status: &'static str,
    pub database: &'static str,
    pub uptime_seconds: u64,
    pub version: &'static str,
    pub timestamp: String,
}

pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        success: true,
        status: "OK",
        database: state.db.connection_state().as_str(),
        uptime_seconds: state.started_at.elapsed().as_secs(),
        version: env!("CARGO_PKG_VERSION"),
        timestamp: format_timestamp(state.clock.now()),
    })
}
