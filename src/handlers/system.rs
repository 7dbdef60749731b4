//! Liveness, health and CORS preflight handlers

use axum::{extract::State, Json};
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

/// GET / - Liveness banner
pub async fn root() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "Scholarship Dashboard API is running!",
    })
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub storage: String,
    pub version: &'static str,
}

/// GET /health - Storage connectivity
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let (status, storage) = match &state.database {
        None => ("healthy", state.storage_name().to_string()),
        Some(database) => match database.ping().await {
            Ok(()) => ("healthy", "postgres: connected".to_string()),
            Err(e) => ("unhealthy", format!("postgres: {}", e)),
        },
    };

    Json(HealthResponse {
        status,
        storage,
        version: env!("CARGO_PKG_VERSION"),
    })
}

#[derive(Debug, Serialize)]
pub struct PreflightResponse {
    pub status: &'static str,
}

/// OPTIONS on mutating routes. Answers before any body parsing.
pub async fn preflight() -> Json<PreflightResponse> {
    Json(PreflightResponse { status: "ok" })
}
