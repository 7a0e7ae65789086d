//! Liveness endpoint.

use axum::{extract::State, http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use once_cell::sync::Lazy;
use serde::Serialize;
use std::time::Instant;

use crate::config::Environment;

static STARTED_AT: Lazy<Instant> = Lazy::new(Instant::now);

#[derive(Debug, Clone)]
pub struct HealthState {
    environment: Environment,
}

impl HealthState {
    pub fn new(environment: Environment) -> Self {
        // Uptime counts from router construction.
        Lazy::force(&STARTED_AT);
        Self { environment }
    }
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub success: bool,
    pub message: String,
    pub timestamp: String,
    /// Seconds since start-up.
    pub uptime: f64,
    pub environment: String,
}

/// GET /api/health
pub async fn health_check(State(state): State<HealthState>) -> impl IntoResponse {
    let response = HealthResponse {
        success: true,
        message: "Sales Co-pilot API is running".to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
        uptime: STARTED_AT.elapsed().as_secs_f64(),
        environment: state.environment.as_str().to_string(),
    };
    (StatusCode::OK, Json(response))
}

pub fn health_routes(state: HealthState) -> Router {
    Router::new()
        .route("/api/health", get(health_check))
        .with_state(state)
}
