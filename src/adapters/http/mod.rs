//! HTTP adapters - REST API over axum.
//!
//! Every endpoint answers with the [`ApiResponse`] envelope except
//! `/api/health`, which keeps its flat liveness shape.

pub mod analysis;
pub mod audio;
pub mod health;
mod response;

pub use analysis::{analysis_routes, AnalysisHandlers};
pub use audio::{audio_routes, AudioHandlers};
pub use health::{health_routes, HealthState};
pub use response::{bad_request, domain_error_response, json_rejection, status_for, ApiResponse};

use axum::Router;

/// Assembles the `/api` surface.
pub fn api_router(analysis: AnalysisHandlers, audio: AudioHandlers, health: HealthState) -> Router {
    Router::new()
        .merge(health_routes(health))
        .nest("/api/analysis", analysis_routes(analysis))
        .nest("/api/audio", audio_routes(audio))
}
