//! HTTP routes for analysis endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{
    analyze_behavioral, analyze_disc, analyze_sentiment, generate_recommendations,
    get_session_insights, AnalysisHandlers,
};

/// Creates the analysis router, to be nested under `/api/analysis`.
pub fn analysis_routes(handlers: AnalysisHandlers) -> Router {
    Router::new()
        .route("/disc", post(analyze_disc))
        .route("/sentiment", post(analyze_sentiment))
        .route("/recommendations", post(generate_recommendations))
        .route("/behavioral", post(analyze_behavioral))
        .route("/session/:session_id/insights", get(get_session_insights))
        .with_state(handlers)
}
