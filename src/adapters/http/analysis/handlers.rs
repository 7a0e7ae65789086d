//! HTTP handlers for analysis endpoints.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::Response,
    Json,
};

use crate::adapters::http::response::{
    bad_request, domain_error_response, json_rejection, ApiResponse,
};
use crate::application::handlers::analysis::{
    AnalyzeDiscHandler, AnalyzeDiscQuery, AnalyzeSentimentHandler, AnalyzeSentimentQuery,
    CompleteAnalysisHandler, CompleteAnalysisQuery, RecommendHandler, RecommendQuery,
    SessionInsightsHandler, SessionInsightsQuery,
};
use crate::domain::foundation::SessionId;

use super::dto::{BehavioralRequest, DiscRequest, RecommendationsRequest, SentimentRequest};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct AnalysisHandlers {
    disc_handler: Arc<AnalyzeDiscHandler>,
    sentiment_handler: Arc<AnalyzeSentimentHandler>,
    recommend_handler: Arc<RecommendHandler>,
    complete_handler: Arc<CompleteAnalysisHandler>,
    insights_handler: Arc<SessionInsightsHandler>,
}

impl AnalysisHandlers {
    pub fn new(
        disc_handler: Arc<AnalyzeDiscHandler>,
        sentiment_handler: Arc<AnalyzeSentimentHandler>,
        recommend_handler: Arc<RecommendHandler>,
        complete_handler: Arc<CompleteAnalysisHandler>,
        insights_handler: Arc<SessionInsightsHandler>,
    ) -> Self {
        Self {
            disc_handler,
            sentiment_handler,
            recommend_handler,
            complete_handler,
            insights_handler,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/analysis/disc - Classify one utterance
pub async fn analyze_disc(
    State(handlers): State<AnalysisHandlers>,
    payload: Result<Json<DiscRequest>, JsonRejection>,
) -> Response {
    let Json(req) = match payload {
        Ok(json) => json,
        Err(rejection) => return json_rejection(rejection),
    };
    if req.transcript.trim().is_empty() {
        return bad_request("Transcript is required for DISC analysis");
    }

    let query = AnalyzeDiscQuery { input: req.into() };

    match handlers.disc_handler.handle(query).await {
        Ok(analysis) => ApiResponse::ok(analysis)
            .with_message("DISC profile analyzed successfully")
            .into_response_with(StatusCode::OK),
        Err(e) => domain_error_response(e),
    }
}

/// POST /api/analysis/sentiment - Score positive and negative vocabulary
pub async fn analyze_sentiment(
    State(handlers): State<AnalysisHandlers>,
    payload: Result<Json<SentimentRequest>, JsonRejection>,
) -> Response {
    let Json(req) = match payload {
        Ok(json) => json,
        Err(rejection) => return json_rejection(rejection),
    };
    if req.text.trim().is_empty() {
        return bad_request("Text is required for sentiment analysis");
    }

    let query = AnalyzeSentimentQuery { text: req.text };

    match handlers.sentiment_handler.handle(query).await {
        Ok(sentiment) => ApiResponse::ok(sentiment)
            .with_message("Sentiment analyzed successfully")
            .into_response_with(StatusCode::OK),
        Err(e) => domain_error_response(e),
    }
}

/// POST /api/analysis/recommendations - Coaching template for a profile
pub async fn generate_recommendations(
    State(handlers): State<AnalysisHandlers>,
    payload: Result<Json<RecommendationsRequest>, JsonRejection>,
) -> Response {
    let Json(req) = match payload {
        Ok(json) => json,
        Err(rejection) => return json_rejection(rejection),
    };
    let profile = match req.profile {
        Some(profile) if !req.context.transcript.trim().is_empty() => profile.into_label(),
        _ => return bad_request("Profile and transcript are required for recommendations"),
    };

    let query = RecommendQuery {
        profile,
        context: req.context,
    };

    match handlers.recommend_handler.handle(query).await {
        Ok(recommendation) => ApiResponse::ok(recommendation)
            .with_message("Recommendations generated successfully")
            .into_response_with(StatusCode::OK),
        Err(e) => domain_error_response(e),
    }
}

/// POST /api/analysis/behavioral - Subtype, personality type and combined insights
pub async fn analyze_behavioral(
    State(handlers): State<AnalysisHandlers>,
    payload: Result<Json<BehavioralRequest>, JsonRejection>,
) -> Response {
    let Json(req) = match payload {
        Ok(json) => json,
        Err(rejection) => return json_rejection(rejection),
    };
    if req.transcript.trim().is_empty() {
        return bad_request("Transcript is required for behavioral analysis");
    }

    let query = CompleteAnalysisQuery {
        transcript: req.transcript,
        history: req.conversation_history,
    };

    match handlers.complete_handler.handle(query).await {
        Ok(analysis) => ApiResponse::ok(analysis)
            .with_message("Behavioral analysis completed successfully")
            .into_response_with(StatusCode::OK),
        Err(e) => domain_error_response(e),
    }
}

/// GET /api/analysis/session/:session_id/insights - Whole-session summary
pub async fn get_session_insights(
    State(handlers): State<AnalysisHandlers>,
    Path(session_id): Path<String>,
) -> Response {
    let session_id = match session_id.parse::<SessionId>() {
        Ok(id) => id,
        Err(_) => return bad_request("Invalid session ID"),
    };

    match handlers
        .insights_handler
        .handle(SessionInsightsQuery { session_id })
        .await
    {
        Ok(insights) => ApiResponse::ok(insights)
            .with_message("Session insights generated successfully")
            .into_response_with(StatusCode::OK),
        Err(e) => domain_error_response(e.into()),
    }
}
