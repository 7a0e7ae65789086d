//! Composition root: builds the adapters named by the configuration and
//! assembles the HTTP application.

use std::sync::Arc;

use axum::Router;
use http::{header, HeaderValue, Method};
use thiserror::Error;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::adapters::ai::{MockAIProvider, OpenAIConfig, OpenAIProvider};
use crate::adapters::http::{api_router, AnalysisHandlers, AudioHandlers, HealthState};
use crate::adapters::profile::{AnalysisMode, LlmAnalyzerConfig, LlmBehavioralAnalyzer};
use crate::adapters::session::InMemorySessionRepository;
use crate::adapters::transcription::MockTranscriber;
use crate::application::handlers::analysis::{
    AnalyzeDiscHandler, AnalyzeSentimentHandler, CompleteAnalysisHandler, RecommendHandler,
    SessionInsightsHandler,
};
use crate::application::handlers::session::{
    EndSessionHandler, GetSessionHandler, ListSessionsHandler, ProcessAudioHandler,
    StartSessionHandler,
};
use crate::config::{AppConfig, ServerConfig, ValidationError};
use crate::domain::behavior::BehavioralAnalyzer;
use crate::ports::{AIError, AIProvider, SessionRepository, Transcriber};

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid configuration: {0}")]
    Config(#[from] ValidationError),

    #[error("AI provider initialization failed: {0}")]
    AiProvider(#[from] AIError),
}

/// Chooses the language model backend.
///
/// Without `use_real_ai` the mock provider is wired in local-only mode, so
/// the extended analyzers answer from the keyword and canned fallbacks.
fn build_profile_analyzer(config: &AppConfig) -> Result<Arc<LlmBehavioralAnalyzer>, AppError> {
    let llm_config = LlmAnalyzerConfig {
        temperature: config.ai.temperature,
        max_tokens: config.ai.max_tokens,
    };

    let analyzer = match (&config.ai.openai_api_key, config.features.use_real_ai) {
        (Some(key), true) if config.ai.has_openai() => {
            let provider = OpenAIProvider::new(
                OpenAIConfig::from_secret(key.clone())
                    .with_model(config.ai.model.clone())
                    .with_base_url(config.ai.base_url.clone())
                    .with_timeout(config.ai.timeout()),
            )?;
            let info = provider.provider_info();
            tracing::info!(
                provider = %info.name,
                model = %info.model,
                "Using language model for extended analysis"
            );
            LlmBehavioralAnalyzer::new(Arc::new(provider) as Arc<dyn AIProvider>, AnalysisMode::Llm)
        }
        (_, true) => return Err(ValidationError::MissingRequired("ai.openai_api_key").into()),
        (_, false) => {
            tracing::info!("Real AI disabled, extended analysis runs locally");
            LlmBehavioralAnalyzer::new(
                Arc::new(MockAIProvider::new()) as Arc<dyn AIProvider>,
                AnalysisMode::LocalOnly,
            )
        }
    };

    Ok(Arc::new(analyzer.with_config(llm_config)))
}

/// CORS for the configured frontend origins. Unparseable origins are skipped.
fn cors_layer(server: &ServerConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = server
        .cors_origins_list()
        .into_iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
}

/// Wires every handler against the in-process adapters and returns the
/// router with CORS, timeout and tracing layers applied.
pub fn build_router(config: &AppConfig) -> Result<Router, AppError> {
    let analyzer =
        BehavioralAnalyzer::new().with_indicator_logging(config.features.debug_behavioral_analysis);
    let profile_analyzer = build_profile_analyzer(config)?;

    let sessions: Arc<dyn SessionRepository> = Arc::new(InMemorySessionRepository::new());
    let transcriber: Arc<dyn Transcriber> = Arc::new(MockTranscriber::new());

    let analysis = AnalysisHandlers::new(
        Arc::new(AnalyzeDiscHandler::new(analyzer)),
        Arc::new(AnalyzeSentimentHandler::new()),
        Arc::new(RecommendHandler::new()),
        Arc::new(CompleteAnalysisHandler::new(
            profile_analyzer.clone(),
            profile_analyzer,
        )),
        Arc::new(SessionInsightsHandler::new(sessions.clone(), analyzer)),
    );

    let audio = AudioHandlers::new(
        Arc::new(StartSessionHandler::new(sessions.clone())),
        Arc::new(GetSessionHandler::new(sessions.clone())),
        Arc::new(ListSessionsHandler::new(sessions.clone())),
        Arc::new(EndSessionHandler::new(sessions.clone())),
        Arc::new(ProcessAudioHandler::new(sessions, transcriber, analyzer)),
    );

    let health = HealthState::new(config.server.environment.clone());

    Ok(api_router(analysis, audio, health)
        .layer(cors_layer(&config.server))
        .layer(TimeoutLayer::new(config.server.request_timeout()))
        .layer(TraceLayer::new_for_http()))
}
