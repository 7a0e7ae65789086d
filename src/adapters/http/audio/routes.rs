//! HTTP routes for audio and session endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{
    end_session, get_session, list_sessions, process_audio, start_session, AudioHandlers,
};

/// Creates the audio router, to be nested under `/api/audio`.
pub fn audio_routes(handlers: AudioHandlers) -> Router {
    Router::new()
        .route("/process", post(process_audio))
        .route("/sessions", get(list_sessions))
        .route("/session/start", post(start_session))
        .route("/session/:session_id", get(get_session))
        .route("/session/:session_id/end", post(end_session))
        .with_state(handlers)
}
