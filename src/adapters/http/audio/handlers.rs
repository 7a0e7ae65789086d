//! HTTP handlers for audio and session endpoints.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    response::Response,
    Json,
};

use crate::adapters::http::response::{
    bad_request, domain_error_response, json_rejection, ApiResponse,
};
use crate::application::handlers::session::{
    EndSessionCommand, EndSessionHandler, GetSessionHandler, GetSessionQuery,
    ListSessionsHandler, ListSessionsQuery, ProcessAudioCommand, ProcessAudioError,
    ProcessAudioHandler, StartSessionCommand, StartSessionHandler,
};
use crate::domain::foundation::{DomainError, ErrorCode, SessionId, ValidationError};
use crate::ports::TranscriptionError;

use super::dto::{
    decode_audio, ListSessionsParams, ProcessAudioRequest, ProcessedAudioResponse,
    StartSessionRequest,
};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct AudioHandlers {
    start_handler: Arc<StartSessionHandler>,
    get_handler: Arc<GetSessionHandler>,
    list_handler: Arc<ListSessionsHandler>,
    end_handler: Arc<EndSessionHandler>,
    process_handler: Arc<ProcessAudioHandler>,
}

impl AudioHandlers {
    pub fn new(
        start_handler: Arc<StartSessionHandler>,
        get_handler: Arc<GetSessionHandler>,
        list_handler: Arc<ListSessionsHandler>,
        end_handler: Arc<EndSessionHandler>,
        process_handler: Arc<ProcessAudioHandler>,
    ) -> Self {
        Self {
            start_handler,
            get_handler,
            list_handler,
            end_handler,
            process_handler,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/audio/session/start - Open a session
pub async fn start_session(
    State(handlers): State<AudioHandlers>,
    payload: Result<Json<StartSessionRequest>, JsonRejection>,
) -> Response {
    let Json(req) = match payload {
        Ok(json) => json,
        Err(rejection) => return json_rejection(rejection),
    };
    let cmd = StartSessionCommand {
        user_id: req.user_id,
        client_name: req.client_name,
        client_company: req.client_company,
    };

    match handlers.start_handler.handle(cmd).await {
        Ok(session) => ApiResponse::ok(session)
            .with_message("Session started successfully")
            .into_response_with(StatusCode::CREATED),
        Err(e) => domain_error_response(e.into()),
    }
}

/// GET /api/audio/session/:session_id - Session with its segments
pub async fn get_session(
    State(handlers): State<AudioHandlers>,
    Path(session_id): Path<String>,
) -> Response {
    let session_id = match session_id.parse::<SessionId>() {
        Ok(id) => id,
        Err(_) => return bad_request("Invalid session ID"),
    };

    match handlers.get_handler.handle(GetSessionQuery { session_id }).await {
        Ok(session) => ApiResponse::ok(session).into_response_with(StatusCode::OK),
        Err(e) => domain_error_response(e.into()),
    }
}

/// GET /api/audio/sessions?userId= - A user's sessions, newest first
pub async fn list_sessions(
    State(handlers): State<AudioHandlers>,
    Query(params): Query<ListSessionsParams>,
) -> Response {
    let query = ListSessionsQuery {
        user_id: params.user_id,
    };

    match handlers.list_handler.handle(query).await {
        Ok(sessions) => ApiResponse::ok(sessions).into_response_with(StatusCode::OK),
        Err(e) => domain_error_response(e.into()),
    }
}

/// POST /api/audio/session/:session_id/end - Close a session
pub async fn end_session(
    State(handlers): State<AudioHandlers>,
    Path(session_id): Path<String>,
) -> Response {
    let session_id = match session_id.parse::<SessionId>() {
        Ok(id) => id,
        Err(_) => return bad_request("Invalid session ID"),
    };

    match handlers.end_handler.handle(EndSessionCommand { session_id }).await {
        Ok(session) => ApiResponse::ok(session)
            .with_message("Session ended successfully")
            .into_response_with(StatusCode::OK),
        Err(e) => domain_error_response(e.into()),
    }
}

/// POST /api/audio/process - Transcribe, store and classify one chunk
pub async fn process_audio(
    State(handlers): State<AudioHandlers>,
    payload: Result<Json<ProcessAudioRequest>, JsonRejection>,
) -> Response {
    let Json(req) = match payload {
        Ok(json) => json,
        Err(rejection) => return json_rejection(rejection),
    };
    let (session_id, audio_data) = match (req.session_id, req.audio_data) {
        (Some(id), Some(data)) if !id.trim().is_empty() && !data.trim().is_empty() => (id, data),
        _ => return bad_request("Session ID and audio data are required"),
    };

    let session_id = match session_id.parse::<SessionId>() {
        Ok(id) => id,
        Err(_) => return bad_request("Invalid session ID"),
    };

    let audio = match decode_audio(&audio_data) {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::debug!(error = %e, "Rejected audio payload");
            let err = ValidationError::invalid_format("audioData", "expected base64");
            return domain_error_response(err.into());
        }
    };

    let cmd = ProcessAudioCommand {
        session_id,
        audio,
        timestamp: req.timestamp,
        filename: req.filename,
        speaker: req.speaker_role.unwrap_or_default(),
    };

    match handlers.process_handler.handle(cmd).await {
        Ok(result) => ApiResponse::ok(ProcessedAudioResponse::from(result))
            .with_message("Audio processed successfully")
            .into_response_with(StatusCode::OK),
        Err(e) => domain_error_response(process_error(e)),
    }
}

/// Service failures are ours; format and empty-payload failures are the caller's.
fn process_error(err: ProcessAudioError) -> DomainError {
    match err {
        ProcessAudioError::Transcription(TranscriptionError::Service(message)) => {
            DomainError::new(ErrorCode::InternalError, message)
        }
        other => other.into(),
    }
}
