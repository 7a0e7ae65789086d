//! HTTP DTOs for audio and session endpoints.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::{Deserialize, Serialize};

use crate::application::handlers::session::ProcessAudioResult;
use crate::domain::behavior::{DiscAnalysis, Recommendation, SpeakerRole};
use crate::domain::session::AudioSegment;

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Request to open a session. Every field is optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StartSessionRequest {
    pub user_id: Option<String>,
    pub client_name: Option<String>,
    pub client_company: Option<String>,
}

/// Query string for listing sessions.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListSessionsParams {
    pub user_id: Option<String>,
}

/// One recorded chunk, base64 encoded.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProcessAudioRequest {
    pub session_id: Option<String>,
    /// Raw base64 or a `data:<mime>;base64,` URL.
    pub audio_data: Option<String>,
    pub timestamp: Option<i64>,
    pub filename: Option<String>,
    pub speaker_role: Option<SpeakerRole>,
}

/// Decodes the audio payload, accepting data URLs from browser recorders.
pub fn decode_audio(data: &str) -> Result<Vec<u8>, base64::DecodeError> {
    let payload = match data.strip_prefix("data:") {
        Some(url) => url.split_once(',').map_or(url, |(_, body)| body),
        None => data,
    };
    STANDARD.decode(payload.trim())
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// The stored segment with its live classification.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessedAudioResponse {
    pub segment: AudioSegment,
    pub transcription_confidence: f64,
    pub analysis: DiscAnalysis,
    pub recommendation: Recommendation,
}

impl From<ProcessAudioResult> for ProcessedAudioResponse {
    fn from(result: ProcessAudioResult) -> Self {
        Self {
            segment: result.segment,
            transcription_confidence: result.transcription_confidence,
            analysis: result.analysis,
            recommendation: result.recommendation,
        }
    }
}
