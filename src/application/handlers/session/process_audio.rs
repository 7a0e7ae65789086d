//! ProcessAudioHandler - Transcribes an audio chunk, stores it as a segment
//! and classifies the speaker.

use std::sync::Arc;
use thiserror::Error;

use crate::domain::behavior::{
    BehavioralAnalyzer, ClassificationInput, DiscAnalysis, Recommendation, RecommendationContext,
    RecommendationSelector, SpeakerRole,
};
use crate::domain::foundation::{DomainError, ErrorCode, SegmentId, SessionId, Timestamp};
use crate::domain::session::{AudioSegment, SessionError};
use crate::ports::{SessionRepository, Transcriber, TranscriptionError};

/// Command to process one chunk of recorded audio.
#[derive(Debug, Clone)]
pub struct ProcessAudioCommand {
    pub session_id: SessionId,
    pub audio: Vec<u8>,
    /// Capture time in epoch milliseconds; defaults to now.
    pub timestamp: Option<i64>,
    pub filename: Option<String>,
    pub speaker: SpeakerRole,
}

/// The stored segment with its classification and coaching.
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessAudioResult {
    pub segment: AudioSegment,
    pub transcription_confidence: f64,
    pub analysis: DiscAnalysis,
    pub recommendation: Recommendation,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProcessAudioError {
    #[error(transparent)]
    Session(#[from] SessionError),

    #[error(transparent)]
    Transcription(#[from] TranscriptionError),
}

impl From<ProcessAudioError> for DomainError {
    fn from(err: ProcessAudioError) -> Self {
        match err {
            ProcessAudioError::Session(e) => e.into(),
            ProcessAudioError::Transcription(e) => {
                DomainError::new(ErrorCode::TranscriptionFailed, e.to_string())
            }
        }
    }
}

pub struct ProcessAudioHandler {
    repository: Arc<dyn SessionRepository>,
    transcriber: Arc<dyn Transcriber>,
    analyzer: BehavioralAnalyzer,
}

impl ProcessAudioHandler {
    pub fn new(
        repository: Arc<dyn SessionRepository>,
        transcriber: Arc<dyn Transcriber>,
        analyzer: BehavioralAnalyzer,
    ) -> Self {
        Self {
            repository,
            transcriber,
            analyzer,
        }
    }

    /// # Errors
    ///
    /// - `Session(NotFound)` if the session does not exist
    /// - `Session(AlreadyEnded)` if the session is completed
    /// - `Transcription` if the audio cannot be transcribed
    pub async fn handle(
        &self,
        cmd: ProcessAudioCommand,
    ) -> Result<ProcessAudioResult, ProcessAudioError> {
        let session = self.repository.get(&cmd.session_id).await?;
        if session.is_completed() {
            return Err(SessionError::already_ended(cmd.session_id).into());
        }

        let transcription = self
            .transcriber
            .transcribe(&cmd.audio, cmd.filename.as_deref())
            .await?;

        // Prior utterances only; the new segment is the one being classified.
        let history = session.history();

        let segment = AudioSegment {
            id: SegmentId::new(),
            session_id: cmd.session_id,
            timestamp: cmd
                .timestamp
                .unwrap_or_else(|| Timestamp::now().as_unix_millis()),
            duration: (transcription.duration_secs * 1000.0).round().max(0.0) as u64,
            speaker: cmd.speaker,
            transcript: transcription.transcript.clone(),
            audio_features: transcription.acoustic_features,
        };
        self.repository
            .append_segment(&cmd.session_id, segment.clone())
            .await?;

        let mut input = ClassificationInput::new(segment.transcript.clone())
            .with_history(history)
            .with_speaker(cmd.speaker);
        if let Some(features) = segment.audio_features {
            input = input.with_features(features);
        }

        let analysis = self.analyzer.analyze(&input);
        self.repository
            .record_profile(&cmd.session_id, analysis.result)
            .await?;

        let context = RecommendationContext {
            transcript: segment.transcript.clone(),
            conversation_context: input.conversation_history.clone(),
            ..Default::default()
        };
        let recommendation = RecommendationSelector::recommend(analysis.result.profile, &context);

        tracing::info!(
            session_id = %cmd.session_id,
            segment_id = %segment.id,
            profile = %analysis.result.profile,
            confidence = analysis.result.confidence,
            "Audio segment processed"
        );

        Ok(ProcessAudioResult {
            segment,
            transcription_confidence: transcription.confidence,
            analysis,
            recommendation,
        })
    }
}
