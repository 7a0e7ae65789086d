//! Session aggregate entity.
//!
//! A session is one recorded sales conversation. It owns its audio segments
//! in arrival order and remembers the latest profile detected for the client.

use serde::{Deserialize, Serialize};

use super::errors::SessionError;
use crate::domain::behavior::{AcousticFeatures, ClassificationResult, SpeakerRole};
use crate::domain::foundation::{SegmentId, SessionId, Timestamp, UserId};

/// Lifecycle state of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionStatus {
    Active,
    Completed,
    Paused,
}

/// One transcribed slice of audio.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AudioSegment {
    pub id: SegmentId,
    pub session_id: SessionId,
    /// Client-supplied capture time in milliseconds since the epoch.
    pub timestamp: i64,
    /// Length of the audio in milliseconds.
    pub duration: u64,
    #[serde(rename = "speakerId")]
    pub speaker: SpeakerRole,
    pub transcript: String,
    pub audio_features: Option<AcousticFeatures>,
}

/// Session aggregate.
///
/// # Invariants
///
/// - `segments` are kept in append order and all carry this session's id
/// - Completed sessions accept no further segments
/// - `end_time` is set iff the status is `Completed`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    id: SessionId,
    user_id: UserId,
    client_name: Option<String>,
    client_company: Option<String>,
    start_time: Timestamp,
    end_time: Option<Timestamp>,
    status: SessionStatus,
    #[serde(rename = "audioSegments")]
    segments: Vec<AudioSegment>,
    current_profile: Option<ClassificationResult>,
}

impl Session {
    /// Starts a new active session.
    pub fn new(id: SessionId, user_id: UserId) -> Self {
        Self {
            id,
            user_id,
            client_name: None,
            client_company: None,
            start_time: Timestamp::now(),
            end_time: None,
            status: SessionStatus::Active,
            segments: Vec::new(),
            current_profile: None,
        }
    }

    pub fn with_client(mut self, name: Option<String>, company: Option<String>) -> Self {
        self.client_name = name.filter(|n| !n.trim().is_empty());
        self.client_company = company.filter(|c| !c.trim().is_empty());
        self
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> &SessionId {
        &self.id
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn client_name(&self) -> Option<&str> {
        self.client_name.as_deref()
    }

    pub fn client_company(&self) -> Option<&str> {
        self.client_company.as_deref()
    }

    pub fn start_time(&self) -> &Timestamp {
        &self.start_time
    }

    pub fn end_time(&self) -> Option<&Timestamp> {
        self.end_time.as_ref()
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    pub fn segments(&self) -> &[AudioSegment] {
        &self.segments
    }

    pub fn current_profile(&self) -> Option<&ClassificationResult> {
        self.current_profile.as_ref()
    }

    pub fn is_completed(&self) -> bool {
        self.status == SessionStatus::Completed
    }

    /// Elapsed time from start to end, or to `now` while still open.
    pub fn duration(&self, now: &Timestamp) -> chrono::Duration {
        let end = self.end_time.as_ref().unwrap_or(now);
        end.duration_since(&self.start_time)
    }

    /// Transcripts of every segment, oldest first.
    pub fn history(&self) -> Vec<String> {
        self.segments.iter().map(|s| s.transcript.clone()).collect()
    }

    /// Text spoken by the client, or everything when no segment is tagged
    /// as client speech.
    pub fn client_transcript(&self) -> String {
        let client: Vec<&str> = self
            .segments
            .iter()
            .filter(|s| s.speaker == SpeakerRole::Client)
            .map(|s| s.transcript.as_str())
            .collect();

        if client.is_empty() {
            self.segments
                .iter()
                .map(|s| s.transcript.as_str())
                .collect::<Vec<_>>()
                .join(" ")
        } else {
            client.join(" ")
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Appends a segment.
    ///
    /// # Errors
    ///
    /// - `AlreadyEnded` if the session is completed
    /// - `ValidationFailed` if the segment belongs to another session
    pub fn append_segment(&mut self, segment: AudioSegment) -> Result<(), SessionError> {
        if self.is_completed() {
            return Err(SessionError::already_ended(self.id));
        }
        if segment.session_id != self.id {
            return Err(SessionError::validation(
                "sessionId",
                "segment belongs to a different session",
            ));
        }
        self.segments.push(segment);
        Ok(())
    }

    /// Records the latest classification of the client.
    pub fn record_profile(&mut self, result: ClassificationResult) {
        self.current_profile = Some(result);
    }

    /// Ends the session. Returns `false` if it had already ended.
    pub fn end(&mut self) -> bool {
        if self.is_completed() {
            return false;
        }
        self.status = SessionStatus::Completed;
        self.end_time = Some(Timestamp::now());
        true
    }
}
