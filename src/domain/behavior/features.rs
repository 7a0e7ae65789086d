//! Classification inputs: transcript, acoustic features and conversation context.

use serde::{Deserialize, Serialize};

/// Coarse emotional tone detected in an utterance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmotionalTone {
    Positive,
    Neutral,
    Negative,
    Mixed,
}

/// Acoustic measurements attached to an utterance.
///
/// Produced outside the classifier (measured or mocked) and passed by value.
/// Absence of the whole record disables every acoustic bonus.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AcousticFeatures {
    /// Speech rate in words per minute.
    pub pace: f64,
    /// Loudness, 0-100.
    pub volume: f64,
    /// Fundamental frequency in Hz.
    pub pitch: f64,
    /// Vocal energy, 0-100.
    pub energy: f64,
    /// Pauses per interval.
    pub pause_frequency: f64,
    pub emotional_tone: EmotionalTone,
}

impl AcousticFeatures {
    /// Features of a calm, unremarkable speaker: no acoustic bonus fires
    /// except the neutral-tone adjustment.
    pub fn neutral() -> Self {
        Self {
            pace: 130.0,
            volume: 50.0,
            pitch: 150.0,
            energy: 50.0,
            pause_frequency: 4.0,
            emotional_tone: EmotionalTone::Neutral,
        }
    }
}

/// Who spoke an utterance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpeakerRole {
    Seller,
    Client,
    #[default]
    Unknown,
}

/// Everything the classification engine consumes for one call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassificationInput {
    pub transcript: String,
    #[serde(default)]
    pub audio_features: Option<AcousticFeatures>,
    /// Prior utterances, oldest first.
    #[serde(default)]
    pub conversation_history: Vec<String>,
    #[serde(default)]
    pub speaker_role: Option<SpeakerRole>,
}

impl ClassificationInput {
    pub fn new(transcript: impl Into<String>) -> Self {
        Self {
            transcript: transcript.into(),
            ..Default::default()
        }
    }

    pub fn with_features(mut self, features: AcousticFeatures) -> Self {
        self.audio_features = Some(features);
        self
    }

    pub fn with_history(mut self, history: Vec<String>) -> Self {
        self.conversation_history = history;
        self
    }

    pub fn with_speaker(mut self, role: SpeakerRole) -> Self {
        self.speaker_role = Some(role);
        self
    }

    /// True when the transcript carries no text at all.
    pub fn is_blank(&self) -> bool {
        self.transcript.trim().is_empty()
    }
}
