//! Transcriber port - speech to text.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::behavior::AcousticFeatures;

/// Text recovered from one audio chunk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transcription {
    pub transcript: String,
    /// 0.0-1.0.
    pub confidence: f64,
    /// BCP 47 tag, e.g. `pt-BR`.
    pub language: String,
    pub duration_secs: f64,
    /// Measured (or simulated) acoustics, if the transcriber provides them.
    pub acoustic_features: Option<AcousticFeatures>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TranscriptionError {
    #[error("audio payload is empty")]
    EmptyAudio,

    #[error("unsupported audio format: {0}")]
    UnsupportedFormat(String),

    #[error("transcription service failed: {0}")]
    Service(String),
}

#[async_trait]
pub trait Transcriber: Send + Sync {
    /// `filename` is a hint for the container format.
    async fn transcribe(
        &self,
        audio: &[u8],
        filename: Option<&str>,
    ) -> Result<Transcription, TranscriptionError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transcriber_is_object_safe() {
        fn _accepts_dyn(_t: &dyn Transcriber) {}
    }

    #[test]
    fn transcription_error_displays_detail() {
        assert_eq!(
            TranscriptionError::UnsupportedFormat("midi".to_string()).to_string(),
            "unsupported audio format: midi"
        );
    }
}
