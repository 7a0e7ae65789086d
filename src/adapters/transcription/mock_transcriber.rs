//! Mock Transcriber - deterministic speech-to-text stand-in.
//!
//! Picks one of a fixed set of Portuguese sales utterances and derives
//! plausible acoustic features from a hash of the audio bytes, so the same
//! payload always yields the same transcription.

use async_trait::async_trait;

use crate::domain::behavior::{AcousticFeatures, EmotionalTone};
use crate::ports::{Transcriber, Transcription, TranscriptionError};

pub const CANNED_UTTERANCES: [&str; 10] = [
    "Olá, como posso ajudá-lo hoje?",
    "Estou interessado em saber mais sobre seus produtos.",
    "Qual é o preço do seu serviço?",
    "Preciso entender melhor os benefícios.",
    "Quando podemos agendar uma demonstração?",
    "Hmm, interessante. Mas eu preciso analisar os números.",
    "Parece uma boa solução para nossa empresa.",
    "Qual é o prazo de implementação?",
    "Vocês oferecem suporte técnico?",
    "Gostaria de discutir isso com minha equipe.",
];

const SUPPORTED_EXTENSIONS: [&str; 6] = ["webm", "wav", "mp3", "ogg", "m4a", "mp4"];
const MOCK_DURATION_SECS: f64 = 3.0;

#[derive(Debug, Clone, Default)]
pub struct MockTranscriber;

impl MockTranscriber {
    pub fn new() -> Self {
        Self
    }

    fn check_format(filename: Option<&str>) -> Result<(), TranscriptionError> {
        let Some(extension) = filename.and_then(|f| f.rsplit_once('.')).map(|(_, ext)| ext) else {
            return Ok(());
        };

        let extension = extension.to_lowercase();
        if SUPPORTED_EXTENSIONS.contains(&extension.as_str()) {
            Ok(())
        } else {
            Err(TranscriptionError::UnsupportedFormat(extension))
        }
    }

    /// Slices of one 64-bit hash drive every simulated value.
    fn features_for(hash: u64) -> AcousticFeatures {
        let slice = |shift: u32, modulo: u64| ((hash >> shift) % modulo) as f64;

        AcousticFeatures {
            pace: 100.0 + slice(8, 100),
            volume: slice(16, 100),
            pitch: 100.0 + slice(24, 200),
            energy: slice(32, 100),
            pause_frequency: slice(40, 100) / 10.0,
            emotional_tone: match (hash >> 48) % 4 {
                0 => EmotionalTone::Positive,
                1 => EmotionalTone::Neutral,
                2 => EmotionalTone::Negative,
                _ => EmotionalTone::Mixed,
            },
        }
    }
}

/// FNV-1a.
fn fingerprint(bytes: &[u8]) -> u64 {
    bytes.iter().fold(0xcbf2_9ce4_8422_2325, |hash, byte| {
        (hash ^ u64::from(*byte)).wrapping_mul(0x0100_0000_01b3)
    })
}

#[async_trait]
impl Transcriber for MockTranscriber {
    async fn transcribe(
        &self,
        audio: &[u8],
        filename: Option<&str>,
    ) -> Result<Transcription, TranscriptionError> {
        if audio.is_empty() {
            return Err(TranscriptionError::EmptyAudio);
        }
        Self::check_format(filename)?;

        let hash = fingerprint(audio);
        let transcript = CANNED_UTTERANCES[(hash % CANNED_UTTERANCES.len() as u64) as usize];

        tracing::debug!(bytes = audio.len(), transcript, "Mock transcription produced");

        Ok(Transcription {
            transcript: transcript.to_string(),
            confidence: 0.85 + ((hash >> 56) % 10) as f64 / 100.0,
            language: "pt-BR".to_string(),
            duration_secs: MOCK_DURATION_SECS,
            acoustic_features: Some(Self::features_for(hash)),
        })
    }
}
