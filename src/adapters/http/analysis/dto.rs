//! HTTP DTOs for analysis endpoints.
//!
//! Request fields are optional at the serde level so that a missing
//! transcript is answered with the 400 envelope rather than an extractor
//! rejection.

use serde::Deserialize;

use crate::domain::behavior::{
    AcousticFeatures, ClassificationInput, RecommendationContext, SpeakerRole,
};

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Request to classify one utterance.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DiscRequest {
    pub transcript: String,
    pub audio_features: Option<AcousticFeatures>,
    pub conversation_history: Vec<String>,
    pub speaker_role: Option<SpeakerRole>,
}

impl From<DiscRequest> for ClassificationInput {
    fn from(req: DiscRequest) -> Self {
        ClassificationInput {
            transcript: req.transcript,
            audio_features: req.audio_features,
            conversation_history: req.conversation_history,
            speaker_role: req.speaker_role,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SentimentRequest {
    pub text: String,
}

/// A profile given either as a bare label or as a previous classification.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ProfileRef {
    Label(String),
    Classified { profile: String },
}

impl ProfileRef {
    pub fn into_label(self) -> String {
        match self {
            ProfileRef::Label(label) | ProfileRef::Classified { profile: label } => label,
        }
    }
}

/// Request for a coaching template.
#[derive(Debug, Clone, Deserialize)]
pub struct RecommendationsRequest {
    #[serde(default)]
    pub profile: Option<ProfileRef>,
    #[serde(flatten)]
    pub context: RecommendationContext,
}

/// Request for the complete behavioral analysis.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BehavioralRequest {
    pub transcript: String,
    pub conversation_history: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::behavior::SalesStage;

    #[test]
    fn disc_request_accepts_camel_case_fields() {
        let req: DiscRequest = serde_json::from_str(
            r#"{"transcript": "Quero resultado", "conversationHistory": ["Olá"], "speakerRole": "client"}"#,
        )
        .unwrap();

        let input: ClassificationInput = req.into();
        assert_eq!(input.transcript, "Quero resultado");
        assert_eq!(input.conversation_history, vec!["Olá".to_string()]);
        assert_eq!(input.speaker_role, Some(SpeakerRole::Client));
        assert!(input.audio_features.is_none());
    }

    #[test]
    fn missing_transcript_deserializes_blank() {
        let req: DiscRequest = serde_json::from_str("{}").unwrap();
        assert!(ClassificationInput::from(req).is_blank());
    }

    #[test]
    fn profile_accepts_label_or_classification() {
        let req: RecommendationsRequest = serde_json::from_str(
            r#"{"profile": "ANALITICO", "transcript": "Preciso de dados", "salesStage": "closing"}"#,
        )
        .unwrap();
        assert_eq!(req.profile.unwrap().into_label(), "ANALITICO");
        assert_eq!(req.context.transcript, "Preciso de dados");
        assert_eq!(req.context.sales_stage, Some(SalesStage::Closing));

        let req: RecommendationsRequest = serde_json::from_str(
            r#"{"profile": {"profile": "INTEGRADOR", "confidence": 70}, "transcript": "Equipe"}"#,
        )
        .unwrap();
        assert_eq!(req.profile.unwrap().into_label(), "INTEGRADOR");
    }

    #[test]
    fn missing_profile_is_none() {
        let req: RecommendationsRequest =
            serde_json::from_str(r#"{"transcript": "Olá"}"#).unwrap();
        assert!(req.profile.is_none());
    }
}
