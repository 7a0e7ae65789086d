//! CompleteAnalysisHandler - Runs both extended classifiers and merges them.

use std::sync::Arc;

use crate::domain::behavior::{AnalysisProfiles, BehavioralAnalysis, InsightGenerator};
use crate::domain::foundation::{DomainError, ValidationError};
use crate::ports::{ExtendedProfileAnalyzer, PersonalityAnalyzer};

#[derive(Debug, Clone)]
pub struct CompleteAnalysisQuery {
    pub transcript: String,
    /// Prior utterances, oldest first.
    pub history: Vec<String>,
}

/// Handler for the complete behavioral analysis.
///
/// The two classifiers run concurrently; neither can fail, so the handler
/// only rejects bad input.
pub struct CompleteAnalysisHandler {
    extended: Arc<dyn ExtendedProfileAnalyzer>,
    personality: Arc<dyn PersonalityAnalyzer>,
}

impl CompleteAnalysisHandler {
    pub fn new(
        extended: Arc<dyn ExtendedProfileAnalyzer>,
        personality: Arc<dyn PersonalityAnalyzer>,
    ) -> Self {
        Self {
            extended,
            personality,
        }
    }

    pub async fn handle(
        &self,
        query: CompleteAnalysisQuery,
    ) -> Result<BehavioralAnalysis, DomainError> {
        if query.transcript.trim().is_empty() {
            return Err(ValidationError::empty_field("transcript").into());
        }

        let (disc, mbti) = futures::join!(
            self.extended.classify_extended(&query.transcript, &query.history),
            self.personality
                .classify_personality(&query.transcript, &query.history),
        );

        let recommendations = InsightGenerator::combine(&disc, &mbti);

        tracing::info!(
            profile = %disc.profile,
            subtype = disc.subtype.label(),
            personality_type = %mbti.personality_type,
            "Complete behavioral analysis finished"
        );

        Ok(BehavioralAnalysis {
            transcript: query.transcript,
            profiles: AnalysisProfiles { disc, mbti },
            recommendations,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ai::MockAIProvider;
    use crate::adapters::profile::{AnalysisMode, LlmBehavioralAnalyzer};
    use crate::domain::behavior::{PersonalityTypeProfile, Profile, Subtype};
    use serde_json::json;

    fn handler(provider: MockAIProvider, mode: AnalysisMode) -> CompleteAnalysisHandler {
        let analyzer = Arc::new(LlmBehavioralAnalyzer::new(Arc::new(provider), mode));
        CompleteAnalysisHandler::new(analyzer.clone(), analyzer)
    }

    fn query(transcript: &str) -> CompleteAnalysisQuery {
        CompleteAnalysisQuery {
            transcript: transcript.to_string(),
            history: Vec::new(),
        }
    }

    #[tokio::test]
    async fn local_mode_uses_both_fallbacks() {
        let analysis = handler(MockAIProvider::new(), AnalysisMode::LocalOnly)
            .handle(query("Quero um resultado rápido e direto"))
            .await
            .unwrap();

        assert_eq!(analysis.profiles.disc.profile, Profile::Pragmatic);
        assert_eq!(analysis.profiles.disc.subtype, Subtype::Entrepreneur);
        assert_eq!(analysis.profiles.mbti, PersonalityTypeProfile::canned());
        assert_eq!(
            analysis.recommendations,
            InsightGenerator::combine(&analysis.profiles.disc, &analysis.profiles.mbti)
        );
    }

    #[tokio::test]
    async fn language_model_replies_are_combined() {
        let provider = MockAIProvider::new()
            .with_json(json!({"type": "INTUITIVO", "subtype": "Engajador", "confidence": 90}))
            .with_json(json!({
                "dimensions": {"extroversion": 50, "sensing": -20, "thinking": -30, "judging": 10}
            }));

        let analysis = handler(provider.clone(), AnalysisMode::Llm)
            .handle(query("Adorei, isso é incrível!"))
            .await
            .unwrap();

        assert_eq!(provider.call_count(), 2);
        assert_eq!(analysis.transcript, "Adorei, isso é incrível!");
        assert!(analysis.recommendations.immediate_action.contains("Engajador"));
    }

    #[tokio::test]
    async fn blank_transcript_is_rejected() {
        let result = handler(MockAIProvider::new(), AnalysisMode::LocalOnly)
            .handle(query(""))
            .await;

        assert!(result.is_err());
    }
}
