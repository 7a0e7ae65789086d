//! Behavioral Analyzer - runs scoring, classification, confidence and
//! indicator generation for one utterance.

use serde::{Deserialize, Serialize};

use super::classifier::ProfileClassifier;
use super::confidence::ConfidenceCalculator;
use super::features::ClassificationInput;
use super::indicators::{Explanation, IndicatorGenerator};
use super::profile::ClassificationResult;
use super::scorer::FeatureScorer;

/// Classification plus its diagnostic explanation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscAnalysis {
    #[serde(flatten)]
    pub result: ClassificationResult,
    #[serde(flatten)]
    pub explanation: Explanation,
}

/// Stateless apart from the logging switch; safe to share across requests.
#[derive(Debug, Clone, Copy, Default)]
pub struct BehavioralAnalyzer {
    log_indicators: bool,
}

impl BehavioralAnalyzer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Logs indicators and reasoning at debug level for every call.
    pub fn with_indicator_logging(mut self, enabled: bool) -> Self {
        self.log_indicators = enabled;
        self
    }

    pub fn analyze(&self, input: &ClassificationInput) -> DiscAnalysis {
        let transcript = input.transcript.as_str();
        let features = input.audio_features.as_ref();

        let axes = FeatureScorer::score_axes(transcript, features);
        let profile = ProfileClassifier::classify(&axes);
        let confidence = ConfidenceCalculator::confidence(transcript, features, &axes);
        let explanation = IndicatorGenerator::explain(transcript, features, profile, &axes);

        tracing::info!(
            profile = %profile,
            confidence,
            assertiveness = axes.assertiveness,
            emotionality = axes.emotionality,
            "Behavioral profile classified"
        );

        if self.log_indicators {
            tracing::debug!(
                indicators = ?explanation.indicators,
                reasoning = %explanation.reasoning,
                history_len = input.conversation_history.len(),
                "Behavioral analysis details"
            );
        }

        DiscAnalysis {
            result: ClassificationResult {
                axes,
                profile,
                confidence,
            },
            explanation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::behavior::confidence::MIN_CONFIDENCE;
    use crate::domain::behavior::features::{AcousticFeatures, EmotionalTone};
    use crate::domain::behavior::profile::Profile;

    #[test]
    fn roi_question_is_pragmatic() {
        let input = ClassificationInput::new(
            "Preciso saber quanto custa e quando posso ver resultado. Qual é o ROI concreto?",
        );

        let analysis = BehavioralAnalyzer::new().analyze(&input);

        assert_eq!(analysis.result.profile, Profile::Pragmatic);
        assert_eq!(analysis.result.axes.assertiveness, 60);
        assert_eq!(analysis.result.axes.emotionality, -15);
        assert!(analysis.result.confidence >= 50);
    }

    #[test]
    fn enthusiastic_vision_is_intuitive() {
        let input = ClassificationInput::new(
            "Isso é incrível! Posso imaginar como isso vai transformar nossa operação completamente.",
        );

        let analysis = BehavioralAnalyzer::new().analyze(&input);

        assert_eq!(analysis.result.profile, Profile::Intuitive);
        assert!(analysis
            .explanation
            .indicators
            .contains(&"Exclamações: 1".to_string()));
    }

    #[test]
    fn data_request_is_analytical() {
        let input = ClassificationInput::new(
            "Como vocês garantem os dados? Poderia me mostrar a análise e os números detalhados?",
        );

        let analysis = BehavioralAnalyzer::new().analyze(&input);

        assert_eq!(analysis.result.profile, Profile::Analytical);
    }

    #[test]
    fn team_concern_is_integrator() {
        let input = ClassificationInput::new(
            "Será que a equipe vai se sentir confortável? Acho que as pessoas precisam de confiança.",
        );

        let analysis = BehavioralAnalyzer::new().analyze(&input);

        assert_eq!(analysis.result.profile, Profile::Integrator);
        assert!(analysis
            .explanation
            .indicators
            .contains(&"Preocupação com a equipe".to_string()));
    }

    #[test]
    fn blank_transcript_gets_low_confidence_generic_result() {
        let analysis = BehavioralAnalyzer::new().analyze(&ClassificationInput::new("   "));

        assert_eq!(analysis.result.confidence, MIN_CONFIDENCE);
        assert_eq!(analysis.result.profile, Profile::Intuitive);
    }

    #[test]
    fn acoustic_features_raise_confidence() {
        let transcript = "Quero fechar ainda hoje.";
        let plain = BehavioralAnalyzer::new().analyze(&ClassificationInput::new(transcript));
        let measured = BehavioralAnalyzer::new().analyze(
            &ClassificationInput::new(transcript).with_features(AcousticFeatures {
                pace: 170.0,
                volume: 80.0,
                pitch: 180.0,
                energy: 60.0,
                pause_frequency: 2.0,
                emotional_tone: EmotionalTone::Neutral,
            }),
        );

        assert!(measured.result.confidence > plain.result.confidence);
    }

    #[test]
    fn analysis_serializes_flat() {
        let analysis = BehavioralAnalyzer::new()
            .with_indicator_logging(true)
            .analyze(&ClassificationInput::new("Quero decidir agora."));
        let value = serde_json::to_value(&analysis).unwrap();

        assert_eq!(value["profile"], "PRAGMATICO");
        assert!(value["assertiveness"].is_number());
        assert!(value["indicators"].is_array());
        assert!(value["reasoning"].is_string());
    }
}
