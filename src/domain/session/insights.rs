//! End-of-conversation summary for a session.

use serde::{Deserialize, Serialize};

use super::aggregate::Session;
use crate::domain::behavior::{
    BehavioralAnalyzer, ClassificationInput, Profile, RecommendationSelector,
};
use crate::domain::foundation::{SessionId, Timestamp};

const MAX_KEY_INSIGHTS: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionInsights {
    pub session_id: SessionId,
    pub duration: String,
    pub profile_detected: Profile,
    pub confidence: u8,
    pub key_insights: Vec<String>,
    pub recommended_next_steps: Vec<String>,
}

impl SessionInsights {
    /// Classifies what the client said over the whole session.
    pub fn from_session(session: &Session, analyzer: &BehavioralAnalyzer, now: &Timestamp) -> Self {
        let analysis = analyzer.analyze(&ClassificationInput::new(session.client_transcript()));
        let profile = analysis.result.profile;

        Self {
            session_id: *session.id(),
            duration: format_duration(session.duration(now)),
            profile_detected: profile,
            confidence: analysis.result.confidence,
            key_insights: analysis
                .explanation
                .indicators
                .into_iter()
                .take(MAX_KEY_INSIGHTS)
                .collect(),
            recommended_next_steps: RecommendationSelector::next_steps(profile),
        }
    }
}

fn format_duration(duration: chrono::Duration) -> String {
    let secs = duration.num_seconds().max(0);
    if secs < 60 {
        format!("{} seconds", secs)
    } else {
        format!("{} minutes", secs / 60)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::behavior::{SpeakerRole, MIN_CONFIDENCE};
    use crate::domain::foundation::{SegmentId, UserId};
    use crate::domain::session::AudioSegment;

    fn session_with(transcripts: &[(SpeakerRole, &str)]) -> Session {
        let mut session = Session::new(SessionId::new(), UserId::demo());
        for (speaker, text) in transcripts {
            let segment = AudioSegment {
                id: SegmentId::new(),
                session_id: *session.id(),
                timestamp: 0,
                duration: 2_000,
                speaker: *speaker,
                transcript: text.to_string(),
                audio_features: None,
            };
            session.append_segment(segment).unwrap();
        }
        session
    }

    #[test]
    fn insights_classify_client_speech() {
        let session = session_with(&[
            (SpeakerRole::Seller, "Que tal conversarmos sobre a equipe?"),
            (
                SpeakerRole::Client,
                "Como vocês garantem os dados? Poderia me mostrar a análise e os números detalhados?",
            ),
        ]);

        let insights = SessionInsights::from_session(
            &session,
            &BehavioralAnalyzer::new(),
            &Timestamp::now(),
        );

        assert_eq!(insights.profile_detected, Profile::Analytical);
        assert!(insights.key_insights.len() <= 3);
        assert_eq!(
            insights.recommended_next_steps,
            RecommendationSelector::next_steps(Profile::Analytical)
        );
    }

    #[test]
    fn empty_session_yields_low_confidence() {
        let session = session_with(&[]);
        let insights = SessionInsights::from_session(
            &session,
            &BehavioralAnalyzer::new(),
            &Timestamp::now(),
        );
        assert_eq!(insights.confidence, MIN_CONFIDENCE);
    }

    #[test]
    fn duration_is_formatted_in_minutes() {
        let session = session_with(&[]);
        let later = session.start_time().plus_secs(12 * 60 + 5);

        let insights = SessionInsights::from_session(&session, &BehavioralAnalyzer::new(), &later);
        assert_eq!(insights.duration, "12 minutes");
    }

    #[test]
    fn short_duration_is_formatted_in_seconds() {
        assert_eq!(format_duration(chrono::Duration::seconds(42)), "42 seconds");
    }
}
