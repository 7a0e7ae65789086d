//! SessionInsightsHandler - Query handler for end-of-conversation insights.

use std::sync::Arc;

use crate::domain::behavior::BehavioralAnalyzer;
use crate::domain::foundation::{SessionId, Timestamp};
use crate::domain::session::{SessionError, SessionInsights};
use crate::ports::SessionRepository;

#[derive(Debug, Clone)]
pub struct SessionInsightsQuery {
    pub session_id: SessionId,
}

pub struct SessionInsightsHandler {
    repository: Arc<dyn SessionRepository>,
    analyzer: BehavioralAnalyzer,
}

impl SessionInsightsHandler {
    pub fn new(repository: Arc<dyn SessionRepository>, analyzer: BehavioralAnalyzer) -> Self {
        Self {
            repository,
            analyzer,
        }
    }

    /// # Errors
    ///
    /// - `NotFound` if the session does not exist
    pub async fn handle(
        &self,
        query: SessionInsightsQuery,
    ) -> Result<SessionInsights, SessionError> {
        let session = self.repository.get(&query.session_id).await?;
        Ok(SessionInsights::from_session(
            &session,
            &self.analyzer,
            &Timestamp::now(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::session::InMemorySessionRepository;
    use crate::domain::behavior::{Profile, SpeakerRole, MIN_CONFIDENCE};
    use crate::domain::foundation::{SegmentId, UserId};
    use crate::domain::session::{AudioSegment, Session};

    const ANALYTICAL_LINE: &str =
        "Como vocês garantem os dados? Poderia me mostrar a análise e os números detalhados?";

    #[tokio::test]
    async fn summarizes_client_speech() {
        let repo = Arc::new(InMemorySessionRepository::new());
        let session = repo
            .create(Session::new(SessionId::new(), UserId::demo()))
            .await
            .unwrap();
        let id = *session.id();
        repo.append_segment(
            &id,
            AudioSegment {
                id: SegmentId::new(),
                session_id: id,
                timestamp: 0,
                duration: 3000,
                speaker: SpeakerRole::Client,
                transcript: ANALYTICAL_LINE.to_string(),
                audio_features: None,
            },
        )
        .await
        .unwrap();

        let insights = SessionInsightsHandler::new(repo, BehavioralAnalyzer::new())
            .handle(SessionInsightsQuery { session_id: id })
            .await
            .unwrap();

        assert_eq!(insights.session_id, id);
        assert_eq!(insights.profile_detected, Profile::Analytical);
        assert!(insights.key_insights.len() <= 3);
        assert!(!insights.recommended_next_steps.is_empty());
    }

    #[tokio::test]
    async fn empty_session_gets_low_confidence() {
        let repo = Arc::new(InMemorySessionRepository::new());
        let session = repo
            .create(Session::new(SessionId::new(), UserId::demo()))
            .await
            .unwrap();

        let insights = SessionInsightsHandler::new(repo, BehavioralAnalyzer::new())
            .handle(SessionInsightsQuery {
                session_id: *session.id(),
            })
            .await
            .unwrap();

        assert_eq!(insights.confidence, MIN_CONFIDENCE);
    }

    #[tokio::test]
    async fn unknown_session_is_not_found() {
        let repo = Arc::new(InMemorySessionRepository::new());
        let id = SessionId::new();

        let result = SessionInsightsHandler::new(repo, BehavioralAnalyzer::new())
            .handle(SessionInsightsQuery { session_id: id })
            .await;

        assert_eq!(result, Err(SessionError::NotFound(id)));
    }
}
