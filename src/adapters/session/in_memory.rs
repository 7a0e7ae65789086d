//! In-Memory Session Repository
//!
//! Process-wide session registry. Sessions live until the process exits.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::behavior::ClassificationResult;
use crate::domain::foundation::{SessionId, UserId};
use crate::domain::session::{AudioSegment, Session, SessionError};
use crate::ports::SessionRepository;

/// In-memory storage for sessions.
#[derive(Debug, Clone, Default)]
pub struct InMemorySessionRepository {
    sessions: Arc<RwLock<HashMap<SessionId, Session>>>,
}

impl InMemorySessionRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn session_count(&self) -> usize {
        self.sessions.read().await.len()
    }

    /// Applies `change` to a stored session under the write lock.
    async fn update<F>(&self, id: &SessionId, change: F) -> Result<Session, SessionError>
    where
        F: FnOnce(&mut Session) -> Result<(), SessionError> + Send,
    {
        let mut sessions = self.sessions.write().await;
        let session = sessions
            .get_mut(id)
            .ok_or_else(|| SessionError::not_found(*id))?;

        change(session)?;
        Ok(session.clone())
    }
}

#[async_trait]
impl SessionRepository for InMemorySessionRepository {
    async fn create(&self, session: Session) -> Result<Session, SessionError> {
        let mut sessions = self.sessions.write().await;
        if sessions.contains_key(session.id()) {
            return Err(SessionError::validation("id", "session already exists"));
        }

        sessions.insert(*session.id(), session.clone());
        Ok(session)
    }

    async fn get(&self, id: &SessionId) -> Result<Session, SessionError> {
        self.sessions
            .read()
            .await
            .get(id)
            .cloned()
            .ok_or_else(|| SessionError::not_found(*id))
    }

    async fn append_segment(
        &self,
        id: &SessionId,
        segment: AudioSegment,
    ) -> Result<Session, SessionError> {
        self.update(id, |session| session.append_segment(segment)).await
    }

    async fn record_profile(
        &self,
        id: &SessionId,
        result: ClassificationResult,
    ) -> Result<Session, SessionError> {
        self.update(id, |session| {
            session.record_profile(result);
            Ok(())
        })
        .await
    }

    async fn end(&self, id: &SessionId) -> Result<Session, SessionError> {
        self.update(id, |session| {
            if !session.end() {
                tracing::debug!(session_id = %session.id(), "Session already ended");
            }
            Ok(())
        })
        .await
    }

    async fn list_for_user(&self, user_id: &UserId) -> Result<Vec<Session>, SessionError> {
        let sessions = self.sessions.read().await;
        let mut owned: Vec<Session> = sessions
            .values()
            .filter(|s| s.user_id() == user_id)
            .cloned()
            .collect();

        owned.sort_by(|a, b| b.start_time().cmp(a.start_time()));
        Ok(owned)
    }
}
