//! ListSessionsHandler - Query handler for a user's sessions, newest first.

use std::sync::Arc;

use crate::domain::foundation::UserId;
use crate::domain::session::{Session, SessionError};
use crate::ports::SessionRepository;

#[derive(Debug, Clone, Default)]
pub struct ListSessionsQuery {
    /// Defaults to the demo user when absent.
    pub user_id: Option<String>,
}

pub struct ListSessionsHandler {
    repository: Arc<dyn SessionRepository>,
}

impl ListSessionsHandler {
    pub fn new(repository: Arc<dyn SessionRepository>) -> Self {
        Self { repository }
    }

    /// # Errors
    ///
    /// - `ValidationFailed` if a supplied user id is blank
    pub async fn handle(&self, query: ListSessionsQuery) -> Result<Vec<Session>, SessionError> {
        let user_id = match query.user_id {
            Some(id) => UserId::new(id)?,
            None => UserId::demo(),
        };

        self.repository.list_for_user(&user_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::session::InMemorySessionRepository;
    use crate::domain::foundation::SessionId;

    #[tokio::test]
    async fn lists_only_the_users_sessions() {
        let repo = Arc::new(InMemorySessionRepository::new());
        let other = UserId::new("rep-42").unwrap();
        repo.create(Session::new(SessionId::new(), UserId::demo()))
            .await
            .unwrap();
        repo.create(Session::new(SessionId::new(), other.clone()))
            .await
            .unwrap();

        let handler = ListSessionsHandler::new(repo);

        let demo = handler.handle(ListSessionsQuery::default()).await.unwrap();
        assert_eq!(demo.len(), 1);
        assert_eq!(demo[0].user_id(), &UserId::demo());

        let theirs = handler
            .handle(ListSessionsQuery {
                user_id: Some("rep-42".to_string()),
            })
            .await
            .unwrap();
        assert_eq!(theirs.len(), 1);
        assert_eq!(theirs[0].user_id(), &other);
    }

    #[tokio::test]
    async fn blank_user_id_is_rejected() {
        let result = ListSessionsHandler::new(Arc::new(InMemorySessionRepository::new()))
            .handle(ListSessionsQuery {
                user_id: Some("  ".to_string()),
            })
            .await;

        assert!(matches!(result, Err(SessionError::ValidationFailed { .. })));
    }
}
