//! StartSessionHandler - Command handler for opening a sales conversation.

use std::sync::Arc;

use crate::domain::foundation::{SessionId, UserId};
use crate::domain::session::{Session, SessionError};
use crate::ports::SessionRepository;

/// Command to start a session.
#[derive(Debug, Clone, Default)]
pub struct StartSessionCommand {
    /// Defaults to the demo user when absent.
    pub user_id: Option<String>,
    pub client_name: Option<String>,
    pub client_company: Option<String>,
}

pub struct StartSessionHandler {
    repository: Arc<dyn SessionRepository>,
}

impl StartSessionHandler {
    pub fn new(repository: Arc<dyn SessionRepository>) -> Self {
        Self { repository }
    }

    /// # Errors
    ///
    /// - `ValidationFailed` if a supplied user id is blank
    pub async fn handle(&self, cmd: StartSessionCommand) -> Result<Session, SessionError> {
        let user_id = match cmd.user_id {
            Some(id) => UserId::new(id)?,
            None => UserId::demo(),
        };

        let session = Session::new(SessionId::new(), user_id)
            .with_client(cmd.client_name, cmd.client_company);
        let session = self.repository.create(session).await?;

        tracing::info!(
            session_id = %session.id(),
            user_id = session.user_id().as_str(),
            "Session started"
        );

        Ok(session)
    }
}
