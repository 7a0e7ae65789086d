//! EndSessionHandler - Command handler for closing a sales conversation.

use std::sync::Arc;

use crate::domain::foundation::SessionId;
use crate::domain::session::{Session, SessionError};
use crate::ports::SessionRepository;

#[derive(Debug, Clone)]
pub struct EndSessionCommand {
    pub session_id: SessionId,
}

pub struct EndSessionHandler {
    repository: Arc<dyn SessionRepository>,
}

impl EndSessionHandler {
    pub fn new(repository: Arc<dyn SessionRepository>) -> Self {
        Self { repository }
    }

    /// Ending an already-ended session returns it unchanged.
    pub async fn handle(&self, cmd: EndSessionCommand) -> Result<Session, SessionError> {
        let session = self.repository.end(&cmd.session_id).await?;

        tracing::info!(
            session_id = %session.id(),
            segments = session.segments().len(),
            "Session ended"
        );

        Ok(session)
    }
}
