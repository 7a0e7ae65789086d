//! Session repository port.
//!
//! Owns the set of live conversation sessions. The classification engine
//! never touches it; handlers read history from here and pass it by value.

use async_trait::async_trait;

use crate::domain::behavior::ClassificationResult;
use crate::domain::foundation::{SessionId, UserId};
use crate::domain::session::{AudioSegment, Session, SessionError};

/// Repository port for Session aggregates.
///
/// Every mutating call returns the session as stored after the change.
#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// Stores a new session.
    async fn create(&self, session: Session) -> Result<Session, SessionError>;

    /// # Errors
    ///
    /// - `NotFound` if no session has this id
    async fn get(&self, id: &SessionId) -> Result<Session, SessionError>;

    /// Appends a segment to the end of a session.
    ///
    /// # Errors
    ///
    /// - `NotFound` if no session has this id
    /// - `AlreadyEnded` if the session is completed
    async fn append_segment(
        &self,
        id: &SessionId,
        segment: AudioSegment,
    ) -> Result<Session, SessionError>;

    /// Stores the latest client classification.
    async fn record_profile(
        &self,
        id: &SessionId,
        result: ClassificationResult,
    ) -> Result<Session, SessionError>;

    /// Ends a session; ending twice returns the already-ended session.
    async fn end(&self, id: &SessionId) -> Result<Session, SessionError>;

    /// Sessions owned by a user, newest first.
    async fn list_for_user(&self, user_id: &UserId) -> Result<Vec<Session>, SessionError>;
}
