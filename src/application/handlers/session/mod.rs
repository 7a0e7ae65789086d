//! Session handlers - conversation lifecycle and audio processing.

mod end_session;
mod get_session;
mod list_sessions;
mod process_audio;
mod start_session;

pub use end_session::{EndSessionCommand, EndSessionHandler};
pub use get_session::{GetSessionHandler, GetSessionQuery};
pub use list_sessions::{ListSessionsHandler, ListSessionsQuery};
pub use process_audio::{
    ProcessAudioCommand, ProcessAudioError, ProcessAudioHandler, ProcessAudioResult,
};
pub use start_session::{StartSessionCommand, StartSessionHandler};
