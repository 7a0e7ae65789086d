//! Session domain module.
//!
//! A session is one recorded sales conversation: an ordered list of
//! transcribed audio segments plus the latest client profile.

mod aggregate;
mod errors;
mod insights;

pub use aggregate::{AudioSegment, Session, SessionStatus};
pub use errors::SessionError;
pub use insights::SessionInsights;
