//! HTTP adapter for audio capture and session lifecycle endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    decode_audio, ListSessionsParams, ProcessAudioRequest, ProcessedAudioResponse,
    StartSessionRequest,
};
pub use handlers::AudioHandlers;
pub use routes::audio_routes;
