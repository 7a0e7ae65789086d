//! Adapters - Implementations of port interfaces.
//!
//! - `ai` - Language model providers (OpenAI, mock)
//! - `profile` - LLM-backed extended and personality analyzers
//! - `session` - Session storage (in-memory)
//! - `transcription` - Speech to text (deterministic mock)
//! - `http` - axum REST surface

pub mod ai;
pub mod http;
pub mod profile;
pub mod session;
pub mod transcription;
