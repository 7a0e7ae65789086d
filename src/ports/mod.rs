//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## AI Ports
//!
//! - `AIProvider` - LLM chat completions
//! - `ExtendedProfileAnalyzer` - Subtype classification with local fallback
//! - `PersonalityAnalyzer` - Personality type classification with canned fallback
//!
//! ## Conversation Ports
//!
//! - `SessionRepository` - Live conversation sessions and their segments
//! - `Transcriber` - Speech to text

mod ai_provider;
mod profile_analyzer;
mod session_repository;
mod transcriber;

pub use ai_provider::{
    AIError, AIProvider, CompletionRequest, CompletionResponse, FinishReason, Message,
    MessageRole, ProviderInfo, RequestMetadata, TokenUsage,
};
pub use profile_analyzer::{ExtendedProfileAnalyzer, PersonalityAnalyzer};
pub use session_repository::SessionRepository;
pub use transcriber::{Transcriber, Transcription, TranscriptionError};
