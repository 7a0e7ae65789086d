//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod analysis;
pub mod session;

pub use analysis::{
    AnalyzeDiscHandler, AnalyzeDiscQuery, AnalyzeSentimentHandler, AnalyzeSentimentQuery,
    CompleteAnalysisHandler, CompleteAnalysisQuery, RecommendHandler, RecommendQuery,
    SessionInsightsHandler, SessionInsightsQuery,
};
pub use session::{
    EndSessionCommand, EndSessionHandler, GetSessionHandler, GetSessionQuery, ListSessionsHandler,
    ListSessionsQuery, ProcessAudioCommand, ProcessAudioError, ProcessAudioHandler,
    ProcessAudioResult, StartSessionCommand, StartSessionHandler,
};
