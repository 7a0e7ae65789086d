//! HTTP adapter for analysis endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{BehavioralRequest, DiscRequest, ProfileRef, RecommendationsRequest, SentimentRequest};
pub use handlers::AnalysisHandlers;
pub use routes::analysis_routes;
