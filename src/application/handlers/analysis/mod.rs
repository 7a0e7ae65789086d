//! Analysis handlers - classification, sentiment, recommendations and insights.

mod analyze_disc;
mod analyze_sentiment;
mod complete_analysis;
mod recommend;
mod session_insights;

pub use analyze_disc::{AnalyzeDiscHandler, AnalyzeDiscQuery};
pub use analyze_sentiment::{AnalyzeSentimentHandler, AnalyzeSentimentQuery};
pub use complete_analysis::{CompleteAnalysisHandler, CompleteAnalysisQuery};
pub use recommend::{RecommendHandler, RecommendQuery};
pub use session_insights::{SessionInsightsHandler, SessionInsightsQuery};
