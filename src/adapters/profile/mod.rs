//! Profile analyzers backed by a language model.

mod llm_analyzer;

pub use llm_analyzer::{AnalysisMode, LlmAnalyzerConfig, LlmBehavioralAnalyzer, HISTORY_WINDOW};
