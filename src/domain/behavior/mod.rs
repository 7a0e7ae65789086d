//! Behavior Module - Pure classification engine for sales conversations.
//!
//! Maps what a client says (and optionally how they say it) onto two
//! behavioral axes, resolves a profile, and selects coaching material.
//!
//! # Components
//!
//! - `FeatureScorer` - Assertiveness and emotionality from text and acoustics
//! - `ProfileClassifier` - Quadrant resolution with a dead zone
//! - `ConfidenceCalculator` - Evidence-based confidence in `[30, 95]`
//! - `IndicatorGenerator` - Diagnostic indicators and reasoning
//! - `RecommendationSelector` - Static per-profile coaching templates
//! - `KeywordSubtypeClassifier` - Local extended-profile classifier
//! - `PersonalityTypeProfile` - Four-letter personality types
//! - `InsightGenerator` - Combined coaching text from both profile variants
//! - `SentimentAnalyzer` - Lexicon sentiment
//! - `BehavioralAnalyzer` - One-call facade over the base pipeline
//!
//! Nothing in this module performs I/O or returns errors.

mod analyzer;
mod classifier;
mod confidence;
mod features;
mod indicators;
mod insights;
mod personality;
mod profile;
mod recommendation;
mod scorer;
mod sentiment;
mod subtype;

pub use analyzer::{BehavioralAnalyzer, DiscAnalysis};
pub use classifier::{ProfileClassifier, DEAD_ZONE};
pub use confidence::{ConfidenceCalculator, MAX_CONFIDENCE, MIN_CONFIDENCE};
pub use features::{AcousticFeatures, ClassificationInput, EmotionalTone, SpeakerRole};
pub use indicators::{Explanation, IndicatorGenerator, GENERIC_INDICATOR};
pub use insights::{AnalysisProfiles, BehavioralAnalysis, CombinedInsights, InsightGenerator};
pub use personality::{
    PersonalityDimensions, PersonalityType, PersonalityTypeProfile, TypeDescription,
};
pub use profile::{clamp_axis, AxisScores, ClassificationResult, Profile, AXIS_MAX, AXIS_MIN};
pub use recommendation::{
    Priority, Recommendation, RecommendationContext, RecommendationSelector, SalesStage, Timing,
};
pub use scorer::{FeatureScorer, SentenceStats};
pub use sentiment::{Sentiment, SentimentAnalyzer, SentimentResult};
pub use subtype::{
    BehavioralAxes, ExtendedProfile, KeywordSubtypeClassifier, Subtype, TraitDetails,
    KEYWORD_FALLBACK_CONFIDENCE,
};
