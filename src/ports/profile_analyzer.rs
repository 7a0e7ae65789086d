//! Profile analyzer ports for the language-model backed classifiers.
//!
//! Both operations are infallible: implementations resolve provider failures
//! into a local fallback before returning.

use async_trait::async_trait;

use crate::domain::behavior::{ExtendedProfile, PersonalityTypeProfile};

/// Classifies a transcript into a base profile with subtype and traits.
#[async_trait]
pub trait ExtendedProfileAnalyzer: Send + Sync {
    /// `history` holds prior utterances, oldest first.
    async fn classify_extended(&self, transcript: &str, history: &[String]) -> ExtendedProfile;
}

/// Classifies a transcript into a four-letter personality type.
#[async_trait]
pub trait PersonalityAnalyzer: Send + Sync {
    async fn classify_personality(
        &self,
        transcript: &str,
        history: &[String],
    ) -> PersonalityTypeProfile;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn analyzer_ports_are_object_safe() {
        fn _accepts_extended(_a: &dyn ExtendedProfileAnalyzer) {}
        fn _accepts_personality(_a: &dyn PersonalityAnalyzer) {}
    }
}
