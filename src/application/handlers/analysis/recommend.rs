//! RecommendHandler - Query handler for profile coaching templates.

use crate::domain::behavior::{Recommendation, RecommendationContext, RecommendationSelector};
use crate::domain::foundation::{DomainError, ValidationError};

/// Query for a recommendation.
///
/// `profile` is a label; unknown labels get the analytical template.
#[derive(Debug, Clone)]
pub struct RecommendQuery {
    pub profile: String,
    pub context: RecommendationContext,
}

#[derive(Debug, Default)]
pub struct RecommendHandler;

impl RecommendHandler {
    pub fn new() -> Self {
        Self
    }

    /// # Errors
    ///
    /// - `EmptyField` if the profile or the transcript is blank
    pub async fn handle(&self, query: RecommendQuery) -> Result<Recommendation, DomainError> {
        if query.profile.trim().is_empty() {
            return Err(ValidationError::empty_field("profile").into());
        }
        if query.context.transcript.trim().is_empty() {
            return Err(ValidationError::empty_field("transcript").into());
        }

        Ok(RecommendationSelector::recommend_for_label(
            &query.profile,
            &query.context,
        ))
    }
}
