//! AnalyzeDiscHandler - Query handler for one base profile classification.

use crate::domain::behavior::{BehavioralAnalyzer, ClassificationInput, DiscAnalysis};
use crate::domain::foundation::{DomainError, ValidationError};

/// Query to classify one utterance.
#[derive(Debug, Clone)]
pub struct AnalyzeDiscQuery {
    pub input: ClassificationInput,
}

/// Handler for base profile classification.
pub struct AnalyzeDiscHandler {
    analyzer: BehavioralAnalyzer,
}

impl AnalyzeDiscHandler {
    pub fn new(analyzer: BehavioralAnalyzer) -> Self {
        Self { analyzer }
    }

    /// # Errors
    ///
    /// - `EmptyField` if the transcript is blank
    pub async fn handle(&self, query: AnalyzeDiscQuery) -> Result<DiscAnalysis, DomainError> {
        if query.input.is_blank() {
            return Err(ValidationError::empty_field("transcript").into());
        }

        Ok(self.analyzer.analyze(&query.input))
    }
}
