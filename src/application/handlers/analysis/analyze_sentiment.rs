//! AnalyzeSentimentHandler - Query handler for lexicon sentiment.

use crate::domain::behavior::{SentimentAnalyzer, SentimentResult};
use crate::domain::foundation::{DomainError, ValidationError};

#[derive(Debug, Clone)]
pub struct AnalyzeSentimentQuery {
    pub text: String,
}

#[derive(Debug, Default)]
pub struct AnalyzeSentimentHandler;

impl AnalyzeSentimentHandler {
    pub fn new() -> Self {
        Self
    }

    pub async fn handle(
        &self,
        query: AnalyzeSentimentQuery,
    ) -> Result<SentimentResult, DomainError> {
        if query.text.trim().is_empty() {
            return Err(ValidationError::empty_field("text").into());
        }

        let result = SentimentAnalyzer::analyze(&query.text);
        tracing::debug!(
            sentiment = ?result.sentiment,
            confidence = result.confidence,
            "Sentiment analyzed"
        );
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::behavior::Sentiment;

    #[tokio::test]
    async fn scores_text() {
        let result = AnalyzeSentimentHandler::new()
            .handle(AnalyzeSentimentQuery {
                text: "Achei ótimo, excelente proposta".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(result.sentiment, Sentiment::Positive);
    }

    #[tokio::test]
    async fn rejects_blank_text() {
        let result = AnalyzeSentimentHandler::new()
            .handle(AnalyzeSentimentQuery {
                text: String::new(),
            })
            .await;

        assert!(result.is_err());
    }
}
