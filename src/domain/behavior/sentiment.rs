//! Lexicon sentiment scoring.

use serde::{Deserialize, Serialize};

const POSITIVE_WORDS: &[&str] = &["bom", "ótimo", "excelente", "perfeito", "gosto", "interessante"];
const NEGATIVE_WORDS: &[&str] = &["ruim", "caro", "difícil", "problema", "preocupado", "não"];

const MAX_CONFIDENCE: i32 = 90;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentimentResult {
    pub sentiment: Sentiment,
    pub confidence: u8,
    /// `"positive"` and/or `"concern"`, each at most once.
    pub emotions: Vec<String>,
}

pub struct SentimentAnalyzer;

impl SentimentAnalyzer {
    /// Each distinct lexicon word present moves the score by one.
    pub fn analyze(text: &str) -> SentimentResult {
        let lowered = text.to_lowercase();

        let positive = POSITIVE_WORDS.iter().filter(|w| lowered.contains(*w)).count();
        let negative = NEGATIVE_WORDS.iter().filter(|w| lowered.contains(*w)).count();
        let score = positive as i32 - negative as i32;

        let sentiment = match score {
            s if s > 0 => Sentiment::Positive,
            s if s < 0 => Sentiment::Negative,
            _ => Sentiment::Neutral,
        };

        let confidence = (score.abs() * 20 + 50).min(MAX_CONFIDENCE);

        let mut emotions = Vec::new();
        if positive > 0 {
            emotions.push("positive".to_string());
        }
        if negative > 0 {
            emotions.push("concern".to_string());
        }

        SentimentResult {
            sentiment,
            confidence: u8::try_from(confidence).unwrap_or(90),
            emotions,
        }
    }
}
