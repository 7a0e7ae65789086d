//! Confidence Calculator - how much evidence backs a classification.

use super::features::AcousticFeatures;
use super::profile::AxisScores;

pub const MIN_CONFIDENCE: u8 = 30;
pub const MAX_CONFIDENCE: u8 = 95;

const BASE: i32 = 50;

/// (character threshold, increment), cumulative.
const LENGTH_STEPS: [(usize, i32); 3] = [(50, 5), (100, 10), (200, 10)];
/// (word threshold, increment), cumulative.
const WORD_STEPS: [(usize, i32); 2] = [(10, 5), (30, 5)];

const FEATURES_PRESENT: i32 = 15;
const STRONG_AXIS: i32 = 30;
const VERY_STRONG_AXIS: i32 = 60;
const AXIS_INCREMENT: i32 = 5;

/// Stateless confidence calculator.
pub struct ConfidenceCalculator;

impl ConfidenceCalculator {
    /// Confidence in `[MIN_CONFIDENCE, MAX_CONFIDENCE]`.
    ///
    /// A blank transcript always yields the minimum.
    pub fn confidence(
        transcript: &str,
        features: Option<&AcousticFeatures>,
        axes: &AxisScores,
    ) -> u8 {
        if transcript.trim().is_empty() {
            return MIN_CONFIDENCE;
        }

        let chars = transcript.chars().count();
        let words = transcript.split_whitespace().count();

        let mut score = BASE;

        score += LENGTH_STEPS
            .iter()
            .filter(|(threshold, _)| chars > *threshold)
            .map(|(_, inc)| inc)
            .sum::<i32>();

        if features.is_some() {
            score += FEATURES_PRESENT;
        }

        score += Self::axis_strength(axes.assertiveness);
        score += Self::axis_strength(axes.emotionality);

        score += WORD_STEPS
            .iter()
            .filter(|(threshold, _)| words > *threshold)
            .map(|(_, inc)| inc)
            .sum::<i32>();

        let clamped = score.clamp(i32::from(MIN_CONFIDENCE), i32::from(MAX_CONFIDENCE));
        u8::try_from(clamped).unwrap_or(MAX_CONFIDENCE)
    }

    fn axis_strength(value: i32) -> i32 {
        let magnitude = value.abs();
        let mut inc = 0;
        if magnitude > STRONG_AXIS {
            inc += AXIS_INCREMENT;
        }
        if magnitude > VERY_STRONG_AXIS {
            inc += AXIS_INCREMENT;
        }
        inc
    }
}
