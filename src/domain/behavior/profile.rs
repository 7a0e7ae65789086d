//! Behavioral profile labels and the two-axis scores they are derived from.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lower bound of every behavioral axis.
pub const AXIS_MIN: i32 = -100;

/// Upper bound of every behavioral axis.
pub const AXIS_MAX: i32 = 100;

/// Clamps a raw score into the axis range.
pub fn clamp_axis(value: i32) -> i32 {
    value.clamp(AXIS_MIN, AXIS_MAX)
}

/// One of the four base behavioral quadrants.
///
/// Serialized with the labels the recorder client understands; the English
/// names are accepted on input as well.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Profile {
    /// Assertive and rational: results, ROI, speed.
    #[serde(rename = "PRAGMATICO", alias = "PRAGMATIC")]
    Pragmatic,
    /// Assertive and emotional: vision, enthusiasm, recognition.
    #[serde(rename = "INTUITIVO", alias = "INTUITIVE")]
    Intuitive,
    /// Reserved and rational: data, evidence, time to evaluate.
    #[serde(rename = "ANALITICO", alias = "ANALYTICAL")]
    Analytical,
    /// Reserved and emotional: people, harmony, consensus.
    #[serde(rename = "INTEGRADOR", alias = "INTEGRATOR")]
    Integrator,
}

impl Profile {
    /// All profiles in enumeration order (used for tie-breaking).
    pub const ALL: [Profile; 4] = [
        Profile::Pragmatic,
        Profile::Intuitive,
        Profile::Analytical,
        Profile::Integrator,
    ];

    /// Wire label.
    pub fn label(&self) -> &'static str {
        match self {
            Profile::Pragmatic => "PRAGMATICO",
            Profile::Intuitive => "INTUITIVO",
            Profile::Analytical => "ANALITICO",
            Profile::Integrator => "INTEGRADOR",
        }
    }

    /// Parses either the wire label or the English name, case-insensitively.
    pub fn from_label(label: &str) -> Option<Profile> {
        match label.trim().to_uppercase().as_str() {
            "PRAGMATICO" | "PRAGMÁTICO" | "PRAGMATIC" => Some(Profile::Pragmatic),
            "INTUITIVO" | "INTUITIVE" => Some(Profile::Intuitive),
            "ANALITICO" | "ANALÍTICO" | "ANALYTICAL" => Some(Profile::Analytical),
            "INTEGRADOR" | "INTEGRATOR" => Some(Profile::Integrator),
            _ => None,
        }
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Position on the assertive/hesitant and emotional/rational spectra.
///
/// Both values always lie in `[AXIS_MIN, AXIS_MAX]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AxisScores {
    pub assertiveness: i32,
    pub emotionality: i32,
}

impl AxisScores {
    /// Creates axis scores, clamping both values into range.
    pub fn new(assertiveness: i32, emotionality: i32) -> Self {
        Self {
            assertiveness: clamp_axis(assertiveness),
            emotionality: clamp_axis(emotionality),
        }
    }
}

/// Outcome of one base classification call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationResult {
    #[serde(flatten)]
    pub axes: AxisScores,
    pub profile: Profile,
    /// 30-95 for results produced by the engine.
    pub confidence: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn axis_scores_clamp_into_range() {
        let axes = AxisScores::new(250, -400);
        assert_eq!(axes.assertiveness, 100);
        assert_eq!(axes.emotionality, -100);
    }

    #[test]
    fn profile_serializes_with_wire_label() {
        let json = serde_json::to_string(&Profile::Analytical).unwrap();
        assert_eq!(json, "\"ANALITICO\"");
    }

    #[test]
    fn profile_deserializes_english_alias() {
        let profile: Profile = serde_json::from_str("\"INTEGRATOR\"").unwrap();
        assert_eq!(profile, Profile::Integrator);
    }

    #[test]
    fn from_label_is_case_insensitive() {
        assert_eq!(Profile::from_label("pragmatico"), Some(Profile::Pragmatic));
        assert_eq!(Profile::from_label(" Intuitive "), Some(Profile::Intuitive));
        assert_eq!(Profile::from_label("DOMINANT"), None);
    }

    #[test]
    fn classification_result_flattens_axes() {
        let result = ClassificationResult {
            axes: AxisScores::new(40, -20),
            profile: Profile::Pragmatic,
            confidence: 70,
        };

        let value = serde_json::to_value(result).unwrap();
        assert_eq!(value["assertiveness"], 40);
        assert_eq!(value["emotionality"], -20);
        assert_eq!(value["profile"], "PRAGMATICO");
        assert_eq!(value["confidence"], 70);
    }
}
