//! Feature flags configuration

use serde::Deserialize;

/// Feature flags for enabling/disabling functionality
#[derive(Debug, Clone, Deserialize, Default)]
pub struct FeatureFlags {
    /// Send extended-profile and personality prompts to the language model.
    /// Off means the local classifiers answer every request.
    #[serde(default)]
    pub use_real_ai: bool,

    /// Log indicators and reasoning of every classification at debug level
    #[serde(default)]
    pub debug_behavioral_analysis: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feature_flags_defaults() {
        let flags = FeatureFlags::default();
        assert!(!flags.use_real_ai);
        assert!(!flags.debug_behavioral_analysis);
    }

    #[test]
    fn test_feature_flags_deserialization() {
        let json = r#"{"use_real_ai": true}"#;

        let flags: FeatureFlags = serde_json::from_str(json).unwrap();
        assert!(flags.use_real_ai);
        assert!(!flags.debug_behavioral_analysis);
    }
}
