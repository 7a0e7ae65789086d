//! Application configuration module
//!
//! Type-safe configuration loaded from environment variables using the
//! `config` and `dotenvy` crates. Variables carry the `SALES_COPILOT` prefix
//! and nested values are separated by double underscores.
//!
//! Every section has defaults, so an empty environment yields a runnable
//! offline configuration (local classifiers, mock transcription).
//!
//! # Example
//!
//! ```no_run
//! use sales_copilot::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//! ```

mod ai;
mod error;
mod features;
mod server;

pub use ai::AiConfig;
pub use error::{ConfigError, ValidationError};
pub use features::FeatureFlags;
pub use server::{Environment, ServerConfig};

use serde::Deserialize;

/// Root application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment, CORS)
    #[serde(default)]
    pub server: ServerConfig,

    /// Language model configuration (OpenAI)
    #[serde(default)]
    pub ai: AiConfig,

    /// Feature flags
    #[serde(default)]
    pub features: FeatureFlags,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Environment Variable Format
    ///
    /// - `SALES_COPILOT__SERVER__PORT=3001` -> `server.port = 3001`
    /// - `SALES_COPILOT__AI__OPENAI_API_KEY=...` -> `ai.openai_api_key = ...`
    /// - `SALES_COPILOT__FEATURES__USE_REAL_AI=true` -> `features.use_real_ai = true`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("SALES_COPILOT")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any section is invalid, or if real AI
    /// analysis is enabled without an OpenAI key.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.ai.validate()?;
        if self.features.use_real_ai && !self.ai.has_openai() {
            return Err(ValidationError::MissingRequired("ai.openai_api_key"));
        }
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // Env vars are process-global
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const VARS: &[&str] = &[
        "SALES_COPILOT__SERVER__PORT",
        "SALES_COPILOT__SERVER__ENVIRONMENT",
        "SALES_COPILOT__AI__OPENAI_API_KEY",
        "SALES_COPILOT__AI__MODEL",
        "SALES_COPILOT__FEATURES__USE_REAL_AI",
    ];

    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    fn load_with(vars: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        clear_env();
        for (key, value) in vars {
            env::set_var(key, value);
        }
        let result = AppConfig::load();
        clear_env();
        result
    }

    #[test]
    fn test_load_with_empty_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        let config = load_with(&[]).unwrap();

        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 3001);
        assert_eq!(config.server.environment, Environment::Development);
        assert_eq!(config.ai.model, "gpt-4o-mini");
        assert!(!config.features.use_real_ai);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_custom_server_port() {
        let _guard = ENV_MUTEX.lock().unwrap();
        let config = load_with(&[("SALES_COPILOT__SERVER__PORT", "8080")]).unwrap();

        assert_eq!(config.server.port, 8080);
    }

    #[test]
    fn test_is_production() {
        let _guard = ENV_MUTEX.lock().unwrap();
        let config = load_with(&[("SALES_COPILOT__SERVER__ENVIRONMENT", "production")]).unwrap();

        assert!(config.is_production());
    }

    #[test]
    fn test_real_ai_with_key() {
        let _guard = ENV_MUTEX.lock().unwrap();
        let config = load_with(&[
            ("SALES_COPILOT__FEATURES__USE_REAL_AI", "true"),
            ("SALES_COPILOT__AI__OPENAI_API_KEY", "sk-test-123"),
            ("SALES_COPILOT__AI__MODEL", "gpt-4o"),
        ])
        .unwrap();

        assert!(config.features.use_real_ai);
        assert!(config.ai.has_openai());
        assert_eq!(config.ai.model, "gpt-4o");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_real_ai_without_key_fails_validation() {
        let config = AppConfig {
            features: FeatureFlags {
                use_real_ai: true,
                ..Default::default()
            },
            ..Default::default()
        };

        assert_eq!(
            config.validate(),
            Err(ValidationError::MissingRequired("ai.openai_api_key"))
        );
    }
}
