//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `HEALTH_INTERPRETER` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use health_interpreter::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Server running on {}", config.server.socket_addr().unwrap());
//! ```

mod ai;
mod analysis;
mod error;
mod features;
mod server;

pub use ai::AiConfig;
pub use analysis::{AnalysisConfig, AnalyzerKind};
pub use error::{ConfigError, ValidationError};
pub use features::FeatureFlags;
pub use server::{Environment, ServerConfig};

use serde::Deserialize;

/// Key name accepted as a fallback for `ai.api_key`.
pub const GROQ_API_KEY_VAR: &str = "GROQ_API_KEY";

/// Root application configuration
///
/// Every section has defaults, so an empty environment yields a working
/// keyword-analyzer server. Load using [`AppConfig::load()`].
#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    /// Server configuration (host, port, environment, CORS)
    #[serde(default)]
    pub server: ServerConfig,

    /// AI provider configuration (OpenAI-compatible, Groq by default)
    #[serde(default)]
    pub ai: AiConfig,

    /// Analyzer selection and submission limits
    #[serde(default)]
    pub analysis: AnalysisConfig,

    /// Feature flags
    #[serde(default)]
    pub features: FeatureFlags,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `HEALTH_INTERPRETER` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Falls back to `GROQ_API_KEY` when no AI key is set
    ///
    /// # Environment Variable Format
    ///
    /// - `HEALTH_INTERPRETER__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `HEALTH_INTERPRETER__ANALYSIS__ANALYZER=lab` -> `analysis.analyzer = lab`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let mut config: AppConfig = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("HEALTH_INTERPRETER")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        if !config.ai.has_api_key() {
            config.ai.api_key = std::env::var(GROQ_API_KEY_VAR)
                .ok()
                .filter(|k| !k.trim().is_empty());
        }

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any section is invalid, or if the LLM
    /// analyzer is selected without an API key.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.ai.validate()?;
        self.analysis.validate()?;
        if self.analysis.analyzer == AnalyzerKind::Llm && !self.ai.has_api_key() {
            return Err(ValidationError::MissingRequired("HEALTH_INTERPRETER__AI__API_KEY"));
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

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const VARS: [&str; 7] = [
        "HEALTH_INTERPRETER__SERVER__PORT",
        "HEALTH_INTERPRETER__SERVER__ENVIRONMENT",
        "HEALTH_INTERPRETER__ANALYSIS__ANALYZER",
        "HEALTH_INTERPRETER__ANALYSIS__SIMULATED_DELAY_MS",
        "HEALTH_INTERPRETER__AI__API_KEY",
        "HEALTH_INTERPRETER__AI__MODEL",
        "GROQ_API_KEY",
    ];

    /// Helper to clear environment variables around each test
    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    #[test]
    fn test_load_with_empty_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = AppConfig::load();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.analysis.analyzer, AnalyzerKind::Keyword);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_nested_values() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        env::set_var("HEALTH_INTERPRETER__SERVER__PORT", "3000");
        env::set_var("HEALTH_INTERPRETER__ANALYSIS__ANALYZER", "lab");
        env::set_var("HEALTH_INTERPRETER__ANALYSIS__SIMULATED_DELAY_MS", "0");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.analysis.analyzer, AnalyzerKind::Lab);
        assert_eq!(config.analysis.simulated_delay_ms, 0);
    }

    #[test]
    fn test_llm_requires_api_key() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        env::set_var("HEALTH_INTERPRETER__ANALYSIS__ANALYZER", "llm");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(
            config.validate(),
            Err(ValidationError::MissingRequired("HEALTH_INTERPRETER__AI__API_KEY"))
        );
    }

    #[test]
    fn test_groq_key_fallback() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        env::set_var("HEALTH_INTERPRETER__ANALYSIS__ANALYZER", "llm");
        env::set_var("GROQ_API_KEY", "gsk_test");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.ai.api_key.as_deref(), Some("gsk_test"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_is_production() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        env::set_var("HEALTH_INTERPRETER__SERVER__ENVIRONMENT", "production");
        let result = AppConfig::load();
        clear_env();

        assert!(result.unwrap().is_production());
    }
}
