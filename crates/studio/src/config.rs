//! Studio configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `ATMA_DATA_DIR` - Substrate directory for the file-backed store
//!   (default: `./data`)
//! - `ATMA_CHAT_POLL_SECS` - Chat feed polling interval in seconds
//!   (default: 3)
//! - `GEMINI_API_KEY` - Gemini API key; unset disables business analysis
//! - `GEMINI_MODEL` - Gemini model ID (default: gemini-2.5-flash)

use std::path::PathBuf;
use std::time::Duration;

use secrecy::SecretString;
use thiserror::Error;

const DEFAULT_DATA_DIR: &str = "./data";
const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash";
const DEFAULT_CHAT_POLL_SECS: u64 = 3;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An environment variable holds an unparseable value.
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Studio application configuration.
#[derive(Debug, Clone)]
pub struct StudioConfig {
    /// Directory backing the key-value substrate.
    pub data_dir: PathBuf,
    /// Interval between chat feed polls while a chat view is open.
    pub chat_poll_interval: Duration,
    /// Analysis configuration (optional - unset disables the integration).
    pub analysis: Option<AnalysisConfig>,
}

/// Gemini API configuration for business analysis.
///
/// Implements `Debug` manually to redact the API key.
#[derive(Clone)]
pub struct AnalysisConfig {
    /// Gemini API key.
    pub api_key: SecretString,
    /// Model ID (e.g., gemini-2.5-flash).
    pub model: String,
}

impl std::fmt::Debug for AnalysisConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnalysisConfig")
            .field("api_key", &"[REDACTED]")
            .field("model", &self.model)
            .finish()
    }
}

impl StudioConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a set variable holds an invalid value.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let data_dir = PathBuf::from(get_env_or_default("ATMA_DATA_DIR", DEFAULT_DATA_DIR));

        let poll_secs = match get_optional_env("ATMA_CHAT_POLL_SECS") {
            Some(raw) => raw.parse::<u64>().map_err(|e| {
                ConfigError::InvalidEnvVar("ATMA_CHAT_POLL_SECS".to_owned(), e.to_string())
            })?,
            None => DEFAULT_CHAT_POLL_SECS,
        };

        Ok(Self {
            data_dir,
            chat_poll_interval: Duration::from_secs(poll_secs),
            analysis: AnalysisConfig::from_env(),
        })
    }
}

impl AnalysisConfig {
    /// Load analysis configuration from environment.
    ///
    /// Returns `None` if `GEMINI_API_KEY` is not set (analysis disabled).
    fn from_env() -> Option<Self> {
        let api_key = get_optional_env("GEMINI_API_KEY")?;
        Some(Self {
            api_key: SecretString::from(api_key),
            model: get_env_or_default("GEMINI_MODEL", DEFAULT_GEMINI_MODEL),
        })
    }
}

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_owned())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_analysis_config_debug_redacts_key() {
        let config = AnalysisConfig {
            api_key: SecretString::from("a-very-secret-key"),
            model: DEFAULT_GEMINI_MODEL.to_owned(),
        };

        let debug_output = format!("{config:?}");
        assert!(debug_output.contains("[REDACTED]"));
        assert!(debug_output.contains("gemini-2.5-flash"));
        assert!(!debug_output.contains("a-very-secret-key"));
    }

    #[test]
    fn test_default_model() {
        assert_eq!(DEFAULT_GEMINI_MODEL, "gemini-2.5-flash");
    }
}
