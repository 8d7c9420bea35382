//! Judge backend configuration.

use serde::{Deserialize, Serialize};
use std::env;
use thiserror::Error;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing environment variable: {0}")]
    MissingEnvVar(String),
}

/// Settings for the LLM-backed judge
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JudgeConfig {
    /// API key (env: OPENAI_API_KEY)
    pub api_key: String,
    /// Base URL of an OpenAI-compatible endpoint
    pub base_url: String,
    /// Primary judge model
    pub model: String,
    /// Model used for the single retry when the primary fails
    pub backup_model: String,
}

impl JudgeConfig {
    /// Load from environment variables.
    ///
    /// `OPENAI_API_KEY` is required; `AGON_JUDGE_URL`, `AGON_JUDGE_MODEL` and
    /// `AGON_JUDGE_BACKUP_MODEL` override the defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_key = env::var("OPENAI_API_KEY")
            .map_err(|_| ConfigError::MissingEnvVar("OPENAI_API_KEY".to_string()))?;
        Ok(Self {
            api_key,
            base_url: env::var("AGON_JUDGE_URL")
                .unwrap_or_else(|_| "https://api.openai.com".to_string()),
            model: env::var("AGON_JUDGE_MODEL").unwrap_or_else(|_| "gpt-4".to_string()),
            backup_model: env::var("AGON_JUDGE_BACKUP_MODEL")
                .unwrap_or_else(|_| "gpt-3.5-turbo".to_string()),
        })
    }
}
