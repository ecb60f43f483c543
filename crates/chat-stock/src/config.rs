//! Configuration for the stock-chat application
//!
//! The configuration is an explicit struct constructed once at process
//! start and passed by reference into agent construction and the turn
//! orchestrator. There is no hidden global.

use crate::error::{ChatError, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default Groq model for all agents
pub const DEFAULT_MODEL: &str = "qwen/qwen3-32b";

/// Default base URL for Groq's OpenAI-compatible API
pub const DEFAULT_API_BASE: &str = "https://api.groq.com/openai/v1";

/// Configuration for the stock-chat application
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Groq API key (required; startup halts without it)
    pub groq_api_key: String,

    /// Base URL of the chat-completions API
    pub api_base: String,

    /// Model used by all agents
    pub model: String,

    /// Max tokens per member-agent completion
    pub member_max_tokens: usize,

    /// Max tokens for the team synthesis completion
    pub team_max_tokens: usize,

    /// Sampling temperature
    pub temperature: f32,

    /// Request timeout for the completion API
    pub request_timeout: Duration,

    /// Maximum web search results passed back to an agent
    pub max_search_results: usize,

    /// Character cap when falling back to showing the raw response
    pub raw_preview_limit: usize,
}

impl AppConfig {
    /// Create a new configuration builder
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }

    /// Load configuration from the process environment
    ///
    /// Requires `GROQ_API_KEY`; its absence is a fatal configuration error
    /// that must halt startup before any processing.
    pub fn from_env() -> Result<Self> {
        let api_key = chat_utils::require_env("GROQ_API_KEY")
            .map_err(|e| ChatError::ConfigError(e.to_string()))?;

        Self::builder().groq_api_key(api_key).build()
    }

    /// Build the provider configuration for this application config
    pub fn groq_config(&self) -> chat_llm::providers::GroqConfig {
        chat_llm::providers::GroqConfig::new(self.groq_api_key.clone())
            .with_api_base(self.api_base.clone())
            .with_timeout(self.request_timeout.as_secs())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.groq_api_key.trim().is_empty() {
            return Err(ChatError::ConfigError(
                "GROQ_API_KEY must not be empty".to_string(),
            ));
        }

        if self.member_max_tokens == 0 || self.team_max_tokens == 0 {
            return Err(ChatError::ConfigError(
                "Token limits must be greater than 0".to_string(),
            ));
        }

        if self.max_search_results == 0 {
            return Err(ChatError::ConfigError(
                "max_search_results must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}

/// Builder for AppConfig
#[derive(Debug, Default)]
pub struct AppConfigBuilder {
    groq_api_key: Option<String>,
    api_base: Option<String>,
    model: Option<String>,
    member_max_tokens: Option<usize>,
    team_max_tokens: Option<usize>,
    temperature: Option<f32>,
    request_timeout: Option<Duration>,
    max_search_results: Option<usize>,
    raw_preview_limit: Option<usize>,
}

impl AppConfigBuilder {
    /// Set the Groq API key
    pub fn groq_api_key(mut self, key: impl Into<String>) -> Self {
        self.groq_api_key = Some(key.into());
        self
    }

    /// Set the API base URL
    pub fn api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = Some(api_base.into());
        self
    }

    /// Set the model used by all agents
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Set max tokens per member-agent completion
    pub fn member_max_tokens(mut self, max_tokens: usize) -> Self {
        self.member_max_tokens = Some(max_tokens);
        self
    }

    /// Set max tokens for the team synthesis completion
    pub fn team_max_tokens(mut self, max_tokens: usize) -> Self {
        self.team_max_tokens = Some(max_tokens);
        self
    }

    /// Set the sampling temperature
    pub fn temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// Set the request timeout
    pub fn request_timeout(mut self, duration: Duration) -> Self {
        self.request_timeout = Some(duration);
        self
    }

    /// Set the maximum number of web search results
    pub fn max_search_results(mut self, max_results: usize) -> Self {
        self.max_search_results = Some(max_results);
        self
    }

    /// Set the raw-response preview character cap
    pub fn raw_preview_limit(mut self, limit: usize) -> Self {
        self.raw_preview_limit = Some(limit);
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<AppConfig> {
        let config = AppConfig {
            groq_api_key: self.groq_api_key.unwrap_or_default(),
            api_base: self
                .api_base
                .unwrap_or_else(|| DEFAULT_API_BASE.to_string()),
            model: self.model.unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            member_max_tokens: self.member_max_tokens.unwrap_or(800),
            team_max_tokens: self.team_max_tokens.unwrap_or(1000),
            temperature: self.temperature.unwrap_or(0.7),
            request_timeout: self.request_timeout.unwrap_or(Duration::from_secs(120)),
            max_search_results: self.max_search_results.unwrap_or(5),
            raw_preview_limit: self.raw_preview_limit.unwrap_or(500),
        };

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let config = AppConfig::builder()
            .groq_api_key("gsk-test")
            .build()
            .unwrap();

        assert_eq!(config.model, DEFAULT_MODEL);
        assert_eq!(config.member_max_tokens, 800);
        assert_eq!(config.team_max_tokens, 1000);
        assert_eq!(config.max_search_results, 5);
        assert_eq!(config.raw_preview_limit, 500);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_overrides() {
        let config = AppConfig::builder()
            .groq_api_key("gsk-test")
            .model("llama-3.3-70b-versatile")
            .member_max_tokens(500)
            .request_timeout(Duration::from_secs(60))
            .build()
            .unwrap();

        assert_eq!(config.model, "llama-3.3-70b-versatile");
        assert_eq!(config.member_max_tokens, 500);
        assert_eq!(config.request_timeout, Duration::from_secs(60));
    }

    #[test]
    fn test_validation_rejects_missing_key() {
        let result = AppConfig::builder().build();
        assert!(result.is_err());
    }

    #[test]
    fn test_validation_rejects_zero_tokens() {
        let result = AppConfig::builder()
            .groq_api_key("gsk-test")
            .member_max_tokens(0)
            .build();
        assert!(result.is_err());
    }

    #[test]
    fn test_groq_config() {
        let config = AppConfig::builder()
            .groq_api_key("gsk-test")
            .build()
            .unwrap();

        let groq = config.groq_config();
        assert_eq!(groq.api_key, "gsk-test");
        assert_eq!(groq.api_base, DEFAULT_API_BASE);
        assert_eq!(groq.timeout_secs, 120);
    }
}
