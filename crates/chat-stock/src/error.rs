//! Error types for the stock-chat application

use thiserror::Error;

/// Application-specific errors
#[derive(Debug, Error)]
pub enum ChatError {
    /// Configuration error (missing credential, invalid limits)
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Agent invocation failed
    #[error("Agent error: {0}")]
    AgentError(String),

    /// Web search failed
    #[error("Search error: {0}")]
    SearchError(String),

    /// Stock data lookup failed
    #[error("Stock data error: {0}")]
    DataError(String),

    /// Network or HTTP error
    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    /// JSON parsing error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

/// Result type alias for application operations
pub type Result<T> = std::result::Result<T, ChatError>;

/// Convert ChatError to chat_core::Error
impl From<ChatError> for chat_core::Error {
    fn from(err: ChatError) -> Self {
        chat_core::Error::ProcessingFailed(err.to_string())
    }
}

/// Convert chat_core::Error to ChatError
impl From<chat_core::Error> for ChatError {
    fn from(err: chat_core::Error) -> Self {
        ChatError::AgentError(err.to_string())
    }
}

/// Convert chat_llm::LLMError to ChatError
impl From<chat_llm::LLMError> for ChatError {
    fn from(err: chat_llm::LLMError) -> Self {
        ChatError::AgentError(err.to_string())
    }
}

/// Convert anyhow::Error to ChatError
impl From<anyhow::Error> for ChatError {
    fn from(err: anyhow::Error) -> Self {
        ChatError::Other(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ChatError::ConfigError("GROQ_API_KEY not set".to_string());
        assert_eq!(err.to_string(), "Configuration error: GROQ_API_KEY not set");

        let err = ChatError::SearchError("HTTP 503".to_string());
        assert_eq!(err.to_string(), "Search error: HTTP 503");
    }

    #[test]
    fn test_error_conversion() {
        let chat_err = ChatError::DataError("no quote".to_string());
        let core_err: chat_core::Error = chat_err.into();

        match core_err {
            chat_core::Error::ProcessingFailed(msg) => {
                assert!(msg.contains("Stock data error"));
            }
            _ => panic!("Expected ProcessingFailed variant"),
        }
    }
}
