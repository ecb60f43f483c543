//! Error types for chat-core

use thiserror::Error;

/// Result type alias for chat-core
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for agent operations
#[derive(Error, Debug)]
pub enum Error {
    /// Generic error message
    #[error("{0}")]
    Generic(String),

    /// Agent could not be constructed or wired up
    #[error("Agent initialization failed: {0}")]
    InitializationFailed(String),

    /// Agent failed while handling a prompt
    #[error("Agent processing failed: {0}")]
    ProcessingFailed(String),
}
