//! LLM provider abstraction layer for stock-chat-rs
//!
//! This crate provides provider-agnostic abstractions for talking to a
//! chat-completion service. It includes:
//!
//! - Message types for multi-turn conversations
//! - Completion request/response types
//! - Tool definitions for function calling
//! - Provider trait for LLM implementations
//! - The Groq provider (behind the `groq` feature flag)

pub mod completion;
pub mod error;
pub mod messages;
pub mod provider;
pub mod tools;

// Re-export main types
pub use completion::{CompletionRequest, CompletionResponse, StopReason, TokenUsage};
pub use error::{LLMError, Result};
pub use messages::{ContentBlock, Message, MessageContent, Role};
pub use provider::LLMProvider;
pub use tools::ToolDefinition;

// Provider implementations (feature-gated)
#[cfg(feature = "groq")]
pub mod providers;
