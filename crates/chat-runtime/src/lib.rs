//! Agent runtime for stock-chat-rs
//!
//! Provides the pieces that turn an LLM provider plus a tool registry into
//! runnable agents:
//!
//! - [`AgentExecutor`]: the LLM → tool-call → tool-result loop
//! - [`ToolAgent`]: an agent configured with a model, instructions, and tools
//! - [`TeamAgent`]: a composite agent that runs member agents and
//!   synthesizes their outputs
//! - [`AgentRuntime`]: shared resources and agent factory methods

pub mod agents;
pub mod executor;
pub mod runtime;

pub use agents::{TeamAgent, ToolAgent};
pub use executor::{AgentExecutor, ExecutorConfig};
pub use runtime::{AgentRuntime, AgentRuntimeBuilder};
