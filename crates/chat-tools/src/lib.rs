//! Tool framework for stock-chat-rs
//!
//! Defines the [`Tool`] trait implemented by every external capability an
//! agent can invoke (web search, stock data lookup) and the
//! [`ToolRegistry`] agents resolve tool calls against.

pub mod registry;
pub mod tool;

pub use registry::ToolRegistry;
pub use tool::Tool;
