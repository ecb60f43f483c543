//! Shared utilities for stock-chat-rs

pub mod env;
pub mod logging;

pub use env::require_env;
pub use logging::init_tracing;
