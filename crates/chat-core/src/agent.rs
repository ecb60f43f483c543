//! Core Agent trait definition

use crate::{Context, Result};
use async_trait::async_trait;

/// Core trait that all agents must implement
///
/// An agent takes a natural-language prompt and produces a text response.
/// Input and output are plain strings; whatever structure the response has
/// (markdown tables, news sections) is recovered downstream by the
/// sanitization pipeline, not by the agent itself.
#[async_trait]
pub trait Agent: Send + Sync {
    /// Process a prompt and return the raw response text
    async fn process(&self, input: String, context: &mut Context) -> Result<String>;

    /// Get the agent's name
    fn name(&self) -> &str;

    /// Initialize the agent (optional)
    async fn initialize(&mut self) -> Result<()> {
        Ok(())
    }

    /// Shutdown the agent (optional)
    async fn shutdown(&mut self) -> Result<()> {
        Ok(())
    }
}
