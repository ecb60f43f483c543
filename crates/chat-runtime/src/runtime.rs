//! Runtime for constructing agents with shared resources
//!
//! The AgentRuntime holds the LLM provider and tool registry shared by all
//! agents, and provides factory methods for creating them.

use crate::agents::{TeamAgentBuilder, ToolAgent};
use crate::executor::ExecutorConfig;
use chat_core::Result;
use chat_llm::LLMProvider;
use chat_tools::ToolRegistry;
use std::sync::Arc;

/// Runtime for constructing agents with shared resources
///
/// # Example
///
/// ```no_run
/// use chat_runtime::{AgentRuntime, ExecutorConfig};
/// use std::sync::Arc;
///
/// # fn example(provider: Arc<dyn chat_llm::LLMProvider>) -> chat_core::Result<()> {
/// let runtime = AgentRuntime::builder()
///     .provider(provider)
///     .build()?;
///
/// let agent = runtime.create_tool_agent(ExecutorConfig::default(), "finance-agent");
/// # Ok(())
/// # }
/// ```
pub struct AgentRuntime {
    provider: Arc<dyn LLMProvider>,
    tool_registry: Arc<ToolRegistry>,
}

impl AgentRuntime {
    /// Create a new agent runtime
    pub fn new(provider: Arc<dyn LLMProvider>, tool_registry: Arc<ToolRegistry>) -> Self {
        Self {
            provider,
            tool_registry,
        }
    }

    /// Create a new runtime builder
    pub fn builder() -> AgentRuntimeBuilder {
        AgentRuntimeBuilder::new()
    }

    /// Get a reference to the LLM provider
    pub fn provider(&self) -> &Arc<dyn LLMProvider> {
        &self.provider
    }

    /// Get a reference to the tool registry
    pub fn tools(&self) -> &Arc<ToolRegistry> {
        &self.tool_registry
    }

    /// Create a tool-using agent
    pub fn create_tool_agent(&self, config: ExecutorConfig, name: impl Into<String>) -> ToolAgent {
        ToolAgent::new(
            Arc::clone(&self.provider),
            Arc::clone(&self.tool_registry),
            config,
            name,
        )
    }

    /// Create a builder for a team agent backed by this runtime's provider
    pub fn team_builder(&self, name: impl Into<String>) -> TeamAgentBuilder {
        TeamAgentBuilder::new(Arc::clone(&self.provider), name)
    }
}

/// Builder for AgentRuntime
#[derive(Default)]
pub struct AgentRuntimeBuilder {
    provider: Option<Arc<dyn LLMProvider>>,
    tool_registry: Option<Arc<ToolRegistry>>,
}

impl AgentRuntimeBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the LLM provider
    pub fn provider(mut self, provider: Arc<dyn LLMProvider>) -> Self {
        self.provider = Some(provider);
        self
    }

    /// Set the tool registry
    pub fn tool_registry(mut self, registry: Arc<ToolRegistry>) -> Self {
        self.tool_registry = Some(registry);
        self
    }

    /// Build the runtime
    ///
    /// # Errors
    ///
    /// Returns an error if no provider was set.
    pub fn build(self) -> Result<AgentRuntime> {
        let provider = self.provider.ok_or_else(|| {
            chat_core::Error::InitializationFailed("Provider not set".to_string())
        })?;

        Ok(AgentRuntime::new(
            provider,
            self.tool_registry
                .unwrap_or_else(|| Arc::new(ToolRegistry::new())),
        ))
    }
}
