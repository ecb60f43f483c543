//! Tool-using agent implementation

use crate::executor::{AgentExecutor, ExecutorConfig};
use chat_core::{Agent, Context, Result};
use chat_llm::LLMProvider;
use chat_tools::ToolRegistry;
use async_trait::async_trait;
use std::sync::Arc;

/// An agent configured with a model, instructions, and callable tools
///
/// This is the concrete form of the "agent" of the chat application: a
/// model identifier, a set of tool bindings, and natural-language
/// instructions, wrapped around the executor loop. The agent keeps no
/// state of its own; each `process` call runs one full loop.
pub struct ToolAgent {
    executor: AgentExecutor,
    name: String,
}

impl ToolAgent {
    /// Create a new tool agent
    ///
    /// # Arguments
    ///
    /// * `provider` - The LLM provider to use
    /// * `tools` - Registry holding the tools this agent may call
    /// * `config` - Model, instructions, and sampling configuration
    /// * `name` - Name of the agent
    pub fn new(
        provider: Arc<dyn LLMProvider>,
        tools: Arc<ToolRegistry>,
        config: ExecutorConfig,
        name: impl Into<String>,
    ) -> Self {
        Self {
            executor: AgentExecutor::new(provider, tools, config),
            name: name.into(),
        }
    }
}

#[async_trait]
impl Agent for ToolAgent {
    async fn process(&self, input: String, _context: &mut Context) -> Result<String> {
        self.executor.run(input).await
    }

    fn name(&self) -> &str {
        &self.name
    }
}
