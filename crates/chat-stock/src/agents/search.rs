//! Web search agent

use chat_core::{Agent, Context, Result};
use chat_runtime::{AgentRuntime, ExecutorConfig};
use async_trait::async_trait;
use std::sync::Arc;

use crate::config::AppConfig;
use crate::prompts::SEARCH_AGENT_PROMPT;
use crate::tools::WebSearchTool;

/// Agent that searches the web for recent company news
pub struct SearchAgent {
    agent: chat_runtime::ToolAgent,
}

impl SearchAgent {
    /// Create a new search agent and register its tool with the runtime
    pub fn new(runtime: &AgentRuntime, config: Arc<AppConfig>) -> Self {
        let search_tool = Arc::new(WebSearchTool::new(Arc::clone(&config)));
        runtime.tools().register(search_tool);

        let executor_config = ExecutorConfig {
            model: config.model.clone(),
            system_prompt: Some(SEARCH_AGENT_PROMPT.to_string()),
            max_tokens: config.member_max_tokens,
            temperature: Some(config.temperature),
            max_iterations: 5,
        };

        Self {
            agent: runtime.create_tool_agent(executor_config, "Search Agent"),
        }
    }
}

#[async_trait]
impl Agent for SearchAgent {
    async fn process(&self, input: String, context: &mut Context) -> Result<String> {
        self.agent.process(input, context).await
    }

    fn name(&self) -> &str {
        "Search Agent"
    }
}
