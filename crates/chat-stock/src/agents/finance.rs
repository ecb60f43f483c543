//! Financial data agent

use chat_core::{Agent, Context, Result};
use chat_runtime::{AgentRuntime, ExecutorConfig};
use async_trait::async_trait;
use std::sync::Arc;

use crate::config::AppConfig;
use crate::prompts::FINANCE_AGENT_PROMPT;
use crate::tools::StockDataTool;

/// Agent that answers with factual financial data in tabular form
pub struct FinanceAgent {
    agent: chat_runtime::ToolAgent,
}

impl FinanceAgent {
    /// Create a new finance agent and register its tool with the runtime
    pub fn new(runtime: &AgentRuntime, config: Arc<AppConfig>) -> Self {
        let stock_tool = Arc::new(StockDataTool::new());
        runtime.tools().register(stock_tool);

        let executor_config = ExecutorConfig {
            model: config.model.clone(),
            system_prompt: Some(FINANCE_AGENT_PROMPT.to_string()),
            max_tokens: config.member_max_tokens,
            temperature: Some(config.temperature),
            max_iterations: 5,
        };

        Self {
            agent: runtime.create_tool_agent(executor_config, "Finance Agent"),
        }
    }
}

#[async_trait]
impl Agent for FinanceAgent {
    async fn process(&self, input: String, context: &mut Context) -> Result<String> {
        self.agent.process(input, context).await
    }

    fn name(&self) -> &str {
        "Finance Agent"
    }
}
