//! The synthesizing stock-analysis team

use chat_core::{Agent, Context, Result};
use chat_runtime::{AgentRuntime, ExecutorConfig};
use async_trait::async_trait;
use std::sync::Arc;

use crate::agents::{FinanceAgent, SearchAgent};
use crate::config::AppConfig;
use crate::prompts::TEAM_AGENT_PROMPT;

/// The team agent the orchestrator talks to
///
/// Wires a search agent and a finance agent into one composite that
/// synthesizes their outputs under the team instructions.
pub struct StockAnalysisTeam {
    agent: chat_runtime::TeamAgent,
}

impl StockAnalysisTeam {
    /// Construct the full team from the application configuration
    pub fn new(runtime: &AgentRuntime, config: &Arc<AppConfig>) -> Result<Self> {
        let search = SearchAgent::new(runtime, Arc::clone(config));
        let finance = FinanceAgent::new(runtime, Arc::clone(config));

        let team_config = ExecutorConfig {
            model: config.model.clone(),
            system_prompt: Some(TEAM_AGENT_PROMPT.to_string()),
            max_tokens: config.team_max_tokens,
            temperature: Some(config.temperature),
            max_iterations: 1,
        };

        let agent = runtime
            .team_builder("Stock Analysis Team")
            .add_member(Arc::new(search))
            .add_member(Arc::new(finance))
            .config(team_config)
            .build()?;

        Ok(Self { agent })
    }
}

#[async_trait]
impl Agent for StockAnalysisTeam {
    async fn process(&self, input: String, context: &mut Context) -> Result<String> {
        self.agent.process(input, context).await
    }

    fn name(&self) -> &str {
        "Stock Analysis Team"
    }
}
