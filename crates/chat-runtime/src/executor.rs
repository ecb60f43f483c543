//! Agent executor for running agent loops
//!
//! The AgentExecutor implements the core agent loop pattern:
//! 1. Call the LLM with the conversation and available tools
//! 2. Check the stop reason
//! 3. If tool use was requested, execute tools and loop back
//! 4. If completed, return the final response text

use chat_core::Result;
use chat_llm::{
    CompletionRequest, ContentBlock, LLMProvider, Message, StopReason, ToolDefinition,
};
use chat_tools::ToolRegistry;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Configuration for agent execution
#[derive(Debug, Clone)]
pub struct ExecutorConfig {
    /// Maximum number of iterations (prevents infinite loops)
    pub max_iterations: usize,

    /// Model to use
    pub model: String,

    /// System prompt
    pub system_prompt: Option<String>,

    /// Max tokens per completion
    pub max_tokens: usize,

    /// Temperature
    pub temperature: Option<f32>,
}

impl Default for ExecutorConfig {
    fn default() -> Self {
        Self {
            max_iterations: 10,
            model: "qwen/qwen3-32b".to_string(),
            system_prompt: None,
            max_tokens: 1024,
            temperature: Some(0.7),
        }
    }
}

/// Executes an agent loop: LLM → tool calls → execution → loop back
pub struct AgentExecutor {
    provider: Arc<dyn LLMProvider>,
    tool_registry: Arc<ToolRegistry>,
    config: ExecutorConfig,
}

impl AgentExecutor {
    /// Create a new agent executor
    pub fn new(
        provider: Arc<dyn LLMProvider>,
        tool_registry: Arc<ToolRegistry>,
        config: ExecutorConfig,
    ) -> Self {
        Self {
            provider,
            tool_registry,
            config,
        }
    }

    /// Execute the agent loop with a user query
    pub async fn run(&self, user_message: String) -> Result<String> {
        let conversation = vec![Message::user(user_message)];
        self.run_conversation(conversation).await
    }

    /// Execute the agent loop with prior conversation history
    pub async fn run_with_history(
        &self,
        user_message: String,
        history: Vec<Message>,
    ) -> Result<String> {
        let mut conversation = history;
        conversation.push(Message::user(user_message));
        self.run_conversation(conversation).await
    }

    /// Internal method to run the agent loop over a conversation
    async fn run_conversation(&self, initial_conversation: Vec<Message>) -> Result<String> {
        let mut conversation = initial_conversation;
        let mut iteration = 0;

        loop {
            iteration += 1;
            if iteration > self.config.max_iterations {
                warn!(
                    "Max iterations ({}) reached, stopping",
                    self.config.max_iterations
                );
                return Ok("Max iterations reached without completion".to_string());
            }

            let tools = self.build_tool_definitions();
            debug!(
                iteration = iteration,
                tool_count = tools.len(),
                model = %self.config.model,
                "Agent iteration started"
            );

            let mut request_builder = CompletionRequest::builder(&self.config.model)
                .messages(conversation.clone())
                .system(
                    self.config
                        .system_prompt
                        .clone()
                        .unwrap_or_else(|| "You are a helpful assistant.".to_string()),
                )
                .max_tokens(self.config.max_tokens)
                .temperature(self.config.temperature.unwrap_or(0.7));

            // Only advertise tools if we have any
            if !tools.is_empty() {
                request_builder = request_builder.tools(tools);
            }

            let response = self
                .provider
                .complete(request_builder.build())
                .await
                .map_err(|e| chat_core::Error::ProcessingFailed(e.to_string()))?;

            info!(
                stop_reason = ?response.stop_reason,
                input_tokens = response.usage.input_tokens,
                output_tokens = response.usage.output_tokens,
                "LLM response received"
            );

            conversation.push(response.message.clone());

            match response.stop_reason {
                StopReason::EndTurn => {
                    let text = response.message.text().unwrap_or("No response").to_string();
                    info!(
                        iteration = iteration,
                        response_length = text.len(),
                        "Agent completed naturally"
                    );
                    return Ok(text);
                }

                StopReason::ToolUse => {
                    let tool_results = self.execute_tools(&response.message).await?;

                    if tool_results.is_empty() {
                        warn!("No tool results despite ToolUse stop reason");
                        return Ok("Tool execution failed".to_string());
                    }

                    for result in tool_results {
                        conversation.push(result);
                    }
                }

                StopReason::MaxTokens => {
                    warn!("Hit max tokens in LLM response");
                    return Ok(response.message.text().unwrap_or_default().to_string());
                }

                StopReason::StopSequence => {
                    debug!("Stop sequence encountered");
                    let text = response.message.text().unwrap_or("No response").to_string();
                    return Ok(text);
                }
            }
        }
    }

    /// Build tool definitions from the registry
    fn build_tool_definitions(&self) -> Vec<ToolDefinition> {
        self.tool_registry
            .list_tools()
            .iter()
            .map(|tool| ToolDefinition::new(tool.name(), tool.description(), tool.input_schema()))
            .collect()
    }

    /// Execute tool calls from an assistant message
    async fn execute_tools(&self, message: &Message) -> Result<Vec<Message>> {
        let mut results = Vec::new();

        for tool_use in message.tool_uses() {
            if let ContentBlock::ToolUse { id, name, input } = tool_use {
                info!(tool_name = %name, tool_id = %id, "Executing tool");

                let tool = self.tool_registry.get(name).ok_or_else(|| {
                    chat_core::Error::ProcessingFailed(format!("Tool not found: {name}"))
                })?;

                let start_time = std::time::Instant::now();
                match tool.execute(input.clone()).await {
                    Ok(result) => {
                        let result_str =
                            serde_json::to_string(&result).unwrap_or_else(|_| result.to_string());
                        info!(
                            tool_name = %name,
                            duration_ms = start_time.elapsed().as_millis() as u64,
                            result_length = result_str.len(),
                            "Tool execution succeeded"
                        );
                        results.push(Message::tool_result(id.clone(), result_str));
                    }
                    Err(e) => {
                        warn!(
                            tool_name = %name,
                            duration_ms = start_time.elapsed().as_millis() as u64,
                            error = %e,
                            "Tool execution failed"
                        );
                        // Surface the failure to the model as an error result
                        results.push(Message::tool_error(id.clone(), format!("Error: {e}")));
                    }
                }
            }
        }

        Ok(results)
    }
}
