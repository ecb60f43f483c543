//! Team agent implementation (runs members, then synthesizes)

use crate::executor::ExecutorConfig;
use chat_core::{Agent, Context, Error, Result};
use chat_llm::{CompletionRequest, LLMProvider, Message};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info};

/// A composite agent that delegates to member agents and synthesizes
///
/// The team runs each member sequentially on the same prompt (one user
/// submission is fully processed before anything else happens; there is no
/// concurrent member invocation), then issues one synthesis completion that
/// combines the member outputs under the team's own instructions.
///
/// A member failure propagates as an error; the caller decides how to
/// surface it.
///
/// # Example
///
/// ```no_run
/// use chat_runtime::{TeamAgent, ExecutorConfig};
/// use chat_core::{Agent, Context};
/// use std::sync::Arc;
///
/// # async fn example(
/// #     provider: Arc<dyn chat_llm::LLMProvider>,
/// #     search: Arc<dyn Agent>,
/// #     finance: Arc<dyn Agent>,
/// # ) -> chat_core::Result<()> {
/// let team = TeamAgent::builder(provider, "team")
///     .add_member(search)
///     .add_member(finance)
///     .config(ExecutorConfig::default())
///     .build()?;
///
/// let mut context = Context::new();
/// let response = team.process("Analyze AAPL fundamentals".to_string(), &mut context).await?;
/// # Ok(())
/// # }
/// ```
pub struct TeamAgent {
    provider: Arc<dyn LLMProvider>,
    members: Vec<Arc<dyn Agent>>,
    config: ExecutorConfig,
    name: String,
}

impl TeamAgent {
    /// Create a new builder for a team agent
    pub fn builder(provider: Arc<dyn LLMProvider>, name: impl Into<String>) -> TeamAgentBuilder {
        TeamAgentBuilder::new(provider, name)
    }

    /// Get the number of member agents
    pub fn member_count(&self) -> usize {
        self.members.len()
    }

    /// Build the synthesis prompt from the user input and member outputs
    fn synthesis_prompt(input: &str, sections: &[(String, String)]) -> String {
        let mut prompt = format!("User request: {input}\n");
        for (name, output) in sections {
            prompt.push_str(&format!("\n## Output from {name}\n{output}\n"));
        }
        prompt
    }
}

#[async_trait]
impl Agent for TeamAgent {
    async fn process(&self, input: String, context: &mut Context) -> Result<String> {
        // Run each member on the original prompt, in order
        let mut sections = Vec::with_capacity(self.members.len());
        for member in &self.members {
            debug!(member = member.name(), "Running team member");
            let output = member.process(input.clone(), context).await?;
            sections.push((member.name().to_string(), output));
        }

        // One synthesis completion combines the member outputs
        let request = CompletionRequest::builder(&self.config.model)
            .messages(vec![Message::user(Self::synthesis_prompt(
                &input, &sections,
            ))])
            .system(
                self.config
                    .system_prompt
                    .clone()
                    .unwrap_or_else(|| "Synthesize the team outputs.".to_string()),
            )
            .max_tokens(self.config.max_tokens)
            .temperature(self.config.temperature.unwrap_or(0.7))
            .build();

        let response = self
            .provider
            .complete(request)
            .await
            .map_err(|e| Error::ProcessingFailed(e.to_string()))?;

        let text = response.message.text().unwrap_or("No response").to_string();
        info!(
            members = self.members.len(),
            response_length = text.len(),
            "Team synthesis completed"
        );
        Ok(text)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Builder for TeamAgent
pub struct TeamAgentBuilder {
    provider: Arc<dyn LLMProvider>,
    members: Vec<Arc<dyn Agent>>,
    config: ExecutorConfig,
    name: String,
}

impl TeamAgentBuilder {
    /// Create a new builder
    pub fn new(provider: Arc<dyn LLMProvider>, name: impl Into<String>) -> Self {
        Self {
            provider,
            members: Vec::new(),
            config: ExecutorConfig::default(),
            name: name.into(),
        }
    }

    /// Add a member agent (members run in insertion order)
    pub fn add_member(mut self, member: Arc<dyn Agent>) -> Self {
        self.members.push(member);
        self
    }

    /// Set the synthesis configuration (model, instructions, token limits)
    pub fn config(mut self, config: ExecutorConfig) -> Self {
        self.config = config;
        self
    }

    /// Build the team agent
    ///
    /// # Errors
    ///
    /// Returns an error if no member agents were added.
    pub fn build(self) -> Result<TeamAgent> {
        if self.members.is_empty() {
            return Err(Error::InitializationFailed(
                "No member agents added".to_string(),
            ));
        }

        Ok(TeamAgent {
            provider: self.provider,
            members: self.members,
            config: self.config,
            name: self.name,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chat_llm::{CompletionResponse, StopReason, TokenUsage};

    mockall::mock! {
        pub Provider {}

        #[async_trait]
        impl LLMProvider for Provider {
            async fn complete(
                &self,
                request: CompletionRequest,
            ) -> chat_llm::Result<CompletionResponse>;
            fn name(&self) -> &'static str;
        }
    }

    struct FixedAgent {
        name: &'static str,
        output: &'static str,
    }

    #[async_trait]
    impl Agent for FixedAgent {
        async fn process(&self, _input: String, _context: &mut Context) -> Result<String> {
            Ok(self.output.to_string())
        }

        fn name(&self) -> &str {
            self.name
        }
    }

    #[test]
    fn test_builder_requires_members() {
        let provider = MockProvider::new();
        let result = TeamAgent::builder(Arc::new(provider), "team").build();
        assert!(result.is_err());
    }

    #[test]
    fn test_synthesis_prompt_sections() {
        let prompt = TeamAgent::synthesis_prompt(
            "Analyze AAPL",
            &[
                ("Search Agent".to_string(), "news here".to_string()),
                ("Finance Agent".to_string(), "| A | B |".to_string()),
            ],
        );
        assert!(prompt.starts_with("User request: Analyze AAPL"));
        assert!(prompt.contains("## Output from Search Agent\nnews here"));
        assert!(prompt.contains("## Output from Finance Agent\n| A | B |"));
    }

    #[tokio::test]
    async fn test_team_runs_members_then_synthesizes() {
        let mut provider = MockProvider::new();
        provider
            .expect_complete()
            .times(1)
            .withf(|request| {
                let prompt = request.messages[0].text().unwrap_or_default();
                prompt.contains("member one output") && prompt.contains("member two output")
            })
            .returning(|_| {
                Ok(CompletionResponse {
                    message: Message::assistant("synthesized"),
                    stop_reason: StopReason::EndTurn,
                    usage: TokenUsage {
                        input_tokens: 10,
                        output_tokens: 5,
                    },
                })
            });

        let team = TeamAgent::builder(Arc::new(provider), "team")
            .add_member(Arc::new(FixedAgent {
                name: "one",
                output: "member one output",
            }))
            .add_member(Arc::new(FixedAgent {
                name: "two",
                output: "member two output",
            }))
            .config(ExecutorConfig::default())
            .build()
            .unwrap();

        let mut ctx = Context::new();
        let result = team.process("Analyze AAPL".to_string(), &mut ctx).await.unwrap();
        assert_eq!(result, "synthesized");
    }
}
