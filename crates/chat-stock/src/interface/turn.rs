//! Turn orchestration
//!
//! Drives one user submission through the agent call and the sanitization
//! pipeline, rendering structured pieces as they are extracted. One turn
//! is fully processed before the next can be accepted; the agent call is
//! awaited with no additional timeout beyond the HTTP client's (a known
//! gap - an unbounded upstream call stalls the whole interaction).

use crate::config::AppConfig;
use crate::interface::{ChatHistory, Surface};
use crate::sanitize::{self, TableOutcome};
use chat_core::{Agent, Context};
use regex::Regex;
use std::sync::Arc;
use std::sync::LazyLock;
use tracing::{info, warn};

/// A level-2 markdown header anywhere in the text
static HEADER_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^##").expect("valid pattern"));

/// A leading "<something> of <something>" line ("Analysis of AAPL")
static LEAD_OF_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\n]*of[^\n]*\n").expect("valid pattern"));

/// A trailing sources block
static SOURCES_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)Sources:.*").expect("valid pattern"));

/// Keywords that mark residual prose as metric content
const METRIC_KEYWORDS: [&str; 4] = ["metric", "value", "price", "recommend"];

/// State of a chat turn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnState {
    /// Waiting for a submission
    Idle,
    /// Submission accepted, not yet processing
    Submitted,
    /// Agent call plus cleaning pipeline in flight
    Processing,
    /// Turn rendered successfully
    Rendered,
    /// Agent call failed; error shown instead of content
    Failed,
}

/// Orchestrates one chat turn: history append, agent call, sanitization,
/// rendering
pub struct TurnHandler {
    config: Arc<AppConfig>,
    state: TurnState,
}

impl TurnHandler {
    /// Create a new turn handler
    pub fn new(config: Arc<AppConfig>) -> Self {
        Self {
            config,
            state: TurnState::Idle,
        }
    }

    /// Current turn state
    pub fn state(&self) -> TurnState {
        self.state
    }

    /// Process one user submission
    ///
    /// Appends the user entry, invokes the agent, runs the sanitization
    /// pipeline in its fixed order (metadata strip, preamble trim, table
    /// extraction, news formatting, preamble trim again), renders each
    /// piece, and appends the assistant entry (cleaned text or error
    /// string).
    pub async fn handle(
        &mut self,
        agent: &dyn Agent,
        input: &str,
        context: &mut Context,
        history: &mut ChatHistory,
        surface: &mut dyn Surface,
    ) -> TurnState {
        self.state = TurnState::Submitted;
        history.push_user(input);
        self.state = TurnState::Processing;

        let raw = match agent.process(input.to_string(), context).await {
            Ok(raw) => raw,
            Err(e) => {
                warn!(error = %e, "Agent call failed");
                surface.error(&format!("❌ Error: {e}"));
                history.push_assistant(format!("An error occurred: {e}"));
                self.state = TurnState::Failed;
                return self.state;
            }
        };

        let cleaned = sanitize::clean_response(&raw);

        // Tables render in encounter order, HTML spans before markdown
        let extraction = sanitize::extract_tables(&cleaned);
        for outcome in &extraction.outcomes {
            match outcome {
                TableOutcome::Parsed(table) => surface.table(table),
                TableOutcome::Unparsed(span) => surface.markdown(span),
            }
        }

        let (news, after_news) = sanitize::extract_news(&extraction.remaining);
        if let Some(section) = &news {
            surface.heading("📰 Latest News");
            surface.bullets(&section.items);
        }

        let remaining = sanitize::trim_preamble(&after_news);

        if remaining.is_empty() {
            surface.info("No structured data available for this query.");
        } else {
            self.render_prose(&remaining, surface);
        }

        // Nothing survived cleaning but the agent did say something:
        // show the raw response, truncated
        if cleaned.is_empty() && !raw.trim().is_empty() {
            surface.warning("No structured data found. Showing raw response:");
            surface.markdown(&truncate_preview(&raw, self.config.raw_preview_limit));
        }

        info!(
            tables = extraction.outcomes.len(),
            news_items = news.as_ref().map_or(0, |n| n.items.len()),
            prose_length = remaining.len(),
            "Turn rendered"
        );

        history.push_assistant(cleaned);
        self.state = TurnState::Rendered;
        self.state
    }

    /// Render residual prose, sniffing a heading when none is present
    fn render_prose(&self, text: &str, surface: &mut dyn Surface) {
        if !HEADER_LINE.is_match(text) {
            let lower = text.to_lowercase();
            if lower.contains("news") {
                surface.heading("📊 Financial Metrics");
            } else if METRIC_KEYWORDS.iter().any(|k| lower.contains(k)) {
                surface.heading("📊 Key Metrics");
            }
        }

        // One leading "Analysis of XYZ" style line, then any trailing
        // sources block
        let text = LEAD_OF_LINE.replace(text, "");
        let text = SOURCES_BLOCK.replace(&text, "");

        let text = text.trim();
        if !text.is_empty() {
            surface.markdown(text);
        }
    }
}

fn truncate_preview(raw: &str, limit: usize) -> String {
    if raw.chars().count() > limit {
        let truncated: String = raw.chars().take(limit).collect();
        format!("{truncated}...")
    } else {
        raw.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sanitize::Table;
    use async_trait::async_trait;
    use chat_core::Result;
    use chat_llm::Role;

    /// Agent stub returning a canned response (or failing)
    struct StubAgent {
        response: std::result::Result<String, String>,
    }

    impl StubAgent {
        fn ok(text: &str) -> Self {
            Self {
                response: Ok(text.to_string()),
            }
        }

        fn failing(message: &str) -> Self {
            Self {
                response: Err(message.to_string()),
            }
        }
    }

    #[async_trait]
    impl Agent for StubAgent {
        async fn process(&self, _input: String, _context: &mut Context) -> Result<String> {
            match &self.response {
                Ok(text) => Ok(text.clone()),
                Err(msg) => Err(chat_core::Error::ProcessingFailed(msg.clone())),
            }
        }

        fn name(&self) -> &str {
            "stub"
        }
    }

    /// Surface that records every render call
    #[derive(Default)]
    struct RecordingSurface {
        markdown: Vec<String>,
        headings: Vec<String>,
        tables: Vec<Table>,
        bullets: Vec<Vec<String>>,
        infos: Vec<String>,
        warnings: Vec<String>,
        errors: Vec<String>,
    }

    impl Surface for RecordingSurface {
        fn markdown(&mut self, text: &str) {
            self.markdown.push(text.to_string());
        }
        fn heading(&mut self, text: &str) {
            self.headings.push(text.to_string());
        }
        fn table(&mut self, table: &Table) {
            self.tables.push(table.clone());
        }
        fn bullets(&mut self, items: &[String]) {
            self.bullets.push(items.to_vec());
        }
        fn info(&mut self, text: &str) {
            self.infos.push(text.to_string());
        }
        fn warning(&mut self, text: &str) {
            self.warnings.push(text.to_string());
        }
        fn error(&mut self, text: &str) {
            self.errors.push(text.to_string());
        }
        fn about(&mut self, _text: &str) {}
    }

    fn test_config() -> Arc<AppConfig> {
        Arc::new(
            AppConfig::builder()
                .groq_api_key("gsk-test")
                .build()
                .expect("valid test config"),
        )
    }

    #[tokio::test]
    async fn test_end_to_end_table_news_and_prose() {
        let raw = "content_type=x\n## Key Metrics\n| A | B |\n|---|---|\n| 1 | 2 |\n\n\
                   Latest News\n- item one\n- item two";
        let agent = StubAgent::ok(raw);
        let mut handler = TurnHandler::new(test_config());
        let mut history = ChatHistory::new();
        let mut surface = RecordingSurface::default();
        let mut context = Context::new();

        let state = handler
            .handle(&agent, "Analyze AAPL", &mut context, &mut history, &mut surface)
            .await;

        assert_eq!(state, TurnState::Rendered);

        // One table with header [A, B] and one row [1, 2]
        assert_eq!(surface.tables.len(), 1);
        assert_eq!(surface.tables[0].headers, vec!["A", "B"]);
        assert_eq!(surface.tables[0].rows, vec![vec!["1".to_string(), "2".to_string()]]);

        // Two news items under the news heading
        assert_eq!(surface.headings, vec!["📰 Latest News"]);
        assert_eq!(surface.bullets.len(), 1);
        assert_eq!(surface.bullets[0], vec!["item one", "item two"]);

        // No raw table or news markup left in rendered prose
        for block in &surface.markdown {
            assert!(!block.contains('|'), "raw table markup in prose: {block}");
            assert!(!block.contains("item one"), "raw news markup in prose: {block}");
        }

        // History: user entry plus cleaned assistant entry
        assert_eq!(history.len(), 2);
        assert_eq!(history.entries()[0].role, Role::User);
        assert_eq!(history.entries()[1].role, Role::Assistant);
        assert!(!history.entries()[1].content.contains("content_type="));
    }

    #[tokio::test]
    async fn test_failed_turn_stores_error() {
        let agent = StubAgent::failing("connection refused");
        let mut handler = TurnHandler::new(test_config());
        let mut history = ChatHistory::new();
        let mut surface = RecordingSurface::default();
        let mut context = Context::new();

        let state = handler
            .handle(&agent, "Analyze AAPL", &mut context, &mut history, &mut surface)
            .await;

        assert_eq!(state, TurnState::Failed);
        assert_eq!(surface.errors.len(), 1);
        assert!(surface.errors[0].starts_with("❌ Error:"));

        // The error string becomes the assistant's turn content
        assert_eq!(history.len(), 2);
        assert!(history.entries()[1].content.contains("connection refused"));
    }

    #[tokio::test]
    async fn test_empty_cleaned_falls_back_to_raw_preview() {
        // Everything is stripped away, but the raw content was non-empty
        let agent = StubAgent::ok("run_id=abc123\nmetrics={'time': 1}");
        let mut handler = TurnHandler::new(test_config());
        let mut history = ChatHistory::new();
        let mut surface = RecordingSurface::default();
        let mut context = Context::new();

        let state = handler
            .handle(&agent, "Analyze AAPL", &mut context, &mut history, &mut surface)
            .await;

        assert_eq!(state, TurnState::Rendered);
        assert_eq!(surface.infos.len(), 1);
        assert_eq!(surface.warnings.len(), 1);
        assert_eq!(surface.markdown.len(), 1);
        assert!(surface.markdown[0].contains("run_id=abc123"));
    }

    #[tokio::test]
    async fn test_raw_preview_truncated_to_limit() {
        // A single 600-char artifact line cleans to nothing
        let long_raw = format!("run_id={}", "a".repeat(600));
        let agent = StubAgent::ok(&long_raw);
        let mut handler = TurnHandler::new(test_config());
        let mut history = ChatHistory::new();
        let mut surface = RecordingSurface::default();
        let mut context = Context::new();

        handler
            .handle(&agent, "Analyze AAPL", &mut context, &mut history, &mut surface)
            .await;

        // Preview is capped at the configured limit plus the ellipsis
        assert_eq!(surface.markdown.len(), 1);
        assert!(surface.markdown[0].ends_with("..."));
        assert_eq!(surface.markdown[0].chars().count(), 500 + 3);
    }

    #[tokio::test]
    async fn test_heading_sniffed_for_metric_prose() {
        let agent = StubAgent::ok("The current price target was raised.");
        let mut handler = TurnHandler::new(test_config());
        let mut history = ChatHistory::new();
        let mut surface = RecordingSurface::default();
        let mut context = Context::new();

        handler
            .handle(&agent, "Analyze AAPL", &mut context, &mut history, &mut surface)
            .await;

        assert_eq!(surface.headings, vec!["📊 Key Metrics"]);
        assert_eq!(surface.markdown, vec!["The current price target was raised."]);
    }

    #[tokio::test]
    async fn test_sources_block_stripped_from_prose() {
        let agent = StubAgent::ok("Revenue grew 12%.\n\nSources:\n- somewhere.example");
        let mut handler = TurnHandler::new(test_config());
        let mut history = ChatHistory::new();
        let mut surface = RecordingSurface::default();
        let mut context = Context::new();

        handler
            .handle(&agent, "Analyze AAPL", &mut context, &mut history, &mut surface)
            .await;

        assert_eq!(surface.markdown, vec!["Revenue grew 12%."]);
    }

    #[test]
    fn test_truncate_preview() {
        assert_eq!(truncate_preview("short", 500), "short");
        let long = "x".repeat(501);
        let preview = truncate_preview(&long, 500);
        assert_eq!(preview.chars().count(), 503);
        assert!(preview.ends_with("..."));
    }
}
