//! Tool for searching the web for company news

use chat_core::Result as AgentResult;
use chat_tools::Tool;
use async_trait::async_trait;
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use std::sync::{Arc, LazyLock};

use crate::config::AppConfig;
use crate::error::{ChatError, Result};

const SEARCH_ENDPOINT: &str = "https://html.duckduckgo.com/html/";

/// Anchor elements carrying a result title and URL
static RESULT_LINK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?s)<a[^>]*class="result__a"[^>]*href="([^"]*)"[^>]*>(.*?)</a>"#)
        .expect("valid pattern")
});

/// Anchor elements carrying a result snippet
static RESULT_SNIPPET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?s)<a[^>]*class="result__snippet"[^>]*>(.*?)</a>"#).expect("valid pattern")
});

/// Residual markup inside titles and snippets
static HTML_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]+>").expect("valid pattern"));

/// Tool for web search over the DuckDuckGo HTML endpoint
pub struct WebSearchTool {
    client: reqwest::Client,
    config: Arc<AppConfig>,
}

#[derive(Debug, Deserialize)]
struct SearchParams {
    query: String,
    #[serde(default)]
    max_results: Option<usize>,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
struct SearchResult {
    title: String,
    url: String,
    snippet: String,
}

impl WebSearchTool {
    /// Create a new web search tool
    pub fn new(config: Arc<AppConfig>) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    /// Run a search and shape the results for the agent
    async fn search(&self, params: SearchParams) -> Result<Value> {
        let max_results = params
            .max_results
            .unwrap_or(self.config.max_search_results)
            .min(self.config.max_search_results);

        let response = self
            .client
            .get(SEARCH_ENDPOINT)
            .query(&[("q", params.query.as_str())])
            .header("User-Agent", "Mozilla/5.0 (compatible; stock-chat-rs)")
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ChatError::SearchError(format!(
                "search endpoint returned HTTP {}",
                response.status()
            )));
        }

        let body = response.text().await?;
        let results = parse_results(&body, max_results);

        Ok(json!({
            "query": params.query,
            "result_count": results.len(),
            "results": results,
        }))
    }
}

/// Pull titles, URLs, and snippets out of the result page
fn parse_results(html: &str, limit: usize) -> Vec<SearchResult> {
    let snippets: Vec<String> = RESULT_SNIPPET
        .captures_iter(html)
        .filter_map(|c| c.get(1).map(|m| strip_tags(m.as_str())))
        .collect();

    RESULT_LINK
        .captures_iter(html)
        .take(limit)
        .enumerate()
        .filter_map(|(i, c)| {
            let url = c.get(1)?.as_str().to_string();
            let title = strip_tags(c.get(2)?.as_str());
            if title.is_empty() {
                return None;
            }
            Some(SearchResult {
                title,
                url,
                snippet: snippets.get(i).cloned().unwrap_or_default(),
            })
        })
        .collect()
}

fn strip_tags(fragment: &str) -> String {
    HTML_TAG
        .replace_all(fragment, "")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

#[async_trait]
impl Tool for WebSearchTool {
    async fn execute(&self, params: Value) -> AgentResult<Value> {
        let params: SearchParams = serde_json::from_value(params).map_err(|e| {
            chat_core::Error::ProcessingFailed(format!("Invalid parameters: {e}"))
        })?;

        self.search(params)
            .await
            .map_err(|e| chat_core::Error::ProcessingFailed(e.to_string()))
    }

    fn name(&self) -> &str {
        "web_search"
    }

    fn description(&self) -> &str {
        "Search the web for recent news about a company or topic. \
         Returns result titles, URLs, and snippets."
    }

    fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "query": {
                    "type": "string",
                    "description": "Search query (e.g., 'AAPL stock news')"
                },
                "max_results": {
                    "type": "integer",
                    "description": "Maximum number of results to return",
                    "default": 5
                }
            },
            "required": ["query"]
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_PAGE: &str = r#"
        <div class="result">
            <a class="result__a" href="https://example.com/one"><b>Apple</b> ships new chip</a>
            <a class="result__snippet">The <b>chip</b> arrives   next quarter.</a>
        </div>
        <div class="result">
            <a class="result__a" href="https://example.com/two">Supply chain update</a>
            <a class="result__snippet">Suppliers expand capacity.</a>
        </div>
    "#;

    #[test]
    fn test_parse_results() {
        let results = parse_results(SAMPLE_PAGE, 5);

        assert_eq!(results.len(), 2);
        assert_eq!(results[0].title, "Apple ships new chip");
        assert_eq!(results[0].url, "https://example.com/one");
        assert_eq!(results[0].snippet, "The chip arrives next quarter.");
        assert_eq!(results[1].title, "Supply chain update");
    }

    #[test]
    fn test_parse_results_respects_limit() {
        let results = parse_results(SAMPLE_PAGE, 1);
        assert_eq!(results.len(), 1);
    }

    #[test]
    fn test_parse_results_empty_page() {
        assert!(parse_results("<html></html>", 5).is_empty());
    }

    #[test]
    fn test_tool_metadata() {
        let config = Arc::new(
            AppConfig::builder()
                .groq_api_key("gsk-test")
                .build()
                .expect("valid test config"),
        );
        let tool = WebSearchTool::new(config);

        assert_eq!(tool.name(), "web_search");
        assert!(!tool.description().is_empty());

        let schema = tool.input_schema();
        assert_eq!(schema["type"], "object");
        assert!(schema["properties"]["query"].is_object());
    }
}
