//! Chat session loops (interactive and one-shot)

use crate::render::CliSurface;
use chat_core::{Agent, Context};
use chat_stock::{AppConfig, ChatHistory, Surface, TurnHandler, TurnState};
use std::io::{BufRead, Write};
use std::sync::Arc;

const TITLE: &str = "📈 AI Stock Analysis Agent";
const TAGLINE: &str = "Ask questions about stocks, and I'll analyze using web search and financial data.";

const ABOUT: &str = "\
About this Agent

This AI agent combines:
- Web Search for latest news
- Yahoo Finance for stock data
- LLM Analysis for insights

Example queries:
- Analyze AAPL fundamentals
- Compare TSLA vs GM stock performance
- What are analysts saying about NVDA?";

/// Run a single query and exit
pub async fn run_once(team: &dyn Agent, config: &Arc<AppConfig>, query: &str) -> anyhow::Result<()> {
    let mut handler = TurnHandler::new(Arc::clone(config));
    let mut history = ChatHistory::new();
    let mut surface = CliSurface::new();
    let mut context = Context::new().with_session_id("one-shot");

    println!("🔍 Analyzing stock data...");
    let state = handler
        .handle(team, query, &mut context, &mut history, &mut surface)
        .await;

    if state == TurnState::Failed {
        std::process::exit(1);
    }
    Ok(())
}

/// Run the interactive multi-turn chat session
pub async fn run_interactive(team: &dyn Agent, config: &Arc<AppConfig>) -> anyhow::Result<()> {
    let mut handler = TurnHandler::new(Arc::clone(config));
    let mut history = ChatHistory::new();
    let mut surface = CliSurface::new();
    let mut context = Context::new().with_session_id("interactive");

    println!("{TITLE}");
    println!("{TAGLINE}\n");
    surface.about(ABOUT);
    println!("Type 'exit' or 'quit' to leave.\n");

    let stdin = std::io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("You: ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        let input = line.trim();

        if input.is_empty() {
            continue;
        }
        if input.eq_ignore_ascii_case("exit") || input.eq_ignore_ascii_case("quit") {
            break;
        }

        println!("🔍 Analyzing stock data...");
        // One submission is fully processed before the next is accepted
        handler
            .handle(team, input, &mut context, &mut history, &mut surface)
            .await;
        println!();
    }

    Ok(())
}
