//! Terminal chat interface for the stock-analysis agent

mod chat;
mod render;

use chat_llm::providers::GroqProvider;
use chat_runtime::AgentRuntime;
use chat_stock::{AppConfig, StockAnalysisTeam};
use clap::Parser;
use std::sync::Arc;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "chat-cli")]
#[command(about = "AI stock analysis agent - web search + Yahoo Finance + LLM", long_about = None)]
struct Args {
    /// One-shot query; omit for an interactive chat session
    #[arg(short, long)]
    query: Option<String>,

    /// Override the model used by all agents
    #[arg(short, long)]
    model: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    chat_utils::init_tracing();

    let args = Args::parse();

    // Missing credential halts startup before any processing
    let mut config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {e}");
            std::process::exit(1);
        }
    };
    if let Some(model) = args.model {
        config.model = model;
    }
    let config = Arc::new(config);

    info!(model = %config.model, "Starting chat-cli");

    let provider = GroqProvider::with_config(config.groq_config())?;
    let runtime = AgentRuntime::builder()
        .provider(Arc::new(provider))
        .build()?;
    let team = StockAnalysisTeam::new(&runtime, &config)?;

    match args.query {
        Some(query) => chat::run_once(&team, &config, &query).await,
        None => chat::run_interactive(&team, &config).await,
    }
}
