//! Stock-analysis chat application logic
//!
//! This crate wires pre-built agent machinery into the stock-analysis chat
//! application:
//!
//! - Application configuration (model ids, token limits, API credential)
//! - Domain tools: web search for company news, Yahoo Finance stock data
//! - The configured agents: a search agent, a finance agent, and the
//!   synthesizing team agent
//! - The response sanitization pipeline: metadata stripping, preamble
//!   trimming, table extraction, news formatting
//! - The turn orchestrator tying agent output, pipeline, display surface,
//!   and chat history together
//!
//! # Architecture
//!
//! A user submission flows through [`interface::TurnHandler`]: it is
//! appended to the [`interface::ChatHistory`], handed to the team agent,
//! and the raw response text is pushed through the sanitization stages in
//! a fixed order. Tables and news bullets render as they are extracted;
//! whatever prose survives is rendered last.

pub mod agents;
pub mod config;
pub mod error;
pub mod interface;
pub mod prompts;
pub mod sanitize;
pub mod tools;

// Re-export main types for convenience
pub use agents::{FinanceAgent, SearchAgent, StockAnalysisTeam};
pub use config::AppConfig;
pub use error::{ChatError, Result};
pub use interface::{ChatHistory, Surface, TurnHandler, TurnState};
pub use sanitize::{NewsSection, Table, TableOutcome};
