//! System prompts for the configured agents

pub mod system;

pub use system::{FINANCE_AGENT_PROMPT, SEARCH_AGENT_PROMPT, TEAM_AGENT_PROMPT};
