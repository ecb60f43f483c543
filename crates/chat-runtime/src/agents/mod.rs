//! Agent implementations provided by the runtime

pub mod team;
pub mod tool;

pub use team::{TeamAgent, TeamAgentBuilder};
pub use tool::ToolAgent;
