//! Turn-based conversational interface
//!
//! The display surface abstraction, the append-only chat history, and the
//! orchestrator that drives one user submission through the agent call and
//! the sanitization pipeline.

pub mod history;
pub mod surface;
pub mod turn;

pub use history::{ChatEntry, ChatHistory};
pub use surface::Surface;
pub use turn::{TurnHandler, TurnState};
