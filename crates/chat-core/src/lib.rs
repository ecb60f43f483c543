//! Core abstractions for stock-chat-rs
//!
//! This crate defines the pieces every other crate builds on:
//!
//! - The [`Agent`] trait implemented by all configured agents
//! - The [`Context`] passed through a chat turn
//! - The crate-level [`Error`] and [`Result`] types

pub mod agent;
pub mod context;
pub mod error;

pub use agent::Agent;
pub use context::Context;
pub use error::{Error, Result};
