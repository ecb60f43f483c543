//! Chat history
//!
//! An append-only, process-lifetime record of the conversation. Only the
//! turn orchestrator writes to it, so no locking is involved.

use chat_llm::Role;
use chrono::{DateTime, Utc};

/// One role/content pair in the conversation
#[derive(Debug, Clone)]
pub struct ChatEntry {
    /// Who produced the content
    pub role: Role,
    /// The stored turn content (cleaned response or error text)
    pub content: String,
    /// When the entry was appended
    pub timestamp: DateTime<Utc>,
}

/// Append-only conversation history
#[derive(Debug, Default)]
pub struct ChatHistory {
    entries: Vec<ChatEntry>,
}

impl ChatHistory {
    /// Create an empty history
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a user entry
    pub fn push_user(&mut self, content: impl Into<String>) {
        self.push(Role::User, content.into());
    }

    /// Append an assistant entry
    pub fn push_assistant(&mut self, content: impl Into<String>) {
        self.push(Role::Assistant, content.into());
    }

    fn push(&mut self, role: Role, content: String) {
        self.entries.push(ChatEntry {
            role,
            content,
            timestamp: Utc::now(),
        });
    }

    /// All entries in append order
    pub fn entries(&self) -> &[ChatEntry] {
        &self.entries
    }

    /// The most recent entry
    pub fn last(&self) -> Option<&ChatEntry> {
        self.entries.last()
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the history is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_order_preserved() {
        let mut history = ChatHistory::new();
        assert!(history.is_empty());

        history.push_user("Analyze AAPL");
        history.push_assistant("AAPL looks fine");
        history.push_user("And TSLA?");

        assert_eq!(history.len(), 3);
        let entries = history.entries();
        assert_eq!(entries[0].role, Role::User);
        assert_eq!(entries[0].content, "Analyze AAPL");
        assert_eq!(entries[1].role, Role::Assistant);
        assert_eq!(entries[2].content, "And TSLA?");
    }

    #[test]
    fn test_last_entry() {
        let mut history = ChatHistory::new();
        assert!(history.last().is_none());

        history.push_user("hello");
        assert_eq!(history.last().map(|e| e.content.as_str()), Some("hello"));
    }
}
