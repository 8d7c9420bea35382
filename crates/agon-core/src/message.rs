//! Dialogue messages and the append-only message pool.
//!
//! The pool is the single record of an episode's dialogue. Entries are keyed
//! by turn and author; retrieval never mutates.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Author name used for moderator announcements.
pub const MODERATOR: &str = "Moderator";

/// A single dialogue turn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    /// Who spoke
    pub agent_name: String,
    /// What was said
    pub content: String,
    /// Turn index (0 is reserved for the opening moderator announcement)
    pub turn: u32,
    /// When the message was recorded
    pub timestamp: DateTime<Utc>,
}

impl Message {
    /// Create a message stamped with the current time
    pub fn new(agent_name: &str, content: &str, turn: u32) -> Self {
        Self {
            agent_name: agent_name.to_string(),
            content: content.to_string(),
            turn,
            timestamp: Utc::now(),
        }
    }
}

impl std::fmt::Display for Message {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}: {}", self.turn, self.agent_name, self.content)
    }
}

/// Ordered, append-only record of an episode's dialogue
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MessagePool {
    messages: Vec<Message>,
}

impl MessagePool {
    /// Create an empty pool
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a message to the log
    pub fn append(&mut self, message: Message) {
        self.messages.push(message);
    }

    /// Append a moderator announcement at the given turn
    pub fn moderator_speak(&mut self, content: &str, turn: u32) {
        self.append(Message::new(MODERATOR, content, turn));
    }

    /// The most recently appended message, if any
    pub fn last_message(&self) -> Option<&Message> {
        self.messages.last()
    }

    /// All messages authored by `author`, in order
    pub fn messages_from(&self, author: &str) -> Vec<&Message> {
        self.messages
            .iter()
            .filter(|m| m.agent_name == author)
            .collect()
    }

    /// The up-to-`n` most recent messages by `author`, oldest first
    pub fn last_n_from(&self, author: &str, n: usize) -> Vec<&Message> {
        let mut recent: Vec<&Message> = self
            .messages
            .iter()
            .rev()
            .filter(|m| m.agent_name == author)
            .take(n)
            .collect();
        recent.reverse();
        recent
    }

    /// Full transcript in append order
    pub fn all(&self) -> &[Message] {
        &self.messages
    }

    /// Number of messages in the pool
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Whether the pool is empty
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Drop all messages (used when an episode resets)
    pub fn clear(&mut self) {
        self.messages.clear();
    }
}
