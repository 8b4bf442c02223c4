//! Message log
//!
//! Bounded history of what happened, oldest entries evicted first.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

/// A message in the game log
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameMessage {
    pub text: String,
    pub category: MessageCategory,
}

/// Categories for message coloring
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MessageCategory {
    Combat,
    Item,
    System,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageLog {
    capacity: usize,
    messages: VecDeque<GameMessage>,
}

impl MessageLog {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            capacity,
            messages: VecDeque::with_capacity(capacity),
        }
    }

    /// Rebuild a log from saved messages, keeping only the newest ones
    pub fn from_messages(capacity: usize, messages: Vec<GameMessage>) -> Self {
        let mut log = Self::new(capacity);
        for message in messages {
            log.push_message(message);
        }
        log
    }

    pub fn push(&mut self, text: impl Into<String>, category: MessageCategory) {
        self.push_message(GameMessage {
            text: text.into(),
            category,
        });
    }

    fn push_message(&mut self, message: GameMessage) {
        if self.messages.len() == self.capacity {
            self.messages.pop_front();
        }
        self.messages.push_back(message);
    }

    /// Messages oldest first
    pub fn iter(&self) -> impl Iterator<Item = &GameMessage> {
        self.messages.iter()
    }

    pub fn last(&self) -> Option<&GameMessage> {
        self.messages.back()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn to_vec(&self) -> Vec<GameMessage> {
        self.messages.iter().cloned().collect()
    }
}
