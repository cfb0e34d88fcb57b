//! Chat transcript model and parser

mod parse;

use std::collections::HashSet;
use std::ops::Index;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

pub use parse::{parse, ParsedTranscript, TranscriptParser};

/// A single chat message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Sender label, trimmed and non-empty
    pub contact: String,
    /// Message body, trimmed and non-empty, original casing
    pub text: String,
    /// Naive local send time
    pub timestamp: NaiveDateTime,
}

impl Message {
    pub fn new(
        contact: impl Into<String>,
        text: impl Into<String>,
        timestamp: NaiveDateTime,
    ) -> Self {
        Message {
            contact: contact.into(),
            text: text.into(),
            timestamp,
        }
    }
}

/// Messages in source order
///
/// Source order is not guaranteed to be chronological; consumers that care
/// about adjacency in time sort a view of their own.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageSequence {
    messages: Vec<Message>,
}

impl MessageSequence {
    pub fn new(messages: Vec<Message>) -> Self {
        MessageSequence { messages }
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Message> {
        self.messages.iter()
    }

    pub fn as_slice(&self) -> &[Message] {
        &self.messages
    }

    /// Distinct contacts in order of first appearance
    pub fn contacts(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.messages
            .iter()
            .map(|m| m.contact.as_str())
            .filter(|c| seen.insert(*c))
            .collect()
    }

    pub fn into_vec(self) -> Vec<Message> {
        self.messages
    }
}

impl From<Vec<Message>> for MessageSequence {
    fn from(messages: Vec<Message>) -> Self {
        MessageSequence::new(messages)
    }
}

impl Index<usize> for MessageSequence {
    type Output = Message;

    fn index(&self, index: usize) -> &Message {
        &self.messages[index]
    }
}

impl<'a> IntoIterator for &'a MessageSequence {
    type Item = &'a Message;
    type IntoIter = std::slice::Iter<'a, Message>;

    fn into_iter(self) -> Self::IntoIter {
        self.messages.iter()
    }
}
