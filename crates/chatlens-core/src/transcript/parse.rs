//! Line-oriented parser for WhatsApp-style chat exports
//!
//! Each physical line is matched on its own against a
//! `[date, time] - Contact: text` record pattern. Lines that do not match are
//! skipped, or appended to the previous message when continuation joining is
//! enabled.

use std::sync::OnceLock;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use regex::{Captures, Regex};
use serde::Serialize;
use tracing::debug;

use super::{Message, MessageSequence};
use crate::config::ParserConfig;
use crate::error::{ChatlensError, Result};

static LINE_PATTERN: OnceLock<Regex> = OnceLock::new();

fn line_pattern() -> &'static Regex {
    LINE_PATTERN.get_or_init(|| {
        Regex::new(
            r"^\[?(\d{1,2})/(\d{1,2})/(\d{4}|\d{2}),?\s*:?\s*(\d{1,2}):(\d{2})(?::(\d{2}))?\s*(?:([AaPp])\.?\s?[Mm]\b\.?)?\]?\s*(?:[-–]\s*)?([^:]+):(.*)$",
        )
        .expect("line pattern is a valid regex")
    })
}

/// Parse output together with the number of lines that were not messages
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedTranscript {
    pub messages: MessageSequence,
    /// Non-empty lines that were neither a message nor a joined continuation
    pub skipped_lines: usize,
}

/// Transcript parser
#[derive(Debug, Clone, Default)]
pub struct TranscriptParser {
    config: ParserConfig,
}

impl TranscriptParser {
    pub fn new(config: ParserConfig) -> Self {
        TranscriptParser { config }
    }

    /// Parse raw export text into messages.
    ///
    /// Fails with [`ChatlensError::NoMessagesFound`] if no line matches.
    pub fn parse(&self, text: &str) -> Result<MessageSequence> {
        self.parse_report(text).map(|parsed| parsed.messages)
    }

    /// Parse raw export text, reporting how many lines were skipped
    #[tracing::instrument(skip(self, text), fields(bytes = text.len()))]
    pub fn parse_report(&self, text: &str) -> Result<ParsedTranscript> {
        let mut messages: Vec<Message> = Vec::new();
        let mut skipped_lines = 0;

        for line in text.lines().map(str::trim).filter(|l| !l.is_empty()) {
            if let Some(message) = parse_line(line) {
                messages.push(message);
                continue;
            }

            match messages.last_mut() {
                Some(previous) if self.config.join_continuations => {
                    previous.text.push('\n');
                    previous.text.push_str(line);
                }
                _ => skipped_lines += 1,
            }
        }

        debug!(
            messages = messages.len(),
            skipped_lines,
            join_continuations = self.config.join_continuations,
            "parsed transcript"
        );

        if messages.is_empty() {
            return Err(ChatlensError::NoMessagesFound);
        }

        Ok(ParsedTranscript {
            messages: MessageSequence::new(messages),
            skipped_lines,
        })
    }
}

/// Parse with default parser settings
pub fn parse(text: &str) -> Result<MessageSequence> {
    TranscriptParser::default().parse(text)
}

/// Match a single trimmed line, returning `None` for anything malformed
fn parse_line(line: &str) -> Option<Message> {
    let caps = line_pattern().captures(line)?;

    let contact = caps.get(8)?.as_str().trim();
    let text = caps.get(9)?.as_str().trim();
    if contact.is_empty() || text.is_empty() {
        return None;
    }

    let timestamp = timestamp_from(&caps)?;
    Some(Message::new(contact, text, timestamp))
}

fn number(caps: &Captures<'_>, group: usize) -> Option<u32> {
    caps.get(group)?.as_str().parse().ok()
}

/// Combine day/month/year and hour:minute[:second][am|pm] captures
fn timestamp_from(caps: &Captures<'_>) -> Option<NaiveDateTime> {
    let day = number(caps, 1)?;
    let month = number(caps, 2)?;
    let mut year = number(caps, 3)? as i32;
    if year < 100 {
        year += 2000;
    }
    let date = NaiveDate::from_ymd_opt(year, month, day)?;

    let hour = number(caps, 4)?;
    let minute = number(caps, 5)?;
    let second: u32 = caps.get(6).map_or(Some(0), |m| m.as_str().parse().ok())?;

    let hour = match caps.get(7).map(|m| m.as_str().to_ascii_lowercase()) {
        None => hour,
        Some(_) if !(1..=12).contains(&hour) => return None,
        Some(marker) if marker == "p" => hour % 12 + 12,
        Some(_) => hour % 12,
    };

    let time = NaiveTime::from_hms_opt(hour, minute, second)?;
    Some(date.and_time(time))
}
