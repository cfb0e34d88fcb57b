//! Configuration type definitions

use chrono::TimeDelta;
use serde::{Deserialize, Serialize};

use super::lexicon;

/// Top-level chatlens configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Word tables used by the analytics engine
    #[serde(default)]
    pub lexicon: Lexicon,

    /// Numeric rules used by the analytics engine
    #[serde(default)]
    pub thresholds: Thresholds,

    /// Transcript parser behavior
    #[serde(default)]
    pub parser: ParserConfig,
}

/// Word tables and character ranges consumed by content metrics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lexicon {
    /// Words excluded from top-word counts
    #[serde(default = "default_stop_words")]
    pub stop_words: Vec<String>,

    /// Positive sentiment substrings
    #[serde(default = "default_positive")]
    pub positive: Vec<String>,

    /// Negative sentiment substrings
    #[serde(default = "default_negative")]
    pub negative: Vec<String>,

    /// Red-flag keyword categories, reported in this order
    #[serde(default = "lexicon::red_flag_categories")]
    pub red_flags: Vec<RedFlagCategory>,

    /// Code point ranges counted as emoji
    #[serde(default = "lexicon::emoji_ranges")]
    pub emoji_ranges: Vec<EmojiRange>,
}

/// A named group of red-flag keywords
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedFlagCategory {
    pub name: String,
    pub keywords: Vec<String>,
}

/// An inclusive range of Unicode scalar values
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmojiRange {
    pub name: String,
    pub start: u32,
    pub end: u32,
}

impl EmojiRange {
    pub fn contains(&self, c: char) -> bool {
        (self.start..=self.end).contains(&(c as u32))
    }
}

/// Numeric rules for timing, ranking and severity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Thresholds {
    /// Number of entries kept in top-word and top-emoji lists
    #[serde(default = "default_top_k")]
    pub top_k: usize,

    /// Replies slower than this are not counted as responses
    #[serde(default = "default_response_window_minutes")]
    pub response_window_minutes: i64,

    /// Silence longer than this makes the next message a conversation starter
    #[serde(default = "default_conversation_gap_minutes")]
    pub conversation_gap_minutes: i64,

    /// Same-sender follow-ups faster than this count as a double text
    #[serde(default = "default_double_text_minutes")]
    pub double_text_minutes: i64,

    /// Gaps longer than this many days are reported as conversation gaps
    #[serde(default = "default_long_gap_days")]
    pub long_gap_days: i64,

    /// Keyword counts above this are high severity
    #[serde(default = "default_severity_high")]
    pub severity_high: usize,

    /// Keyword counts above this are medium severity
    #[serde(default = "default_severity_medium")]
    pub severity_medium: usize,

    /// First hour of the late-night window
    #[serde(default = "default_late_night_start")]
    pub late_night_start: u32,

    /// Hour at which late night ends and early morning begins
    #[serde(default = "default_late_night_end")]
    pub late_night_end: u32,

    /// Hour at which early morning ends
    #[serde(default = "default_early_morning_end")]
    pub early_morning_end: u32,
}

impl Thresholds {
    /// Replies slower than this are not counted; `None` when out of range
    pub fn response_window(&self) -> Option<TimeDelta> {
        TimeDelta::try_minutes(self.response_window_minutes)
    }

    pub fn conversation_gap(&self) -> Option<TimeDelta> {
        TimeDelta::try_minutes(self.conversation_gap_minutes)
    }

    pub fn double_text_window(&self) -> Option<TimeDelta> {
        TimeDelta::try_minutes(self.double_text_minutes)
    }

    pub fn long_gap(&self) -> Option<TimeDelta> {
        TimeDelta::try_days(self.long_gap_days)
    }
}

/// Transcript parser options
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParserConfig {
    /// Append unmatched lines to the preceding message instead of dropping them
    #[serde(default)]
    pub join_continuations: bool,
}

fn default_stop_words() -> Vec<String> {
    lexicon::owned(lexicon::STOP_WORDS)
}

fn default_positive() -> Vec<String> {
    lexicon::owned(lexicon::POSITIVE_WORDS)
}

fn default_negative() -> Vec<String> {
    lexicon::owned(lexicon::NEGATIVE_WORDS)
}

fn default_top_k() -> usize {
    5
}

fn default_response_window_minutes() -> i64 {
    24 * 60
}

fn default_conversation_gap_minutes() -> i64 {
    4 * 60
}

fn default_double_text_minutes() -> i64 {
    5
}

fn default_long_gap_days() -> i64 {
    1
}

fn default_severity_high() -> usize {
    10
}

fn default_severity_medium() -> usize {
    5
}

fn default_late_night_start() -> u32 {
    22
}

fn default_late_night_end() -> u32 {
    6
}

fn default_early_morning_end() -> u32 {
    10
}

impl Default for Lexicon {
    fn default() -> Self {
        Lexicon {
            stop_words: default_stop_words(),
            positive: default_positive(),
            negative: default_negative(),
            red_flags: lexicon::red_flag_categories(),
            emoji_ranges: lexicon::emoji_ranges(),
        }
    }
}

impl Default for Thresholds {
    fn default() -> Self {
        Thresholds {
            top_k: default_top_k(),
            response_window_minutes: default_response_window_minutes(),
            conversation_gap_minutes: default_conversation_gap_minutes(),
            double_text_minutes: default_double_text_minutes(),
            long_gap_days: default_long_gap_days(),
            severity_high: default_severity_high(),
            severity_medium: default_severity_medium(),
            late_night_start: default_late_night_start(),
            late_night_end: default_late_night_end(),
            early_morning_end: default_early_morning_end(),
        }
    }
}
