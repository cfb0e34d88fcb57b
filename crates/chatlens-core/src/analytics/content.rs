//! Lexicon-driven content metrics: words, emoji, sentiment, style and energy

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::{percent, ratio_rounded};
use crate::config::Lexicon;
use crate::text::{self, Frequency, FrequencyTable};
use crate::transcript::Message;

/// Share of messages showing each writing habit, in whole percent
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommunicationStyle {
    pub questions: u32,
    pub exclamations: u32,
    pub all_caps: u32,
}

/// Lexicon tables prepared for repeated lookups
pub(super) struct ContentScanner<'a> {
    lexicon: &'a Lexicon,
    stop_words: HashSet<&'a str>,
}

impl<'a> ContentScanner<'a> {
    pub fn new(lexicon: &'a Lexicon) -> Self {
        ContentScanner {
            lexicon,
            stop_words: lexicon.stop_words.iter().map(String::as_str).collect(),
        }
    }

    pub fn top_words(&self, messages: &[&Message], k: usize) -> Vec<Frequency> {
        let mut table = FrequencyTable::new();
        for m in messages {
            for word in text::content_words(&m.text, &self.stop_words) {
                table.add(&word);
            }
        }
        table.top(k)
    }

    pub fn top_emojis(&self, messages: &[&Message], k: usize) -> Vec<Frequency> {
        let mut table = FrequencyTable::new();
        let mut buf = [0u8; 4];
        for m in messages {
            for emoji in text::emojis(&m.text, &self.lexicon.emoji_ranges) {
                table.add(emoji.encode_utf8(&mut buf));
            }
        }
        table.top(k)
    }

    /// Positive share of sentiment-bearing words, 50 when there are none
    pub fn sentiment(&self, messages: &[&Message]) -> u32 {
        let mut positive = 0usize;
        let mut negative = 0usize;
        for m in messages {
            for word in text::lowercase_words(&m.text) {
                if self.lexicon.positive.iter().any(|p| word.contains(p.as_str())) {
                    positive += 1;
                }
                if self.lexicon.negative.iter().any(|n| word.contains(n.as_str())) {
                    negative += 1;
                }
            }
        }
        if positive + negative == 0 {
            return 50;
        }
        percent(positive, positive + negative)
    }

    /// Average of `2 x exclamations + 3 x shouting + emoji` per message, scaled by ten
    pub fn energy(&self, messages: &[&Message]) -> u32 {
        let total: usize = messages
            .iter()
            .map(|m| {
                let exclamations = m.text.matches('!').count();
                let caps = usize::from(text::is_all_caps(&m.text));
                let emojis = text::emojis(&m.text, &self.lexicon.emoji_ranges).count();
                2 * exclamations + 3 * caps + emojis
            })
            .sum();
        ratio_rounded(total as f64 * 10.0, messages.len())
    }
}

pub(super) fn communication_style(messages: &[&Message]) -> CommunicationStyle {
    let n = messages.len();
    let count = |pred: fn(&str) -> bool| messages.iter().filter(|m| pred(&m.text)).count();

    CommunicationStyle {
        questions: percent(count(|t| t.contains('?')), n),
        exclamations: percent(count(|t| t.contains('!')), n),
        all_caps: percent(count(text::is_all_caps), n),
    }
}
