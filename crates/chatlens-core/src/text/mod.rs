//! Text helpers shared by the content metrics

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::config::EmojiRange;

/// A counted item, as reported in top-K lists
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Frequency {
    pub item: String,
    pub count: usize,
}

/// Counter that remembers first-insertion order.
///
/// Ranking is a stable sort on count, so equal counts keep the order in
/// which items were first seen.
#[derive(Debug, Default)]
pub struct FrequencyTable {
    positions: HashMap<String, usize>,
    entries: Vec<Frequency>,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, item: &str) {
        match self.positions.get(item) {
            Some(&i) => self.entries[i].count += 1,
            None => {
                self.positions.insert(item.to_string(), self.entries.len());
                self.entries.push(Frequency {
                    item: item.to_string(),
                    count: 1,
                });
            }
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The `k` most frequent items, highest count first
    pub fn top(mut self, k: usize) -> Vec<Frequency> {
        self.entries.sort_by(|a, b| b.count.cmp(&a.count));
        self.entries.truncate(k);
        self.entries
    }
}

/// Lowercased whitespace-separated words
pub fn lowercase_words(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split_whitespace().map(str::to_lowercase)
}

/// Words eligible for top-word counting: longer than two characters and not a stop word
pub fn content_words<'a>(
    text: &'a str,
    stop_words: &'a HashSet<&'a str>,
) -> impl Iterator<Item = String> + 'a {
    lowercase_words(text)
        .filter(|w| w.chars().count() > 2)
        .filter(move |w| !stop_words.contains(w.as_str()))
}

/// Whether a character falls in any configured emoji range
pub fn is_emoji(c: char, ranges: &[EmojiRange]) -> bool {
    ranges.iter().any(|r| r.contains(c))
}

/// Emoji characters of a message, in order
pub fn emojis<'a>(text: &'a str, ranges: &'a [EmojiRange]) -> impl Iterator<Item = char> + 'a {
    text.chars().filter(move |&c| is_emoji(c, ranges))
}

/// Shouting: longer than three characters, has letters, none of them lowercase
pub fn is_all_caps(text: &str) -> bool {
    text.chars().count() > 3
        && text.chars().any(char::is_alphabetic)
        && text == text.to_uppercase()
}

/// Non-overlapping occurrences of `needle` in `haystack`
pub fn count_occurrences(haystack: &str, needle: &str) -> usize {
    if needle.is_empty() {
        return 0;
    }
    haystack.matches(needle).count()
}
