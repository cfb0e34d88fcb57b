//! Built-in English word tables
//!
//! These are the defaults behind [`Lexicon::default`](super::Lexicon). Every
//! table can be replaced from `config.toml` without touching analysis code.

use super::types::{EmojiRange, RedFlagCategory};

/// Words ignored by top-word counting (matched after lowercasing)
pub const STOP_WORDS: &[&str] = &[
    "the", "and", "for", "are", "but", "not", "you", "all", "can", "had", "her", "was", "one",
    "our", "out", "has", "have", "his", "how", "its", "may", "new", "now", "see", "two", "who",
    "did", "get", "she", "too", "use", "that", "this", "with", "from", "they", "will", "what",
    "just", "your",
];

/// Substrings that mark a word as positive
pub const POSITIVE_WORDS: &[&str] = &[
    "love", "happy", "great", "amazing", "awesome", "good", "nice", "haha", "lol", "thank",
    "beautiful", "excited", "glad", "sweet", "wonderful", "cute", "fun", "best", "perfect",
    "yay",
];

/// Substrings that mark a word as negative
pub const NEGATIVE_WORDS: &[&str] = &[
    "hate", "sad", "angry", "bad", "sorry", "upset", "annoy", "tired", "worst", "terrible",
    "awful", "hurt", "cry", "mad", "boring", "ugh", "lonely", "stress",
];

const EX_KEYWORDS: &[&str] = &[
    "my ex",
    "your ex",
    "ex-girlfriend",
    "ex-boyfriend",
    "ex girlfriend",
    "ex boyfriend",
    "former partner",
];

const MONEY_KEYWORDS: &[&str] = &[
    "money", "cash", "venmo", "paypal", "loan", "pay me", "bank", "owe",
];

const BLOCKING_KEYWORDS: &[&str] = &[
    "blocked",
    "blocking",
    "ignored",
    "ignoring",
    "unfollowed",
    "left on read",
    "muted",
];

const TOXIC_KEYWORDS: &[&str] = &[
    "stupid", "hate you", "shut up", "idiot", "pathetic", "annoying", "crazy", "whatever",
];

/// Red-flag keyword categories in reporting order
pub fn red_flag_categories() -> Vec<RedFlagCategory> {
    [
        ("ex", EX_KEYWORDS),
        ("money", MONEY_KEYWORDS),
        ("blocking", BLOCKING_KEYWORDS),
        ("toxic", TOXIC_KEYWORDS),
    ]
    .iter()
    .map(|(name, keywords)| RedFlagCategory {
        name: (*name).to_string(),
        keywords: keywords.iter().map(|k| k.to_string()).collect(),
    })
    .collect()
}

/// Unicode blocks treated as emoji
pub fn emoji_ranges() -> Vec<EmojiRange> {
    [
        ("emoticons", 0x1F600, 0x1F64F),
        ("symbols_pictographs", 0x1F300, 0x1F5FF),
        ("transport_map", 0x1F680, 0x1F6FF),
        ("regional_flags", 0x1F1E0, 0x1F1FF),
        ("misc_symbols", 0x2600, 0x26FF),
        ("dingbats", 0x2700, 0x27BF),
    ]
    .iter()
    .map(|(name, start, end)| EmojiRange {
        name: (*name).to_string(),
        start: *start,
        end: *end,
    })
    .collect()
}

pub(super) fn owned(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}
