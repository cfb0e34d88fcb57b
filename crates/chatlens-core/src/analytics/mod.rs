//! Analytics engine
//!
//! Turns a parsed [`MessageSequence`] into one immutable [`AnalyticsResult`].
//! Every metric is a pure function of three shared views built once per call:
//! the participant pair, per-contact partitions, and a chronological order.

mod activity;
mod content;
mod flags;
mod timing;
mod view;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::{Config, Lexicon, Thresholds};
use crate::error::{ChatlensError, Result};
use crate::text::Frequency;
use crate::transcript::MessageSequence;

pub use content::CommunicationStyle;
pub use flags::{RedFlag, Severity};
pub use timing::GapStats;
pub use view::Participants;

use content::ContentScanner;
use view::ConversationView;

/// Rounded whole percent of `part` in `total`, 0 for an empty total
pub(crate) fn percent(part: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    (part as f64 / total as f64 * 100.0).round() as u32
}

/// Rounded mean, 0 for an empty population
pub(crate) fn ratio_rounded(sum: f64, count: usize) -> u32 {
    if count == 0 {
        return 0;
    }
    (sum / count as f64).round() as u32
}

/// Metrics for one participant
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMetrics {
    pub contact: String,
    pub message_count: usize,
    /// Share of the pair's messages, whole percent
    pub interest_level: u32,
    /// Mean characters per message
    pub average_message_length: u32,
    pub top_words: Vec<Frequency>,
    pub top_emojis: Vec<Frequency>,
    /// Mean minutes taken to reply to the other contact
    pub average_response_minutes: u64,
    pub conversation_starters: usize,
    pub late_night_messages: usize,
    pub early_morning_messages: usize,
    pub weekend_messages: usize,
    pub weekday_messages: usize,
    /// 0-100, 50 when no sentiment words were seen
    pub sentiment_score: u32,
    pub double_texts: usize,
    pub communication_style: CommunicationStyle,
    pub energy_level: u32,
}

/// Transcript-wide totals
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    /// All messages, including those of ignored contacts
    pub total_messages: usize,
    pub first_message: NaiveDateTime,
    pub last_message: NaiveDateTime,
    /// Whole days between the first and last message
    pub span_days: i64,
}

/// Everything derived from one transcript
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyticsResult {
    pub participants: Participants,
    pub summary: Summary,
    /// One entry per participant, in participant order
    pub contacts: Vec<ContactMetrics>,
    pub red_flags: Vec<RedFlag>,
    pub compatibility_score: u32,
    pub conversation_days: usize,
    pub peak_hour: u32,
    pub peak_day: String,
    pub conversation_gaps: GapStats,
    pub consistency_score: u32,
}

impl AnalyticsResult {
    /// Metrics for a participant by name
    pub fn contact(&self, name: &str) -> Option<&ContactMetrics> {
        self.contacts.iter().find(|c| c.contact == name)
    }

    /// Total messages sent by the participants
    pub fn participant_messages(&self) -> usize {
        self.contacts.iter().map(|c| c.message_count).sum()
    }
}

/// Analytics engine configured with a lexicon and thresholds
#[derive(Debug, Clone, Default)]
pub struct Analyzer {
    lexicon: Lexicon,
    thresholds: Thresholds,
}

impl Analyzer {
    pub fn new(lexicon: Lexicon, thresholds: Thresholds) -> Self {
        Analyzer {
            lexicon,
            thresholds,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Analyzer::new(config.lexicon.clone(), config.thresholds.clone())
    }

    /// Analyze a transcript; `None` for an empty sequence.
    ///
    /// Contacts beyond the first two are listed in
    /// [`Participants::ignored`] and left out of per-contact metrics.
    #[tracing::instrument(skip_all, fields(messages = messages.len()))]
    pub fn analyze(&self, messages: &MessageSequence) -> Option<AnalyticsResult> {
        let view = ConversationView::new(messages)?;

        if !view.participants.ignored.is_empty() {
            warn!(
                ignored = ?view.participants.ignored,
                "more than two participants; extra contacts excluded from per-contact metrics"
            );
        }
        if view.participants.second.is_none() {
            warn!(contact = %view.participants.first, "transcript has a single participant");
        }

        let result = self.compute(&view);
        debug!(
            contacts = result.contacts.len(),
            red_flags = result.red_flags.len(),
            "analysis complete"
        );
        Some(result)
    }

    /// Analyze a transcript that must contain exactly two contacts
    pub fn analyze_strict(&self, messages: &MessageSequence) -> Result<AnalyticsResult> {
        let contacts = messages.contacts();
        if contacts.len() != 2 {
            return Err(ChatlensError::ParticipantCount {
                found: contacts.len(),
                contacts: contacts.into_iter().map(str::to_string).collect(),
            });
        }
        self.analyze(messages).ok_or(ChatlensError::NoMessagesFound)
    }

    fn compute(&self, view: &ConversationView<'_>) -> AnalyticsResult {
        let t = &self.thresholds;
        let scanner = ContentScanner::new(&self.lexicon);

        let shares = activity::message_shares(view);
        let response = timing::average_response_minutes(view, t);
        let starters = timing::conversation_starters(view, t);
        let doubles = timing::double_texts(view, t);

        let contacts = view
            .participants
            .names()
            .zip(&view.by_contact)
            .enumerate()
            .map(|(i, (name, messages))| {
                let (late_night, early_morning) = activity::time_of_day(messages, t);
                let (weekend, weekday) = activity::weekend_split(messages);
                ContactMetrics {
                    contact: name.to_string(),
                    message_count: messages.len(),
                    interest_level: shares[i].round() as u32,
                    average_message_length: activity::average_length(messages),
                    top_words: scanner.top_words(messages, t.top_k),
                    top_emojis: scanner.top_emojis(messages, t.top_k),
                    average_response_minutes: response[i],
                    conversation_starters: starters[i],
                    late_night_messages: late_night,
                    early_morning_messages: early_morning,
                    weekend_messages: weekend,
                    weekday_messages: weekday,
                    sentiment_score: scanner.sentiment(messages),
                    double_texts: doubles[i],
                    communication_style: content::communication_style(messages),
                    energy_level: scanner.energy(messages),
                }
            })
            .collect();

        let second_share = shares.get(1).copied().unwrap_or(0.0);

        AnalyticsResult {
            participants: view.participants.clone(),
            summary: summarize(view),
            contacts,
            red_flags: flags::red_flags(view.all, &self.lexicon.red_flags, t),
            compatibility_score: flags::compatibility_score(shares[0], second_share),
            conversation_days: activity::conversation_days(view.all),
            peak_hour: activity::peak_hour(view.all),
            peak_day: activity::peak_day(view.all).to_string(),
            conversation_gaps: timing::conversation_gaps(view, t),
            consistency_score: activity::consistency_score(view.all),
        }
    }
}

fn summarize(view: &ConversationView<'_>) -> Summary {
    // The view is never empty, so both ends exist
    let first_message = view.chronological[0].timestamp;
    let last_message = view.chronological[view.chronological.len() - 1].timestamp;
    Summary {
        total_messages: view.all.len(),
        first_message,
        last_message,
        span_days: (last_message.date() - first_message.date()).num_days(),
    }
}

/// Analyze with the built-in lexicon and thresholds
pub fn analyze(messages: &MessageSequence) -> Option<AnalyticsResult> {
    Analyzer::default().analyze(messages)
}
