//! Metrics over chronologically adjacent messages

use chrono::TimeDelta;
use serde::{Deserialize, Serialize};

use super::view::ConversationView;
use crate::config::Thresholds;

const SECONDS_PER_DAY: f64 = 86_400.0;

/// Long silences between consecutive messages
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GapStats {
    /// Number of gaps longer than the configured threshold
    pub count: usize,
    /// Longest gap in whole days
    pub longest_days: u64,
    /// Mean gap in whole days
    pub average_days: u64,
}

/// Mean reply time in minutes, attributed to the replying contact
pub(super) fn average_response_minutes(
    view: &ConversationView<'_>,
    t: &Thresholds,
) -> Vec<u64> {
    let window = t.response_window().unwrap_or(TimeDelta::MAX);
    let mut totals = vec![(0i64, 0usize); view.participants.count()];

    for (prev, next) in view.consecutive() {
        if prev.contact == next.contact {
            continue;
        }
        let gap = next.timestamp - prev.timestamp;
        if gap >= window {
            continue;
        }
        if let Some(i) = view.participants.index_of(&next.contact) {
            totals[i].0 += gap.num_seconds();
            totals[i].1 += 1;
        }
    }

    totals
        .into_iter()
        .map(|(seconds, replies)| {
            if replies == 0 {
                0
            } else {
                (seconds as f64 / 60.0 / replies as f64).round() as u64
            }
        })
        .collect()
}

/// Messages that open a conversation after a long silence.
///
/// The first message of the transcript always counts.
pub(super) fn conversation_starters(view: &ConversationView<'_>, t: &Thresholds) -> Vec<usize> {
    let silence = t.conversation_gap().unwrap_or(TimeDelta::MAX);
    let mut starters = vec![0; view.participants.count()];
    let mut previous = None;

    for message in &view.chronological {
        let opens = match previous {
            None => true,
            Some(prev) => message.timestamp - prev > silence,
        };
        if opens {
            if let Some(i) = view.participants.index_of(&message.contact) {
                starters[i] += 1;
            }
        }
        previous = Some(message.timestamp);
    }

    starters
}

/// Quick same-sender follow-ups
pub(super) fn double_texts(view: &ConversationView<'_>, t: &Thresholds) -> Vec<usize> {
    let window = t.double_text_window().unwrap_or(TimeDelta::MAX);
    let mut counts = vec![0; view.participants.count()];

    for (prev, next) in view.consecutive() {
        if prev.contact != next.contact || next.timestamp - prev.timestamp >= window {
            continue;
        }
        if let Some(i) = view.participants.index_of(&next.contact) {
            counts[i] += 1;
        }
    }

    counts
}

/// Silences longer than the configured number of days, regardless of sender
pub(super) fn conversation_gaps(view: &ConversationView<'_>, t: &Thresholds) -> GapStats {
    let threshold = t.long_gap().unwrap_or(TimeDelta::MAX);
    let gaps: Vec<u64> = view
        .consecutive()
        .map(|(prev, next)| next.timestamp - prev.timestamp)
        .filter(|gap| *gap > threshold)
        .map(|gap| (gap.num_seconds() as f64 / SECONDS_PER_DAY).round() as u64)
        .collect();

    if gaps.is_empty() {
        return GapStats::default();
    }

    let total: u64 = gaps.iter().sum();
    GapStats {
        count: gaps.len(),
        longest_days: gaps.iter().copied().max().unwrap_or(0),
        average_days: (total as f64 / gaps.len() as f64).round() as u64,
    }
}
