//! Volume and calendar metrics

use std::collections::{BTreeMap, HashSet};

use chrono::{Datelike, NaiveDate, Timelike, Weekday};

use super::view::ConversationView;
use super::ratio_rounded;
use crate::config::Thresholds;
use crate::transcript::Message;

const WEEKDAY_NAMES: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// Each participant's share of the pair's messages, in percent
pub(super) fn message_shares(view: &ConversationView<'_>) -> Vec<f64> {
    let total = view.participant_total();
    view.by_contact
        .iter()
        .map(|messages| {
            if total == 0 {
                0.0
            } else {
                messages.len() as f64 / total as f64 * 100.0
            }
        })
        .collect()
}

/// Mean character count of message bodies
pub(super) fn average_length(messages: &[&Message]) -> u32 {
    let chars: usize = messages.iter().map(|m| m.text.chars().count()).sum();
    ratio_rounded(chars as f64, messages.len())
}

/// Distinct calendar dates with at least one message
pub(super) fn conversation_days(messages: &[Message]) -> usize {
    messages
        .iter()
        .map(|m| m.timestamp.date())
        .collect::<HashSet<_>>()
        .len()
}

/// Index of the first maximum
fn first_peak(counts: &[usize]) -> usize {
    let mut best = 0;
    for (i, &count) in counts.iter().enumerate() {
        if count > counts[best] {
            best = i;
        }
    }
    best
}

/// Busiest hour of day (0-23)
pub(super) fn peak_hour(messages: &[Message]) -> u32 {
    let mut counts = [0usize; 24];
    for m in messages {
        counts[m.timestamp.hour() as usize] += 1;
    }
    first_peak(&counts) as u32
}

/// Busiest day of week, Sunday first on ties
pub(super) fn peak_day(messages: &[Message]) -> &'static str {
    let mut counts = [0usize; 7];
    for m in messages {
        counts[m.timestamp.weekday().num_days_from_sunday() as usize] += 1;
    }
    WEEKDAY_NAMES[first_peak(&counts)]
}

/// Whether `hour` lies in `[start, end)`, wrapping past midnight when `start > end`
fn in_window(hour: u32, start: u32, end: u32) -> bool {
    if start <= end {
        (start..end).contains(&hour)
    } else {
        hour >= start || hour < end
    }
}

/// Late-night and early-morning message counts
pub(super) fn time_of_day(messages: &[&Message], t: &Thresholds) -> (usize, usize) {
    messages.iter().fold((0, 0), |(late, early), m| {
        let hour = m.timestamp.hour();
        (
            late + usize::from(in_window(hour, t.late_night_start, t.late_night_end)),
            early + usize::from(in_window(hour, t.late_night_end, t.early_morning_end)),
        )
    })
}

/// Weekend and weekday message counts
pub(super) fn weekend_split(messages: &[&Message]) -> (usize, usize) {
    let weekend = messages
        .iter()
        .filter(|m| matches!(m.timestamp.weekday(), Weekday::Sat | Weekday::Sun))
        .count();
    (weekend, messages.len() - weekend)
}

/// Evenness of daily activity: 100 minus half the coefficient of variation (in percent)
pub(super) fn consistency_score(messages: &[Message]) -> u32 {
    let mut per_day: BTreeMap<NaiveDate, usize> = BTreeMap::new();
    for m in messages {
        *per_day.entry(m.timestamp.date()).or_default() += 1;
    }
    if per_day.is_empty() {
        return 0;
    }

    let days = per_day.len() as f64;
    let mean = per_day.values().sum::<usize>() as f64 / days;
    let variance = per_day
        .values()
        .map(|&c| (c as f64 - mean).powi(2))
        .sum::<f64>()
        / days;
    let cv = variance.sqrt() / mean;

    (100.0 - cv * 50.0).round().clamp(0.0, 100.0) as u32
}
