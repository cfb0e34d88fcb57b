//! Red-flag keyword scan and the compatibility heuristic

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::{RedFlagCategory, Thresholds};
use crate::text;
use crate::transcript::Message;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl Severity {
    fn for_count(count: usize, t: &Thresholds) -> Self {
        if count > t.severity_high {
            Severity::High
        } else if count > t.severity_medium {
            Severity::Medium
        } else {
            Severity::Low
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Low => write!(f, "low"),
            Severity::Medium => write!(f, "medium"),
            Severity::High => write!(f, "high"),
        }
    }
}

/// One keyword found in the transcript
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedFlag {
    pub category: String,
    pub keyword: String,
    pub count: usize,
    pub severity: Severity,
}

/// Count each keyword across every message, case-insensitively.
///
/// Keywords that never occur produce no entry.
pub(super) fn red_flags(
    messages: &[Message],
    categories: &[RedFlagCategory],
    t: &Thresholds,
) -> Vec<RedFlag> {
    let lowered: Vec<String> = messages.iter().map(|m| m.text.to_lowercase()).collect();

    let mut flags = Vec::new();
    for category in categories {
        for keyword in &category.keywords {
            let needle = keyword.to_lowercase();
            let count: usize = lowered
                .iter()
                .map(|text| text::count_occurrences(text, &needle))
                .sum();
            if count > 0 {
                flags.push(RedFlag {
                    category: category.name.clone(),
                    keyword: keyword.clone(),
                    count,
                    severity: Severity::for_count(count, t),
                });
            }
        }
    }
    flags
}

/// Balance and mutual engagement of two message shares (in percent), 0-100.
///
/// Averages the smaller share (scaled so an even split scores 100) with
/// `100 - |difference|`. Takes unrounded shares so only a split that rounds
/// to 50/50 can score 100.
pub(super) fn compatibility_score(first: f64, second: f64) -> u32 {
    let engagement = 2.0 * first.min(second);
    let balance = 100.0 - (first - second).abs();
    ((engagement + balance) / 2.0).round().clamp(0.0, 100.0) as u32
}
