//! Read-only projections shared by every metric
//!
//! Built once per analysis: the participant pair, per-contact partitions in
//! source order, and a single chronologically sorted view.

use serde::{Deserialize, Serialize};

use crate::transcript::{Message, MessageSequence};

/// The two contacts an analysis is about
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participants {
    /// First distinct contact in source order
    pub first: String,
    /// Second distinct contact, absent for one-sided transcripts
    pub second: Option<String>,
    /// Further contacts, excluded from per-contact metrics
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ignored: Vec<String>,
}

impl Participants {
    /// Split the sequence's distinct contacts; `None` when it is empty
    pub fn from_sequence(messages: &MessageSequence) -> Option<Self> {
        let mut contacts = messages.contacts().into_iter().map(str::to_string);
        let first = contacts.next()?;
        let second = contacts.next();
        Some(Participants {
            first,
            second,
            ignored: contacts.collect(),
        })
    }

    /// Names of the analysed contacts, first then second
    pub fn names(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.first.as_str()).chain(self.second.as_deref())
    }

    pub fn count(&self) -> usize {
        1 + usize::from(self.second.is_some())
    }

    /// Position of `contact` among the analysed pair
    pub fn index_of(&self, contact: &str) -> Option<usize> {
        self.names().position(|name| name == contact)
    }

    pub fn is_pair(&self) -> bool {
        self.second.is_some() && self.ignored.is_empty()
    }
}

/// Shared views over one message sequence
#[derive(Debug)]
pub(crate) struct ConversationView<'a> {
    pub participants: Participants,
    /// Every message in source order, including ignored contacts
    pub all: &'a [Message],
    /// Messages of each participant, in source order
    pub by_contact: Vec<Vec<&'a Message>>,
    /// Every message sorted by timestamp, ties kept in source order
    pub chronological: Vec<&'a Message>,
}

impl<'a> ConversationView<'a> {
    pub fn new(messages: &'a MessageSequence) -> Option<Self> {
        let participants = Participants::from_sequence(messages)?;

        let mut by_contact = vec![Vec::new(); participants.count()];
        for message in messages {
            if let Some(i) = participants.index_of(&message.contact) {
                by_contact[i].push(message);
            }
        }

        let mut chronological: Vec<&Message> = messages.iter().collect();
        chronological.sort_by_key(|m| m.timestamp);

        Some(ConversationView {
            participants,
            all: messages.as_slice(),
            by_contact,
            chronological,
        })
    }

    /// Adjacent pairs in time order
    pub fn consecutive(&self) -> impl Iterator<Item = (&'a Message, &'a Message)> + '_ {
        self.chronological.windows(2).map(|pair| (pair[0], pair[1]))
    }

    /// Messages sent by the analysed pair
    pub fn participant_total(&self) -> usize {
        self.by_contact.iter().map(Vec::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn msg(contact: &str, hour: u32) -> Message {
        let ts = NaiveDate::from_ymd_opt(2024, 3, 1)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap();
        Message::new(contact, "x", ts)
    }

    #[test]
    fn test_participants_report_extra_contacts() {
        let seq = MessageSequence::new(vec![msg("A", 1), msg("B", 2), msg("C", 3), msg("A", 4)]);
        let p = Participants::from_sequence(&seq).unwrap();
        assert_eq!(p.first, "A");
        assert_eq!(p.second.as_deref(), Some("B"));
        assert_eq!(p.ignored, vec!["C"]);
        assert!(!p.is_pair());
        assert_eq!(p.index_of("C"), None);
    }

    #[test]
    fn test_chronological_view_is_stable() {
        let seq = MessageSequence::new(vec![msg("B", 9), msg("A", 8), msg("A", 9)]);
        let view = ConversationView::new(&seq).unwrap();
        let order: Vec<(&str, u32)> = view
            .chronological
            .iter()
            .map(|m| (m.contact.as_str(), chrono::Timelike::hour(&m.timestamp)))
            .collect();
        assert_eq!(order, vec![("A", 8), ("B", 9), ("A", 9)]);
        assert_eq!(view.by_contact[0].len(), 1);
        assert_eq!(view.by_contact[1].len(), 2);
    }

    #[test]
    fn test_empty_sequence_has_no_view() {
        assert!(ConversationView::new(&MessageSequence::default()).is_none());
    }
}
