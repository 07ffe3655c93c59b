//! Keyword-presence scoring over journal text.
//!
//! Each keyword counts once no matter how often it appears, so a signal is
//! capped at the size of its set.

use serde::Serialize;

use crate::model::JournalEntry;

/// Words that signal strain.
pub const STRESS_WORDS: [&str; 6] = ["stress", "anxious", "overwhelmed", "deadline", "busy", "tired"];

/// Words that signal a good day.
pub const POSITIVE_WORDS: [&str; 6] = ["happy", "good", "great", "excited", "proud", "done"];

/// Distinct keywords found in a set of journal entries, in keyword-set order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct KeywordScan {
    pub stress: Vec<&'static str>,
    pub positive: Vec<&'static str>,
}

impl KeywordScan {
    #[must_use]
    pub const fn stress_count(&self) -> usize {
        self.stress.len()
    }

    #[must_use]
    pub const fn positive_count(&self) -> usize {
        self.positive.len()
    }
}

/// Scan the combined text of `entries` for stress and positive keywords.
///
/// Matching is case-insensitive substring containment: "stressed" contains
/// "stress". Entry dates and order play no part.
#[must_use]
pub fn scan_keywords(entries: &[JournalEntry]) -> KeywordScan {
    let blob = entries
        .iter()
        .map(|entry| entry.content.as_str())
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase();

    KeywordScan {
        stress: present_in(&blob, &STRESS_WORDS),
        positive: present_in(&blob, &POSITIVE_WORDS),
    }
}

fn present_in(blob: &str, words: &[&'static str]) -> Vec<&'static str> {
    words.iter().copied().filter(|word| blob.contains(word)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries(texts: &[&str]) -> Vec<JournalEntry> {
        texts
            .iter()
            .enumerate()
            .map(|(i, text)| JournalEntry::new(i.to_string(), "", *text))
            .collect()
    }

    #[test]
    fn repeated_word_counts_once() {
        let text = "deadline ".repeat(100);
        let scan = scan_keywords(&entries(&[&text]));
        assert_eq!(scan.stress, ["deadline"]);
        assert_eq!(scan.stress_count(), 1);
    }

    #[test]
    fn matching_ignores_case() {
        let scan = scan_keywords(&entries(&["So TIRED and Overwhelmed", "GREAT run"]));
        assert_eq!(scan.stress, ["overwhelmed", "tired"]);
        assert_eq!(scan.positive, ["great"]);
    }

    #[test]
    fn substrings_match_inside_longer_words() {
        let scan = scan_keywords(&entries(&["I am stressed", "goodbye"]));
        assert_eq!(scan.stress, ["stress"]);
        assert_eq!(scan.positive, ["good"]);
    }

    #[test]
    fn entries_are_joined_with_a_space() {
        // "bu" + "sy" across two entries must not read as "busy".
        let scan = scan_keywords(&entries(&["bu", "sy"]));
        assert_eq!(scan.stress_count(), 0);
    }

    #[test]
    fn all_keywords_cap_at_set_size() {
        let scan = scan_keywords(&entries(&[
            &STRESS_WORDS.join(" "),
            &POSITIVE_WORDS.join(" "),
            &STRESS_WORDS.join(""),
        ]));
        assert_eq!(scan.stress_count(), STRESS_WORDS.len());
        assert_eq!(scan.positive_count(), POSITIVE_WORDS.len());
    }

    #[test]
    fn no_entries_no_signal() {
        assert_eq!(scan_keywords(&[]), KeywordScan::default());
    }
}
