use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::capsule::{self, LockStatus};
use crate::config::LetterConfig;
use crate::error::LetterError;

/// Placeholder body shown for a letter that has not opened yet.
pub const SEALED_MESSAGE: &str = "This message is currently locked in the time capsule.";

/// Emotional states offered for a letter's `fromState` / `toState`.
///
/// Letters keep free strings; this is the list a writer is offered.
pub const EMOTIONAL_STATES: [&str; 7] = [
    "Hopeful",
    "Anxious",
    "Determined",
    "Grateful",
    "Tired",
    "Stressed",
    "Excited",
];

/// A future-self letter as stored by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Letter {
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub content: String,
    /// ISO-8601 calendar date, parsed on every evaluation.
    pub unlock_date: String,
    pub from_state: String,
    pub to_state: String,
    pub created_at: DateTime<Utc>,
    /// Cached lock flag. Recompute with [`Letter::lock_status`] before trusting it.
    #[serde(default)]
    pub is_unlocked: bool,
}

impl Letter {
    /// Lock state of this letter on `today`, ignoring the cached flag.
    ///
    /// # Errors
    ///
    /// Returns [`LetterError::InvalidUnlockDate`] if `unlock_date` is malformed.
    pub fn lock_status(&self, today: NaiveDate) -> Result<LockStatus, LetterError> {
        let unlock_day = capsule::parse_calendar_day(&self.unlock_date).map_err(|source| {
            LetterError::InvalidUnlockDate {
                id: self.id.clone(),
                source,
            }
        })?;
        Ok(capsule::evaluate_days(unlock_day, today))
    }

    /// The body readable on `today`: the real content once unlocked, otherwise
    /// [`SEALED_MESSAGE`].
    ///
    /// # Errors
    ///
    /// Returns [`LetterError::InvalidUnlockDate`] if `unlock_date` is malformed.
    pub fn content_for(&self, today: NaiveDate) -> Result<&str, LetterError> {
        if self.lock_status(today)?.is_unlocked {
            Ok(&self.content)
        } else {
            Ok(SEALED_MESSAGE)
        }
    }
}

/// Sort letters newest first by `createdAt`.
///
/// The sort is stable: letters created at the same instant keep their input
/// order.
pub fn sort_newest_first(letters: &mut [Letter]) {
    letters.sort_by(|a, b| b.created_at.cmp(&a.created_at));
}

/// A letter as submitted by its writer, before it has an id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LetterDraft {
    pub title: Option<String>,
    pub content: String,
    pub unlock_date: String,
    pub from_state: Option<String>,
    pub to_state: Option<String>,
    pub user_id: Option<String>,
}

impl LetterDraft {
    /// Validate the draft and seal it into a [`Letter`] created at `created_at`.
    ///
    /// Missing optional fields fall back to `defaults`. The id is the creation
    /// instant in epoch milliseconds, and the lock flag is evaluated against
    /// `today` straight away.
    ///
    /// # Errors
    ///
    /// - [`LetterError::MissingContent`] for empty or blank content.
    /// - [`LetterError::MissingUnlockDate`] for an empty unlock date.
    /// - [`LetterError::InvalidUnlockDate`] for an unreadable unlock date.
    pub fn into_letter(
        self,
        defaults: &LetterConfig,
        created_at: DateTime<Utc>,
        today: NaiveDate,
    ) -> Result<Letter, LetterError> {
        if self.content.trim().is_empty() {
            return Err(LetterError::MissingContent);
        }
        if self.unlock_date.trim().is_empty() {
            return Err(LetterError::MissingUnlockDate);
        }

        let unlock_day = capsule::parse_calendar_day(&self.unlock_date).map_err(|source| {
            LetterError::InvalidUnlockDate {
                id: String::new(),
                source,
            }
        })?;

        Ok(Letter {
            id: created_at.timestamp_millis().to_string(),
            user_id: non_blank(self.user_id).unwrap_or_else(|| defaults.default_user.clone()),
            title: non_blank(self.title).unwrap_or_else(|| defaults.default_title.clone()),
            content: self.content,
            unlock_date: self.unlock_date.trim().to_string(),
            from_state: non_blank(self.from_state)
                .unwrap_or_else(|| defaults.default_from_state.clone()),
            to_state: non_blank(self.to_state).unwrap_or_else(|| defaults.default_to_state.clone()),
            created_at,
            is_unlocked: capsule::evaluate_days(unlock_day, today).is_unlocked,
        })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn day(raw: &str) -> NaiveDate {
        NaiveDate::parse_from_str(raw, "%Y-%m-%d").unwrap()
    }

    fn created() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 1, 12, 0, 0).unwrap()
    }

    fn draft(content: &str, unlock: &str) -> LetterDraft {
        LetterDraft {
            content: content.to_string(),
            unlock_date: unlock.to_string(),
            ..LetterDraft::default()
        }
    }

    fn stored(id: &str, created_at: DateTime<Utc>) -> Letter {
        draft("hello", "2030-01-01")
            .into_letter(&LetterConfig::default(), created_at, day("2025-01-01"))
            .map(|mut letter| {
                letter.id = id.to_string();
                letter
            })
            .unwrap()
    }

    #[test]
    fn draft_fills_defaults() {
        let letter = draft("Keep going.", "2025-06-01")
            .into_letter(&LetterConfig::default(), created(), day("2025-01-01"))
            .unwrap();

        assert_eq!(letter.id, created().timestamp_millis().to_string());
        assert_eq!(letter.title, "Untitled Letter");
        assert_eq!(letter.user_id, "anonymous");
        assert_eq!(letter.from_state, "Hopeful");
        assert_eq!(letter.to_state, "Grateful");
        assert!(!letter.is_unlocked);
    }

    #[test]
    fn draft_keeps_supplied_fields() {
        let letter = LetterDraft {
            title: Some("To me in June".to_string()),
            from_state: Some("Tired".to_string()),
            to_state: Some("Excited".to_string()),
            user_id: Some("user_123".to_string()),
            ..draft("Rest more.", "2025-06-01")
        }
        .into_letter(&LetterConfig::default(), created(), day("2025-01-01"))
        .unwrap();

        assert_eq!(letter.title, "To me in June");
        assert_eq!(letter.from_state, "Tired");
        assert_eq!(letter.to_state, "Excited");
        assert_eq!(letter.user_id, "user_123");
    }

    #[test]
    fn draft_for_today_is_unlocked_immediately() {
        let letter = draft("Now.", "2025-01-01")
            .into_letter(&LetterConfig::default(), created(), day("2025-01-01"))
            .unwrap();
        assert!(letter.is_unlocked);
    }

    #[test]
    fn draft_rejects_missing_fields() {
        let defaults = LetterConfig::default();
        assert_eq!(
            draft("  ", "2025-01-01").into_letter(&defaults, created(), day("2025-01-01")),
            Err(LetterError::MissingContent)
        );
        assert_eq!(
            draft("hi", "").into_letter(&defaults, created(), day("2025-01-01")),
            Err(LetterError::MissingUnlockDate)
        );
        assert!(matches!(
            draft("hi", "next week").into_letter(&defaults, created(), day("2025-01-01")),
            Err(LetterError::InvalidUnlockDate { .. })
        ));
    }

    #[test]
    fn sealed_content_until_unlock_day() {
        let mut letter = stored("1", created());
        letter.is_unlocked = true;

        assert_eq!(letter.content_for(day("2029-12-31")).unwrap(), SEALED_MESSAGE);
        assert_eq!(letter.content_for(day("2030-01-01")).unwrap(), "hello");
    }

    #[test]
    fn newest_first_is_stable_for_ties() {
        let early = Utc.with_ymd_and_hms(2024, 5, 1, 0, 0, 0).unwrap();
        let late = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
        let mut letters = vec![
            stored("a", early),
            stored("b", late),
            stored("c", early),
            stored("d", late),
        ];

        sort_newest_first(&mut letters);
        let ids: Vec<_> = letters.iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, ["b", "d", "a", "c"]);
    }

    #[test]
    fn letter_json_uses_stored_field_names() {
        let raw = r#"{
            "id": "1735732800000",
            "userId": "user_123",
            "title": "Hi",
            "content": "Body",
            "unlockDate": "2025-02-01",
            "fromState": "Hopeful",
            "toState": "Grateful",
            "createdAt": "2025-01-01T12:00:00.000Z"
        }"#;
        let letter: Letter = serde_json::from_str(raw).unwrap();
        assert_eq!(letter.user_id, "user_123");
        assert_eq!(letter.created_at, created());
        assert!(!letter.is_unlocked);

        let json = serde_json::to_value(&letter).unwrap();
        assert_eq!(json["unlockDate"], "2025-02-01");
        assert_eq!(json["isUnlocked"], false);
    }
}
