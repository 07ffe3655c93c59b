use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use crate::error::MoodError;

/// The check-in moods a user can pick from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mood {
    Happy,
    Sad,
    Anxious,
    Tired,
    Stressed,
    Excited,
    Determined,
    Angry,
    Confused,
    Calm,
}

impl Mood {
    pub const ALL: [Self; 10] = [
        Self::Happy,
        Self::Sad,
        Self::Anxious,
        Self::Tired,
        Self::Stressed,
        Self::Excited,
        Self::Determined,
        Self::Angry,
        Self::Confused,
        Self::Calm,
    ];

    const fn as_str(self) -> &'static str {
        match self {
            Self::Happy => "Happy",
            Self::Sad => "Sad",
            Self::Anxious => "Anxious",
            Self::Tired => "Tired",
            Self::Stressed => "Stressed",
            Self::Excited => "Excited",
            Self::Determined => "Determined",
            Self::Angry => "Angry",
            Self::Confused => "Confused",
            Self::Calm => "Calm",
        }
    }

    /// Emoji shown next to the label on the check-in screen.
    #[must_use]
    pub const fn emoji(self) -> &'static str {
        match self {
            Self::Happy => "😊",
            Self::Sad => "😢",
            Self::Anxious => "😰",
            Self::Tired => "😴",
            Self::Stressed => "😣",
            Self::Excited => "🤩",
            Self::Determined => "💪",
            Self::Angry => "😡",
            Self::Confused => "😕",
            Self::Calm => "😌",
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mood {
    type Err = MoodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim();
        if normalized.is_empty() {
            return Err(MoodError::MissingMood);
        }
        Self::ALL
            .into_iter()
            .find(|mood| mood.as_str().eq_ignore_ascii_case(normalized))
            .ok_or_else(|| MoodError::UnknownMood(s.to_string()))
    }
}

/// One recorded mood check-in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoodCheckIn {
    pub id: String,
    pub user_id: String,
    pub mood: Mood,
    pub timestamp: DateTime<Utc>,
}

impl MoodCheckIn {
    /// Validate a raw mood label and stamp it.
    ///
    /// `timestamp` defaults to `now`; the id is `now` in epoch milliseconds.
    ///
    /// # Errors
    ///
    /// Returns [`MoodError::MissingMood`] for a blank label and
    /// [`MoodError::UnknownMood`] for anything outside [`Mood::ALL`].
    pub fn record(
        mood: &str,
        user_id: &str,
        timestamp: Option<DateTime<Utc>>,
        now: DateTime<Utc>,
    ) -> Result<Self, MoodError> {
        let mood = mood.parse::<Mood>()?;
        Ok(Self {
            id: now.timestamp_millis().to_string(),
            user_id: user_id.to_string(),
            mood,
            timestamp: timestamp.unwrap_or(now),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{Mood, MoodCheckIn};
    use crate::error::MoodError;
    use chrono::{TimeZone, Utc};

    #[test]
    fn display_parse_roundtrips() {
        for mood in Mood::ALL {
            assert_eq!(mood.to_string().parse::<Mood>().unwrap(), mood);
        }
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!(" calm ".parse::<Mood>().unwrap(), Mood::Calm);
        assert_eq!("STRESSED".parse::<Mood>().unwrap(), Mood::Stressed);
    }

    #[test]
    fn parse_rejects_blank_and_unknown() {
        assert_eq!("".parse::<Mood>(), Err(MoodError::MissingMood));
        assert_eq!(
            "meh".parse::<Mood>(),
            Err(MoodError::UnknownMood("meh".to_string()))
        );
    }

    #[test]
    fn record_defaults_timestamp_to_now() {
        let now = Utc.with_ymd_and_hms(2025, 3, 14, 9, 26, 53).unwrap();
        let check_in = MoodCheckIn::record("happy", "anonymous", None, now).unwrap();
        assert_eq!(check_in.mood, Mood::Happy);
        assert_eq!(check_in.timestamp, now);
        assert_eq!(check_in.id, now.timestamp_millis().to_string());

        let json = serde_json::to_value(&check_in).unwrap();
        assert_eq!(json["userId"], "anonymous");
        assert_eq!(json["mood"], "Happy");
    }

    #[test]
    fn record_keeps_explicit_timestamp() {
        let now = Utc.with_ymd_and_hms(2025, 3, 14, 9, 0, 0).unwrap();
        let earlier = Utc.with_ymd_and_hms(2025, 3, 13, 22, 0, 0).unwrap();
        let check_in = MoodCheckIn::record("Calm", "user_123", Some(earlier), now).unwrap();
        assert_eq!(check_in.timestamp, earlier);
    }
}
