//! Time-capsule locking for future-self letters.
//!
//! A letter opens on a calendar *day*, not an instant: anything scheduled for
//! today is readable regardless of the hour. Both sides of the comparison are
//! reduced to [`NaiveDate`] before anything else happens, and "today" is always
//! supplied by the caller, so the same letter can legitimately flip from locked
//! to unlocked between two calls.
//!
//! The `isUnlocked` flag stored on a [`Letter`] is only a cache. Every read path
//! here recomputes it from `unlockDate`.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::error::{InvalidDateError, LetterError};
use crate::model::letter::{Letter, sort_newest_first};

/// Descriptor shown once the unlock day has been reached.
pub const READY_TO_OPEN: &str = "Ready to open!";
/// Descriptor shown the day before the unlock day.
pub const UNLOCKS_TOMORROW: &str = "Unlocks tomorrow";

/// Timestamp layouts accepted in addition to plain `YYYY-MM-DD` and RFC 3339.
const NAIVE_TIMESTAMP_FORMATS: [&str; 5] = [
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%d %H:%M:%S",
];

/// Lock state of one letter on one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LockStatus {
    pub is_unlocked: bool,
    pub remaining: String,
}

/// Read an ISO-8601 date or timestamp and keep only its calendar day.
///
/// The day is taken as written: `2025-01-01T23:59:00-08:00` is January 1st.
/// Choosing the timezone is the caller's job.
///
/// # Errors
///
/// Returns [`InvalidDateError`] when the input matches none of the accepted
/// layouts, or names a day that does not exist.
pub fn parse_calendar_day(input: &str) -> Result<NaiveDate, InvalidDateError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(InvalidDateError::new(input));
    }

    if let Ok(day) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Ok(day);
    }

    if let Ok(stamp) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(stamp.date_naive());
    }

    NAIVE_TIMESTAMP_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(trimmed, format).ok())
        .map(|stamp| stamp.date())
        .ok_or_else(|| InvalidDateError::new(input))
}

/// Human-readable countdown to `unlock_day`.
///
/// Anything at or past the unlock day reads [`READY_TO_OPEN`], even though a
/// caller normally only asks while the letter is still locked.
#[must_use]
pub fn time_remaining(unlock_day: NaiveDate, today: NaiveDate) -> String {
    // Both sides are whole days, so the signed difference is already the ceiling.
    let diff_days = unlock_day.signed_duration_since(today).num_days();
    match diff_days {
        d if d <= 0 => READY_TO_OPEN.to_string(),
        1 => UNLOCKS_TOMORROW.to_string(),
        d => format!("{d} days left"),
    }
}

/// Lock state for normalized calendar days.
#[must_use]
pub fn evaluate_days(unlock_day: NaiveDate, today: NaiveDate) -> LockStatus {
    let status = LockStatus {
        is_unlocked: today >= unlock_day,
        remaining: time_remaining(unlock_day, today),
    };
    trace!(%unlock_day, %today, unlocked = status.is_unlocked, "evaluated capsule lock");
    status
}

/// Lock state for an ISO-8601 unlock date as seen at `now`.
///
/// # Errors
///
/// Returns [`InvalidDateError`] if either input is not a readable date.
pub fn evaluate(unlock_date: &str, now: &str) -> Result<LockStatus, InvalidDateError> {
    let unlock_day = parse_calendar_day(unlock_date)?;
    let today = parse_calendar_day(now)?;
    Ok(evaluate_days(unlock_day, today))
}

/// Recompute `isUnlocked` for every letter on `today`, newest letter first.
///
/// Whatever flag was stored with a letter is discarded.
///
/// # Errors
///
/// Returns [`LetterError::InvalidUnlockDate`] naming the first letter whose
/// unlock date cannot be read.
pub fn refresh_letters(mut letters: Vec<Letter>, today: NaiveDate) -> Result<Vec<Letter>, LetterError> {
    let mut unlocked = 0usize;
    for letter in &mut letters {
        let status = letter.lock_status(today)?;
        letter.is_unlocked = status.is_unlocked;
        unlocked += usize::from(status.is_unlocked);
    }
    sort_newest_first(&mut letters);

    debug!(
        total = letters.len(),
        unlocked,
        %today,
        "refreshed letter lock states"
    );
    Ok(letters)
}
