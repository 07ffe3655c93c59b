//! Records supplied by the caller.
//!
//! The engine reads these shapes but never persists them. Field names follow
//! the JSON the web layer already stores.

pub mod journal;
pub mod letter;
pub mod mood;

pub use journal::{JournalEntry, Task};
pub use letter::{EMOTIONAL_STATES, Letter, LetterDraft, SEALED_MESSAGE, sort_newest_first};
pub use mood::{Mood, MoodCheckIn};
