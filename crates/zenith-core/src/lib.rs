#![forbid(unsafe_code)]
//! zenith-core library.
//!
//! Two independent, pure components live here:
//!
//! - [`insight`]: derives a [`insight::GrowthReport`] from journal entries and
//!   tasks using fixed keyword heuristics.
//! - [`capsule`]: decides whether a future-self letter is unlocked on a given
//!   calendar day and how long is left until it opens.
//!
//! # Conventions
//!
//! - **Errors**: typed `thiserror` errors for domain failures, `anyhow::Result`
//!   for config loading.
//! - **Logging**: Use `tracing` macros (`info!`, `warn!`, `error!`, `debug!`, `trace!`).
//! - **Time**: "now" is always an explicit argument. Nothing in this crate reads
//!   the wall clock.

pub mod capsule;
pub mod config;
pub mod error;
pub mod insight;
pub mod model;

pub use capsule::{LockStatus, evaluate, evaluate_days, parse_calendar_day, time_remaining};
pub use error::{ErrorCode, InvalidDateError, LetterError, MoodError};
pub use insight::{GrowthReport, analyze};
pub use model::{JournalEntry, Letter, LetterDraft, Mood, MoodCheckIn, Task};
