//! `zn letters`: future-self letters and their time-capsule locks.
//!
//! Letter files are owned by the caller. These commands read them, recompute
//! every lock against today's date, and print the result; nothing is written
//! back.

use std::io::{self, Write};
use std::path::PathBuf;

use chrono::{NaiveDate, Utc};
use clap::{Args, Subcommand};
use serde::Serialize;
use tracing::info;
use zenith_core::capsule::{self, LockStatus, refresh_letters};
use zenith_core::config::LetterConfig;
use zenith_core::model::{EMOTIONAL_STATES, SEALED_MESSAGE};
use zenith_core::{ErrorCode, Letter, LetterDraft, LetterError};

use crate::input::{load_records, resolve_today};
use crate::output::{
    OutputMode, Renderable, fail, pretty_kv, pretty_section, render_list, render_mode,
};

#[derive(Subcommand, Debug)]
pub enum LettersCommand {
    /// List letters newest first with their current lock state.
    List(ListArgs),
    /// Lock state of an unlock date as seen today.
    Status(StatusArgs),
    /// Validate a new letter and print the record to store.
    Draft(DraftArgs),
    /// Show one letter, sealed until its unlock day.
    Open(OpenArgs),
}

/// Override for "today" shared by every letters subcommand.
#[derive(Args, Debug, Default, Clone)]
pub struct TodayArg {
    /// Evaluate as of this date instead of the local clock (ISO-8601).
    #[arg(long, value_name = "DATE")]
    pub today: Option<String>,
}

#[derive(Args, Debug)]
pub struct ListArgs {
    /// JSON array of stored letters (`-` reads stdin).
    #[arg(long, value_name = "FILE")]
    pub file: PathBuf,

    #[command(flatten)]
    pub today: TodayArg,
}

#[derive(Args, Debug)]
pub struct StatusArgs {
    /// Unlock date to evaluate (ISO-8601).
    pub unlock_date: String,

    #[command(flatten)]
    pub today: TodayArg,
}

#[derive(Args, Debug)]
pub struct DraftArgs {
    /// Letter body.
    #[arg(long)]
    pub content: String,

    /// Day the letter opens (ISO-8601).
    #[arg(long, value_name = "DATE")]
    pub unlock_date: String,

    #[arg(long)]
    pub title: Option<String>,

    /// How the writer feels now.
    #[arg(long)]
    pub from_state: Option<String>,

    /// How the writer hopes to feel when the letter opens.
    #[arg(long)]
    pub to_state: Option<String>,

    #[arg(long)]
    pub user: Option<String>,

    #[command(flatten)]
    pub today: TodayArg,
}

#[derive(Args, Debug)]
pub struct OpenArgs {
    /// Letter id.
    pub id: String,

    /// JSON array of stored letters (`-` reads stdin).
    #[arg(long, value_name = "FILE")]
    pub file: PathBuf,

    #[command(flatten)]
    pub today: TodayArg,
}

/// A letter as shown on a given day: sealed content and a countdown.
#[derive(Debug, Serialize)]
struct LetterView {
    #[serde(flatten)]
    letter: Letter,
    remaining: String,
}

impl LetterView {
    fn new(mut letter: Letter, today: NaiveDate) -> Result<Self, LetterError> {
        let status = letter.lock_status(today)?;
        if !status.is_unlocked {
            letter.content = SEALED_MESSAGE.to_string();
        }
        letter.is_unlocked = status.is_unlocked;
        Ok(Self {
            letter,
            remaining: status.remaining,
        })
    }

    const fn lock_label(&self) -> &'static str {
        if self.letter.is_unlocked { "unlocked" } else { "locked" }
    }
}

impl Renderable for LetterView {
    fn render_human(&self, w: &mut dyn Write) -> io::Result<()> {
        let letter = &self.letter;
        let icon = if letter.is_unlocked { "✉" } else { "🔒" };
        writeln!(w, "{icon} {}  [{}]", letter.title, letter.id)?;
        writeln!(
            w,
            "   {} -> {}  sent {}",
            letter.from_state,
            letter.to_state,
            letter.created_at.format("%Y-%m-%d")
        )?;
        if letter.is_unlocked {
            writeln!(w, "   Unlocked")?;
        } else {
            writeln!(w, "   Unlocks {}  ({})", letter.unlock_date, self.remaining)?;
        }
        writeln!(w, "   {}", letter.content)?;
        writeln!(w)
    }

    fn render_json(&self, w: &mut dyn Write) -> io::Result<()> {
        let val = serde_json::to_string(self).map_err(io::Error::other)?;
        write!(w, "{val}")
    }

    fn render_table(&self, w: &mut dyn Write) -> io::Result<()> {
        let letter = &self.letter;
        writeln!(
            w,
            "{}\t{}\t{}\t{}\t{}",
            letter.id,
            self.lock_label(),
            letter.unlock_date,
            self.remaining,
            letter.title
        )
    }

    fn table_headers() -> &'static [&'static str] {
        &["ID", "LOCK", "UNLOCK_DATE", "REMAINING", "TITLE"]
    }
}

/// Execute a `zn letters` subcommand.
pub fn run_letters(
    command: &LettersCommand,
    defaults: &LetterConfig,
    output: OutputMode,
) -> anyhow::Result<()> {
    match command {
        LettersCommand::List(args) => run_list(args, output),
        LettersCommand::Status(args) => run_status(args, output),
        LettersCommand::Draft(args) => run_draft(args, defaults, output),
        LettersCommand::Open(args) => run_open(args, output),
    }
}

fn letter_failure(output: OutputMode, err: &LetterError) -> anyhow::Error {
    let message = match err {
        LetterError::InvalidUnlockDate { id, source } if id.is_empty() => source.to_string(),
        LetterError::InvalidUnlockDate { source, .. } => format!("{err}: {source}"),
        _ => err.to_string(),
    };
    fail(output, err.error_code(), message)
}

fn run_list(args: &ListArgs, output: OutputMode) -> anyhow::Result<()> {
    let today = resolve_today(args.today.today.as_deref(), output)?;
    let letters: Vec<Letter> = load_records(&args.file, "letters", output)?;

    let views = refresh_letters(letters, today)
        .and_then(|letters| {
            letters
                .into_iter()
                .map(|letter| LetterView::new(letter, today))
                .collect::<Result<Vec<_>, _>>()
        })
        .map_err(|err| letter_failure(output, &err))?;

    if views.is_empty() && !output.is_json() {
        writeln!(io::stdout(), "no letters yet")?;
        return Ok(());
    }
    render_list(&views, output)?;
    Ok(())
}

fn run_status(args: &StatusArgs, output: OutputMode) -> anyhow::Result<()> {
    let today = resolve_today(args.today.today.as_deref(), output)?;
    let unlock_day = capsule::parse_calendar_day(&args.unlock_date)
        .map_err(|err| fail(output, err.error_code(), err.to_string()))?;
    let status = capsule::evaluate_days(unlock_day, today);

    render_mode(
        output,
        &status,
        |status, w| render_status_text(status, w),
        |status, w| {
            if status.is_unlocked {
                writeln!(w, "✉ unlocked: {}", status.remaining)
            } else {
                writeln!(w, "🔒 locked: {}", status.remaining)
            }
        },
    )
}

fn render_status_text(status: &LockStatus, w: &mut dyn Write) -> io::Result<()> {
    let label = if status.is_unlocked { "unlocked" } else { "locked" };
    writeln!(w, "{label}\t{}", status.remaining)
}

fn run_draft(args: &DraftArgs, defaults: &LetterConfig, output: OutputMode) -> anyhow::Result<()> {
    let today = resolve_today(args.today.today.as_deref(), output)?;
    let draft = LetterDraft {
        title: args.title.clone(),
        content: args.content.clone(),
        unlock_date: args.unlock_date.clone(),
        from_state: args.from_state.clone(),
        to_state: args.to_state.clone(),
        user_id: args.user.clone(),
    };

    let letter = draft
        .into_letter(defaults, Utc::now(), today)
        .map_err(|err| letter_failure(output, &err))?;

    for state in [&letter.from_state, &letter.to_state] {
        if !EMOTIONAL_STATES.contains(&state.as_str()) {
            info!(state = %state, "letter uses a custom emotional state");
        }
    }

    render_mode(
        output,
        &letter,
        |letter, w| {
            writeln!(
                w,
                "{}\t{}\t{}",
                letter.id,
                if letter.is_unlocked { "unlocked" } else { "locked" },
                letter.unlock_date
            )
        },
        |letter, w| {
            pretty_section(w, "Letter sealed")?;
            pretty_kv(w, "ID", &letter.id)?;
            pretty_kv(w, "Title", &letter.title)?;
            pretty_kv(w, "Opens", &letter.unlock_date)?;
            pretty_kv(w, "Mood", format!("{} -> {}", letter.from_state, letter.to_state))?;
            writeln!(w, "Store this record with --json to keep it.")
        },
    )
}

fn run_open(args: &OpenArgs, output: OutputMode) -> anyhow::Result<()> {
    let today = resolve_today(args.today.today.as_deref(), output)?;
    let letters: Vec<Letter> = load_records(&args.file, "letters", output)?;

    let Some(letter) = letters.into_iter().find(|letter| letter.id == args.id) else {
        return Err(fail(
            output,
            ErrorCode::LetterNotFound,
            format!("no letter with id {}", args.id),
        ));
    };

    let view = LetterView::new(letter, today).map_err(|err| letter_failure(output, &err))?;

    render_mode(
        output,
        &view,
        |view, w| view.render_table(w),
        |view, w| {
            let letter = &view.letter;
            pretty_section(w, &letter.title)?;
            pretty_kv(w, "Written", letter.created_at.format("%Y-%m-%d").to_string())?;
            pretty_kv(w, "Feeling", format!("{} -> {}", letter.from_state, letter.to_state))?;
            if !letter.is_unlocked {
                pretty_kv(w, "Opens", format!("{} ({})", letter.unlock_date, view.remaining))?;
            }
            writeln!(w)?;
            writeln!(w, "{}", letter.content)
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn day(raw: &str) -> NaiveDate {
        NaiveDate::parse_from_str(raw, "%Y-%m-%d").unwrap()
    }

    fn letter(unlock: &str) -> Letter {
        Letter {
            id: "42".to_string(),
            user_id: "anonymous".to_string(),
            title: "Hello".to_string(),
            content: "secret".to_string(),
            unlock_date: unlock.to_string(),
            from_state: "Hopeful".to_string(),
            to_state: "Grateful".to_string(),
            created_at: Utc.with_ymd_and_hms(2024, 12, 1, 10, 0, 0).unwrap(),
            is_unlocked: true,
        }
    }

    #[test]
    fn view_seals_locked_letters_despite_stale_flag() {
        let view = LetterView::new(letter("2025-01-03"), day("2025-01-01")).unwrap();
        assert!(!view.letter.is_unlocked);
        assert_eq!(view.letter.content, SEALED_MESSAGE);
        assert_eq!(view.remaining, "2 days left");
    }

    #[test]
    fn view_keeps_content_once_unlocked_despite_stale_flag() {
        let mut stale = letter("2024-12-31");
        stale.is_unlocked = false;
        let view = LetterView::new(stale, day("2025-01-01")).unwrap();
        assert!(view.letter.is_unlocked);
        assert_eq!(view.letter.content, "secret");
        assert_eq!(view.remaining, "Ready to open!");
    }

    #[test]
    fn view_rejects_unreadable_unlock_date() {
        let err = LetterView::new(letter("someday"), day("2025-01-01")).unwrap_err();
        assert_eq!(err.error_code(), ErrorCode::InvalidDate);
    }

    #[test]
    fn view_json_flattens_letter_fields() {
        let view = LetterView::new(letter("2025-01-01"), day("2025-01-01")).unwrap();
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["id"], "42");
        assert_eq!(json["isUnlocked"], true);
        assert_eq!(json["content"], "secret");
        assert_eq!(json["remaining"], "Ready to open!");
    }

    #[test]
    fn table_row_matches_headers() {
        let view = LetterView::new(letter("2025-01-02"), day("2025-01-01")).unwrap();
        let mut buf = Vec::new();
        view.render_table(&mut buf).unwrap();
        let row = String::from_utf8(buf).unwrap();
        assert_eq!(row, "42\tlocked\t2025-01-02\tUnlocks tomorrow\tHello\n");
        assert_eq!(
            row.trim_end().split('\t').count(),
            LetterView::table_headers().len()
        );
    }

    #[test]
    fn status_text_row() {
        let mut buf = Vec::new();
        render_status_text(&capsule::evaluate_days(day("2025-01-03"), day("2025-01-01")), &mut buf)
            .unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "locked\t2 days left\n");
    }
}
