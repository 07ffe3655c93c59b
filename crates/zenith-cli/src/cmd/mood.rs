//! `zn mood`: record a mood check-in.

use std::io::Write;

use chrono::{DateTime, Utc};
use clap::Args;
use zenith_core::config::MoodConfig;
use zenith_core::{ErrorCode, MoodCheckIn};

use crate::output::{OutputMode, fail, render_mode};

/// Arguments for `zn mood`.
#[derive(Args, Debug, Default)]
pub struct MoodArgs {
    /// How you feel right now (happy, sad, anxious, tired, stressed, excited,
    /// determined, angry, confused, calm).
    pub mood: Option<String>,

    /// Who is checking in. Defaults to `mood.default_user` from config.
    #[arg(long)]
    pub user: Option<String>,

    /// When the check-in happened (RFC 3339). Defaults to now.
    #[arg(long, value_name = "RFC3339")]
    pub timestamp: Option<String>,
}

fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    DateTime::parse_from_rfc3339(raw.trim()).map(|stamp| stamp.with_timezone(&Utc))
}

/// Execute `zn mood`.
pub fn run_mood(args: &MoodArgs, defaults: &MoodConfig, output: OutputMode) -> anyhow::Result<()> {
    let timestamp = args
        .timestamp
        .as_deref()
        .map(|raw| {
            parse_timestamp(raw).map_err(|err| {
                fail(
                    output,
                    ErrorCode::InvalidDate,
                    format!("--timestamp: invalid timestamp '{raw}': {err}"),
                )
            })
        })
        .transpose()?;

    let user = args.user.as_deref().unwrap_or(&defaults.default_user);
    let check_in = MoodCheckIn::record(
        args.mood.as_deref().unwrap_or_default(),
        user,
        timestamp,
        Utc::now(),
    )
    .map_err(|err| fail(output, err.error_code(), err.to_string()))?;

    render_mode(
        output,
        &check_in,
        |check_in, w| {
            writeln!(
                w,
                "{}\t{}\t{}\t{}",
                check_in.id,
                check_in.user_id,
                check_in.mood,
                check_in.timestamp.to_rfc3339()
            )
        },
        |check_in, w| {
            writeln!(w, "{} Checked in feeling {}", check_in.mood.emoji(), check_in.mood)?;
            writeln!(w, "Your mood helps personalize your growth insights.")
        },
    )
}
