//! `zn analyze`: growth report from journal entries and tasks.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use clap::Args;
use zenith_core::insight::{GrowthReport, KeywordScan, TaskTally, scan_keywords};
use zenith_core::{ErrorCode, JournalEntry, Task};

use crate::input::load_optional_records;
use crate::output::{OutputMode, fail, pretty_kv, pretty_section, render_mode};

/// Arguments for `zn analyze`.
#[derive(Args, Debug, Default)]
pub struct AnalyzeArgs {
    /// JSON array of journal entries (`-` reads stdin).
    #[arg(long, value_name = "FILE")]
    pub journal: Option<PathBuf>,

    /// JSON array of tasks (`-` reads stdin).
    #[arg(long, value_name = "FILE")]
    pub tasks: Option<PathBuf>,

    /// Also show the keywords and counts behind the report (pretty/text only).
    #[arg(long)]
    pub explain: bool,
}

/// Execute `zn analyze`.
pub fn run_analyze(args: &AnalyzeArgs, output: OutputMode) -> anyhow::Result<()> {
    let is_stdin = |path: Option<&Path>| path.is_some_and(|p| p.as_os_str() == "-");
    if is_stdin(args.journal.as_deref()) && is_stdin(args.tasks.as_deref()) {
        return Err(fail(
            output,
            ErrorCode::InputReadFailed,
            "only one of --journal and --tasks can read stdin",
        ));
    }

    let entries: Vec<JournalEntry> =
        load_optional_records(args.journal.as_deref(), "journal entries", output)?;
    let tasks: Vec<Task> = load_optional_records(args.tasks.as_deref(), "tasks", output)?;

    let report = zenith_core::analyze(&entries, &tasks);
    let explain = args.explain.then(|| (scan_keywords(&entries), TaskTally::from_tasks(&tasks)));

    render_mode(
        output,
        &report,
        |report, w| {
            render_report_text(report, w)?;
            match &explain {
                Some((scan, tally)) => render_explain_text(scan, *tally, w),
                None => Ok(()),
            }
        },
        |report, w| {
            render_report_human(report, w)?;
            match &explain {
                Some((scan, tally)) => render_explain_human(scan, *tally, w),
                None => Ok(()),
            }
        },
    )
}

fn render_report_text(report: &GrowthReport, w: &mut dyn Write) -> io::Result<()> {
    let emotional = &report.emotional_analysis;
    let productivity = &report.productivity_analysis;
    writeln!(w, "dominant_emotion\t{}", emotional.dominant_emotion)?;
    writeln!(w, "stress_level\t{}", emotional.stress_level)?;
    writeln!(w, "summary\t{}", emotional.summary)?;
    writeln!(w, "completion_rate\t{}", productivity.completion_rate)?;
    writeln!(w, "consistency\t{}", productivity.consistency)?;
    writeln!(w, "insight\t{}", productivity.insight)?;
    for area in &report.growth_areas {
        writeln!(w, "growth_area\t{area}")?;
    }
    for tip in &report.recommendations {
        writeln!(w, "recommendation\t{tip}")?;
    }
    writeln!(w, "encouragement\t{}", report.encouragement)
}

fn render_report_human(report: &GrowthReport, w: &mut dyn Write) -> io::Result<()> {
    let emotional = &report.emotional_analysis;
    let productivity = &report.productivity_analysis;

    pretty_section(w, "Emotional patterns")?;
    pretty_kv(w, "Dominant", emotional.dominant_emotion.to_string())?;
    pretty_kv(w, "Stress", emotional.stress_level.to_string())?;
    writeln!(w, "{}", emotional.summary)?;

    writeln!(w)?;
    pretty_section(w, "Productivity")?;
    pretty_kv(w, "Completed", format!("{}%", productivity.completion_rate))?;
    pretty_kv(w, "Consistency", productivity.consistency.to_string())?;
    writeln!(w, "{}", productivity.insight)?;

    writeln!(w)?;
    pretty_section(w, "Growth areas")?;
    for (i, area) in report.growth_areas.iter().enumerate() {
        writeln!(w, "  {}. {area}", i + 1)?;
    }

    writeln!(w)?;
    pretty_section(w, "Daily habits")?;
    for tip in &report.recommendations {
        writeln!(w, "  - {tip}")?;
    }

    writeln!(w)?;
    writeln!(w, "{}", report.encouragement)
}

fn render_explain_text(scan: &KeywordScan, tally: TaskTally, w: &mut dyn Write) -> io::Result<()> {
    writeln!(w, "stress_keywords\t{}", scan.stress.join(","))?;
    writeln!(w, "positive_keywords\t{}", scan.positive.join(","))?;
    writeln!(w, "tasks_completed\t{}/{}", tally.completed, tally.total)
}

fn render_explain_human(scan: &KeywordScan, tally: TaskTally, w: &mut dyn Write) -> io::Result<()> {
    fn list(words: &[&str]) -> String {
        if words.is_empty() {
            "(none)".to_string()
        } else {
            words.join(", ")
        }
    }

    writeln!(w)?;
    pretty_section(w, "Signals")?;
    pretty_kv(w, "Stress", format!("{} ({})", scan.stress_count(), list(&scan.stress)))?;
    pretty_kv(w, "Positive", format!("{} ({})", scan.positive_count(), list(&scan.positive)))?;
    pretty_kv(w, "Tasks", format!("{} of {} done", tally.completed, tally.total))
}
