#![forbid(unsafe_code)]

mod cmd;
mod input;
mod output;

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use output::{OutputMode, ReportedError, fail, resolve_output_mode};
use std::env;
use std::process::ExitCode;
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};
use zenith_core::{ErrorCode, config};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "zenith: growth reports and future-self letters",
    long_about = None
)]
struct Cli {
    /// Enable verbose logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Emit JSON output instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    /// Output format (overrides --json, FORMAT and config).
    #[arg(long, global = true, value_enum)]
    format: Option<OutputMode>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    #[command(
        next_help_heading = "Insights",
        about = "Build a growth report",
        long_about = "Build a growth report from journal entries and tasks.",
        after_help = "EXAMPLES:\n    # Analyze both record files\n    zn analyze --journal journal.json --tasks todos.json\n\n    # Show which keywords were matched\n    zn analyze --journal journal.json --explain\n\n    # Emit machine-readable output\n    zn analyze --journal journal.json --tasks todos.json --json"
    )]
    Analyze(cmd::analyze::AnalyzeArgs),

    #[command(
        next_help_heading = "Letters",
        about = "Work with future-self letters",
        long_about = "List, evaluate, draft and open time-capsule letters.",
        after_help = "EXAMPLES:\n    # List letters with their lock state\n    zn letters list --file letters.json\n\n    # How long until a date unlocks\n    zn letters status 2025-06-01\n\n    # Draft a letter for the summer\n    zn letters draft --content \"Rest more.\" --unlock-date 2025-06-01 --json"
    )]
    Letters {
        #[command(subcommand)]
        command: cmd::letters::LettersCommand,
    },

    #[command(
        next_help_heading = "Check-in",
        about = "Record a mood check-in",
        after_help = "EXAMPLES:\n    # Check in\n    zn mood calm\n\n    # Emit machine-readable output\n    zn mood excited --json"
    )]
    Mood(cmd::mood::MoodArgs),

    #[command(
        next_help_heading = "Maintenance",
        about = "Generate shell completion scripts",
        after_help = "EXAMPLES:\n    # Generate bash completions\n    zn completions bash"
    )]
    Completions {
        /// Target shell for completion script generation.
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_env("ZENITH_LOG").unwrap_or_else(|_| {
        EnvFilter::new(if verbose || env::var("DEBUG").is_ok() {
            "zenith=debug,zn=debug,info"
        } else {
            "zenith=info,zn=info,warn"
        })
    });

    let format = env::var("ZENITH_LOG_FORMAT").unwrap_or_else(|_| "compact".to_string());

    let registry = tracing_subscriber::registry().with(filter);

    if format == "json" {
        registry
            .with(fmt::layer().json().with_ansi(false).with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(fmt::layer().compact().with_writer(std::io::stderr))
            .init();
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if err.downcast_ref::<ReportedError>().is_none() {
                eprintln!("error: {err:#}");
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    if cli.verbose {
        info!("Verbose mode enabled");
    }

    let project_root = env::current_dir()?;
    let fallback_mode = cli
        .format
        .unwrap_or(if cli.json { OutputMode::Json } else { OutputMode::Text });
    let effective = config::resolve_config(&project_root, cli.json)
        .map_err(|err| fail(fallback_mode, ErrorCode::ConfigParseError, format!("{err:#}")))?;
    let output = resolve_output_mode(cli.format, &effective.resolved_output);
    debug!(?output, "resolved output mode");

    match &cli.command {
        Commands::Analyze(args) => cmd::analyze::run_analyze(args, output),
        Commands::Letters { command } => {
            cmd::letters::run_letters(command, &effective.project.letters, output)
        }
        Commands::Mood(args) => cmd::mood::run_mood(args, &effective.project.mood, output),
        Commands::Completions { shell } => {
            let mut command = Cli::command();
            clap_complete::generate(*shell, &mut command, "zn", &mut std::io::stdout());
            Ok(())
        }
    }
}
