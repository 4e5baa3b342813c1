//! Termlink - CLI
//!
//! Terminal password-hacking puzzle with TUI, line and simulation modes.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::fs::File;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Mutex;
use termlink::{
    commands::{run_simple, run_simulation},
    config::GameConfig,
    dictionary::{
        DEFAULT_WORDS,
        loader::{load_from_file, words_from_slice},
    },
    engine::{Outcome, Session, SessionRng},
    interactive::{App, run_tui},
    output::{print_outcome, print_simulation_result},
    solver::StrategyType,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "termlink",
    about = "Hack the terminal: find the password among the decoys",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Dictionary: 'default' (embedded list) or path to a whitespace-delimited word file
    #[arg(short, long, global = true, default_value = "default")]
    dictionary: String,

    /// Number of memory panels
    #[arg(long, global = true, default_value_t = 3)]
    panels: usize,

    /// Rows per panel
    #[arg(long, global = true, default_value_t = 20)]
    rows: usize,

    /// Columns per panel
    #[arg(long, global = true, default_value_t = 12)]
    columns: usize,

    /// Candidate words hidden in the grid
    #[arg(short, long, global = true, default_value_t = 12)]
    words: usize,

    /// Wrong guesses allowed before lockout
    #[arg(short, long, global = true, default_value_t = 4)]
    attempts: usize,

    /// Seed for reproducible sessions
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Write logs to this file (RUST_LOG selects the level)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Line mode without the TUI
    Simple,

    /// Let an automatic player run many sessions and report statistics
    Simulate {
        /// Number of sessions to play
        #[arg(short = 'n', long, default_value = "200")]
        games: usize,

        /// Strategy: elimination (default), minimax, random
        #[arg(short, long, default_value = "elimination")]
        strategy: String,
    },
}

/// Exit status for initialization or configuration failures
const EXIT_FAILURE: u8 = 2;

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(err) = init_logging(cli.log_file.as_deref()) {
        eprintln!("Error: {err:#}");
        return ExitCode::from(EXIT_FAILURE);
    }

    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            tracing::error!(error = %err, "terminal failure");
            eprintln!("Error: {err:#}");
            ExitCode::from(EXIT_FAILURE)
        }
    }
}

/// Install the tracing subscriber
///
/// Without a log file only errors reach stderr unless `RUST_LOG` says
/// otherwise, since the TUI owns the terminal.
fn init_logging(log_file: Option<&Path>) -> Result<()> {
    let default_level = if log_file.is_some() { "info" } else { "error" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create log file {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }

    Ok(())
}

/// Load the dictionary named by the -d flag
fn load_dictionary(source: &str) -> Result<Vec<String>> {
    match source {
        "default" => Ok(words_from_slice(DEFAULT_WORDS)),
        path => load_from_file(path).with_context(|| format!("failed to read dictionary {path}")),
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    let config = GameConfig::new(cli.panels, cli.rows, cli.columns, cli.words, cli.attempts);
    config.validate()?;
    let words = load_dictionary(&cli.dictionary)?;
    tracing::debug!(tokens = words.len(), source = %cli.dictionary, "dictionary loaded");

    // Default to Play mode if no command given
    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => {
            let session = new_session(config, &words, cli.seed)?;
            let mut app = App::new(session);
            let outcome = run_tui(&mut app)?;
            print_outcome(&app.session);
            Ok(exit_code(outcome))
        }
        Commands::Simple => {
            let mut session = new_session(config, &words, cli.seed)?;
            let outcome = run_simple(&mut session)?;
            print_outcome(&session);
            Ok(exit_code(outcome))
        }
        Commands::Simulate { games, strategy } => {
            let strategy = StrategyType::from_name(&strategy);
            println!(
                "Simulating {games} sessions with the {} strategy...",
                strategy.name()
            );
            let result = run_simulation(&strategy, strategy.name(), config, &words, games, cli.seed);
            print_simulation_result(&result);
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn new_session(config: GameConfig, words: &[String], seed: Option<u64>) -> Result<Session> {
    Session::initialize(config, words, SessionRng::from_optional_seed(seed))
        .context("failed to build the puzzle")
}

/// Won opens the terminal; a loss or quitting leaves it locked
fn exit_code(outcome: Option<Outcome>) -> ExitCode {
    match outcome {
        Some(Outcome::Won) => ExitCode::SUCCESS,
        Some(Outcome::Lost) | None => ExitCode::FAILURE,
    }
}
