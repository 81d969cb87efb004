//! Tries CLI application entry point
//!
//! Browses, creates, and prunes dated experiment directories. The chosen
//! directory is printed on stdout as a `cd` line for a shell wrapper to
//! evaluate; everything else (the selector, reports, errors) goes to stderr.
//!
//! # Usage
//!
//! ```bash
//! # Browse experiments interactively (default command)
//! tries
//! tries redis
//!
//! # Create a new experiment for today
//! tries new redis-cluster
//!
//! # Summarize the experiments directory
//! tries stats
//!
//! # Inspect configuration
//! tries config show
//! ```
//!
//! # Shell integration
//!
//! ```bash
//! try() { local out; out=$(command tries "$@") && eval "$out"; }
//! ```
//!
//! # Configuration
//!
//! Settings are read from the user's config directory
//! (`~/.config/tries/config.toml` on Linux). The experiments directory can be
//! overridden with `--path` or the `TRY_PATH` environment variable.

use chrono::Utc;
use std::path::Path;
use std::process::ExitCode;
use tries::{
    TriesError,
    cli::{Cli, Commands},
    commands,
    config::TriesConfig,
    logging, output,
    store::ExperimentDir,
    ui::TerminalSelector,
};

type Result<T> = std::result::Result<T, TriesError>;

/// Handle the browse command, printing the `cd` line for the chosen directory
///
/// Returns `false` when the user cancelled.
fn handle_browse_command(
    dir: &ExperimentDir,
    config: &TriesConfig,
    query: Option<&str>,
) -> Result<bool> {
    let selector = TerminalSelector::new()
        .with_scores(config.show_scores)
        .with_location(dir.base().display().to_string());

    match commands::browse(dir, query, &selector, Utc::now())? {
        Some(path) => {
            print_cd(&path);
            Ok(true)
        }
        None => Ok(false),
    }
}

fn print_cd(path: &Path) {
    println!("{}", output::cd_command(path));
}

fn run(cli: &Cli, config: &TriesConfig) -> Result<ExitCode> {
    let command = cli.get_command();
    tracing::debug!(?command, "dispatching");

    let experiments = || -> Result<ExperimentDir> {
        Ok(ExperimentDir::new(config.experiments_dir(cli.path.as_deref())?))
    };

    match &command {
        Commands::Browse { query } => {
            let dir = experiments()?;
            if handle_browse_command(&dir, config, query.as_deref())? {
                Ok(ExitCode::SUCCESS)
            } else {
                Ok(ExitCode::FAILURE)
            }
        }
        Commands::New { name } => {
            let path = commands::new(&experiments()?, name)?;
            print_cd(&path);
            Ok(ExitCode::SUCCESS)
        }
        Commands::Stats => {
            commands::stats(&experiments()?)?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Config { command } => {
            commands::config(*command, config)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse_args();

    let config = match TriesConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", TriesError::from(e));
            return ExitCode::FAILURE;
        }
    };
    logging::init(&config);

    match run(&cli, &config) {
        Ok(code) => code,
        Err(e) => {
            tracing::error!(error = %e, "command failed");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
