//! Command-line interface definitions and parsing
//!
//! This module defines the CLI structure for tries using the `clap` crate.
//!
//! # Commands
//!
//! - **browse**: Interactive selector over the experiments directory (default)
//! - **new**: Create a dated experiment directory
//! - **stats**: Summarize experiments and their disk usage
//! - **config**: Show the configuration file location or effective settings
//!
//! The selected directory is printed as a `cd` line on stdout, meant to be
//! evaluated by a shell function:
//!
//! ```bash
//! try() { local out; out=$(command tries "$@") && eval "$out"; }
//! ```

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Main CLI structure for parsing command-line arguments
#[derive(Parser, Debug)]
#[command(name = "tries")]
#[command(about = "Fuzzy-find, create, and prune dated experiment directories", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Initial query when no subcommand is given
    #[arg(value_name = "QUERY")]
    pub query: Option<String>,

    /// Experiments directory (overrides TRY_PATH and the config file)
    #[arg(long = "path", value_name = "DIR", global = true)]
    pub path: Option<PathBuf>,
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Open the interactive selector (default)
    #[command(visible_alias = "b")]
    Browse {
        /// Initial query; selects directly on an exact match
        #[arg(value_name = "QUERY")]
        query: Option<String>,
    },

    /// Create a new experiment directory named `<today>-<NAME>`
    #[command(visible_alias = "n")]
    New {
        /// Experiment name (may be empty for a date-only directory)
        #[arg(value_name = "NAME", default_value = "")]
        name: String,
    },

    /// Show experiment statistics
    Stats,

    /// Inspect configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

/// Configuration subcommands
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigCommands {
    /// Print the configuration file location
    Path,
    /// Print the effective configuration as TOML
    Show,
}

impl Cli {
    /// Parse command-line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Get the command to execute, defaulting to Browse with the top-level query
    #[must_use]
    pub fn get_command(&self) -> Commands {
        self.command.clone().unwrap_or_else(|| Commands::Browse {
            query: self.query.clone(),
        })
    }
}
