//! Tries - a fuzzy directory picker for dated experiment folders
//!
//! This library ranks a snapshot of experiment directories against a typed
//! query (fuzzy subsequence match blended with recency) and drives the
//! keystroke-level selector state machine on top of that ranking.

use thiserror::Error;

pub mod cli;
pub mod commands;
pub mod config;
pub mod logging;
pub mod output;
pub mod ranking;
pub mod selector;
pub mod store;
pub mod ui;

#[cfg(test)]
pub mod testing;

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum TriesError {
    /// Experiment directory error
    #[error("Store error: {0}")]
    StoreError(#[from] store::StoreError),
    /// Terminal UI error
    #[error("UI error: {0}")]
    UiError(#[from] ui::UiError),
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] ::config::ConfigError),
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    /// Invalid input error
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
