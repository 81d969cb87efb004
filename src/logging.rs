//! Diagnostic logging setup
//!
//! The terminal belongs to the selector and stdout carries the `cd` line, so
//! log records go to a file. Nothing is installed unless a filter is
//! configured through `TRIES_LOG` or the `log_filter` config key.

use crate::config::{TriesConfig, expand_tilde};
use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;
use thiserror::Error;
use tracing_subscriber::EnvFilter;

/// Environment variable holding a `tracing` filter directive
pub const LOG_ENV: &str = "TRIES_LOG";

/// Reasons the log file could not be set up
#[derive(Debug, Error)]
pub enum LoggingError {
    /// The filter directive did not parse
    #[error("Invalid log filter: {0}")]
    Filter(#[from] tracing_subscriber::filter::ParseError),

    /// No log file configured and no cache directory available
    #[error("Could not determine log file location")]
    NoLogPath,

    /// The log file could not be opened
    #[error("Cannot open log file: {0}")]
    Io(#[from] std::io::Error),

    /// A global subscriber was already installed
    #[error("Failed to install subscriber: {0}")]
    Install(String),
}

/// Install the file logger if a filter is configured
///
/// Failures are reported once on stderr and otherwise ignored; logging never
/// stops the program.
pub fn init(config: &TriesConfig) {
    let Some(directive) = filter_directive(std::env::var(LOG_ENV).ok(), config) else {
        return;
    };

    if let Err(e) = try_init(&directive, config) {
        eprintln!("Warning: logging disabled: {e}");
    }
}

fn try_init(directive: &str, config: &TriesConfig) -> Result<(), LoggingError> {
    let filter = EnvFilter::try_new(directive)?;
    let path = log_path(config).ok_or(LoggingError::NoLogPath)?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .map_err(|e| LoggingError::Install(e.to_string()))?;

    tracing::info!(version = env!("CARGO_PKG_VERSION"), log = %path.display(), "logging started");
    Ok(())
}

/// Filter directive from the environment, falling back to the config key
fn filter_directive(env: Option<String>, config: &TriesConfig) -> Option<String> {
    env.filter(|d| !d.trim().is_empty())
        .or_else(|| config.log_filter.clone())
        .filter(|d| !d.trim().is_empty())
}

/// Log file location: the `log_file` key, else `<cache dir>/tries/tries.log`
fn log_path(config: &TriesConfig) -> Option<PathBuf> {
    match &config.log_file {
        Some(path) => Some(expand_tilde(path)),
        None => dirs::cache_dir().map(|dir| dir.join("tries").join("tries.log")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_filter_means_no_logging() {
        let config = TriesConfig::default();
        assert_eq!(filter_directive(None, &config), None);
        assert_eq!(filter_directive(Some("  ".into()), &config), None);
    }

    #[test]
    fn test_env_overrides_config() {
        let config = TriesConfig {
            log_filter: Some("tries=info".into()),
            ..TriesConfig::default()
        };
        assert_eq!(
            filter_directive(Some("tries=trace".into()), &config).as_deref(),
            Some("tries=trace")
        );
        assert_eq!(
            filter_directive(None, &config).as_deref(),
            Some("tries=info")
        );
    }

    #[test]
    fn test_log_path() {
        let config = TriesConfig {
            log_file: Some(PathBuf::from("/var/log/tries.log")),
            ..TriesConfig::default()
        };
        assert_eq!(log_path(&config), Some(PathBuf::from("/var/log/tries.log")));

        if let Some(cache) = dirs::cache_dir() {
            assert_eq!(
                log_path(&TriesConfig::default()),
                Some(cache.join("tries").join("tries.log"))
            );
        }
    }

    #[test]
    fn test_invalid_directive_is_rejected() {
        let config = TriesConfig::default();
        let result = try_init("tries=notalevel[", &config);
        assert!(matches!(result, Err(LoggingError::Filter(_))));
    }
}
