//! Configuration module for tries
//!
//! Settings live in `config.toml` under the user's config directory
//! (`~/.config/tries/config.toml` on Linux). A missing file means defaults;
//! nothing is ever written implicitly.

use config::{Config, ConfigError, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Environment variable overriding the experiments directory
pub const TRY_PATH_ENV: &str = "TRY_PATH";

/// Experiments directory used when nothing else is configured, relative to home
pub const DEFAULT_EXPERIMENTS_DIR: &str = "src/tries";

const fn default_show_scores() -> bool {
    true
}

/// Application configuration structure
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct TriesConfig {
    /// Directory holding the experiment folders (`~` is expanded)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub experiments_dir: Option<PathBuf>,

    /// Show each row's combined score as a percentage
    #[serde(default = "default_show_scores")]
    pub show_scores: bool,

    /// `tracing` filter directive enabling the log file (e.g. `tries=debug`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_filter: Option<String>,

    /// Log file location (defaults to the user cache directory)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,
}

impl Default for TriesConfig {
    fn default() -> Self {
        Self {
            experiments_dir: None,
            show_scores: default_show_scores(),
            log_filter: None,
            log_file: None,
        }
    }
}

impl TriesConfig {
    /// Get the path to the config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system config directory cannot be determined.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir().ok_or_else(|| {
            ConfigError::Message("Could not determine config directory".to_string())
        })?;

        Ok(config_dir.join("tries").join("config.toml"))
    }

    /// Load configuration from the default location
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config file exists but cannot be read or parsed.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load configuration from `path`, falling back to defaults if it is absent
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file exists but cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(
                File::from(path.to_path_buf())
                    .format(FileFormat::Toml)
                    .required(false),
            )
            .build()?;

        let config: Self = settings.try_deserialize()?;
        tracing::debug!(path = %path.display(), ?config, "loaded configuration");
        Ok(config)
    }

    /// Render the effective configuration as TOML
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the configuration cannot be serialized.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Message(format!("Failed to serialize config: {e}")))
    }

    /// Resolve the experiments directory for this run
    ///
    /// Precedence: `cli_path`, then the `TRY_PATH` environment variable, then
    /// the `experiments_dir` key, then `~/src/tries`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the default is needed and the home directory
    /// cannot be determined.
    pub fn experiments_dir(&self, cli_path: Option<&Path>) -> Result<PathBuf, ConfigError> {
        self.resolve_experiments_dir(cli_path, std::env::var_os(TRY_PATH_ENV))
    }

    fn resolve_experiments_dir(
        &self,
        cli_path: Option<&Path>,
        env_path: Option<OsString>,
    ) -> Result<PathBuf, ConfigError> {
        if let Some(path) = cli_path {
            return Ok(expand_tilde(path));
        }
        if let Some(path) = env_path.filter(|p| !p.is_empty()) {
            return Ok(expand_tilde(Path::new(&path)));
        }
        if let Some(path) = &self.experiments_dir {
            return Ok(expand_tilde(path));
        }

        dirs::home_dir()
            .map(|home| home.join(DEFAULT_EXPERIMENTS_DIR))
            .ok_or_else(|| ConfigError::Message("Could not determine home directory".to_string()))
    }
}

/// Expand a leading `~` to the home directory
#[must_use]
pub fn expand_tilde(path: &Path) -> PathBuf {
    match path.strip_prefix("~") {
        Ok(rest) => dirs::home_dir().map_or_else(|| path.to_path_buf(), |home| home.join(rest)),
        Err(_) => path.to_path_buf(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = TriesConfig::default();
        assert!(config.experiments_dir.is_none());
        assert!(config.show_scores);
        assert!(config.log_filter.is_none());
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");

        let config = TriesConfig::load_from(&path).unwrap();
        assert_eq!(config, TriesConfig::default());
        assert!(!path.exists());
    }

    #[test]
    fn test_load_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            "experiments_dir = \"/data/tries\"\nshow_scores = false\nlog_filter = \"tries=debug\"\n",
        )
        .unwrap();

        let config = TriesConfig::load_from(&path).unwrap();
        assert_eq!(config.experiments_dir, Some(PathBuf::from("/data/tries")));
        assert!(!config.show_scores);
        assert_eq!(config.log_filter.as_deref(), Some("tries=debug"));
        assert!(config.log_file.is_none());
    }

    #[test]
    fn test_invalid_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "show_scores = \"maybe\"\n").unwrap();

        assert!(TriesConfig::load_from(&path).is_err());
    }

    #[test]
    fn test_to_toml_skips_unset_keys() {
        let config = TriesConfig {
            experiments_dir: Some(PathBuf::from("/data/tries")),
            ..TriesConfig::default()
        };
        let text = config.to_toml().unwrap();

        assert!(text.contains("experiments_dir = \"/data/tries\""));
        assert!(text.contains("show_scores = true"));
        assert!(!text.contains("log_filter"));
    }

    #[test]
    fn test_experiments_dir_precedence() {
        let config = TriesConfig {
            experiments_dir: Some(PathBuf::from("/from/config")),
            ..TriesConfig::default()
        };

        let cli = config
            .resolve_experiments_dir(Some(Path::new("/from/cli")), Some("/from/env".into()))
            .unwrap();
        assert_eq!(cli, PathBuf::from("/from/cli"));

        let env = config
            .resolve_experiments_dir(None, Some("/from/env".into()))
            .unwrap();
        assert_eq!(env, PathBuf::from("/from/env"));

        let from_config = config.resolve_experiments_dir(None, None).unwrap();
        assert_eq!(from_config, PathBuf::from("/from/config"));

        // An empty TRY_PATH is treated as unset
        let empty_env = config.resolve_experiments_dir(None, Some("".into())).unwrap();
        assert_eq!(empty_env, PathBuf::from("/from/config"));
    }

    #[test]
    fn test_default_experiments_dir() {
        if let Some(home) = dirs::home_dir() {
            let dir = TriesConfig::default()
                .resolve_experiments_dir(None, None)
                .unwrap();
            assert_eq!(dir, home.join("src").join("tries"));
        }
    }

    #[test]
    fn test_expand_tilde() {
        assert_eq!(expand_tilde(Path::new("/abs/path")), PathBuf::from("/abs/path"));
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_tilde(Path::new("~/src/tries")), home.join("src/tries"));
            assert_eq!(expand_tilde(Path::new("~")), home);
        }
    }
}
