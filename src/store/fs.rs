//! Filesystem-backed experiment directory
//!
//! Experiments live as direct subdirectories of one base directory, named
//! `YYYY-MM-DD-<name>`. Hidden entries are skipped.

use super::error::{Result, StoreError};
use super::{Candidate, CandidateSource, DirectoryRemover};
use chrono::{DateTime, Local, NaiveDate, TimeZone, Utc};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// Date prefix format used for experiment directory names
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Base directory holding all experiments
#[derive(Debug, Clone)]
pub struct ExperimentDir {
    base: PathBuf,
}

impl ExperimentDir {
    /// Create a handle for the given base directory (not created until needed)
    #[must_use]
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self { base: base.into() }
    }

    /// The base directory
    #[must_use]
    pub fn base(&self) -> &Path {
        &self.base
    }

    /// Create `<base>/<today>-<name>`, or `<base>/<today>` for an empty name
    ///
    /// Creating an existing experiment is not an error; the existing
    /// directory is returned untouched.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::InvalidInput` if `name` contains a path separator,
    /// or `StoreError::CreateError` if the directory cannot be created.
    pub fn create(&self, name: &str) -> Result<PathBuf> {
        self.create_on(name, Local::now().date_naive())
    }

    /// Create an experiment directory dated `date`
    ///
    /// # Errors
    ///
    /// See [`ExperimentDir::create`].
    pub fn create_on(&self, name: &str, date: NaiveDate) -> Result<PathBuf> {
        let name = name.trim();
        if name.contains('/') || name.contains(std::path::MAIN_SEPARATOR) || name == ".." {
            return Err(StoreError::InvalidInput(format!(
                "experiment name '{name}' must not contain a path separator"
            )));
        }

        let today = date.format(DATE_FORMAT).to_string();
        let dirname = if name.is_empty() {
            today
        } else {
            format!("{today}-{name}")
        };

        let path = self.base.join(dirname);
        fs::create_dir_all(&path).map_err(|source| StoreError::CreateError {
            path: path.clone(),
            source,
        })?;
        tracing::info!(path = %path.display(), "created experiment directory");
        Ok(path)
    }

    /// Mark an experiment as just used by bumping its modification time
    ///
    /// Failures are logged and otherwise ignored; a stale mtime only affects
    /// the recency ordering of the next session.
    pub fn touch(&self, path: &Path) {
        let result = fs::File::open(path).and_then(|dir| dir.set_modified(SystemTime::now()));
        if let Err(e) = result {
            tracing::warn!(path = %path.display(), error = %e, "failed to touch experiment");
        }
    }

    fn read_candidate(path: PathBuf, metadata: &fs::Metadata) -> Candidate {
        let last_accessed_at = match metadata.modified() {
            Ok(time) => Some(DateTime::<Utc>::from(time)),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "unreadable modification time");
                None
            }
        };

        let mut candidate = Candidate::new(path, None, last_accessed_at);
        candidate.created_at = date_prefix(&candidate.name)
            .or_else(|| metadata.created().ok().map(DateTime::<Utc>::from));
        candidate
    }
}

impl CandidateSource for ExperimentDir {
    fn load(&self) -> Result<Vec<Candidate>> {
        let entries = match fs::read_dir(&self.base) {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(base = %self.base.display(), "experiments directory does not exist yet");
                return Ok(Vec::new());
            }
            Err(source) => {
                return Err(StoreError::ListError {
                    path: self.base.clone(),
                    source,
                });
            }
        };

        let mut candidates: Vec<Candidate> = entries
            .filter_map(|entry| {
                let entry = entry
                    .inspect_err(|e| tracing::warn!(error = %e, "skipping unreadable entry"))
                    .ok()?;
                if entry.file_name().to_string_lossy().starts_with('.') {
                    return None;
                }
                let path = entry.path();
                let metadata = fs::metadata(&path).ok()?;
                metadata
                    .is_dir()
                    .then(|| Self::read_candidate(path, &metadata))
            })
            .collect();

        // Newest first; candidates without a timestamp go last, by name
        candidates.sort_by(|a, b| {
            b.last_accessed_at
                .cmp(&a.last_accessed_at)
                .then_with(|| a.name.cmp(&b.name))
        });

        tracing::debug!(
            base = %self.base.display(),
            count = candidates.len(),
            "listed experiments"
        );
        Ok(candidates)
    }
}

impl DirectoryRemover for ExperimentDir {
    fn remove(&self, path: &Path) -> Result<()> {
        if !path.starts_with(&self.base) || path == self.base {
            return Err(StoreError::InvalidInput(format!(
                "{} is outside {}",
                path.display(),
                self.base.display()
            )));
        }

        fs::remove_dir_all(path).map_err(|e| StoreError::delete(path, e))?;
        tracing::info!(path = %path.display(), "deleted experiment directory");
        Ok(())
    }
}

/// Total size in bytes of the regular files below `path`
///
/// Symlinks are not followed and unreadable entries count as zero.
#[must_use]
pub fn disk_usage(path: &Path) -> u64 {
    let Ok(entries) = fs::read_dir(path) else {
        return 0;
    };
    entries
        .filter_map(std::result::Result::ok)
        .map(|entry| match entry.metadata() {
            Ok(metadata) if metadata.is_dir() => disk_usage(&entry.path()),
            Ok(metadata) if metadata.is_file() => metadata.len(),
            _ => 0,
        })
        .sum()
}

/// Parse a leading `YYYY-MM-DD` from an experiment name as local midnight
#[must_use]
pub fn date_prefix(name: &str) -> Option<DateTime<Utc>> {
    let prefix = name.get(..10)?;
    let date = NaiveDate::parse_from_str(prefix, DATE_FORMAT).ok()?;
    let midnight = date.and_hms_opt(0, 0, 0)?;
    Local
        .from_local_datetime(&midnight)
        .earliest()
        .map(|dt| dt.with_timezone(&Utc))
}
