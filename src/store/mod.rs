//! Candidate store and the directory collaborators behind it
//!
//! A `CandidateStore` is the read-once snapshot of experiment directories the
//! selector ranks against. It is filled from a [`CandidateSource`] before the
//! interactive loop starts and only shrinks afterwards, when a confirmed
//! deletion succeeds through a [`DirectoryRemover`].

mod error;
mod fs;

pub use error::{Result, StoreError};
pub use fs::{DATE_FORMAT, ExperimentDir, date_prefix, disk_usage};

use chrono::{DateTime, Utc};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// One experiment directory eligible for matching and display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// Base name of the directory, used for matching
    pub name: String,
    /// Absolute location, unique within a store
    pub path: PathBuf,
    /// Creation time (date prefix of the name, or filesystem metadata)
    pub created_at: Option<DateTime<Utc>>,
    /// Most recent access time; `None` when the metadata was unreadable
    pub last_accessed_at: Option<DateTime<Utc>>,
}

impl Candidate {
    /// Create a candidate, deriving `name` from the last path component
    #[must_use]
    pub fn new(
        path: PathBuf,
        created_at: Option<DateTime<Utc>>,
        last_accessed_at: Option<DateTime<Utc>>,
    ) -> Self {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Self {
            name,
            path,
            created_at,
            last_accessed_at,
        }
    }
}

/// Immutable-per-session snapshot of candidates, in source order
///
/// Source order is the final tie-break of the ranking, so it is preserved
/// exactly as supplied. Duplicate paths are dropped on construction, keeping
/// the first occurrence.
#[derive(Debug, Clone, Default)]
pub struct CandidateStore {
    candidates: Vec<Arc<Candidate>>,
}

impl CandidateStore {
    /// Build a store from candidates in source order
    #[must_use]
    pub fn new(candidates: Vec<Candidate>) -> Self {
        let mut seen = std::collections::HashSet::new();
        let candidates = candidates
            .into_iter()
            .filter(|c| seen.insert(c.path.clone()))
            .map(Arc::new)
            .collect();
        Self { candidates }
    }

    /// Load a store from a candidate source
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the source cannot list its directories.
    pub fn load(source: &dyn CandidateSource) -> Result<Self> {
        let candidates = source.load()?;
        tracing::debug!(count = candidates.len(), "loaded candidate snapshot");
        Ok(Self::new(candidates))
    }

    /// All candidates, in source order
    #[must_use]
    pub fn candidates(&self) -> &[Arc<Candidate>] {
        &self.candidates
    }

    /// Number of candidates
    #[must_use]
    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    /// Whether the store is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// Remove the candidate at `path`, returning it if present
    pub fn remove(&mut self, path: &Path) -> Option<Arc<Candidate>> {
        let idx = self.candidates.iter().position(|c| c.path == path)?;
        Some(self.candidates.remove(idx))
    }
}

/// One-shot supplier of the candidate snapshot
pub trait CandidateSource {
    /// List every candidate directory; an absent base yields an empty list
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the directories cannot be listed.
    fn load(&self) -> Result<Vec<Candidate>>;
}

/// Destructive removal of a candidate directory
///
/// Invoked by the selector only after explicit user confirmation.
pub trait DirectoryRemover {
    /// Remove the directory at `path`
    ///
    /// # Errors
    ///
    /// Returns `StoreError` describing why the directory was not removed.
    fn remove(&self, path: &Path) -> Result<()>;
}
