//! Testing utilities for tries
//!
//! Candidate builders anchored to a fixed clock, plus a scripted
//! `DirectoryRemover` that records every removal request.
//!
//! Only available when compiled with `cfg(test)`.

use crate::store::{Candidate, DirectoryRemover, Result, StoreError};
use chrono::{DateTime, Duration, TimeZone, Utc};
use std::cell::RefCell;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Fixed reference time used by every ranking test
///
/// # Panics
/// Never; the timestamp is a valid constant.
#[must_use]
pub fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 12, 1, 12, 0, 0).unwrap()
}

/// Candidate at `/tries/<name>` last accessed `days_ago` days before [`now`]
#[must_use]
pub fn candidate(name: &str, days_ago: i64) -> Candidate {
    let accessed = now() - Duration::days(days_ago);
    Candidate::new(PathBuf::from("/tries").join(name), Some(accessed), Some(accessed))
}

/// Wrap candidates the way a `CandidateStore` holds them
#[must_use]
pub fn snapshot(candidates: Vec<Candidate>) -> Vec<Arc<Candidate>> {
    candidates.into_iter().map(Arc::new).collect()
}

/// `DirectoryRemover` fake that records calls and optionally fails
#[derive(Debug, Default)]
pub struct RecordingRemover {
    calls: RefCell<Vec<PathBuf>>,
    fail: bool,
}

impl RecordingRemover {
    /// A remover whose every call fails with a permission error
    #[must_use]
    pub fn failing() -> Self {
        Self {
            calls: RefCell::default(),
            fail: true,
        }
    }

    /// Paths passed to `remove`, in call order
    #[must_use]
    pub fn calls(&self) -> Vec<PathBuf> {
        self.calls.borrow().clone()
    }
}

impl DirectoryRemover for RecordingRemover {
    fn remove(&self, path: &Path) -> Result<()> {
        self.calls.borrow_mut().push(path.to_path_buf());
        if self.fail {
            return Err(StoreError::delete(
                path,
                std::io::Error::from(std::io::ErrorKind::PermissionDenied),
            ));
        }
        Ok(())
    }
}

/// Text of every row of a rendered buffer
#[must_use]
pub fn rendered_lines(buf: &ratatui::buffer::Buffer) -> Vec<String> {
    let area = buf.area;
    (area.top()..area.bottom())
        .map(|y| {
            (area.left()..area.right())
                .map(|x| buf[(x, y)].symbol().to_string())
                .collect()
        })
        .collect()
}
