//! Store-specific error types
//!
//! Errors raised while listing, creating, or removing experiment directories.
//! The selector never treats these as fatal: a failed removal is reported back
//! to the user and the session continues.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Experiment store errors
#[derive(Debug, Error)]
pub enum StoreError {
    /// The experiments base directory could not be read
    #[error("Cannot read experiments directory {}: {source}", path.display())]
    ListError {
        /// Directory that failed to list
        path: PathBuf,
        /// Underlying I/O failure
        source: std::io::Error,
    },

    /// The directory to act on no longer exists
    #[error("Directory not found: {}", .0.display())]
    NotFound(PathBuf),

    /// Removing a directory failed (permissions, busy files, ...)
    #[error("Failed to delete {}: {source}", path.display())]
    DeleteError {
        /// Directory that could not be removed
        path: PathBuf,
        /// Underlying I/O failure
        source: std::io::Error,
    },

    /// Creating a new experiment directory failed
    #[error("Failed to create {}: {source}", path.display())]
    CreateError {
        /// Directory that could not be created
        path: PathBuf,
        /// Underlying I/O failure
        source: std::io::Error,
    },

    /// Invalid input provided (e.g., a name containing a path separator)
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl StoreError {
    /// Build a `DeleteError`, mapping `NotFound` I/O errors to `NotFound`
    #[must_use]
    pub fn delete(path: &Path, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::NotFound(path.to_path_buf())
        } else {
            Self::DeleteError {
                path: path.to_path_buf(),
                source,
            }
        }
    }
}

/// Result type for store operations
pub type Result<T> = std::result::Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;
    use std::io;

    #[test]
    fn test_not_found_display() {
        let error = StoreError::NotFound(PathBuf::from("/tmp/tries/2025-01-01-gone"));
        assert_eq!(
            error.to_string(),
            "Directory not found: /tmp/tries/2025-01-01-gone"
        );
    }

    #[test]
    fn test_delete_maps_missing_path_to_not_found() {
        let path = Path::new("/tmp/tries/missing");
        let error = StoreError::delete(path, io::Error::from(io::ErrorKind::NotFound));
        assert!(matches!(error, StoreError::NotFound(p) if p == path));
    }

    #[test]
    fn test_delete_keeps_permission_source() {
        let path = Path::new("/tmp/tries/locked");
        let error = StoreError::delete(path, io::Error::from(io::ErrorKind::PermissionDenied));
        assert!(error.to_string().starts_with("Failed to delete /tmp/tries/locked"));
        assert!(error.source().is_some());
    }
}
