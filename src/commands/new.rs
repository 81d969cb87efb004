//! New command - create a dated experiment directory

use crate::{TriesError, store::ExperimentDir};
use std::path::PathBuf;

type Result<T> = std::result::Result<T, TriesError>;

/// Execute the new command
///
/// # Errors
/// Returns an error if the name is invalid or the directory cannot be created
pub fn execute(dir: &ExperimentDir, name: &str) -> Result<PathBuf> {
    Ok(dir.create(name)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Local;
    use tempfile::TempDir;

    #[test]
    fn test_creates_dated_directory() {
        let tmp = TempDir::new().unwrap();
        let dir = ExperimentDir::new(tmp.path());

        let path = execute(&dir, "test-project").unwrap();
        let expected = format!("{}-test-project", Local::now().format("%Y-%m-%d"));
        assert!(path.is_dir());
        assert_eq!(path.file_name().unwrap().to_string_lossy(), expected);
    }

    #[test]
    fn test_rejects_nested_names() {
        let tmp = TempDir::new().unwrap();
        let dir = ExperimentDir::new(tmp.path());
        assert!(matches!(
            execute(&dir, "a/b"),
            Err(TriesError::StoreError(_))
        ));
    }
}
