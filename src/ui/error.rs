//! UI error types

use thiserror::Error;

/// Errors that can occur in UI operations
#[derive(Debug, Error)]
pub enum UiError {
    /// Stderr is not attached to a terminal, so the selector cannot draw
    #[error("Interactive selection needs a terminal on stderr")]
    NotATerminal,

    /// IO error during terminal setup, drawing, or event polling
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Result type for UI operations
pub type Result<T> = std::result::Result<T, UiError>;
