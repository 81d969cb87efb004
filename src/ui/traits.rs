//! Core trait for the interactive selector front end

use super::error::Result;
use crate::selector::{Outcome, SelectorSession};
use crate::store::DirectoryRemover;

/// Drives a [`SelectorSession`] from some input source until it exits
///
/// Implementations feed [`SelectorInput`](crate::selector::SelectorInput)
/// events to the session and render it between events. The session owns every
/// state transition; the front end only translates and draws.
pub trait InteractiveSelector {
    /// Run `session` to completion and return its outcome
    ///
    /// # Errors
    ///
    /// Returns `UiError` if the input source or the display fails. User-facing
    /// failures such as a refused delete are reported inside the session.
    fn run(&self, session: &mut SelectorSession, remover: &dyn DirectoryRemover)
    -> Result<Outcome>;
}
