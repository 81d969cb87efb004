//! Selector state machine
//!
//! Owns the query text, the ranked list, the highlight, and the scroll
//! window. Each input event drives exactly one transition; query edits
//! re-rank the whole snapshot. Rendering reads the session through its
//! accessors and never mutates it.

use super::viewport;
use crate::ranking::{MatchResult, rank};
use crate::store::{Candidate, CandidateStore, DirectoryRemover};
use chrono::{DateTime, Utc};
use std::path::Path;
use std::sync::Arc;

/// A discrete input event fed to the selector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectorInput {
    /// Printable character appended to the query
    Char(char),
    /// Remove the last query character
    Backspace,
    /// Move the highlight up one row
    Up,
    /// Move the highlight down one row
    Down,
    /// Select the highlighted entry, or request a new directory
    Enter,
    /// Ask to delete the highlighted entry
    RequestDelete,
    /// Confirm a pending delete
    Confirm,
    /// Leave the selector without a selection
    Cancel,
    /// Any other key
    Other,
}

/// Final result of a selector session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The user picked an existing directory
    Selected(Arc<Candidate>),
    /// Nothing matched; the caller should create a directory with this name
    CreateNew(String),
    /// The user cancelled
    Cancelled,
}

impl Outcome {
    /// Path of the selected directory, if any
    #[must_use]
    pub fn selected_path(&self) -> Option<&Path> {
        match self {
            Self::Selected(candidate) => Some(candidate.path.as_path()),
            Self::CreateNew(_) | Self::Cancelled => None,
        }
    }
}

/// Interaction mode of the selector
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Mode {
    /// Editing the query and moving the highlight
    #[default]
    Browsing,
    /// Waiting for the user to confirm deleting this candidate
    ConfirmingDelete(Arc<Candidate>),
    /// Terminal state carrying the session's outcome
    Exiting(Outcome),
}

/// Result of handling one input event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// State changed, keep running
    Continue,
    /// Query changed and the list was re-ranked
    QueryChanged,
    /// The session reached `Exiting`
    Exit,
    /// No action taken
    Ignored,
}

/// Severity of a status message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    /// An action completed
    Success,
    /// An action failed; the session continues
    Error,
}

/// Message surfaced to the renderer after a transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    /// Message level
    pub level: MessageLevel,
    /// Message text
    pub text: String,
}

/// Mutable state of one interactive selection
#[derive(Debug)]
pub struct SelectorSession {
    store: CandidateStore,
    now: DateTime<Utc>,
    query: String,
    mode: Mode,
    ranked: Vec<MatchResult>,
    highlighted: usize,
    viewport_offset: usize,
    visible_rows: usize,
    status: Option<StatusMessage>,
}

impl SelectorSession {
    /// Start browsing `store` with an empty query
    ///
    /// `now` is the reference time for recency scoring for the whole session.
    #[must_use]
    pub fn new(store: CandidateStore, now: DateTime<Utc>) -> Self {
        let mut session = Self {
            store,
            now,
            query: String::new(),
            mode: Mode::Browsing,
            ranked: Vec::new(),
            highlighted: 0,
            viewport_offset: 0,
            visible_rows: 20, // Updated by the terminal before the first draw
            status: None,
        };
        session.rerank();
        session
    }

    /// Seed the query text and rank it
    #[must_use]
    pub fn with_query(mut self, query: &str) -> Self {
        self.query = query.chars().filter(|c| !c.is_control()).collect();
        self.rerank();
        self
    }

    /// Set the number of list rows the renderer can show (at least 1)
    pub fn set_visible_rows(&mut self, rows: usize) {
        self.visible_rows = rows.max(1);
        self.reconcile();
    }

    /// Apply one input event
    ///
    /// Delete requests go to `remover` only on an explicit `Confirm` while a
    /// delete is pending. A failed removal keeps the candidate and records an
    /// error status; it never ends the session. The status is cleared by the
    /// next input that is not [`EventResult::Ignored`].
    pub fn handle(&mut self, input: SelectorInput, remover: &dyn DirectoryRemover) -> EventResult {
        if matches!(self.mode, Mode::Exiting(_)) {
            return EventResult::Ignored;
        }
        let previous_status = self.status.take();

        let result = match std::mem::take(&mut self.mode) {
            Mode::Browsing => self.handle_browsing(input),
            Mode::ConfirmingDelete(target) => self.handle_confirming(input, &target, remover),
            Mode::Exiting(outcome) => {
                self.mode = Mode::Exiting(outcome);
                EventResult::Ignored
            }
        };

        // Ignored inputs leave the session untouched, status included
        if result == EventResult::Ignored {
            self.status = previous_status;
        }

        tracing::trace!(?input, ?result, mode = ?self.mode, "selector transition");
        result
    }

    fn handle_browsing(&mut self, input: SelectorInput) -> EventResult {
        match input {
            SelectorInput::Char(c) if !c.is_control() => {
                self.query.push(c);
                self.rerank();
                EventResult::QueryChanged
            }
            SelectorInput::Backspace => {
                if self.query.pop().is_some() {
                    self.rerank();
                    EventResult::QueryChanged
                } else {
                    EventResult::Ignored
                }
            }
            SelectorInput::Up => {
                if self.highlighted > 0 {
                    self.highlighted -= 1;
                    self.reconcile();
                }
                EventResult::Continue
            }
            SelectorInput::Down => {
                if self.highlighted + 1 < self.ranked.len() {
                    self.highlighted += 1;
                    self.reconcile();
                }
                EventResult::Continue
            }
            SelectorInput::Enter => {
                let outcome = match self.ranked.get(self.highlighted) {
                    Some(m) => Outcome::Selected(Arc::clone(&m.candidate)),
                    None => Outcome::CreateNew(self.query.clone()),
                };
                tracing::debug!(?outcome, "selector finished");
                self.mode = Mode::Exiting(outcome);
                EventResult::Exit
            }
            SelectorInput::RequestDelete => match self.ranked.get(self.highlighted) {
                Some(m) => {
                    self.mode = Mode::ConfirmingDelete(Arc::clone(&m.candidate));
                    EventResult::Continue
                }
                None => EventResult::Ignored,
            },
            SelectorInput::Cancel => {
                self.mode = Mode::Exiting(Outcome::Cancelled);
                EventResult::Exit
            }
            SelectorInput::Char(_) | SelectorInput::Confirm | SelectorInput::Other => {
                EventResult::Ignored
            }
        }
    }

    fn handle_confirming(
        &mut self,
        input: SelectorInput,
        target: &Arc<Candidate>,
        remover: &dyn DirectoryRemover,
    ) -> EventResult {
        match input {
            SelectorInput::Confirm => {
                match remover.remove(&target.path) {
                    Ok(()) => {
                        self.store.remove(&target.path);
                        self.ranked.retain(|m| m.candidate.path != target.path);
                        self.highlighted = self.highlighted.min(self.ranked.len().saturating_sub(1));
                        self.reconcile();
                        self.status = Some(StatusMessage {
                            level: MessageLevel::Success,
                            text: format!("Deleted {}", target.name),
                        });
                    }
                    Err(e) => {
                        tracing::warn!(path = %target.path.display(), error = %e, "delete failed");
                        self.status = Some(StatusMessage {
                            level: MessageLevel::Error,
                            text: e.to_string(),
                        });
                    }
                }
                self.mode = Mode::Browsing;
                EventResult::Continue
            }
            SelectorInput::Cancel => {
                self.mode = Mode::Exiting(Outcome::Cancelled);
                EventResult::Exit
            }
            _ => {
                self.mode = Mode::Browsing;
                EventResult::Continue
            }
        }
    }

    fn rerank(&mut self) {
        self.ranked = rank(&self.query, self.store.candidates(), self.now);
        self.highlighted = 0;
        self.viewport_offset = 0;
        self.reconcile();
    }

    fn reconcile(&mut self) {
        self.viewport_offset = viewport::reconcile(
            self.highlighted,
            self.ranked.len(),
            self.visible_rows,
            self.viewport_offset,
        );
    }

    /// Current query text
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Current mode
    #[must_use]
    pub const fn mode(&self) -> &Mode {
        &self.mode
    }

    /// Ranked matches for the current query
    #[must_use]
    pub fn ranked(&self) -> &[MatchResult] {
        &self.ranked
    }

    /// Index of the highlighted row (0 when the list is empty)
    #[must_use]
    pub const fn highlighted(&self) -> usize {
        self.highlighted
    }

    /// The highlighted match, if any
    #[must_use]
    pub fn highlighted_match(&self) -> Option<&MatchResult> {
        self.ranked.get(self.highlighted)
    }

    /// First visible row
    #[must_use]
    pub const fn viewport_offset(&self) -> usize {
        self.viewport_offset
    }

    /// Number of rows in the window
    #[must_use]
    pub const fn visible_rows(&self) -> usize {
        self.visible_rows
    }

    /// The ranked entries inside the window
    #[must_use]
    pub fn visible(&self) -> &[MatchResult] {
        let start = self.viewport_offset.min(self.ranked.len());
        let end = (start + self.visible_rows).min(self.ranked.len());
        &self.ranked[start..end]
    }

    /// Number of candidates left in the snapshot
    #[must_use]
    pub fn total(&self) -> usize {
        self.store.len()
    }

    /// Status message from the last transition
    #[must_use]
    pub const fn status(&self) -> Option<&StatusMessage> {
        self.status.as_ref()
    }

    /// Candidate awaiting delete confirmation
    #[must_use]
    pub const fn pending_delete(&self) -> Option<&Arc<Candidate>> {
        match &self.mode {
            Mode::ConfirmingDelete(target) => Some(target),
            _ => None,
        }
    }

    /// Outcome, once the session is exiting
    #[must_use]
    pub const fn outcome(&self) -> Option<&Outcome> {
        match &self.mode {
            Mode::Exiting(outcome) => Some(outcome),
            _ => None,
        }
    }

    /// Consume the session, returning its outcome if it finished
    #[must_use]
    pub fn into_outcome(self) -> Option<Outcome> {
        match self.mode {
            Mode::Exiting(outcome) => Some(outcome),
            _ => None,
        }
    }
}
