//! Scripted selector for testing

use super::error::Result;
use super::traits::InteractiveSelector;
use crate::selector::{Outcome, SelectorInput, SelectorSession};
use crate::store::DirectoryRemover;

/// Selector that replays a fixed sequence of inputs
///
/// Useful for testing without requiring a terminal. When the script runs out
/// before the session exits, the run counts as cancelled.
#[derive(Debug, Clone, Default)]
pub struct ScriptedSelector {
    /// Inputs fed to the session, in order
    pub inputs: Vec<SelectorInput>,
    /// Visible rows reported to the session before the first input
    pub visible_rows: usize,
}

impl ScriptedSelector {
    /// Create a scripted selector from inputs
    #[must_use]
    pub fn new(inputs: Vec<SelectorInput>) -> Self {
        Self {
            inputs,
            visible_rows: 10,
        }
    }

    /// Script that types `text` and presses Enter
    #[must_use]
    pub fn typing(text: &str) -> Self {
        let mut inputs: Vec<SelectorInput> = text.chars().map(SelectorInput::Char).collect();
        inputs.push(SelectorInput::Enter);
        Self::new(inputs)
    }
}

impl InteractiveSelector for ScriptedSelector {
    fn run(
        &self,
        session: &mut SelectorSession,
        remover: &dyn DirectoryRemover,
    ) -> Result<Outcome> {
        session.set_visible_rows(self.visible_rows);
        for &input in &self.inputs {
            session.handle(input, remover);
            if let Some(outcome) = session.outcome() {
                return Ok(outcome.clone());
            }
        }
        Ok(Outcome::Cancelled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::CandidateStore;
    use crate::testing::{RecordingRemover, candidate, now};

    fn session() -> SelectorSession {
        let store = CandidateStore::new(vec![
            candidate("2025-11-30-redis-server", 1),
            candidate("2025-09-01-kafka", 2),
        ]);
        SelectorSession::new(store, now())
    }

    #[test]
    fn test_scripted_selection() {
        let remover = RecordingRemover::default();
        let mut s = session();
        let outcome = ScriptedSelector::typing("kaf").run(&mut s, &remover).unwrap();

        let path = outcome.selected_path().unwrap();
        assert!(path.ends_with("2025-09-01-kafka"));
    }

    #[test]
    fn test_script_exhausted_is_cancelled() {
        let remover = RecordingRemover::default();
        let mut s = session();
        let outcome = ScriptedSelector::new(vec![SelectorInput::Down])
            .run(&mut s, &remover)
            .unwrap();

        assert_eq!(outcome, Outcome::Cancelled);
    }

    #[test]
    fn test_inputs_after_exit_are_not_replayed() {
        let remover = RecordingRemover::default();
        let mut s = session();
        let outcome = ScriptedSelector::new(vec![
            SelectorInput::Enter,
            SelectorInput::RequestDelete,
            SelectorInput::Confirm,
        ])
        .run(&mut s, &remover)
        .unwrap();

        assert!(matches!(outcome, Outcome::Selected(_)));
        assert!(remover.calls().is_empty());
    }
}
