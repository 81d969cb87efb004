//! Browse command - interactive selector over the experiments directory

use crate::{
    TriesError,
    selector::{Outcome, SelectorSession},
    store::{CandidateStore, ExperimentDir},
    ui::InteractiveSelector,
};
use chrono::{DateTime, Utc};
use std::path::PathBuf;

type Result<T> = std::result::Result<T, TriesError>;

/// Fuzzy score at which an initial query selects its top match without a prompt
pub const AUTO_SELECT_THRESHOLD: f64 = 0.99;

/// Execute the browse command
///
/// With a non-empty `query`, an exact match is selected and a query matching
/// nothing creates a new experiment, both before the terminal is touched.
/// Otherwise `selector` runs the interactive session.
///
/// Returns the directory to change into, or `None` when the user cancelled.
///
/// # Errors
/// Returns an error if the experiments directory cannot be listed, the
/// selector fails, or a new directory cannot be created.
pub fn execute(
    dir: &ExperimentDir,
    query: Option<&str>,
    selector: &dyn InteractiveSelector,
    now: DateTime<Utc>,
) -> Result<Option<PathBuf>> {
    let store = CandidateStore::load(dir)?;
    let query = query.map(str::trim).filter(|q| !q.is_empty());

    let mut session = SelectorSession::new(store, now);
    let outcome = match query {
        Some(query) => {
            session = session.with_query(query);
            match immediate_outcome(&session) {
                Some(outcome) => outcome,
                None => selector.run(&mut session, dir)?,
            }
        }
        None => selector.run(&mut session, dir)?,
    };

    tracing::debug!(?outcome, "browse finished");
    resolve(dir, outcome)
}

/// Outcome decided from the initial query alone, if any
fn immediate_outcome(session: &SelectorSession) -> Option<Outcome> {
    match session.ranked().first() {
        Some(top) if top.fuzzy_score >= AUTO_SELECT_THRESHOLD => {
            Some(Outcome::Selected(top.candidate.clone()))
        }
        Some(_) => None,
        None => Some(Outcome::CreateNew(session.query().to_string())),
    }
}

/// Turn a session outcome into the directory to enter
fn resolve(dir: &ExperimentDir, outcome: Outcome) -> Result<Option<PathBuf>> {
    match outcome {
        Outcome::Selected(candidate) => {
            dir.touch(&candidate.path);
            Ok(Some(candidate.path.clone()))
        }
        Outcome::CreateNew(name) => Ok(Some(dir.create(&name)?)),
        Outcome::Cancelled => Ok(None),
    }
}
