//! Stats command - summarize the experiments directory

use crate::{
    TriesError,
    output,
    store::{Candidate, CandidateStore, ExperimentDir, disk_usage},
};
use chrono::{DateTime, Utc};
use colored::Colorize;
use std::sync::Arc;

type Result<T> = std::result::Result<T, TriesError>;

/// Number of experiments listed in the largest-first section
pub const LARGEST_SHOWN: usize = 10;

/// Aggregate numbers for one experiments directory
#[derive(Debug, Clone, Default)]
pub struct ExperimentStats {
    /// Number of experiment directories
    pub count: usize,
    /// Disk usage of all experiments together, in bytes
    pub total_bytes: u64,
    /// Earliest last-accessed time (directory mtime)
    pub oldest: Option<DateTime<Utc>>,
    /// Latest last-accessed time (directory mtime)
    pub newest: Option<DateTime<Utc>>,
    /// Experiments with their sizes, largest first, at most [`LARGEST_SHOWN`]
    pub largest: Vec<(Arc<Candidate>, u64)>,
}

/// Walk every experiment and gather its statistics
///
/// # Errors
/// Returns an error if the experiments directory cannot be listed
pub fn collect(dir: &ExperimentDir) -> Result<ExperimentStats> {
    let store = CandidateStore::load(dir)?;

    let mut sized: Vec<(Arc<Candidate>, u64)> = store
        .candidates()
        .iter()
        .map(|c| (Arc::clone(c), disk_usage(&c.path)))
        .collect();

    let accessed = store.candidates().iter().filter_map(|c| c.last_accessed_at);
    let oldest = accessed.clone().min();
    let newest = accessed.max();

    let total_bytes = sized.iter().map(|(_, size)| size).sum();
    // Stable sort keeps source order among equal sizes
    sized.sort_by(|a, b| b.1.cmp(&a.1));
    sized.truncate(LARGEST_SHOWN);

    Ok(ExperimentStats {
        count: store.len(),
        total_bytes,
        oldest,
        newest,
        largest: sized,
    })
}

/// Execute the stats command
///
/// The report goes to stderr; stdout is reserved for the shell wrapper.
///
/// # Errors
/// Returns an error if the experiments directory cannot be listed
pub fn execute(dir: &ExperimentDir) -> Result<()> {
    let stats = collect(dir)?;
    eprint!("{}", render(dir, &stats));
    Ok(())
}

fn render(dir: &ExperimentDir, stats: &ExperimentStats) -> String {
    let mut out = String::new();
    out.push_str(&output::heading("Experiments"));
    out.push('\n');
    out.push_str(&output::field("Location", &dir.base().display().to_string()));
    out.push('\n');

    if stats.count == 0 {
        out.push_str(&format!("  {}\n", "No experiments found.".yellow()));
        return out;
    }

    out.push_str(&output::field("Total", &stats.count.to_string()));
    out.push('\n');
    out.push_str(&output::field("Disk usage", &output::format_size(stats.total_bytes)));
    out.push('\n');
    out.push_str(&output::field("Oldest", &output::format_timestamp(stats.oldest)));
    out.push('\n');
    out.push_str(&output::field("Newest", &output::format_timestamp(stats.newest)));
    out.push_str("\n\n");

    out.push_str(&output::heading("Largest"));
    out.push('\n');
    for (candidate, size) in &stats.largest {
        out.push_str(&format!(
            "  {:>10}  {}  {}\n",
            output::format_size(*size),
            output::format_timestamp(candidate.last_accessed_at).dimmed(),
            candidate.name.green()
        ));
    }
    out
}
