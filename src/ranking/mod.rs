//! Ranking engine
//!
//! Pure functions from (query, candidate snapshot, now) to an ordered list of
//! matches. Nothing here reads the clock, the environment, or the filesystem;
//! callers pass `now` in so identical inputs always rank identically.

mod ranker;
mod scorer;

pub use ranker::{SCORE_EPSILON, rank};
pub use scorer::{
    BOUNDARY_BONUS, CONTIGUITY_WEIGHT, COVERAGE_WEIGHT, FUZZY_WEIGHT, FuzzyMatch,
    RECENCY_WEIGHT, RECENCY_WINDOW_DAYS, fuzzy_match, recency_score, score,
};

use crate::store::Candidate;
use std::sync::Arc;

/// Score of one candidate against one query
///
/// Built fresh on every ranking pass and never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchResult {
    /// The candidate this result was computed for
    pub candidate: Arc<Candidate>,
    /// Subsequence match quality in `[0, 1]`
    pub fuzzy_score: f64,
    /// Recency of last access in `[0, 1]`
    pub recency_score: f64,
    /// `0.7 * fuzzy_score + 0.3 * recency_score`
    pub combined_score: f64,
    /// Character indices of `candidate.name` matched by the query
    pub matched_indices: Vec<usize>,
}
