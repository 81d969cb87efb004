//! Fuzzy subsequence scoring and recency decay
//!
//! A query matches a name when every query character appears in the name, in
//! order, ignoring ASCII case. Among all such alignments the scorer picks the
//! one with the fewest contiguous runs and the most word-boundary hits, using
//! a small dynamic-programming table over (query index, name index). A greedy
//! leftmost scan is not enough: for `abc` against `a-b-c-abc` it would settle
//! on three scattered runs and miss the contiguous `abc` at the end.

use super::MatchResult;
use crate::store::Candidate;
use chrono::{DateTime, Utc};
use std::sync::Arc;

/// Weight of `len(query) / len(name)` in the fuzzy score
pub const COVERAGE_WEIGHT: f64 = 0.5;
/// Weight of the contiguity ratio `(m - runs) / (m - 1)`
pub const CONTIGUITY_WEIGHT: f64 = 0.5;
/// Bonus per matched character that starts a word
pub const BOUNDARY_BONUS: f64 = 0.1;
/// Weight of the fuzzy score in the combined score
pub const FUZZY_WEIGHT: f64 = 0.7;
/// Weight of the recency score in the combined score
pub const RECENCY_WEIGHT: f64 = 0.3;
/// Length of the linear recency decay window
pub const RECENCY_WINDOW_DAYS: f64 = 365.0;

const SECONDS_PER_DAY: f64 = 24.0 * 60.0 * 60.0;

/// Outcome of a fuzzy match that succeeded
#[derive(Debug, Clone, PartialEq)]
pub struct FuzzyMatch {
    /// Match quality in `[0, 1]`
    pub score: f64,
    /// Character indices (not byte offsets) of the matched name characters
    pub indices: Vec<usize>,
}

/// Score `query` against a candidate; `None` means the candidate is excluded
#[must_use]
pub fn score(query: &str, candidate: &Arc<Candidate>, now: DateTime<Utc>) -> Option<MatchResult> {
    let fuzzy = fuzzy_match(query, &candidate.name)?;
    let recency = candidate
        .last_accessed_at
        .map_or(0.0, |accessed| recency_score(accessed, now));

    Some(MatchResult {
        candidate: Arc::clone(candidate),
        fuzzy_score: fuzzy.score,
        recency_score: recency,
        combined_score: FUZZY_WEIGHT * fuzzy.score + RECENCY_WEIGHT * recency,
        matched_indices: fuzzy.indices,
    })
}

/// Linear decay from 1.0 (accessed now or in the future) to 0.0 at 365 days
#[must_use]
pub fn recency_score(last_accessed: DateTime<Utc>, now: DateTime<Utc>) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    let days = (now - last_accessed).num_seconds() as f64 / SECONDS_PER_DAY;
    (1.0 - days.max(0.0) / RECENCY_WINDOW_DAYS).max(0.0)
}

/// Ordered, case-insensitive subsequence match of `query` within `name`
///
/// An empty query matches everything with score 1.0 and no highlighted
/// characters.
#[must_use]
pub fn fuzzy_match(query: &str, name: &str) -> Option<FuzzyMatch> {
    let query: Vec<char> = query.chars().map(|c| c.to_ascii_lowercase()).collect();
    if query.is_empty() {
        return Some(FuzzyMatch {
            score: 1.0,
            indices: Vec::new(),
        });
    }

    let original: Vec<char> = name.chars().collect();
    if original.len() < query.len() {
        return None;
    }
    let lowered: Vec<char> = original.iter().map(char::to_ascii_lowercase).collect();
    let boundaries: Vec<bool> = (0..original.len())
        .map(|i| is_boundary(&original, i))
        .collect();

    let indices = best_alignment(&query, &lowered, &boundaries)?;

    let m = query.len();
    let runs = 1 + indices.windows(2).filter(|w| w[1] != w[0] + 1).count();
    let contiguity = if m == 1 {
        1.0
    } else {
        #[allow(clippy::cast_precision_loss)]
        let ratio = (m - runs) as f64 / (m - 1) as f64;
        ratio
    };
    let boundary_hits = indices.iter().filter(|&&i| boundaries[i]).count();

    #[allow(clippy::cast_precision_loss)]
    let coverage = m as f64 / original.len() as f64;
    #[allow(clippy::cast_precision_loss)]
    let raw = COVERAGE_WEIGHT * coverage
        + CONTIGUITY_WEIGHT * contiguity
        + BOUNDARY_BONUS * boundary_hits as f64;

    Some(FuzzyMatch {
        score: raw.clamp(0.0, 1.0),
        indices,
    })
}

/// Whether the character at `i` starts a word
fn is_boundary(name: &[char], i: usize) -> bool {
    if i == 0 {
        return true;
    }
    let prev = name[i - 1];
    matches!(prev, '-' | '_' | '.' | ' ' | '/') || (prev.is_lowercase() && name[i].is_uppercase())
}

/// Find the alignment maximizing run extensions and boundary hits
///
/// `best[i][j]` holds the best objective for matching `query[..=i]` with
/// `query[i]` placed on `name[j]`. A placement either extends the run ending
/// at `j - 1` (earning the extension weight) or starts a new run after any
/// earlier placement. Ties keep the earliest predecessor, so equal-valued
/// alignments resolve to the leftmost one.
fn best_alignment(query: &[char], name: &[char], boundaries: &[bool]) -> Option<Vec<usize>> {
    let m = query.len();
    let n = name.len();
    #[allow(clippy::cast_precision_loss)]
    let extension = if m > 1 {
        CONTIGUITY_WEIGHT / (m - 1) as f64
    } else {
        0.0
    };
    let bonus = |j: usize| if boundaries[j] { BOUNDARY_BONUS } else { 0.0 };

    let mut best: Vec<Vec<Option<f64>>> = vec![vec![None; n]; m];
    let mut from: Vec<Vec<usize>> = vec![vec![0; n]; m];

    for j in 0..n {
        if name[j] == query[0] {
            best[0][j] = Some(bonus(j));
        }
    }

    for i in 1..m {
        // Best placement of query[i - 1] at least two columns back
        let mut prefix: Option<(f64, usize)> = None;
        for j in 1..n {
            if j >= 2
                && let Some(value) = best[i - 1][j - 2]
                && prefix.is_none_or(|(p, _)| value > p)
            {
                prefix = Some((value, j - 2));
            }
            if name[j] != query[i] {
                continue;
            }

            let mut candidate = prefix;
            if let Some(prev) = best[i - 1][j - 1] {
                let extended = prev + extension;
                if candidate.is_none_or(|(value, _)| extended > value) {
                    candidate = Some((extended, j - 1));
                }
            }
            if let Some((value, k)) = candidate {
                best[i][j] = Some(value + bonus(j));
                from[i][j] = k;
            }
        }
    }

    // Pick the best final placement, leftmost on ties
    let mut end: Option<(f64, usize)> = None;
    for (j, value) in best[m - 1].iter().enumerate() {
        if let Some(value) = *value
            && end.is_none_or(|(e, _)| value > e)
        {
            end = Some((value, j));
        }
    }
    let (_, mut j) = end?;

    let mut indices = vec![0; m];
    for i in (0..m).rev() {
        indices[i] = j;
        if i > 0 {
            j = from[i][j];
        }
    }
    Some(indices)
}
