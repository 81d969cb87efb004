//! Ranks a candidate snapshot for a query

use super::MatchResult;
use super::scorer::score;
use crate::store::Candidate;
use chrono::{DateTime, Utc};
use std::cmp::{Ordering, Reverse};
use std::sync::Arc;

/// Quantization step for combined scores before comparison
///
/// Scores are rounded to the nearest multiple of this step, so two scores
/// compare equal when they round to the same key. Scores just either side of
/// a rounding boundary stay distinct even when closer than the step; the
/// comparator remains deterministic and total.
pub const SCORE_EPSILON: f64 = 1e-6;

/// Score every candidate, drop non-matches, and sort best first
///
/// Ordering: combined score descending (quantized to [`SCORE_EPSILON`]), then
/// shorter name, then more recently accessed, then original store order.
#[must_use]
pub fn rank(query: &str, candidates: &[Arc<Candidate>], now: DateTime<Utc>) -> Vec<MatchResult> {
    let mut ranked: Vec<(usize, MatchResult)> = candidates
        .iter()
        .enumerate()
        .filter_map(|(idx, c)| score(query, c, now).map(|m| (idx, m)))
        .collect();

    ranked.sort_by(|(a_idx, a), (b_idx, b)| compare(a, b).then_with(|| a_idx.cmp(b_idx)));

    ranked.into_iter().map(|(_, m)| m).collect()
}

/// Quantize a score so the comparator stays a total order
#[allow(clippy::cast_possible_truncation)]
fn score_key(score: f64) -> i64 {
    (score / SCORE_EPSILON).round() as i64
}

fn compare(a: &MatchResult, b: &MatchResult) -> Ordering {
    Reverse(score_key(a.combined_score))
        .cmp(&Reverse(score_key(b.combined_score)))
        .then_with(|| {
            a.candidate
                .name
                .chars()
                .count()
                .cmp(&b.candidate.name.chars().count())
        })
        .then_with(|| {
            Reverse(a.candidate.last_accessed_at).cmp(&Reverse(b.candidate.last_accessed_at))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{candidate, now, snapshot};
    use chrono::Duration;

    fn names(ranked: &[MatchResult]) -> Vec<&str> {
        ranked.iter().map(|m| m.candidate.name.as_str()).collect()
    }

    #[test]
    fn test_empty_query_keeps_everything() {
        let store = snapshot(vec![candidate("alpha", 3), candidate("beta", 1)]);
        let ranked = rank("", &store, now());

        assert_eq!(ranked.len(), 2);
        assert!(ranked.iter().all(|m| (m.fuzzy_score - 1.0).abs() < f64::EPSILON));
        // Equal fuzzy scores: the more recent one wins on recency
        assert_eq!(names(&ranked), vec!["beta", "alpha"]);
    }

    #[test]
    fn test_non_matches_are_dropped() {
        let store = snapshot(vec![
            candidate("2025-11-30-redis-server", 0),
            candidate("2025-11-20-redis-test", 0),
            candidate("2025-10-15-red", 0),
        ]);
        let ranked = rank("rds", &store, now());

        assert_eq!(
            names(&ranked),
            vec!["2025-11-30-redis-server", "2025-11-20-redis-test"]
        );
    }

    #[test]
    fn test_recency_breaks_fuzzy_tie() {
        let store = snapshot(vec![
            candidate("2025-01-01-redis-a", 200),
            candidate("2025-01-01-redis-b", 2),
        ]);
        let ranked = rank("redis", &store, now());
        assert_eq!(names(&ranked)[0], "2025-01-01-redis-b");
    }

    #[test]
    fn test_shorter_name_wins_equal_score() {
        let a = Arc::new(candidate("longer-name", 5));
        let b = Arc::new(candidate("short", 5));
        let make = |c: &Arc<Candidate>| MatchResult {
            candidate: Arc::clone(c),
            fuzzy_score: 0.5,
            recency_score: 0.5,
            combined_score: 0.5,
            matched_indices: Vec::new(),
        };

        assert_eq!(compare(&make(&b), &make(&a)), Ordering::Less);
        assert_eq!(compare(&make(&a), &make(&b)), Ordering::Greater);
    }

    #[test]
    fn test_recency_then_store_order_break_remaining_ties() {
        let now = now();
        let mut older = candidate("same-one", 0);
        older.last_accessed_at = Some(now - Duration::days(10));
        let mut newer = candidate("same-two", 0);
        newer.last_accessed_at = Some(now - Duration::days(1));
        let make = |c: Candidate| MatchResult {
            candidate: Arc::new(c),
            fuzzy_score: 0.0,
            recency_score: 0.0,
            combined_score: 0.25,
            matched_indices: Vec::new(),
        };
        assert_eq!(compare(&make(newer), &make(older)), Ordering::Less);

        // Fully identical keys fall back to store order
        let store = snapshot(vec![candidate("twin-a", 7), candidate("twin-b", 7)]);
        let ranked = rank("twin", &store, now);
        assert_eq!(names(&ranked), vec!["twin-a", "twin-b"]);
    }

    #[test]
    fn test_ranking_is_deterministic() {
        let store = snapshot(vec![
            candidate("2025-11-30-redis-server", 4),
            candidate("2025-11-20-redis-test", 4),
            candidate("2025-09-01-rust-dsl", 40),
            candidate("2024-01-01-readers", 400),
            candidate("2025-02-02-rds-proxy", 9),
        ]);

        let first = rank("rds", &store, now());
        let second = rank("rds", &store, now());
        assert_eq!(first, second);
        assert!(
            first
                .windows(2)
                .all(|w| w[0].combined_score + SCORE_EPSILON >= w[1].combined_score)
        );
    }

    #[test]
    fn test_missing_timestamps_sort_after_known_ones_on_tie() {
        let mut unknown = candidate("same-one", 0);
        unknown.last_accessed_at = None;
        let known = candidate("same-two", 0);
        let make = |c: Candidate| MatchResult {
            candidate: Arc::new(c),
            fuzzy_score: 0.0,
            recency_score: 0.0,
            combined_score: 0.25,
            matched_indices: Vec::new(),
        };
        assert_eq!(compare(&make(known), &make(unknown)), Ordering::Less);
    }
}
