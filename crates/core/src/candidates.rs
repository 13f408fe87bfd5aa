//! Duplicate-candidate search within one blocking bucket.

use serde::Serialize;

use crate::record::Matchable;
use crate::similarity::similarity;

/// A scored pair of likely-duplicate record ids.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CandidatePair {
    pub id1: i64,
    pub id2: i64,
    pub score: f64,
}

/// All-pairs comparison within one blocking bucket.
///
/// `records` must already be filtered to a single block of active
/// records. Vintage is a hard gate, not a fuzzy signal: unequal vintages
/// never pair, two missing vintages (or two `"NV"` sentinels) do.
///
/// Results sort by score descending; ties break by ascending ids so
/// repeated runs over the same snapshot are reproducible.
pub fn find_candidates<R: Matchable>(records: &[R], threshold: f64) -> Vec<CandidatePair> {
    let mut candidates = Vec::new();

    for (i, a) in records.iter().enumerate() {
        for b in &records[i + 1..] {
            if a.vintage() != b.vintage() {
                continue;
            }
            let score = similarity(a, b);
            if score >= threshold {
                candidates.push(CandidatePair {
                    id1: a.record_id(),
                    id2: b.record_id(),
                    score,
                });
            }
        }
    }

    candidates.sort_by(|x, y| {
        y.score
            .total_cmp(&x.score)
            .then_with(|| (x.id1, x.id2).cmp(&(y.id1, y.id2)))
    });
    candidates
}
