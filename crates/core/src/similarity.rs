//! Pairwise similarity scoring between normalized records.

use crate::fuzzy::{partial_ratio, token_set_ratio, token_sort_ratio};
use crate::record::Matchable;

/// Fuzzy-match score between two records, 0–100.
///
/// Averages up to four component scores: token-set on producers,
/// token-set on cuvées, and partial + token-sort on the
/// `"{producer} {cuvee}"` concatenations. A component whose underlying
/// field is missing on either side is skipped — absent optional data is
/// never a penalty. Returns 0.0 when nothing is comparable.
///
/// Symmetric, and exactly 100 for a record compared against itself as
/// long as producer or cuvée is populated.
pub fn similarity<R: Matchable>(a: &R, b: &R) -> f64 {
    let mut scores: Vec<f64> = Vec::with_capacity(4);

    if let (Some(pa), Some(pb)) = (non_empty(a.norm_producer()), non_empty(b.norm_producer())) {
        scores.push(token_set_ratio(pa, pb));
    }
    if let (Some(ca), Some(cb)) = (non_empty(a.norm_cuvee()), non_empty(b.norm_cuvee())) {
        scores.push(token_set_ratio(ca, cb));
    }

    let full_a = full_text(a);
    let full_b = full_text(b);
    if !full_a.is_empty() && !full_b.is_empty() {
        scores.push(partial_ratio(&full_a, &full_b));
        scores.push(token_sort_ratio(&full_a, &full_b));
    }

    if scores.is_empty() {
        return 0.0;
    }
    scores.iter().sum::<f64>() / scores.len() as f64
}

fn full_text<R: Matchable>(record: &R) -> String {
    format!(
        "{} {}",
        record.norm_producer().unwrap_or(""),
        record.norm_cuvee().unwrap_or("")
    )
    .trim()
    .to_owned()
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty())
}
