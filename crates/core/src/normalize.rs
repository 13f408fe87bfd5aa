//! Text canonicalization and blocking-key generation.

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

use crate::constants::{BLOCK_PREFIX_MAX_CHARS, NON_VINTAGE_SENTINEL};

/// Canonicalize free text for matching.
///
/// Lowercases, strips diacritics (NFD decomposition, combining marks
/// dropped), deletes every character that is neither alphanumeric nor
/// whitespace, collapses whitespace runs, and trims. Pure and idempotent.
///
/// Punctuation is deleted, not replaced with a space: tightly-joined
/// tokens fuse ("A.O.C." becomes "aoc"). Matching depends on this staying
/// stable across runs.
pub fn normalize(text: Option<&str>) -> String {
    let Some(text) = text else {
        return String::new();
    };
    let stripped: String = text
        .to_lowercase()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .filter(|c| c.is_alphanumeric() || c.is_whitespace())
        .collect();
    stripped.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Coarse bucket key: first word of the normalized producer plus vintage.
///
/// Groups plausibly-identical wines so pairwise comparison stays
/// tractable. Wines whose producer's *first* word differs (reordered
/// names) land in separate buckets and are never compared — accepted
/// recall trade-off.
///
/// Must be recomputed (via a full normalization pass) whenever producer
/// or vintage changes.
pub fn blocking_key(producer: Option<&str>, vintage: Option<&str>) -> String {
    let vintage = vintage.filter(|v| !v.is_empty()).unwrap_or(NON_VINTAGE_SENTINEL);
    let Some(producer) = producer.filter(|p| !p.is_empty()) else {
        return format!("unknown_{vintage}");
    };

    let normalized = normalize(Some(producer));
    let first_word = normalized.split_whitespace().next().unwrap_or("unknown");
    let prefix: String = first_word.chars().take(BLOCK_PREFIX_MAX_CHARS).collect();
    format!("{prefix}_{vintage}")
}
