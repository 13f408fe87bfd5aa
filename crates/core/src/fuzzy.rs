//! Fuzzy string ratios on a 0–100 scale.
//!
//! Multi-strategy matching on top of `strsim`, following the token-set /
//! token-sort / partial strategies familiar from the rapidfuzz family.
//! All inputs are expected to be pre-normalized (see `normalize`).

use std::collections::BTreeSet;

use strsim::normalized_levenshtein;

/// Plain normalized-Levenshtein ratio. Two empty strings score 100.
pub fn ratio(a: &str, b: &str) -> f64 {
    normalized_levenshtein(a, b) * 100.0
}

/// Substring-tolerant ratio: best window of the longer string against the
/// shorter one. A perfect substring scores 100.
pub fn partial_ratio(a: &str, b: &str) -> f64 {
    let (short, long) = if a.chars().count() <= b.chars().count() { (a, b) } else { (b, a) };
    if short.is_empty() {
        return if long.is_empty() { 100.0 } else { 0.0 };
    }

    let short_len = short.chars().count();
    let long_chars: Vec<char> = long.chars().collect();
    if long_chars.len() == short_len {
        return ratio(short, long);
    }

    let mut best = 0.0_f64;
    for start in 0..=long_chars.len() - short_len {
        let window: String = long_chars[start..start + short_len].iter().collect();
        best = best.max(ratio(short, &window));
        if best >= 100.0 {
            break;
        }
    }
    best
}

/// Word-order-insensitive ratio: alphabetize whitespace tokens, compare.
pub fn token_sort_ratio(a: &str, b: &str) -> f64 {
    ratio(&sort_tokens(a), &sort_tokens(b))
}

/// Set-based token ratio: compares the sorted token intersection against
/// each side's remainder, taking the best of the three pairings. Tolerant
/// of duplicated words and large shared cores.
pub fn token_set_ratio(a: &str, b: &str) -> f64 {
    let tokens_a: BTreeSet<&str> = a.split_whitespace().collect();
    let tokens_b: BTreeSet<&str> = b.split_whitespace().collect();
    if tokens_a.is_empty() && tokens_b.is_empty() {
        return 100.0;
    }

    // BTreeSet iteration is ordered, so the joined strings are canonical.
    let sect = tokens_a.intersection(&tokens_b).copied().collect::<Vec<_>>().join(" ");
    let diff_a = tokens_a.difference(&tokens_b).copied().collect::<Vec<_>>().join(" ");
    let diff_b = tokens_b.difference(&tokens_a).copied().collect::<Vec<_>>().join(" ");

    let sect_plus_a = join_nonempty(&sect, &diff_a);
    let sect_plus_b = join_nonempty(&sect, &diff_b);

    ratio(&sect, &sect_plus_a)
        .max(ratio(&sect, &sect_plus_b))
        .max(ratio(&sect_plus_a, &sect_plus_b))
}

fn sort_tokens(s: &str) -> String {
    let mut tokens: Vec<&str> = s.split_whitespace().collect();
    tokens.sort_unstable();
    tokens.join(" ")
}

fn join_nonempty(a: &str, b: &str) -> String {
    match (a.is_empty(), b.is_empty()) {
        (true, _) => b.to_owned(),
        (_, true) => a.to_owned(),
        _ => format!("{a} {b}"),
    }
}
