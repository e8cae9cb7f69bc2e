//! Composite string-similarity scoring.
//!
//! No single metric handles every way a spreadsheet name can diverge from a
//! filename: `partial_ratio` tolerates substrings, the token variants
//! tolerate word reordering and extra words, and the plain ratio on raw
//! strings catches exact or near-exact names that normalization would have
//! blurred. The composite takes the max — whichever lens makes the pair look
//! most alike wins.
//!
//! All metrics return 0–100. The base metric is
//! [`strsim::normalized_levenshtein`] scaled to that range; the variants are
//! token and window constructions on top of it.

use std::collections::BTreeSet;
use strsim::normalized_levenshtein;

/// Plain similarity ratio between two strings (0–100).
///
/// `ratio(x, x) == 100` for any `x`, including the empty string.
pub fn ratio(a: &str, b: &str) -> u32 {
    if a.is_empty() && b.is_empty() {
        return 100;
    }
    (normalized_levenshtein(a, b) * 100.0).round() as u32
}

/// Best ratio of the shorter string against any equal-length window of the
/// longer one. Rewards "needle inside haystack" pairs that the plain ratio
/// punishes for the length difference.
pub fn partial_ratio(a: &str, b: &str) -> u32 {
    let (short, long) = if a.chars().count() <= b.chars().count() {
        (a, b)
    } else {
        (b, a)
    };
    if short.is_empty() {
        return if long.is_empty() { 100 } else { 0 };
    }

    let long_chars: Vec<char> = long.chars().collect();
    let window_len = short.chars().count();
    let mut best = 0;
    for window in long_chars.windows(window_len) {
        let candidate: String = window.iter().collect();
        best = best.max(ratio(short, &candidate));
        if best == 100 {
            break;
        }
    }
    best
}

/// Ratio after sorting whitespace-separated tokens on both sides.
///
/// Makes the score order-insensitive: `"pathfinder iron fang"` matches
/// `"iron fang pathfinder"` at 100.
pub fn token_sort_ratio(a: &str, b: &str) -> u32 {
    ratio(&sorted_tokens(a), &sorted_tokens(b))
}

/// Set-based token ratio: scores the common token core against each side's
/// extras, so one side carrying additional words is barely penalized.
pub fn token_set_ratio(a: &str, b: &str) -> u32 {
    let set_a: BTreeSet<&str> = a.split_whitespace().collect();
    let set_b: BTreeSet<&str> = b.split_whitespace().collect();

    let common: Vec<&str> = set_a.intersection(&set_b).copied().collect();
    let only_a: Vec<&str> = set_a.difference(&set_b).copied().collect();
    let only_b: Vec<&str> = set_b.difference(&set_a).copied().collect();

    let base = common.join(" ");
    let with_a = join_nonempty(&base, &only_a.join(" "));
    let with_b = join_nonempty(&base, &only_b.join(" "));

    ratio(&base, &with_a)
        .max(ratio(&base, &with_b))
        .max(ratio(&with_a, &with_b))
}

/// Composite score between a spreadsheet name and a filename stem (0–100).
///
/// Maximum over the four normalized-form metrics plus a plain ratio of the
/// lowercased raw forms.
pub fn composite(a_norm: &str, b_norm: &str, a_raw: &str, b_raw: &str) -> u32 {
    [
        ratio(a_norm, b_norm),
        partial_ratio(a_norm, b_norm),
        token_sort_ratio(a_norm, b_norm),
        token_set_ratio(a_norm, b_norm),
        ratio(&a_raw.to_lowercase(), &b_raw.to_lowercase()),
    ]
    .into_iter()
    .max()
    .unwrap_or(0)
}

fn sorted_tokens(s: &str) -> String {
    let mut tokens: Vec<&str> = s.split_whitespace().collect();
    tokens.sort_unstable();
    tokens.join(" ")
}

fn join_nonempty(left: &str, right: &str) -> String {
    match (left.is_empty(), right.is_empty()) {
        (true, _) => right.to_string(),
        (_, true) => left.to_string(),
        _ => format!("{left} {right}"),
    }
}
