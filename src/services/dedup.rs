//! Near-duplicate detection for place names.
//!
//! Place providers often return the same landmark several times under
//! slightly different names ("The Red Fort", "Red Fort", "Red Fort Museum").
//! Names are normalized and then compared by equality, containment and a
//! Ratcliff-Obershelp similarity ratio.

use crate::constants::NAME_SIMILARITY_THRESHOLD;
use crate::models::Place;

/// Leading words dropped during normalization, tried in order, each at most once
const HONORIFIC_PREFIXES: [&str; 4] = ["the ", "sri ", "shri ", "sree "];

/// Trailing venue words dropped during normalization, tried in order, each at most once
const VENUE_SUFFIXES: [&str; 7] = [
    " temple", " church", " mosque", " palace", " fort", " museum", " park",
];

/// Lowercase, strip honorifics and venue words, drop punctuation, collapse whitespace
pub fn normalize_place_name(name: &str) -> String {
    let mut normalized = name.to_lowercase();

    for prefix in HONORIFIC_PREFIXES {
        if let Some(rest) = normalized.strip_prefix(prefix) {
            normalized = rest.to_string();
        }
    }

    for suffix in VENUE_SUFFIXES {
        if let Some(rest) = normalized.strip_suffix(suffix) {
            normalized = rest.to_string();
        }
    }

    normalized
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '_' || c.is_whitespace())
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Ratcliff-Obershelp ratio: `2 * matched / (len(a) + len(b))`, in `[0, 1]`
pub fn similarity_ratio(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let total = a.len() + b.len();

    if total == 0 {
        return 1.0;
    }

    let matched = matching_chars(&a, &b, 0, a.len(), 0, b.len());
    2.0 * matched as f64 / total as f64
}

/// Whether two names refer to the same physical place
pub fn are_similar_places(name1: &str, name2: &str) -> bool {
    let norm1 = normalize_place_name(name1);
    let norm2 = normalize_place_name(name2);

    if norm1 == norm2 {
        return true;
    }

    // An empty name carries no information and would be "contained" in anything
    if norm1.is_empty() || norm2.is_empty() {
        return false;
    }

    if norm1.contains(&norm2) || norm2.contains(&norm1) {
        return true;
    }

    similarity_ratio(&norm1, &norm2) >= NAME_SIMILARITY_THRESHOLD
}

/// Whether `candidate_name` duplicates any of `existing_places`
pub fn is_duplicate(candidate_name: &str, existing_places: &[Place]) -> bool {
    existing_places
        .iter()
        .any(|existing| are_similar_places(candidate_name, &existing.name))
}

/// Keep the first place of each duplicate group, preserving insertion order
pub fn dedup_places(places: impl IntoIterator<Item = Place>) -> Vec<Place> {
    let mut unique: Vec<Place> = Vec::new();

    for place in places {
        if is_duplicate(&place.name, &unique) {
            tracing::debug!(name = %place.name, "Dropping duplicate place");
            continue;
        }
        unique.push(place);
    }

    unique
}

/// Total size of the matching blocks between `a[alo..ahi]` and `b[blo..bhi]`
fn matching_chars(a: &[char], b: &[char], alo: usize, ahi: usize, blo: usize, bhi: usize) -> usize {
    let (i, j, size) = longest_match(a, b, alo, ahi, blo, bhi);
    if size == 0 {
        return 0;
    }

    let mut matched = size;
    if alo < i && blo < j {
        matched += matching_chars(a, b, alo, i, blo, j);
    }
    if i + size < ahi && j + size < bhi {
        matched += matching_chars(a, b, i + size, ahi, j + size, bhi);
    }
    matched
}

/// Longest common block in the given ranges.
/// Ties go to the block starting earliest in `a`, then earliest in `b`.
fn longest_match(
    a: &[char],
    b: &[char],
    alo: usize,
    ahi: usize,
    blo: usize,
    bhi: usize,
) -> (usize, usize, usize) {
    let (mut best_i, mut best_j, mut best_size) = (alo, blo, 0);
    // run_lengths[j + 1 - blo] = length of the match ending at a[i], b[j]
    let width = bhi - blo + 1;
    let mut previous = vec![0usize; width];
    let mut current = vec![0usize; width];

    for i in alo..ahi {
        for j in blo..bhi {
            let slot = j - blo + 1;
            if a[i] == b[j] {
                let run = previous[slot - 1] + 1;
                current[slot] = run;
                if run > best_size {
                    best_i = i + 1 - run;
                    best_j = j + 1 - run;
                    best_size = run;
                }
            } else {
                current[slot] = 0;
            }
        }
        std::mem::swap(&mut previous, &mut current);
    }

    (best_i, best_j, best_size)
}
