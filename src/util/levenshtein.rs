//! Edit distance algorithms used for fuzzy term matching.
//!
//! Distances are computed over `char`s, not bytes, so accented and non-Latin
//! terms count one edit per character.

use std::cmp::min;

/// Calculate the Levenshtein distance between two strings.
///
/// This is the minimum number of single-character insertions, deletions or
/// substitutions required to change one string into the other.
pub fn levenshtein_distance(s1: &str, s2: &str) -> usize {
    edit_distance(s1, s2, false, usize::MAX).unwrap_or(usize::MAX)
}

/// Calculate the Damerau-Levenshtein (optimal string alignment) distance,
/// which counts a swap of two adjacent characters as a single edit.
pub fn damerau_levenshtein_distance(s1: &str, s2: &str) -> usize {
    edit_distance(s1, s2, true, usize::MAX).unwrap_or(usize::MAX)
}

/// Calculate the edit distance with a maximum threshold for early termination.
///
/// Returns `None` as soon as the distance is known to exceed `threshold`.
pub fn edit_distance(s1: &str, s2: &str, transpositions: bool, threshold: usize) -> Option<usize> {
    let a: Vec<char> = s1.chars().collect();
    let b: Vec<char> = s2.chars().collect();

    if a.len().abs_diff(b.len()) > threshold {
        return None;
    }
    if a.is_empty() || b.is_empty() {
        let distance = a.len().max(b.len());
        return (distance <= threshold).then_some(distance);
    }

    // Three rows: the one before the previous row is needed for transpositions.
    let mut before_prev: Vec<usize> = vec![0; b.len() + 1];
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr: Vec<usize> = vec![0; b.len() + 1];

    for i in 1..=a.len() {
        curr[0] = i;
        let mut min_in_row = i;

        for j in 1..=b.len() {
            let cost = usize::from(a[i - 1] != b[j - 1]);
            let mut value = min(
                min(
                    prev[j] + 1,     // deletion
                    curr[j - 1] + 1, // insertion
                ),
                prev[j - 1] + cost, // substitution
            );

            if transpositions && i > 1 && j > 1 && a[i - 1] == b[j - 2] && a[i - 2] == b[j - 1] {
                value = min(value, before_prev[j - 2] + 1);
            }

            curr[j] = value;
            min_in_row = min(min_in_row, value);
        }

        if min_in_row > threshold {
            return None;
        }

        std::mem::swap(&mut before_prev, &mut prev);
        std::mem::swap(&mut prev, &mut curr);
    }

    let distance = prev[b.len()];
    (distance <= threshold).then_some(distance)
}
