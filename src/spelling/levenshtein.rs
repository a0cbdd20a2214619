//! Edit distance between candidate words.

use std::cmp::min;

/// Calculates the Levenshtein distance between two words.
///
/// The distance is the minimum number of single-character insertions,
/// deletions, and substitutions needed to turn one word into the other, each
/// at unit cost. Comparison is per `char`, so words of any script compare
/// correctly.
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    if a_chars.is_empty() {
        return b_chars.len();
    }
    if b_chars.is_empty() {
        return a_chars.len();
    }

    // Two rolling rows of the DP matrix are enough.
    let mut prev_row: Vec<usize> = (0..=b_chars.len()).collect();
    let mut curr_row = vec![0; b_chars.len() + 1];

    for (i, &a_ch) in a_chars.iter().enumerate() {
        curr_row[0] = i + 1;

        for (j, &b_ch) in b_chars.iter().enumerate() {
            let cost = usize::from(a_ch != b_ch);
            curr_row[j + 1] = min(
                min(
                    prev_row[j + 1] + 1, // deletion
                    curr_row[j] + 1,     // insertion
                ),
                prev_row[j] + cost, // substitution
            );
        }

        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[b_chars.len()]
}
