//! Label allocation.
//!
//! Labels are drawn from a fixed home-row-heavy alphabet. Single
//! characters come first; past that, two-character labels in nested order
//! with the first character varying slowest.

/// Characters a label may contain, in allocation order.
pub const LABEL_ALPHABET: [char; 14] = [
    's', 'a', 'd', 'f', 'j', 'k', 'l', 'e', 'w', 'c', 'm', 'p', 'g', 'h',
];

/// Largest number of labels [`allocate`] can produce.
pub const MAX_LABELS: usize = LABEL_ALPHABET.len() + LABEL_ALPHABET.len() * LABEL_ALPHABET.len();

/// Whether `c` (case-insensitive) belongs to [`LABEL_ALPHABET`].
pub fn is_label_char(c: char) -> bool {
    LABEL_ALPHABET.contains(&c.to_ascii_lowercase())
}

/// Produce `min(n, MAX_LABELS)` distinct labels.
pub fn allocate(n: usize) -> Vec<String> {
    let n = n.min(MAX_LABELS);
    let mut labels: Vec<String> = LABEL_ALPHABET
        .iter()
        .take(n)
        .map(|c| c.to_string())
        .collect();

    // Past 14 targets the single characters stay, so a pair starting with
    // one of them can never be typed: the single label resolves first.
    'outer: for first in LABEL_ALPHABET {
        for second in LABEL_ALPHABET {
            if labels.len() >= n {
                break 'outer;
            }
            labels.push([first, second].iter().collect());
        }
    }

    labels
}

#[cfg(test)]
#[path = "labels_tests.rs"]
mod tests;
