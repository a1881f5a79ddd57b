//! Single-edit adjacency between words.
//!
//! Two words are adjacent when one can be turned into the other by exactly one
//! substitution, insertion, or deletion. Comparison is per `char`, so accented
//! letters count as one position.

/// Check whether two words are exactly one edit apart.
///
/// Equal words are never adjacent, and neither are words whose lengths differ
/// by two or more. The relation is symmetric.
pub fn is_adjacent(a: &str, b: &str) -> bool {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    match a.len().abs_diff(b.len()) {
        0 => single_substitution(&a, &b),
        1 if a.len() > b.len() => single_deletion(&a, &b),
        1 => single_deletion(&b, &a),
        _ => false,
    }
}

/// Equal-length words differing in exactly one position (Hamming distance 1).
fn single_substitution(a: &[char], b: &[char]) -> bool {
    a.iter().zip(b).filter(|(x, y)| x != y).count() == 1
}

/// `shorter` is `longer` with exactly one character deleted.
/// Callers guarantee `longer.len() == shorter.len() + 1`.
fn single_deletion(longer: &[char], shorter: &[char]) -> bool {
    let mut skipped = false;
    let (mut i, mut j) = (0, 0);
    while i < longer.len() && j < shorter.len() {
        if longer[i] == shorter[j] {
            i += 1;
            j += 1;
        } else if skipped {
            return false;
        } else {
            skipped = true;
            i += 1;
        }
    }
    // Any unmatched tail is the single trailing character of `longer`.
    true
}
