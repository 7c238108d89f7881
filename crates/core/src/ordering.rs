//! Comparison of partially ordered sort keys

use std::cmp::Ordering;

/// Compare two sort keys that may not be totally ordered.
///
/// A key that cannot be compared with itself (`NaN`, or a sequence holding
/// one) sorts after every key that can, and all such keys are equal to each
/// other. Among the remaining keys an incomparable pair is treated as equal,
/// so a stable sort keeps those elements in their original relative order.
pub fn compare_keys<K: PartialOrd + ?Sized>(a: &K, b: &K) -> Ordering {
    let a_unordered = a.partial_cmp(a).is_none();
    let b_unordered = b.partial_cmp(b).is_none();

    match (a_unordered, b_unordered) {
        (false, false) => a.partial_cmp(b).unwrap_or(Ordering::Equal),
        (unordered_a, unordered_b) => unordered_a.cmp(&unordered_b),
    }
}
