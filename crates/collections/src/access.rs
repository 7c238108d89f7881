//! Positional access to the head and tail of a sequence

/// The first element, or `None` for an empty sequence.
pub fn first<T>(sequence: &[T]) -> Option<&T> {
    sequence.first()
}

/// The first `n` elements. Asking for more than are available returns them all.
pub fn first_n<T>(sequence: &[T], n: usize) -> &[T] {
    &sequence[..n.min(sequence.len())]
}

/// The last element, or `None` for an empty sequence.
pub fn last<T>(sequence: &[T]) -> Option<&T> {
    sequence.last()
}

/// The last `n` elements. Asking for more than are available returns them all.
pub fn last_n<T>(sequence: &[T], n: usize) -> &[T] {
    &sequence[sequence.len().saturating_sub(n)..]
}
