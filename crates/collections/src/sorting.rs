//! Reordering: stable sorting by a criterion, and shuffling

use rand::seq::SliceRandom;
use rand::Rng;
use underbar_core::{compare_keys, Collection, Record};

/// Elements sorted in ascending order of `criterion(element)`.
///
/// The sort is stable: elements with equal keys keep their original relative
/// order. The criterion runs exactly once per element. Keys that do not
/// compare with themselves (such as `NaN`) sort last.
pub fn sort_by<'c, C, K, F>(collection: &'c C, mut criterion: F) -> Vec<C::Value>
where
    C: Collection + ?Sized,
    C::Value: Clone,
    K: PartialOrd,
    F: FnMut(&'c C::Value) -> K,
{
    let mut keyed: Vec<(K, &'c C::Value)> = collection
        .values()
        .map(|value| (criterion(value), value))
        .collect();
    keyed.sort_by(|(a, _), (b, _)| compare_keys(a, b));
    keyed.into_iter().map(|(_, value)| value.clone()).collect()
}

/// Records sorted by the field called `name`. Records without it sort first.
pub fn sort_by_field<T>(sequence: &[T], name: &str) -> Vec<T>
where
    T: Record + Clone,
    T::Field: PartialOrd,
{
    sort_by(sequence, |record| record.field(name))
}

/// A uniformly random permutation of `sequence`, using the thread-local RNG.
pub fn shuffle<T: Clone>(sequence: &[T]) -> Vec<T> {
    shuffle_with(sequence, &mut rand::thread_rng())
}

/// A uniformly random permutation of `sequence` drawn from `rng`.
pub fn shuffle_with<T, R>(sequence: &[T], rng: &mut R) -> Vec<T>
where
    T: Clone,
    R: Rng + ?Sized,
{
    let mut shuffled = sequence.to_vec();
    shuffled.shuffle(rng);
    shuffled
}
