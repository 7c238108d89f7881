//! Traversal primitives shared by every other operation.
//!
//! Sequences are walked in ascending index order and mappings in their own
//! enumeration order (see [`Collection`]).

use underbar_core::{Collection, Truthy};

/// Call `iteratee(value, key, collection)` for every element.
pub fn each<'c, C, F>(collection: &'c C, mut iteratee: F)
where
    C: Collection + ?Sized,
    F: FnMut(&'c C::Value, C::Key<'c>, &'c C),
{
    for (key, value) in collection.entries() {
        iteratee(value, key, collection);
    }
}

/// Like [`each`], but stops at the first error and returns it unchanged.
pub fn try_each<'c, C, F, E>(collection: &'c C, mut iteratee: F) -> Result<(), E>
where
    C: Collection + ?Sized,
    F: FnMut(&'c C::Value, C::Key<'c>, &'c C) -> Result<(), E>,
{
    for (key, value) in collection.entries() {
        iteratee(value, key, collection)?;
    }
    Ok(())
}

/// Lowest index holding an element equal to `target`.
pub fn index_of<T: PartialEq>(sequence: &[T], target: &T) -> Option<usize> {
    sequence.iter().position(|item| item == target)
}

/// Whether any element equals `target`.
pub fn contains<C>(collection: &C, target: &C::Value) -> bool
where
    C: Collection + ?Sized,
    C::Value: PartialEq,
{
    collection.values().any(|value| value == target)
}

/// Whether every element passes `predicate`. Stops at the first failure.
pub fn every<C, P>(collection: &C, predicate: P) -> bool
where
    C: Collection + ?Sized,
    P: FnMut(&C::Value) -> bool,
{
    collection.values().all(predicate)
}

/// Whether every element is truthy.
pub fn every_truthy<C>(collection: &C) -> bool
where
    C: Collection + ?Sized,
    C::Value: Truthy,
{
    every(collection, Truthy::is_truthy)
}

/// Whether at least one element passes `predicate`. Stops at the first success.
pub fn some<C, P>(collection: &C, predicate: P) -> bool
where
    C: Collection + ?Sized,
    P: FnMut(&C::Value) -> bool,
{
    collection.values().any(predicate)
}

/// Whether at least one element is truthy.
pub fn some_truthy<C>(collection: &C) -> bool
where
    C: Collection + ?Sized,
    C::Value: Truthy,
{
    some(collection, Truthy::is_truthy)
}

/// Fold the collection into a single value of its element type.
///
/// Without an `initial` seed the first element seeds the fold and the
/// iteratee runs over the remaining elements. An empty collection with no
/// seed has nothing to reduce and yields `None`.
pub fn reduce<C, F>(collection: &C, mut iteratee: F, initial: Option<C::Value>) -> Option<C::Value>
where
    C: Collection + ?Sized,
    C::Value: Clone,
    F: FnMut(C::Value, &C::Value) -> C::Value,
{
    let mut values = collection.values();
    let seed = match initial {
        Some(seed) => seed,
        None => values.next()?.clone(),
    };
    Some(values.fold(seed, |memo, value| iteratee(memo, value)))
}

/// Fold the collection into an accumulator of any type.
pub fn fold<C, A, F>(collection: &C, initial: A, mut iteratee: F) -> A
where
    C: Collection + ?Sized,
    F: FnMut(A, &C::Value) -> A,
{
    collection
        .values()
        .fold(initial, |memo, value| iteratee(memo, value))
}

/// Like [`fold`], but stops at the first error and returns it unchanged.
pub fn try_fold<C, A, E, F>(collection: &C, initial: A, mut iteratee: F) -> Result<A, E>
where
    C: Collection + ?Sized,
    F: FnMut(A, &C::Value) -> Result<A, E>,
{
    collection
        .values()
        .try_fold(initial, |memo, value| iteratee(memo, value))
}
