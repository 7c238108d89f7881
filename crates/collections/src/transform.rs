//! Element-wise derived operations

use tracing::debug;
use underbar_core::{Collection, Error, Invoke, Record, Result};

/// Elements that pass `predicate`, in enumeration order.
pub fn filter<C, P>(collection: &C, mut predicate: P) -> Vec<C::Value>
where
    C: Collection + ?Sized,
    C::Value: Clone,
    P: FnMut(&C::Value) -> bool,
{
    collection
        .values()
        .filter(|value| predicate(value))
        .cloned()
        .collect()
}

/// Elements that fail `predicate`, in enumeration order. The complement of [`filter`].
pub fn reject<C, P>(collection: &C, mut predicate: P) -> Vec<C::Value>
where
    C: Collection + ?Sized,
    C::Value: Clone,
    P: FnMut(&C::Value) -> bool,
{
    filter(collection, |value| !predicate(value))
}

/// Transform every element, preserving order and length.
pub fn map<C, U, F>(collection: &C, iteratee: F) -> Vec<U>
where
    C: Collection + ?Sized,
    F: FnMut(&C::Value) -> U,
{
    collection.values().map(iteratee).collect()
}

/// Read the field called `name` from every record; `None` where it is absent.
pub fn pluck<T>(sequence: &[T], name: &str) -> Vec<Option<T::Field>>
where
    T: Record,
    T::Field: Clone,
{
    sequence
        .iter()
        .map(|record| record.field(name).cloned())
        .collect()
}

/// Call the method called `method` on every element and collect the results.
///
/// The first element without such a method aborts the whole call with
/// [`Error::MissingMethod`]; no partial results are returned.
pub fn invoke<T: Invoke>(sequence: &[T], method: &str, args: &[T::Arg]) -> Result<Vec<T::Output>> {
    sequence
        .iter()
        .enumerate()
        .map(|(index, item)| {
            item.invoke(method, args).ok_or_else(|| {
                debug!(index, method, kind = item.kind(), "element has no such method");
                Error::missing_method(index, method, item.kind())
            })
        })
        .collect()
}
