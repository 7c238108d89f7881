//! Nesting, as seen by `flatten`

use serde::{Deserialize, Serialize};

/// A value that may itself hold a sequence of values of the same type.
pub trait Nestable: Sized {
    /// The nested sequence, or `None` for a leaf
    fn as_nested(&self) -> Option<&[Self]>;
}

/// Statically typed nesting tree.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Nested<T> {
    Item(T),
    List(Vec<Nested<T>>),
}

impl<T> Nested<T> {
    /// Build a list node from anything convertible into nodes
    pub fn list<I, N>(items: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<Nested<T>>,
    {
        Nested::List(items.into_iter().map(Into::into).collect())
    }

    /// The leaf value, if this is a leaf
    pub fn as_item(&self) -> Option<&T> {
        match self {
            Nested::Item(item) => Some(item),
            Nested::List(_) => None,
        }
    }

    /// Consume a leaf and return its value
    pub fn into_item(self) -> Option<T> {
        match self {
            Nested::Item(item) => Some(item),
            Nested::List(_) => None,
        }
    }
}

impl<T> Nestable for Nested<T> {
    fn as_nested(&self) -> Option<&[Self]> {
        match self {
            Nested::Item(_) => None,
            Nested::List(items) => Some(items),
        }
    }
}

impl<T> From<Vec<Nested<T>>> for Nested<T> {
    fn from(items: Vec<Nested<T>>) -> Self {
        Nested::List(items)
    }
}
