//! Field access by name

use indexmap::IndexMap;
use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

/// A value whose fields can be looked up by name.
pub trait Record {
    type Field;

    /// The field called `name`, or `None` when it is absent
    fn field(&self, name: &str) -> Option<&Self::Field>;
}

impl<V, S: BuildHasher> Record for IndexMap<String, V, S> {
    type Field = V;

    fn field(&self, name: &str) -> Option<&V> {
        self.get(name)
    }
}

impl<V, S: BuildHasher> Record for HashMap<String, V, S> {
    type Field = V;

    fn field(&self, name: &str) -> Option<&V> {
        self.get(name)
    }
}

impl<V> Record for BTreeMap<String, V> {
    type Field = V;

    fn field(&self, name: &str) -> Option<&V> {
        self.get(name)
    }
}

impl<R: Record + ?Sized> Record for &R {
    type Field = R::Field;

    fn field(&self, name: &str) -> Option<&Self::Field> {
        (**self).field(name)
    }
}
