//! Writable keyed storage used by `extend` and `defaults`

use indexmap::IndexMap;
use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

/// Keyed storage that can be queried for presence and written to.
pub trait Mapping {
    type Key;
    type Value;

    /// Whether `key` is present, regardless of the value stored under it
    fn contains_key(&self, key: &Self::Key) -> bool;

    /// Store `value` under `key`, replacing any previous value
    fn insert(&mut self, key: Self::Key, value: Self::Value);

    /// Iterate stored pairs in enumeration order
    fn pairs(&self) -> impl Iterator<Item = (&Self::Key, &Self::Value)>;
}

impl<K, V, S> Mapping for IndexMap<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    type Key = K;
    type Value = V;

    fn contains_key(&self, key: &K) -> bool {
        IndexMap::contains_key(self, key)
    }

    // Replacing an existing key keeps its position.
    fn insert(&mut self, key: K, value: V) {
        IndexMap::insert(self, key, value);
    }

    fn pairs(&self) -> impl Iterator<Item = (&K, &V)> {
        self.iter()
    }
}

impl<K, V, S> Mapping for HashMap<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    type Key = K;
    type Value = V;

    fn contains_key(&self, key: &K) -> bool {
        HashMap::contains_key(self, key)
    }

    fn insert(&mut self, key: K, value: V) {
        HashMap::insert(self, key, value);
    }

    fn pairs(&self) -> impl Iterator<Item = (&K, &V)> {
        self.iter()
    }
}

impl<K: Ord, V> Mapping for BTreeMap<K, V> {
    type Key = K;
    type Value = V;

    fn contains_key(&self, key: &K) -> bool {
        BTreeMap::contains_key(self, key)
    }

    fn insert(&mut self, key: K, value: V) {
        BTreeMap::insert(self, key, value);
    }

    fn pairs(&self) -> impl Iterator<Item = (&K, &V)> {
        self.iter()
    }
}
