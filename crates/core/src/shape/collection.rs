//! A single traversal capability shared by sequences and mappings

use indexmap::IndexMap;
use std::collections::{BTreeMap, HashMap, VecDeque};

/// Anything that yields `(key, value)` pairs in a defined order.
///
/// Sequences use their index as the key and walk in ascending index order.
/// Mappings hand out a reference to their key and walk in their own
/// enumeration order: insertion order for `IndexMap`, key order for
/// `BTreeMap` and the per-instance iteration order for `HashMap`.
pub trait Collection {
    /// Key handed to iteratees alongside each value
    type Key<'a>
    where
        Self: 'a;

    /// Element type
    type Value;

    /// Iterate `(key, value)` pairs in enumeration order
    fn entries(&self) -> impl Iterator<Item = (Self::Key<'_>, &Self::Value)>;

    /// Number of elements
    fn len(&self) -> usize;

    /// Whether the collection has no elements
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate values in enumeration order
    fn values(&self) -> impl Iterator<Item = &Self::Value> {
        self.entries().map(|(_, value)| value)
    }
}

impl<T> Collection for [T] {
    type Key<'a>
        = usize
    where
        Self: 'a;
    type Value = T;

    fn entries(&self) -> impl Iterator<Item = (Self::Key<'_>, &Self::Value)> {
        self.iter().enumerate()
    }

    fn len(&self) -> usize {
        <[T]>::len(self)
    }
}

impl<T, const N: usize> Collection for [T; N] {
    type Key<'a>
        = usize
    where
        Self: 'a;
    type Value = T;

    fn entries(&self) -> impl Iterator<Item = (Self::Key<'_>, &Self::Value)> {
        self.iter().enumerate()
    }

    fn len(&self) -> usize {
        N
    }
}

impl<T> Collection for Vec<T> {
    type Key<'a>
        = usize
    where
        Self: 'a;
    type Value = T;

    fn entries(&self) -> impl Iterator<Item = (Self::Key<'_>, &Self::Value)> {
        self.iter().enumerate()
    }

    fn len(&self) -> usize {
        Vec::len(self)
    }
}

impl<T> Collection for VecDeque<T> {
    type Key<'a>
        = usize
    where
        Self: 'a;
    type Value = T;

    fn entries(&self) -> impl Iterator<Item = (Self::Key<'_>, &Self::Value)> {
        self.iter().enumerate()
    }

    fn len(&self) -> usize {
        VecDeque::len(self)
    }
}

impl<K, V, S> Collection for IndexMap<K, V, S> {
    type Key<'a>
        = &'a K
    where
        Self: 'a;
    type Value = V;

    fn entries(&self) -> impl Iterator<Item = (Self::Key<'_>, &Self::Value)> {
        self.iter()
    }

    fn len(&self) -> usize {
        IndexMap::len(self)
    }
}

impl<K, V> Collection for BTreeMap<K, V> {
    type Key<'a>
        = &'a K
    where
        Self: 'a;
    type Value = V;

    fn entries(&self) -> impl Iterator<Item = (Self::Key<'_>, &Self::Value)> {
        self.iter()
    }

    fn len(&self) -> usize {
        BTreeMap::len(self)
    }
}

impl<K, V, S> Collection for HashMap<K, V, S> {
    type Key<'a>
        = &'a K
    where
        Self: 'a;
    type Value = V;

    fn entries(&self) -> impl Iterator<Item = (Self::Key<'_>, &Self::Value)> {
        self.iter()
    }

    fn len(&self) -> usize {
        HashMap::len(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequence_keys_are_ascending_indices() {
        let letters = vec!['a', 'b', 'c'];
        let entries: Vec<_> = letters.entries().collect();

        assert_eq!(entries, vec![(0, &'a'), (1, &'b'), (2, &'c')]);
        assert_eq!(Collection::len(&letters), 3);
    }

    #[test]
    fn test_index_map_walks_in_insertion_order() {
        let mut ages = IndexMap::new();
        ages.insert("zed", 40);
        ages.insert("amy", 31);

        let keys: Vec<_> = ages.entries().map(|(key, _)| *key).collect();
        assert_eq!(keys, vec!["zed", "amy"]);
    }

    #[test]
    fn test_btree_map_walks_in_key_order() {
        let ages: BTreeMap<_, _> = [("zed", 40), ("amy", 31)].into_iter().collect();

        let values: Vec<_> = ages.values().copied().collect();
        assert_eq!(values, vec![31, 40]);
    }

    #[test]
    fn test_empty_shapes() {
        let nothing: [u8; 0] = [];
        assert!(Collection::is_empty(&nothing));
        assert!(Collection::is_empty(&HashMap::<String, u8>::new()));
        assert!(!Collection::is_empty(&VecDeque::from(vec![1])));
    }
}
