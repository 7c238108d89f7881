//! Reshaping sequences: de-duplication, flattening, zipping and set-like
//! combination of several sequences.
//!
//! Membership is decided with `PartialEq`, never hashing, so these work for
//! any comparable element, floats and dynamic values included.

use underbar_core::Nestable;

/// How far [`flatten`] descends into nested sequences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Depth {
    /// Flatten every level of nesting
    #[default]
    Deep,
    /// Flatten exactly one level
    Shallow,
}

impl Depth {
    // `level` is the nesting level of the sequence an element was found in,
    // starting at 1 for the input itself.
    fn descends_from(self, level: usize) -> bool {
        match self {
            Depth::Deep => true,
            Depth::Shallow => level == 1,
        }
    }
}

/// Elements with duplicates removed, in order of first occurrence.
pub fn uniq<T: PartialEq + Clone>(sequence: &[T]) -> Vec<T> {
    let mut unique: Vec<T> = Vec::with_capacity(sequence.len());
    for item in sequence {
        if !unique.contains(item) {
            unique.push(item.clone());
        }
    }
    unique
}

/// Concatenate nested sequences into one, left to right and depth first.
///
/// Elements that are not sequences pass through unchanged. Nesting is walked
/// with an explicit stack, so depth is limited only by memory.
pub fn flatten<T: Nestable + Clone>(nested: &[T], depth: Depth) -> Vec<T> {
    let mut flat = Vec::with_capacity(nested.len());
    let mut stack = vec![nested.iter()];

    while let Some(level) = stack.last_mut() {
        let Some(item) = level.next() else {
            stack.pop();
            continue;
        };

        match item.as_nested() {
            Some(inner) if depth.descends_from(stack.len()) => stack.push(inner.iter()),
            _ => flat.push(item.clone()),
        }
    }

    flat
}

/// Group the elements at each index of every input.
///
/// The result is as long as the longest input; positions past the end of a
/// shorter input are `None`.
pub fn zip<T, S>(sequences: &[S]) -> Vec<Vec<Option<T>>>
where
    T: Clone,
    S: AsRef<[T]>,
{
    let longest = sequences
        .iter()
        .map(|sequence| sequence.as_ref().len())
        .max()
        .unwrap_or(0);

    (0..longest)
        .map(|index| {
            sequences
                .iter()
                .map(|sequence| sequence.as_ref().get(index).cloned())
                .collect()
        })
        .collect()
}

/// Elements present in every input, without duplicates, in the order they
/// appear in the first input. No inputs yield an empty result.
pub fn intersection<T, S>(sequences: &[S]) -> Vec<T>
where
    T: PartialEq + Clone,
    S: AsRef<[T]>,
{
    let Some((head, rest)) = sequences.split_first() else {
        return Vec::new();
    };

    uniq(head.as_ref())
        .into_iter()
        .filter(|item| rest.iter().all(|other| other.as_ref().contains(item)))
        .collect()
}

/// Elements of `sequence` that appear in none of `others`, in their original
/// order. Duplicates within `sequence` are kept.
pub fn difference<T, S>(sequence: &[T], others: &[S]) -> Vec<T>
where
    T: PartialEq + Clone,
    S: AsRef<[T]>,
{
    sequence
        .iter()
        .filter(|item| !others.iter().any(|other| other.as_ref().contains(item)))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;
    use underbar_core::{Nested, Value};

    fn array(json: serde_json::Value) -> Vec<Value> {
        match Value::from(json) {
            Value::Array(items) => items,
            other => panic!("expected an array, got {other:?}"),
        }
    }

    #[test]
    fn test_uniq_keeps_first_occurrence() {
        assert_eq!(uniq(&[1, 2, 1, 3, 2]), vec![1, 2, 3]);
        assert_eq!(uniq(&["b", "a", "b"]), vec!["b", "a"]);
        assert!(uniq::<u8>(&[]).is_empty());
    }

    #[test]
    fn test_flatten_deep() {
        let nested = array(json!([1, [2], [3, [[4]]]]));

        assert_eq!(flatten(&nested, Depth::Deep), array(json!([1, 2, 3, 4])));
    }

    #[test]
    fn test_flatten_shallow() {
        let nested = array(json!([1, [2, [3]]]));

        assert_eq!(flatten(&nested, Depth::Shallow), array(json!([1, 2, [3]])));
    }

    #[test]
    fn test_flatten_drops_empty_sequences_and_keeps_objects() {
        let nested = array(json!([[], [[], {"a": [1]}], "s"]));

        assert_eq!(flatten(&nested, Depth::Deep), array(json!([{"a": [1]}, "s"])));
    }

    #[test]
    fn test_flatten_typed_tree() {
        let tree = vec![
            Nested::Item('a'),
            Nested::list([Nested::Item('b'), Nested::list([Nested::Item('c')])]),
        ];

        let leaves: Vec<char> = flatten(&tree, Depth::Deep)
            .into_iter()
            .filter_map(Nested::into_item)
            .collect();
        assert_eq!(leaves, vec!['a', 'b', 'c']);

        let one_level = flatten(&tree, Depth::Shallow);
        assert_eq!(one_level.len(), 3);
        assert_eq!(one_level[2], Nested::list([Nested::Item('c')]));
    }

    #[test]
    fn test_flatten_very_deep_nesting() {
        let mut tree = Nested::Item(7);
        for _ in 0..100_000 {
            tree = Nested::List(vec![tree]);
        }
        let nested = vec![tree];

        assert_eq!(flatten(&nested, Depth::Deep), vec![Nested::Item(7)]);
        // Dropping the tree recurses once per level and would overflow the test thread's stack.
        std::mem::forget(nested);
    }

    #[test]
    fn test_zip_pads_shorter_inputs() {
        let zipped = zip(&[
            array(json!(["a", "b", "c", "d"])),
            array(json!([1, 2, 3])),
        ]);

        assert_eq!(zipped.len(), 4);
        assert_eq!(zipped[0], vec![Some(Value::from("a")), Some(Value::from(1))]);
        assert_eq!(zipped[3], vec![Some(Value::from("d")), None]);
    }

    #[test]
    fn test_zip_typed_and_empty() {
        let zipped = zip(&[vec![1, 2], vec![10], vec![100, 200]]);
        assert_eq!(
            zipped,
            vec![
                vec![Some(1), Some(10), Some(100)],
                vec![Some(2), None, Some(200)],
            ]
        );

        assert!(zip::<u8, Vec<u8>>(&[]).is_empty());
    }

    #[test]
    fn test_intersection() {
        assert_eq!(intersection(&[[1, 2, 3], [2, 3, 4], [3, 4, 5]]), vec![3]);
        assert_eq!(
            intersection(&[vec!["moe", "curly", "moe"], vec!["moe", "groucho"]]),
            vec!["moe"]
        );
        assert!(intersection::<u8, Vec<u8>>(&[]).is_empty());
        assert_eq!(intersection(&[vec![2, 1, 2]]), vec![2, 1]);
    }

    #[test]
    fn test_difference() {
        assert_eq!(difference(&[1, 2, 3, 4], &[[2, 4]]), vec![1, 3]);
        assert_eq!(
            difference(&[1, 2, 3, 4, 5], &[vec![5, 2, 10], vec![1]]),
            vec![3, 4]
        );
        assert_eq!(difference::<_, Vec<i32>>(&[1, 1, 2], &[]), vec![1, 1, 2]);
    }

    proptest! {
        #[test]
        fn prop_uniq_has_no_duplicates(items in prop::collection::vec(0u8..10, 0..60)) {
            let unique = uniq(&items);

            for (index, item) in unique.iter().enumerate() {
                prop_assert!(!unique[index + 1..].contains(item));
                prop_assert!(items.contains(item));
            }
        }

        #[test]
        fn prop_difference_and_intersection_membership(
            left in prop::collection::vec(0u8..12, 0..40),
            right in prop::collection::vec(0u8..12, 0..40),
        ) {
            let only_left = difference(&left, &[right.clone()]);
            let both = intersection(&[left.clone(), right.clone()]);

            prop_assert!(only_left.iter().all(|item| !right.contains(item)));
            prop_assert!(both.iter().all(|item| left.contains(item) && right.contains(item)));
            prop_assert_eq!(
                uniq(&only_left).len() + both.len(),
                uniq(&left).len()
            );
        }
    }
}
