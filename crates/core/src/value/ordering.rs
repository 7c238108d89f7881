//! Ordering between values, used when values are sort keys

use super::Value;
use indexmap::IndexMap;
use std::cmp::Ordering;

impl Value {
    // Values of different kinds order by kind.
    fn rank(&self) -> u8 {
        match self {
            Value::Null => 0,
            Value::Bool(_) => 1,
            Value::Number(_) => 2,
            Value::String(_) => 3,
            Value::Array(_) => 4,
            Value::Object(_) => 5,
        }
    }
}

// Objects compare by their entries sorted by key, so field order does not
// affect the result, matching equality.
fn compare_fields(a: &IndexMap<String, Value>, b: &IndexMap<String, Value>) -> Option<Ordering> {
    let mut a: Vec<_> = a.iter().collect();
    let mut b: Vec<_> = b.iter().collect();
    a.sort_by(|(x, _), (y, _)| x.cmp(y));
    b.sort_by(|(x, _), (y, _)| x.cmp(y));
    a.partial_cmp(&b)
}

impl PartialOrd for Value {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Value::Null, Value::Null) => Some(Ordering::Equal),
            (Value::Bool(a), Value::Bool(b)) => a.partial_cmp(b),
            (Value::Number(a), Value::Number(b)) => a.partial_cmp(b),
            (Value::String(a), Value::String(b)) => a.partial_cmp(b),
            (Value::Array(a), Value::Array(b)) => a.partial_cmp(b),
            (Value::Object(a), Value::Object(b)) => compare_fields(a, b),
            (a, b) => a.rank().partial_cmp(&b.rank()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_kind_ordering() {
        assert!(Value::from(1) < Value::from(2));
        assert!(Value::from("apple") < Value::from("banana"));
        assert!(Value::from(false) < Value::from(true));
        assert!(Value::from(vec![1, 2]) < Value::from(vec![1, 3]));
    }

    #[test]
    fn test_cross_kind_ordering_by_rank() {
        assert!(Value::Null < Value::from(false));
        assert!(Value::from(100) < Value::from("1"));
        assert!(Value::from("z") < Value::from(Vec::<i32>::new()));
    }

    #[test]
    fn test_incomparable_values() {
        assert_eq!(Value::from(f64::NAN).partial_cmp(&Value::from(1)), None);

        let nested = Value::from(vec![Value::from(1), Value::from(f64::NAN)]);
        assert_eq!(nested.partial_cmp(&nested), None);
    }

    #[test]
    fn test_objects_order_by_sorted_entries() {
        let a = Value::from(serde_json::json!({"k": 1}));
        let b = Value::from(serde_json::json!({"k": 2}));
        let c = Value::from(serde_json::json!({"j": 9, "k": 0}));
        let reordered = Value::from(serde_json::json!({"k": 0, "j": 9}));

        assert_eq!(a.partial_cmp(&b), Some(Ordering::Less));
        assert_eq!(c.partial_cmp(&a), Some(Ordering::Less));
        assert_eq!(c, reordered);
        assert_eq!(c.partial_cmp(&reordered), Some(Ordering::Equal));
    }
}
