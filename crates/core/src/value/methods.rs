//! Methods a `Value` exposes to `invoke`

use super::Value;
use crate::constants::DEFAULT_JOIN_SEPARATOR;
use crate::ordering::compare_keys;
use crate::shape::Invoke;

impl Invoke for Value {
    type Arg = Value;
    type Output = Value;

    fn invoke(&self, method: &str, args: &[Value]) -> Option<Value> {
        match (self, method) {
            (Value::Array(items), "sort") => {
                let mut sorted = items.clone();
                sorted.sort_by(compare_keys);
                Some(Value::Array(sorted))
            }
            (Value::Array(items), "reverse") => {
                Some(Value::Array(items.iter().rev().cloned().collect()))
            }
            (Value::Array(items), "length") => Some(Value::from(items.len())),
            (Value::String(text), "length") => Some(Value::from(text.chars().count())),
            (Value::Array(items), "keys") => Some((0..items.len()).collect()),
            (Value::Object(fields), "keys") => Some(fields.keys().map(String::as_str).collect()),
            (Value::Array(items), "values") => Some(Value::Array(items.clone())),
            (Value::Object(fields), "values") => Some(Value::Array(fields.values().cloned().collect())),
            (Value::Array(items), "join") => Some(Value::String(join(items, args.first()))),
            (Value::Array(items), "includes") => {
                Some(Value::Bool(args.first().is_some_and(|target| items.contains(target))))
            }
            (Value::String(text), "includes") => Some(Value::Bool(
                args.first()
                    .and_then(Value::as_str)
                    .is_some_and(|needle| text.contains(needle)),
            )),
            (Value::Array(items), "indexOf") => {
                let position = args
                    .first()
                    .and_then(|target| items.iter().position(|item| item == target));
                Some(position.map_or(Value::from(-1), Value::from))
            }
            (Value::String(text), "toUpperCase") => Some(Value::String(text.to_uppercase())),
            (Value::String(text), "toLowerCase") => Some(Value::String(text.to_lowercase())),
            (Value::String(text), "trim") => Some(Value::String(text.trim().to_string())),
            (Value::Null, "toString") => None,
            (value, "toString") => Some(Value::String(script_string(value))),
            _ => None,
        }
    }

    fn kind(&self) -> &'static str {
        Value::kind(self)
    }
}

fn join(items: &[Value], separator: Option<&Value>) -> String {
    let separator = match separator {
        Some(Value::String(separator)) => separator.clone(),
        Some(other) => script_string(other),
        None => DEFAULT_JOIN_SEPARATOR.to_string(),
    };

    items
        .iter()
        .map(|item| match item {
            Value::Null => String::new(),
            other => script_string(other),
        })
        .collect::<Vec<_>>()
        .join(&separator)
}

// Script-style string conversion: arrays join their elements with commas,
// objects collapse to a fixed tag.
fn script_string(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(flag) => flag.to_string(),
        Value::Number(number) if number.is_nan() => "NaN".to_string(),
        Value::Number(number) if number.is_infinite() => {
            if number.is_sign_negative() { "-Infinity" } else { "Infinity" }.to_string()
        }
        Value::Number(number) if *number == 0.0 => "0".to_string(),
        Value::Number(number) => number.to_string(),
        Value::String(text) => text.clone(),
        Value::Array(items) => join(items, None),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn call(value: serde_json::Value, method: &str, args: &[Value]) -> Option<Value> {
        Value::from(value).invoke(method, args)
    }

    #[test]
    fn test_array_methods() {
        assert_eq!(call(json!([5, 1, 7]), "sort", &[]), Some(Value::from(vec![1, 5, 7])));
        assert_eq!(call(json!([1, 2, 3]), "reverse", &[]), Some(Value::from(vec![3, 2, 1])));
        assert_eq!(call(json!([1, 2]), "length", &[]), Some(Value::from(2)));
        assert_eq!(
            call(json!([1, null, "x"]), "join", &[Value::from("-")]),
            Some(Value::from("1--x"))
        );
        assert_eq!(call(json!(["a", "b"]), "join", &[]), Some(Value::from("a,b")));
        assert_eq!(call(json!([1, 2]), "indexOf", &[Value::from(2)]), Some(Value::from(1)));
        assert_eq!(call(json!([1, 2]), "indexOf", &[Value::from(9)]), Some(Value::from(-1)));
        assert_eq!(call(json!([1, 2]), "includes", &[Value::from(2)]), Some(Value::from(true)));
    }

    #[test]
    fn test_string_and_object_methods() {
        assert_eq!(call(json!("MiXed"), "toLowerCase", &[]), Some(Value::from("mixed")));
        assert_eq!(call(json!(" pad "), "trim", &[]), Some(Value::from("pad")));
        assert_eq!(call(json!("héllo"), "length", &[]), Some(Value::from(5)));
        assert_eq!(
            call(json!({"b": 1, "a": 2}), "keys", &[]),
            Some(Value::from(vec!["b", "a"]))
        );
        assert_eq!(call(json!(42), "toString", &[]), Some(Value::from("42")));
    }

    #[test]
    fn test_nested_values_convert_like_script_strings() {
        assert_eq!(call(json!([1, 2]), "toString", &[]), Some(Value::from("1,2")));
        assert_eq!(call(json!([[1, 2], 3]), "join", &[]), Some(Value::from("1,2,3")));
        assert_eq!(
            call(json!([{"a": 1}, [null, true]]), "join", &[Value::from(";")]),
            Some(Value::from("[object Object];,true"))
        );
        assert_eq!(call(json!({"a": 1}), "toString", &[]), Some(Value::from("[object Object]")));
        assert_eq!(Value::from(f64::NAN).invoke("toString", &[]), Some(Value::from("NaN")));
        assert_eq!(Value::from(-0.0).invoke("toString", &[]), Some(Value::from("0")));
        assert_eq!(call(json!(1.5), "toString", &[]), Some(Value::from("1.5")));
        assert_eq!(call(json!(null), "toString", &[]), None);
    }

    #[test]
    fn test_unknown_method_is_none() {
        assert_eq!(call(json!(3), "sort", &[]), None);
        assert_eq!(call(json!([1]), "toUpperCase", &[]), None);
        assert_eq!(call(json!({}), "frobnicate", &[]), None);
    }
}
