//! Dynamic values for inputs whose shape is only known at runtime.
//!
//! Most operations in the workspace are generic over the shape traits, but a
//! handful of them are inherently dynamic: `pluck` reads a field by name,
//! `invoke` calls a method by name and `flatten` handles arbitrary nesting.
//! `Value` gives those operations a concrete, serde friendly type to work on.

mod collection;
mod conversions;
mod methods;
mod ordering;

pub use collection::{ValueCollection, ValueKey};

use crate::constants::{KIND_COLLECTION, KIND_OBJECT, KIND_SEQUENCE};
use crate::errors::{Error, Result};
use indexmap::IndexMap;
use serde::Deserialize;
use std::fmt;

/// A dynamically typed value.
///
/// Equality is structural. Numbers follow IEEE semantics, so `NaN` is never
/// equal to itself and `0.0 == -0.0`. Object fields keep their insertion
/// order through parsing, conversion and serialization.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    Array(Vec<Value>),
    Object(IndexMap<String, Value>),
}

impl Value {
    /// Name of this value's kind, as reported in errors
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(flag) => Some(*flag),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(number) => Some(*number),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(text) => Some(text),
            _ => None,
        }
    }

    /// Look up a field of an object; `None` for missing fields and non-objects
    pub fn get(&self, name: &str) -> Option<&Value> {
        match self {
            Value::Object(fields) => fields.get(name),
            _ => None,
        }
    }

    /// View this value as a sequence
    pub fn as_sequence(&self) -> Result<&[Value]> {
        match self {
            Value::Array(items) => Ok(items),
            other => Err(Error::invalid_shape(KIND_SEQUENCE, other.kind())),
        }
    }

    /// View this value as an object
    pub fn as_object(&self) -> Result<&IndexMap<String, Value>> {
        match self {
            Value::Object(fields) => Ok(fields),
            other => Err(Error::invalid_shape(KIND_OBJECT, other.kind())),
        }
    }

    /// Exclusive access to this value's fields, for `extend` and `defaults`
    pub fn as_object_mut(&mut self) -> Result<&mut IndexMap<String, Value>> {
        match self {
            Value::Object(fields) => Ok(fields),
            other => Err(Error::invalid_shape(KIND_OBJECT, other.kind())),
        }
    }

    /// View this value as a collection: arrays by index, objects by key
    pub fn as_collection(&self) -> Result<ValueCollection<'_>> {
        match self {
            Value::Array(items) => Ok(ValueCollection::Sequence(items)),
            Value::Object(fields) => Ok(ValueCollection::Mapping(fields)),
            other => Err(Error::invalid_shape(KIND_COLLECTION, other.kind())),
        }
    }

    /// Parse a value from JSON text
    pub fn from_json_str(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::String(text) => f.write_str(text),
            Value::Number(number) => write!(f, "{number}"),
            other => {
                let json = serde_json::to_string(other).map_err(|_| fmt::Error)?;
                f.write_str(&json)
            }
        }
    }
}
