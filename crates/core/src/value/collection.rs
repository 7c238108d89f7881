//! Shape trait implementations for `Value`

use super::Value;
use crate::shape::{Collection, Nestable, Record, Truthy};
use indexmap::IndexMap;
use std::fmt;

/// Key of an element inside a dynamic collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKey<'a> {
    Index(usize),
    Name(&'a str),
}

impl fmt::Display for ValueKey<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueKey::Index(index) => write!(f, "{index}"),
            ValueKey::Name(name) => f.write_str(name),
        }
    }
}

/// A `Value` that has been checked to be an array or an object.
///
/// Obtained through [`Value::as_collection`].
#[derive(Debug, Clone, Copy)]
pub enum ValueCollection<'v> {
    Sequence(&'v [Value]),
    Mapping(&'v IndexMap<String, Value>),
}

impl Collection for ValueCollection<'_> {
    type Key<'a>
        = ValueKey<'a>
    where
        Self: 'a;
    type Value = Value;

    fn entries(&self) -> impl Iterator<Item = (Self::Key<'_>, &Self::Value)> {
        let entries: Box<dyn Iterator<Item = (ValueKey<'_>, &Value)> + '_> = match self {
            ValueCollection::Sequence(items) => Box::new(
                items
                    .iter()
                    .enumerate()
                    .map(|(index, value)| (ValueKey::Index(index), value)),
            ),
            ValueCollection::Mapping(fields) => Box::new(
                fields
                    .iter()
                    .map(|(name, value)| (ValueKey::Name(name.as_str()), value)),
            ),
        };
        entries
    }

    fn len(&self) -> usize {
        match self {
            ValueCollection::Sequence(items) => items.len(),
            ValueCollection::Mapping(fields) => fields.len(),
        }
    }
}

impl Record for Value {
    type Field = Value;

    fn field(&self, name: &str) -> Option<&Value> {
        self.get(name)
    }
}

impl Nestable for Value {
    fn as_nested(&self) -> Option<&[Value]> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }
}

impl Truthy for Value {
    fn is_truthy(&self) -> bool {
        match self {
            Value::Null => false,
            Value::Bool(flag) => *flag,
            Value::Number(number) => number.is_truthy(),
            Value::String(text) => !text.is_empty(),
            Value::Array(_) | Value::Object(_) => true,
        }
    }
}
