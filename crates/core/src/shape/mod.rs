//! Shape traits describing what an operation needs from its input.
//!
//! Operations never ask "is this an array or an object?". They ask for a
//! capability instead:
//!
//! - [`Collection`] - yields `(key, value)` pairs in a defined order
//! - [`Mapping`] - keyed storage that can be queried and written to
//! - [`Record`] - exposes fields by name
//! - [`Invoke`] - exposes methods by name
//! - [`Nestable`] - may contain a nested sequence of its own type
//! - [`Truthy`] - has a truthiness, used as the default predicate

mod collection;
mod invoke;
mod mapping;
mod nested;
mod record;
mod truthy;

pub use collection::Collection;
pub use invoke::Invoke;
pub use mapping::Mapping;
pub use nested::{Nestable, Nested};
pub use record::Record;
pub use truthy::Truthy;
