//! Collection and function utilities over sequences and mappings.
//!
//! This crate re-exports the workspace as one surface:
//!
//! - [`core`] - errors, the dynamic [`Value`], shape traits and logging setup
//! - [`collections`] - traversal, derived and object operations
//! - [`functions`] - `once`, `memoize` and `delay`
//!
//! Most callers only need the prelude:
//!
//! ```rust
//! use underbar::prelude::*;
//!
//! let total = reduce(&[1, 2, 3, 4], |memo, n| memo + n, None);
//! assert_eq!(total, Some(10));
//!
//! assert_eq!(uniq(&[1, 2, 1, 3, 2]), vec![1, 2, 3]);
//! assert_eq!(difference(&[1, 2, 3, 4], &[[2, 4]]), vec![1, 3]);
//! ```

pub use underbar_collections as collections;
pub use underbar_core as core;
pub use underbar_functions as functions;

pub use underbar_collections::*;
pub use underbar_core::{
    compare_keys, logging, Collection, Error, Invoke, Mapping, Nestable, Nested, Record, Result,
    ResultExt, Truthy, Value, ValueCollection, ValueKey,
};
pub use underbar_functions::{delay, memoize, once, Delayed, Memoized, Once};

/// Prelude module for convenient imports
pub mod prelude {
    pub use underbar_collections::*;
    pub use underbar_core::{
        Collection, Error, Invoke, Mapping, Nestable, Nested, Record, Result, ResultExt, Truthy,
        Value,
    };
    pub use underbar_functions::{delay, memoize, once};
}
