//! Core domain types, shape traits and errors for `underbar`.
//!
//! Every operation in the workspace is written against the abstractions in
//! this crate, so the collection and function layers never branch on the
//! concrete container they were handed.
//!
//! ## Key Components
//!
//! - **`errors`**: The primary `Error` enum and `Result` alias shared by all
//!   crates in the workspace.
//! - **`shape`**: The `Collection`, `Mapping`, `Record`, `Invoke`, `Nestable`
//!   and `Truthy` traits that describe what an operation needs from its input.
//! - **`value`**: A dynamic `Value` for inputs whose shape is only known at
//!   runtime (named fields, named methods, arbitrary nesting).
//! - **`logging`**: Subscriber bootstrap for the `tracing` events emitted by
//!   the other crates.

pub mod constants;
pub mod errors;
pub mod logging;
pub mod ordering;
pub mod shape;
pub mod value;

pub use self::{
    constants::*,
    errors::{Error, Result, ResultExt},
    ordering::compare_keys,
    shape::{Collection, Invoke, Mapping, Nestable, Nested, Record, Truthy},
    value::{Value, ValueCollection, ValueKey},
};
