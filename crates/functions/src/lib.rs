//! Function combinators.
//!
//! Each combinator wraps a caller-supplied function and owns whatever state
//! it needs to control the wrapped function:
//!
//! - [`once`] - runs the function at most one time and replays its result
//! - [`memoize`] - runs the function at most once per distinct argument
//! - [`delay`] - runs the function once, after a wait, on the tokio runtime
//!
//! `Once` and `Memoized` are safe to share between threads; concurrent
//! callers are serialized so the wrapped function never runs more often than
//! the combinator allows.

pub mod delay;
pub mod memoize;
pub mod once;

pub use delay::{delay, Delayed};
pub use memoize::{memoize, Memoized};
pub use once::{once, Once};

pub use underbar_core::{Error, Result};
