//! Operations over sequences and mappings.
//!
//! Everything here is written against the [`Collection`] trait (or plain
//! slices where an operation only makes sense for sequences), so a `Vec`, an
//! `IndexMap` and a dynamic [`Value`] array all go through the same code.
//!
//! ## Layers
//!
//! - [`traversal`] - `each`, `index_of`, `contains`, `every`, `some`, `reduce`
//! - [`access`] - `first` and `last`
//! - [`transform`] - `filter`, `reject`, `map`, `pluck`, `invoke`
//! - [`sorting`] - `sort_by` and `shuffle`
//! - [`reshape`] - `uniq`, `flatten`, `zip`, `intersection`, `difference`
//! - [`objects`] - `extend` and `defaults`
//!
//! Inputs are only ever borrowed immutably, with the exception of the target
//! of `extend` and `defaults`, which is borrowed mutably and handed back.

pub mod access;
pub mod objects;
pub mod reshape;
pub mod sorting;
pub mod transform;
pub mod traversal;

pub use access::*;
pub use objects::*;
pub use reshape::*;
pub use sorting::*;
pub use transform::*;
pub use traversal::*;

pub use underbar_core::{Collection, Error, Result, Value};
