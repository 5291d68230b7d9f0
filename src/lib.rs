//! # nested-access
//!
//! Composable accessor combinators for traversing and updating deeply
//! nested, heterogeneous key-value data.
//!
//! ## Overview
//!
//! Nested data mixing mappings and ordered key-value sequences at arbitrary
//! depth is modeled by a single dynamic [`Value`] type. Paths into that data
//! are slices of *accessors* — pure, reusable traversal combinators that
//! conform to a two-mode protocol (read, and read-and-update-with-optional-
//! removal) and compose through continuation passing:
//!
//! - [`at`](access::at): plain single-key lookup
//! - [`all_keys`](access::all_keys): traverse every entry of a container
//! - [`skip_keys`](access::skip_keys): traverse every entry except an
//!   excluded key set
//! - [`optional_key`](access::optional_key): traverse a key that may be
//!   absent, yielding `Nil` instead of failing
//!
//! The [`path`] module drives a chain of accessors over a value:
//! [`get_in`](path::get_in), [`update_in`](path::update_in),
//! [`get_and_update_in`](path::get_and_update_in) and
//! [`pop_in`](path::pop_in).
//!
//! Every operation is pure and synchronous: inputs are never mutated in
//! place, rebuilt containers keep their concrete kind and the relative order
//! of retained entries, and accessors carry only their closed-over
//! configuration, so instances are freely shareable across threads.
//!
//! ## Example
//!
//! ```rust
//! use nested_access::prelude::*;
//!
//! let data = Value::map([
//!     ("a", Value::map([("b", 1)])),
//!     ("c", Value::map([("b", 2)])),
//! ]);
//!
//! let path: [&dyn Accessor; 2] = [&all_keys(), &at("b")];
//!
//! // Read every `b`.
//! assert_eq!(get_in(&data, &path), Value::seq([1, 2]));
//!
//! // Pop every `b`, keeping the emptied submaps.
//! let (popped, remaining) = pop_in(data, &path);
//! assert_eq!(popped, Value::seq([1, 2]));
//! assert_eq!(
//!     remaining,
//!     Value::map([
//!         ("a", Value::map::<&str, Value, _>([])),
//!         ("c", Value::map::<&str, Value, _>([])),
//!     ])
//! );
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: `serde::Serialize` for [`Value`] and [`Key`]

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

pub mod access;
pub mod path;
pub mod value;

pub use access::Accessor;
pub use access::Step;
pub use value::Key;
pub use value::Value;

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and functions.
///
/// # Usage
///
/// ```rust
/// use nested_access::prelude::*;
/// ```
pub mod prelude {
    pub use crate::access::{Accessor, AllKeys, At, OptionalKey, SkipKeys, Step};
    pub use crate::access::{all_keys, at, optional_key, skip_keys};
    pub use crate::path::{get_and_update_in, get_in, pop_in, update_in};
    pub use crate::value::{Key, Value};
}
