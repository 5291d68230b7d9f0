//! Accessor combinators for traversing nested containers.
//!
//! An accessor is a value conforming to a two-mode traversal protocol: given
//! a container and a "continue deeper" continuation, it decides which child
//! values to recurse into, how to reassemble the container afterwards, and
//! how to aggregate per-branch results. A path driver (see
//! [`path`](crate::path)) chains accessors together, invoking each with the
//! correctly-scoped sub-container.
//!
//! # Available Accessors
//!
//! - [`At`]: focus on a single key (the baseline plain lookup)
//! - [`AllKeys`]: recurse into every entry of a container
//! - [`SkipKeys`]: recurse into every entry except an excluded key set
//! - [`OptionalKey`]: focus on a key that may be absent, yielding
//!   [`Value::Nil`] instead of failing
//!
//! Each accessor is a pure value factory: it holds only its closed-over
//! configuration (a key, or a key set), never any traversal state, so a
//! single instance may be reused across arbitrarily many traversals and
//! shared freely between threads.
//!
//! # Protocol
//!
//! [`Accessor::get`] is the read mode: the continuation derives a result
//! from each visited value, and the accessor aggregates those results (an
//! ordered [`Value::Seq`] for the multi-entry accessors, a single value for
//! `At`/`OptionalKey`).
//!
//! [`Accessor::get_and_update`] is the read-and-update mode: the
//! continuation receives each visited value by ownership and returns a
//! [`Step`] — either a replacement paired with the value to collect, or the
//! removal sentinel. The accessor rebuilds the container with replacements
//! applied and removed entries dropped, preserving the relative order of
//! retained entries and the concrete container kind.
//!
//! # Examples
//!
//! ```
//! use nested_access::access::{Accessor, all_keys};
//! use nested_access::Value;
//!
//! let scores = Value::map([("ada", 1), ("grace", 2)]);
//!
//! let doubled = all_keys()
//!     .get(&scores, &mut |value| match value {
//!         Value::Int(score) => Value::Int(score * 2),
//!         other => other.clone(),
//!     });
//!
//! assert_eq!(doubled, Value::seq([2, 4]));
//! ```

mod all;
mod at;
mod optional;
mod skip;

pub use all::AllKeys;
pub use all::all_keys;

pub use at::At;
pub use at::at;

pub use skip::SkipKeys;
pub use skip::skip_keys;

pub use optional::OptionalKey;
pub use optional::optional_key;

use crate::value::Value;

/// The outcome an update-mode continuation returns for a visited value.
///
/// The continuation owns the visited value, so the removal sentinel carries
/// the value to surface as the read result back out; a pop operation simply
/// returns the value it was handed (see [`pop_in`](crate::path::pop_in)).
#[derive(Debug, Clone, PartialEq)]
pub enum Step {
    /// Collect the first value as the read result and replace the visited
    /// value with the second.
    Update(Value, Value),
    /// Drop the visited entry from the rebuilt container, surfacing the
    /// carried value as the read result.
    Remove(Value),
}

/// A traversal conforming to the two-mode accessor protocol.
///
/// Implementations must not catch or suppress a failure raised by the
/// continuation; it propagates to the caller unmodified.
pub trait Accessor {
    /// Read mode: derives a result from the focused value(s) via `next` and
    /// aggregates them without touching the container.
    fn get(&self, container: &Value, next: &mut dyn FnMut(&Value) -> Value) -> Value;

    /// Read-and-update mode: feeds each focused value to `next` by
    /// ownership and rebuilds the container from the returned [`Step`]s.
    ///
    /// Returns the aggregated read results paired with the rebuilt
    /// container. The rebuilt container is the same concrete kind as the
    /// input, with retained entries in their original relative order.
    fn get_and_update(
        &self,
        container: Value,
        next: &mut dyn FnMut(Value) -> Step,
    ) -> (Value, Value);
}
