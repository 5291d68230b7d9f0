//! At accessor for plain single-key lookup.
//!
//! This is the baseline path segment the multi-entry accessors extend: it
//! focuses on the value under one key, treating a missing key as a
//! [`Value::Nil`] slot that an update may fill in.
//!
//! # Examples
//!
//! ```
//! use nested_access::access::{Accessor, at};
//! use nested_access::Value;
//!
//! let user = Value::map([("name", Value::from("ada"))]);
//!
//! let name = at("name").get(&user, &mut Value::clone);
//! assert_eq!(name, Value::from("ada"));
//! ```
//!
//! # Difference from OptionalKey
//!
//! - `At`: an absent key reads as `Nil` but is still a writable slot — the
//!   update continuation runs with `Nil` and may insert a new entry.
//! - [`OptionalKey`](crate::access::OptionalKey): an absent key
//!   short-circuits — the continuation never runs and the container is left
//!   untouched.

use std::mem;

use crate::access::{Accessor, Step};
use crate::value::{Key, Value};

/// An accessor that focuses on the value under a single key.
///
/// For ordered key-value sequences with duplicate keys, the first occurrence
/// is canonical: lookups, in-place updates, and removals address the first
/// matching entry and leave later duplicates untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct At {
    key: Key,
}

impl At {
    /// Creates a new `At` for the given key.
    pub fn new<K: Into<Key>>(key: K) -> Self {
        Self { key: key.into() }
    }
}

impl Accessor for At {
    /// # Panics
    ///
    /// Panics if `container` is not a mapping or an ordered key-value
    /// sequence; presenting any other shape is a contract violation.
    fn get(&self, container: &Value, next: &mut dyn FnMut(&Value) -> Value) -> Value {
        let Some(mut entries) = container.iter_entries() else {
            panic!(
                "at({}): expected a map or entries container, found {}",
                self.key,
                container.kind_name()
            );
        };

        match entries.find(|(key, _)| **key == self.key) {
            Some((_, value)) => next(value),
            None => Value::Nil,
        }
    }

    /// # Panics
    ///
    /// Panics if `container` is not a mapping or an ordered key-value
    /// sequence.
    fn get_and_update(
        &self,
        container: Value,
        next: &mut dyn FnMut(Value) -> Step,
    ) -> (Value, Value) {
        let (kind, mut pairs) = match container.into_parts() {
            Ok(parts) => parts,
            Err(other) => panic!(
                "at({}): expected a map or entries container, found {}",
                self.key,
                other.kind_name()
            ),
        };

        match pairs.iter().position(|(key, _)| *key == self.key) {
            Some(position) => {
                let value = mem::replace(&mut pairs[position].1, Value::Nil);
                match next(value) {
                    Step::Update(got, new_value) => {
                        pairs[position].1 = new_value;
                        (got, Value::from_parts(kind, pairs))
                    }
                    Step::Remove(got) => {
                        pairs.remove(position);
                        (got, Value::from_parts(kind, pairs))
                    }
                }
            }
            // Missing key: the continuation sees a Nil slot and may fill it.
            None => match next(Value::Nil) {
                Step::Update(got, new_value) => {
                    pairs.push((self.key.clone(), new_value));
                    (got, Value::from_parts(kind, pairs))
                }
                Step::Remove(got) => (got, Value::from_parts(kind, pairs)),
            },
        }
    }
}

/// Creates an accessor for the value under a single key.
///
/// # Examples
///
/// ```
/// use nested_access::access::{Accessor, Step, at};
/// use nested_access::Value;
///
/// let user = Value::map([("visits", 1)]);
///
/// let (got, updated) = at("visits").get_and_update(user, &mut |value| match value {
///     Value::Int(count) => Step::Update(Value::Int(count), Value::Int(count + 1)),
///     other => Step::Update(other.clone(), other),
/// });
///
/// assert_eq!(got, Value::Int(1));
/// assert_eq!(updated, Value::map([("visits", 2)]));
/// ```
pub fn at<K: Into<Key>>(key: K) -> At {
    At::new(key)
}
