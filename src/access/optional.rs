//! OptionalKey accessor for a single key that may be absent.
//!
//! # Examples
//!
//! ```
//! use nested_access::access::{Accessor, optional_key};
//! use nested_access::Value;
//!
//! let user = Value::map([("name", Value::from("ada"))]);
//!
//! // Present key: the continuation's result is returned directly.
//! let name = optional_key("name").get(&user, &mut Value::clone);
//! assert_eq!(name, Value::from("ada"));
//!
//! // Absent key: a Nil terminal instead of a failure.
//! let email = optional_key("email").get(&user, &mut Value::clone);
//! assert_eq!(email, Value::Nil);
//! ```

use std::mem;

use crate::access::{Accessor, Step};
use crate::value::{Key, Value};

/// An accessor that focuses on exactly one key, treating absence as a
/// [`Value::Nil`] terminal rather than an error.
///
/// A key is considered absent when it is missing from the container, when it
/// is bound to [`Value::Nil`], or when the container is not a shape this
/// accessor recognizes (neither a mapping nor an ordered key-value
/// sequence). In all three cases read mode returns `Nil` and update mode
/// returns `(Nil, container unchanged)` without invoking the continuation.
///
/// This is the only accessor whose result is a single value rather than an
/// ordered sequence, because it addresses exactly one logical slot. For
/// ordered key-value sequences with duplicate keys, the first occurrence is
/// the one focused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionalKey {
    key: Key,
}

impl OptionalKey {
    /// Creates a new `OptionalKey` for the given key.
    pub fn new<K: Into<Key>>(key: K) -> Self {
        Self { key: key.into() }
    }

    /// First-occurrence lookup, distinguishing "no such key" (`None`) from
    /// "key bound to Nil" (`Some(&Value::Nil)`). Both are treated as absent
    /// by the accessor itself.
    fn lookup<'a>(&self, container: &'a Value) -> Option<&'a Value> {
        container
            .iter_entries()?
            .find(|(key, _)| **key == self.key)
            .map(|(_, value)| value)
    }
}

impl Accessor for OptionalKey {
    fn get(&self, container: &Value, next: &mut dyn FnMut(&Value) -> Value) -> Value {
        match self.lookup(container) {
            Some(value) if !value.is_nil() => next(value),
            _ => Value::Nil,
        }
    }

    fn get_and_update(
        &self,
        container: Value,
        next: &mut dyn FnMut(Value) -> Step,
    ) -> (Value, Value) {
        let (kind, mut pairs) = match container.into_parts() {
            Ok(parts) => parts,
            Err(other) => return (Value::Nil, other),
        };

        let Some(position) = pairs.iter().position(|(key, _)| *key == self.key) else {
            return (Value::Nil, Value::from_parts(kind, pairs));
        };
        if pairs[position].1.is_nil() {
            return (Value::Nil, Value::from_parts(kind, pairs));
        }

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
}

/// Creates an accessor for a single key that may be absent.
///
/// # Examples
///
/// ```
/// use nested_access::access::{Accessor, Step, optional_key};
/// use nested_access::Value;
///
/// let user = Value::map([("name", Value::from("ada"))]);
///
/// // Updating an absent key leaves the container untouched.
/// let (got, unchanged) = optional_key("email")
///     .get_and_update(user.clone(), &mut Step::Remove);
///
/// assert_eq!(got, Value::Nil);
/// assert_eq!(unchanged, user);
/// ```
pub fn optional_key<K: Into<Key>>(key: K) -> OptionalKey {
    OptionalKey::new(key)
}
