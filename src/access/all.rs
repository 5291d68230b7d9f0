//! AllKeys accessor for entry-wise traversal of a container.
//!
//! # Examples
//!
//! ```
//! use nested_access::access::{Accessor, Step, all_keys};
//! use nested_access::Value;
//!
//! let scores = Value::map([("ada", 1), ("grace", 2)]);
//!
//! // Read every value.
//! let read = all_keys().get(&scores, &mut Value::clone);
//! assert_eq!(read, Value::seq([1, 2]));
//!
//! // Pop every entry.
//! let (popped, emptied) = all_keys().get_and_update(scores, &mut Step::Remove);
//! assert_eq!(popped, Value::seq([1, 2]));
//! assert_eq!(emptied, Value::map::<&str, Value, _>([]));
//! ```

use crate::access::{Accessor, Step};
use crate::value::Value;

/// An accessor that recurses into every entry of a container, ignoring keys.
///
/// Read mode yields an ordered [`Value::Seq`] with one element per entry, in
/// entry-iteration order. Update mode rebuilds the container with each
/// entry's value replaced or removed as the continuation decides.
///
/// An empty container yields an empty sequence and an unchanged (empty)
/// container.
#[derive(Debug, Clone, Copy, Default)]
pub struct AllKeys;

impl AllKeys {
    /// Creates a new `AllKeys`.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Accessor for AllKeys {
    /// # Panics
    ///
    /// Panics if `container` is not a mapping or an ordered key-value
    /// sequence; presenting any other shape is a contract violation.
    fn get(&self, container: &Value, next: &mut dyn FnMut(&Value) -> Value) -> Value {
        let Some(entries) = container.iter_entries() else {
            panic!(
                "all_keys: expected a map or entries container, found {}",
                container.kind_name()
            );
        };

        Value::Seq(entries.map(|(_, value)| next(value)).collect())
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
        let (kind, pairs) = match container.into_parts() {
            Ok(parts) => parts,
            Err(other) => panic!(
                "all_keys: expected a map or entries container, found {}",
                other.kind_name()
            ),
        };

        let mut collected = Vec::with_capacity(pairs.len());
        let mut retained = Vec::with_capacity(pairs.len());

        for (key, value) in pairs {
            match next(value) {
                Step::Update(got, new_value) => {
                    collected.push(got);
                    retained.push((key, new_value));
                }
                Step::Remove(got) => collected.push(got),
            }
        }

        (Value::Seq(collected), Value::from_parts(kind, retained))
    }
}

/// Creates an accessor that traverses every entry of a container.
///
/// # Examples
///
/// ```
/// use nested_access::access::{Accessor, all_keys};
/// use nested_access::Value;
///
/// let pairs = Value::entries([("a", 1), ("a", 2)]);
/// let read = all_keys().get(&pairs, &mut Value::clone);
///
/// assert_eq!(read, Value::seq([1, 2]));
/// ```
#[must_use]
pub const fn all_keys() -> AllKeys {
    AllKeys::new()
}
