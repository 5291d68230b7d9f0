//! SkipKeys accessor for entry-wise traversal with an excluded key set.
//!
//! # Examples
//!
//! ```
//! use nested_access::access::{Accessor, skip_keys};
//! use nested_access::Value;
//!
//! let scores = Value::map([("ada", 1), ("grace", 2), ("legacy", 3)]);
//!
//! let read = skip_keys(["legacy"]).get(&scores, &mut Value::clone);
//! assert_eq!(read, Value::seq([1, 2]));
//! ```

use smallvec::SmallVec;

use crate::access::{Accessor, Step};
use crate::value::{Key, Value};

/// An accessor that recurses into every entry except those whose key belongs
/// to a fixed exclusion set.
///
/// Excluded entries are passed through untouched: they are not recursed
/// into, contribute nothing to the read results, and are copied unchanged
/// into the rebuilt container in update mode.
///
/// An empty exclusion set makes this accessor behave exactly like
/// [`AllKeys`](crate::access::AllKeys); an exclusion set covering every key
/// yields empty results and an unchanged container.
#[derive(Debug, Clone)]
pub struct SkipKeys {
    keys: SmallVec<[Key; 4]>,
}

impl SkipKeys {
    /// Creates a new `SkipKeys` excluding the given keys.
    ///
    /// The exclusion set is fixed for the lifetime of the accessor and
    /// compared by key equality against each entry.
    pub fn new<K, I>(keys: I) -> Self
    where
        K: Into<Key>,
        I: IntoIterator<Item = K>,
    {
        Self {
            keys: keys.into_iter().map(Into::into).collect(),
        }
    }

    fn is_excluded(&self, key: &Key) -> bool {
        self.keys.contains(key)
    }
}

impl Accessor for SkipKeys {
    /// # Panics
    ///
    /// Panics if `container` is not a mapping or an ordered key-value
    /// sequence; presenting any other shape is a contract violation.
    fn get(&self, container: &Value, next: &mut dyn FnMut(&Value) -> Value) -> Value {
        let Some(entries) = container.iter_entries() else {
            panic!(
                "skip_keys: expected a map or entries container, found {}",
                container.kind_name()
            );
        };

        Value::Seq(
            entries
                .filter(|(key, _)| !self.is_excluded(key))
                .map(|(_, value)| next(value))
                .collect(),
        )
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
                "skip_keys: expected a map or entries container, found {}",
                other.kind_name()
            ),
        };

        let mut collected = Vec::new();
        let mut retained = Vec::with_capacity(pairs.len());

        for (key, value) in pairs {
            if self.is_excluded(&key) {
                retained.push((key, value));
                continue;
            }

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

/// Creates an accessor that traverses every entry except the given keys.
///
/// # Examples
///
/// ```
/// use nested_access::access::{Accessor, Step, skip_keys};
/// use nested_access::Value;
///
/// let scores = Value::map([("ada", 1), ("legacy", 2)]);
///
/// let (got, updated) = skip_keys(["legacy"]).get_and_update(scores, &mut |value| {
///     Step::Update(value.clone(), Value::Int(0))
/// });
///
/// assert_eq!(got, Value::seq([1]));
/// assert_eq!(updated, Value::map([("ada", 0), ("legacy", 2)]));
/// ```
pub fn skip_keys<K, I>(keys: I) -> SkipKeys
where
    K: Into<Key>,
    I: IntoIterator<Item = K>,
{
    SkipKeys::new(keys)
}
