//! Dynamic value model for nested heterogeneous data.
//!
//! This module provides [`Value`], a tagged representation of arbitrarily
//! nested key-value data, and [`Key`], the entry-key type shared by both
//! container kinds.
//!
//! # Container Kinds
//!
//! Two variants of [`Value`] are *containers* in the sense of the accessor
//! protocol:
//!
//! - [`Value::Map`]: a mapping with unique keys. Backed by
//!   [`IndexMap`](indexmap::IndexMap) so iteration order is deterministic
//!   (insertion order) and rebuilding after an update preserves the relative
//!   order of retained entries.
//! - [`Value::Entries`]: an ordered key-value sequence. Keys may repeat; the
//!   first occurrence of a key is canonical for single-key lookups.
//!
//! Everything else ([`Value::Nil`], scalars, [`Value::Seq`]) is leaf data as
//! far as traversal is concerned.
//!
//! # Examples
//!
//! ```
//! use nested_access::Value;
//!
//! let data = Value::map([
//!     ("name", Value::from("ada")),
//!     ("scores", Value::seq([Value::from(1), Value::from(2)])),
//! ]);
//!
//! assert!(!data.is_nil());
//! ```

use indexmap::IndexMap;

/// An entry key within a container.
///
/// Both container kinds index their entries by `Key`. Keys compare by
/// structural equality; string and integer keys are never equal to each
/// other.
///
/// # Examples
///
/// ```
/// use nested_access::Key;
///
/// let by_name = Key::from("name");
/// let by_index = Key::from(3);
///
/// assert_ne!(by_name, by_index);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Key {
    /// A string key.
    Str(String),
    /// An integer key.
    Int(i64),
}

impl From<&str> for Key {
    fn from(key: &str) -> Self {
        Self::Str(key.to_string())
    }
}

impl From<String> for Key {
    fn from(key: String) -> Self {
        Self::Str(key)
    }
}

impl From<i64> for Key {
    fn from(key: i64) -> Self {
        Self::Int(key)
    }
}

impl std::fmt::Display for Key {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Str(key) => write!(formatter, "{key:?}"),
            Self::Int(key) => write!(formatter, "{key}"),
        }
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Key {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Self::Str(key) => serializer.serialize_str(key),
            Self::Int(key) => serializer.serialize_i64(*key),
        }
    }
}

/// A dynamically typed nested value.
///
/// `Value` is the single type flowing through the accessor protocol: the
/// containers being traversed, the leaves being read or replaced, and the
/// aggregated results (an ordered [`Value::Seq`] for multi-entry combinators,
/// [`Value::Nil`] for absent slots) are all `Value`s.
///
/// Inputs are never mutated in place; every traversal returns newly
/// constructed output.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Value {
    /// The null/absent terminal value.
    Nil,
    /// A boolean leaf.
    Bool(bool),
    /// An integer leaf.
    Int(i64),
    /// A floating-point leaf.
    Float(f64),
    /// A string leaf.
    Str(String),
    /// A plain ordered sequence. Leaf data for traversal purposes; also the
    /// shape of aggregated multi-entry results.
    Seq(Vec<Value>),
    /// A mapping container with unique keys and deterministic (insertion)
    /// iteration order.
    Map(IndexMap<Key, Value>),
    /// An ordered key-value sequence container. Duplicate keys are allowed
    /// and preserved; the first occurrence of a key is canonical.
    Entries(Vec<(Key, Value)>),
}

/// The concrete kind of a container, remembered across decompose/rebuild so
/// an update pass returns the same kind it was given.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ContainerKind {
    Map,
    Entries,
}

impl Value {
    /// Builds a [`Value::Map`] from an iterator of entries.
    ///
    /// Entry order becomes the map's iteration order. Later duplicates
    /// overwrite earlier ones, as with any mapping.
    ///
    /// # Examples
    ///
    /// ```
    /// use nested_access::Value;
    ///
    /// let config = Value::map([
    ///     ("retries", Value::from(3)),
    ///     ("verbose", Value::from(true)),
    /// ]);
    /// ```
    pub fn map<K, V, I>(entries: I) -> Self
    where
        K: Into<Key>,
        V: Into<Self>,
        I: IntoIterator<Item = (K, V)>,
    {
        Self::Map(
            entries
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }

    /// Builds a [`Value::Entries`] from an iterator of entries.
    ///
    /// Order and duplicate keys are preserved as given.
    pub fn entries<K, V, I>(entries: I) -> Self
    where
        K: Into<Key>,
        V: Into<Self>,
        I: IntoIterator<Item = (K, V)>,
    {
        Self::Entries(
            entries
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }

    /// Builds a [`Value::Seq`] from an iterator of values.
    pub fn seq<V, I>(values: I) -> Self
    where
        V: Into<Self>,
        I: IntoIterator<Item = V>,
    {
        Self::Seq(values.into_iter().map(Into::into).collect())
    }

    /// Returns `true` if this value is [`Value::Nil`].
    #[must_use]
    pub const fn is_nil(&self) -> bool {
        matches!(self, Self::Nil)
    }

    /// Returns `true` if this value is a container the accessor protocol
    /// recognizes (a mapping or an ordered key-value sequence).
    #[must_use]
    pub const fn is_container(&self) -> bool {
        matches!(self, Self::Map(_) | Self::Entries(_))
    }

    /// A short name for the variant, for diagnostics.
    pub(crate) const fn kind_name(&self) -> &'static str {
        match self {
            Self::Nil => "nil",
            Self::Bool(_) => "bool",
            Self::Int(_) => "int",
            Self::Float(_) => "float",
            Self::Str(_) => "str",
            Self::Seq(_) => "seq",
            Self::Map(_) => "map",
            Self::Entries(_) => "entries",
        }
    }

    /// Borrow-iterates the entries of a container in iteration order, or
    /// `None` if this value is not a container.
    pub(crate) fn iter_entries(&self) -> Option<Box<dyn Iterator<Item = (&Key, &Value)> + '_>> {
        match self {
            Self::Map(entries) => Some(Box::new(entries.iter())),
            Self::Entries(entries) => Some(Box::new(entries.iter().map(|(key, value)| (key, value)))),
            _ => None,
        }
    }

    /// Decomposes a container into its kind and owned entries, preserving
    /// order. Non-containers are handed back unchanged in the `Err` case.
    pub(crate) fn into_parts(self) -> Result<(ContainerKind, Vec<(Key, Value)>), Self> {
        match self {
            Self::Map(entries) => Ok((ContainerKind::Map, entries.into_iter().collect())),
            Self::Entries(entries) => Ok((ContainerKind::Entries, entries)),
            other => Err(other),
        }
    }

    /// Reassembles a container of the given kind from owned entries,
    /// preserving the order of `pairs`.
    pub(crate) fn from_parts(kind: ContainerKind, pairs: Vec<(Key, Value)>) -> Self {
        match kind {
            ContainerKind::Map => Self::Map(pairs.into_iter().collect()),
            ContainerKind::Entries => Self::Entries(pairs),
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}
