//! Path-composition drivers for chained traversals.
//!
//! A path is a non-empty slice of [`Accessor`]s. The drivers walk the path
//! left to right: each accessor is invoked with the correctly-scoped
//! sub-container and a "continue deeper" continuation, and the last
//! accessor's continuation is the caller's own function.
//!
//! # Examples
//!
//! ```
//! use nested_access::access::{Accessor, all_keys, at};
//! use nested_access::path::{get_in, update_in};
//! use nested_access::Value;
//!
//! let data = Value::map([
//!     ("a", Value::map([("b", 1)])),
//!     ("c", Value::map([("b", 2)])),
//! ]);
//!
//! let path: [&dyn Accessor; 2] = [&all_keys(), &at("b")];
//!
//! assert_eq!(get_in(&data, &path), Value::seq([1, 2]));
//!
//! let bumped = update_in(data, &path, |value| match value {
//!     Value::Int(inner) => Value::Int(inner + 1),
//!     other => other,
//! });
//! assert_eq!(
//!     bumped,
//!     Value::map([
//!         ("a", Value::map([("b", 2)])),
//!         ("c", Value::map([("b", 3)])),
//!     ])
//! );
//! ```

use crate::access::{Accessor, Step};
use crate::value::Value;

/// Reads the value(s) under `path` in `data`.
///
/// The leaf continuation is [`Value::clone`], so the result is the focused
/// value itself (or a [`Value::Seq`] of them under a multi-entry accessor,
/// or [`Value::Nil`] for an absent optional slot).
///
/// # Panics
///
/// Panics if `path` is empty, or if an accessor along the path is handed a
/// container shape it does not accept.
pub fn get_in(data: &Value, path: &[&dyn Accessor]) -> Value {
    match path {
        [] => panic!("get_in: path must not be empty"),
        [last] => last.get(data, &mut Value::clone),
        [first, rest @ ..] => first.get(data, &mut |value| get_in(value, rest)),
    }
}

/// Reads and updates the value(s) under `path` in one pass.
///
/// `fun` receives each focused value by ownership and returns a [`Step`]:
/// [`Step::Update`] to collect a result and write a replacement back, or
/// [`Step::Remove`] to drop the focused entry while surfacing the carried
/// value. Returns the aggregated read results paired with the rebuilt
/// structure.
///
/// # Panics
///
/// Panics if `path` is empty, or if an accessor along the path is handed a
/// container shape it does not accept.
pub fn get_and_update_in<F>(data: Value, path: &[&dyn Accessor], mut fun: F) -> (Value, Value)
where
    F: FnMut(Value) -> Step,
{
    fn drive(
        data: Value,
        path: &[&dyn Accessor],
        fun: &mut dyn FnMut(Value) -> Step,
    ) -> (Value, Value) {
        match path {
            [] => panic!("get_and_update_in: path must not be empty"),
            [last] => last.get_and_update(data, fun),
            [first, rest @ ..] => first.get_and_update(data, &mut |value| {
                let (got, new_value) = drive(value, rest, &mut *fun);
                Step::Update(got, new_value)
            }),
        }
    }

    drive(data, path, &mut fun)
}

/// Updates the value(s) under `path` without collecting read results.
///
/// This is the degenerate case of [`get_and_update_in`] whose read results
/// are discarded.
///
/// # Panics
///
/// Panics if `path` is empty, or if an accessor along the path is handed a
/// container shape it does not accept.
pub fn update_in<F>(data: Value, path: &[&dyn Accessor], mut fun: F) -> Value
where
    F: FnMut(Value) -> Value,
{
    let (_, updated) = get_and_update_in(data, path, |value| {
        let new_value = fun(value);
        Step::Update(Value::Nil, new_value)
    });
    updated
}

/// Removes the value(s) under `path`, returning them with the rebuilt
/// structure.
///
/// The popped values surface exactly as they were stored; containers along
/// the path are rebuilt with the focused entries dropped and all other
/// entries in their original order.
///
/// # Panics
///
/// Panics if `path` is empty, or if an accessor along the path is handed a
/// container shape it does not accept.
pub fn pop_in(data: Value, path: &[&dyn Accessor]) -> (Value, Value) {
    get_and_update_in(data, path, Step::Remove)
}
