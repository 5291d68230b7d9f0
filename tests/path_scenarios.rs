//! Integration tests for accessor paths over nested data.
//!
//! Tests cover:
//! - get/update/pop through `all_keys` paths
//! - `skip_keys` exclusion behavior along a path
//! - `optional_key` absent-slot behavior along a path
//! - kind preservation and entry ordering across rebuilds
//! - deep paths mixing map and entries containers

#![forbid(unsafe_code)]

use nested_access::access::{Accessor, all_keys, at, optional_key, skip_keys};
use nested_access::path::{get_and_update_in, get_in, pop_in, update_in};
use nested_access::{Step, Value};
use rstest::rstest;

// =============================================================================
// Fixtures
// =============================================================================

fn two_submaps() -> Value {
    Value::map([
        ("a", Value::map([("b", 1)])),
        ("c", Value::map([("b", 2)])),
    ])
}

fn increment(value: Value) -> Value {
    match value {
        Value::Int(inner) => Value::Int(inner + 1),
        other => other,
    }
}

// =============================================================================
// AllKeys Path Tests
// =============================================================================

mod all_keys_paths {
    use super::*;

    #[test]
    fn test_get_collects_every_branch_in_order() {
        let path: [&dyn Accessor; 2] = [&all_keys(), &at("b")];

        assert_eq!(get_in(&two_submaps(), &path), Value::seq([1, 2]));
    }

    #[test]
    fn test_update_rewrites_every_branch() {
        let path: [&dyn Accessor; 2] = [&all_keys(), &at("b")];

        let updated = update_in(two_submaps(), &path, increment);

        assert_eq!(
            updated,
            Value::map([
                ("a", Value::map([("b", 2)])),
                ("c", Value::map([("b", 3)])),
            ])
        );
    }

    #[test]
    fn test_pop_removes_every_branch_and_keeps_emptied_parents() {
        let path: [&dyn Accessor; 2] = [&all_keys(), &at("b")];

        let (popped, remaining) = pop_in(two_submaps(), &path);

        assert_eq!(popped, Value::seq([1, 2]));
        assert_eq!(
            remaining,
            Value::map([
                ("a", Value::map::<&str, Value, _>([])),
                ("c", Value::map::<&str, Value, _>([])),
            ])
        );
    }

    #[test]
    fn test_get_and_update_surfaces_gots_alongside_rebuilt_structure() {
        let path: [&dyn Accessor; 2] = [&all_keys(), &at("b")];

        let (got, updated) = get_and_update_in(two_submaps(), &path, |value| match value {
            Value::Int(inner) => Step::Update(Value::Int(inner), Value::Int(inner * 10)),
            other => Step::Update(other.clone(), other),
        });

        assert_eq!(got, Value::seq([1, 2]));
        assert_eq!(
            updated,
            Value::map([
                ("a", Value::map([("b", 10)])),
                ("c", Value::map([("b", 20)])),
            ])
        );
    }

    #[rstest]
    #[case::two_levels(2)]
    #[case::three_levels(3)]
    #[case::four_levels(4)]
    fn test_all_keys_chain_reaches_every_leaf(#[case] depth: usize) {
        // A uniform tree: each level is a two-entry map, leaves are 1.
        let mut data = Value::Int(1);
        for _ in 0..depth {
            data = Value::map([("left", data.clone()), ("right", data)]);
        }

        let segment = all_keys();
        let path: Vec<&dyn Accessor> = (0..depth).map(|_| &segment as &dyn Accessor).collect();

        let read = get_in(&data, &path);
        let mut leaves = 0;
        let mut pending = vec![&read];
        while let Some(value) = pending.pop() {
            match value {
                Value::Seq(values) => pending.extend(values.iter()),
                Value::Int(1) => leaves += 1,
                other => panic!("unexpected value {other:?}"),
            }
        }
        assert_eq!(leaves, 2_usize.pow(u32::try_from(depth).unwrap()));
    }
}

// =============================================================================
// SkipKeys Path Tests
// =============================================================================

mod skip_keys_paths {
    use super::*;

    fn three_submaps() -> Value {
        Value::map([
            ("a", Value::map([("b", 1)])),
            ("c", Value::map([("b", 2)])),
            ("d", Value::map([("b", 3)])),
        ])
    }

    #[test]
    fn test_get_skips_excluded_branch() {
        let path: [&dyn Accessor; 2] = [&skip_keys(["d"]), &at("b")];

        assert_eq!(get_in(&three_submaps(), &path), Value::seq([1, 2]));
    }

    #[test]
    fn test_update_leaves_excluded_branch_untouched() {
        let path: [&dyn Accessor; 2] = [&skip_keys(["d"]), &at("b")];

        let updated = update_in(three_submaps(), &path, increment);

        assert_eq!(
            updated,
            Value::map([
                ("a", Value::map([("b", 2)])),
                ("c", Value::map([("b", 3)])),
                ("d", Value::map([("b", 3)])),
            ])
        );
    }

    #[test]
    fn test_empty_exclusion_set_behaves_like_all_keys() {
        let data = three_submaps();
        let skip_path: [&dyn Accessor; 2] = [&skip_keys::<&str, _>([]), &at("b")];
        let all_path: [&dyn Accessor; 2] = [&all_keys(), &at("b")];

        assert_eq!(get_in(&data, &skip_path), get_in(&data, &all_path));
        assert_eq!(
            update_in(data.clone(), &skip_path, increment),
            update_in(data, &all_path, increment)
        );
    }

    #[test]
    fn test_full_exclusion_set_is_a_no_op() {
        let data = three_submaps();
        let path: [&dyn Accessor; 1] = [&skip_keys(["a", "c", "d"])];

        assert_eq!(get_in(&data, &path), Value::Seq(vec![]));

        let (got, unchanged) = pop_in(data.clone(), &path);
        assert_eq!(got, Value::Seq(vec![]));
        assert_eq!(unchanged, data);
    }
}

// =============================================================================
// OptionalKey Path Tests
// =============================================================================

mod optional_key_paths {
    use super::*;

    fn uneven_submaps() -> Value {
        Value::map([
            ("a", Value::map([("b", 1)])),
            ("c", Value::map([("d", 2)])),
        ])
    }

    #[test]
    fn test_get_yields_nil_for_absent_branches() {
        let path: [&dyn Accessor; 2] = [&all_keys(), &optional_key("b")];

        assert_eq!(
            get_in(&uneven_submaps(), &path),
            Value::seq([Value::Int(1), Value::Nil])
        );
    }

    #[test]
    fn test_update_only_touches_present_branches() {
        let path: [&dyn Accessor; 2] = [&all_keys(), &optional_key("b")];

        let updated = update_in(uneven_submaps(), &path, increment);

        assert_eq!(
            updated,
            Value::map([
                ("a", Value::map([("b", 2)])),
                ("c", Value::map([("d", 2)])),
            ])
        );
    }

    #[test]
    fn test_pop_only_removes_present_branches() {
        let path: [&dyn Accessor; 2] = [&all_keys(), &optional_key("b")];

        let (popped, remaining) = pop_in(uneven_submaps(), &path);

        assert_eq!(popped, Value::seq([Value::Int(1), Value::Nil]));
        assert_eq!(
            remaining,
            Value::map([
                ("a", Value::map::<&str, Value, _>([])),
                ("c", Value::map([("d", 2)])),
            ])
        );
    }

    #[rstest]
    #[case::missing_key(Value::map([("other", 1)]))]
    #[case::nil_value(Value::map([("b", Value::Nil)]))]
    #[case::leaf_container(Value::from(1))]
    #[case::plain_seq(Value::seq([1, 2]))]
    fn test_absent_slot_reads_nil_and_updates_nothing(#[case] container: Value) {
        let path: [&dyn Accessor; 1] = [&optional_key("b")];

        assert_eq!(get_in(&container, &path), Value::Nil);

        let (got, unchanged) = pop_in(container.clone(), &path);
        assert_eq!(got, Value::Nil);
        assert_eq!(unchanged, container);
    }
}

// =============================================================================
// Kind and Order Preservation Tests
// =============================================================================

mod rebuild_invariants {
    use super::*;

    #[test]
    fn test_entries_kind_survives_nested_update() {
        let data = Value::entries([
            ("x", Value::map([("n", 1)])),
            ("x", Value::map([("n", 2)])),
            ("y", Value::map([("n", 3)])),
        ]);
        let path: [&dyn Accessor; 2] = [&all_keys(), &at("n")];

        let updated = update_in(data, &path, increment);

        assert_eq!(
            updated,
            Value::entries([
                ("x", Value::map([("n", 2)])),
                ("x", Value::map([("n", 3)])),
                ("y", Value::map([("n", 4)])),
            ])
        );
    }

    #[test]
    fn test_partial_pop_preserves_map_entry_order() {
        let data = Value::map([
            ("a", Value::from(1)),
            ("b", Value::Nil),
            ("c", Value::from(3)),
        ]);

        // Popping through optional_key("b") hits the Nil slot, a no-op.
        let (got, remaining) = pop_in(data.clone(), &[&optional_key("b")]);
        assert_eq!(got, Value::Nil);
        assert_eq!(remaining, data);

        // Popping "a" keeps b and c in order.
        let (got, remaining) = pop_in(data, &[&at("a")]);
        assert_eq!(got, Value::Int(1));
        assert_eq!(
            remaining,
            Value::map([("b", Value::Nil), ("c", Value::from(3))])
        );
    }

    #[test]
    fn test_mixed_kind_path_rebuilds_each_level_with_its_own_kind() {
        let data = Value::entries([(
            "outer",
            Value::map([("inner", Value::entries([("n", 1), ("n", 2)]))]),
        )]);
        let path: [&dyn Accessor; 3] = [&at("outer"), &at("inner"), &all_keys()];

        let updated = update_in(data, &path, increment);

        assert_eq!(
            updated,
            Value::entries([(
                "outer",
                Value::map([("inner", Value::entries([("n", 2), ("n", 3)]))]),
            )])
        );
    }
}
