//! Pure diff engine tests: classification, pruning, callable rejection.

mod common;

use common::attrs;
use memento_core::diff::{diff, diff_maps, prune, ChangeKind, DiffNode};
use memento_core::{AttributeValue, CallableRef, MementoError};

fn expect_leaf<'a>(node: &'a DiffNode, key: &str) -> (ChangeKind, &'a AttributeValue) {
    match node {
        DiffNode::Branch(children) => match children.get(key) {
            Some(DiffNode::Leaf { kind, value }) => (*kind, value),
            other => panic!("expected leaf at {}, got {:?}", key, other),
        },
        DiffNode::Leaf { .. } => panic!("expected branch"),
    }
}

// S1: the canonical classification example
#[test]
fn test_classification_of_flat_maps() {
    let old = attrs(&[("a", 1.into()), ("b", 2.into())]);
    let new = attrs(&[("a", 1.into()), ("b", 3.into()), ("c", 4.into())]);

    let tree = diff_maps(&old, &new).unwrap();

    let (kind, value) = expect_leaf(&tree, "a");
    assert_eq!(kind, ChangeKind::Unchanged);
    assert_eq!(value, &AttributeValue::from(1));

    let (kind, value) = expect_leaf(&tree, "b");
    assert_eq!(kind, ChangeKind::Updated);
    assert_eq!(value, &AttributeValue::from(3));

    let (kind, value) = expect_leaf(&tree, "c");
    assert_eq!(kind, ChangeKind::Created);
    assert_eq!(value, &AttributeValue::from(4));
}

// S2: pruning the canonical example keeps only created/updated values
#[test]
fn test_prune_projects_to_effective_changes() {
    let old = attrs(&[("a", 1.into()), ("b", 2.into())]);
    let new = attrs(&[("a", 1.into()), ("b", 3.into()), ("c", 4.into())]);

    let tree = diff_maps(&old, &new).unwrap();
    let pruned = prune(&tree).unwrap();

    assert_eq!(
        pruned,
        AttributeValue::Map(attrs(&[("b", 3.into()), ("c", 4.into())]))
    );
}

// S3: deleted leaves carry the old value and vanish when pruned
#[test]
fn test_deleted_leaf_holds_old_value_and_prunes_away() {
    let old = attrs(&[("gone", 9.into()), ("kept", 1.into())]);
    let new = attrs(&[("kept", 1.into())]);

    let tree = diff_maps(&old, &new).unwrap();
    let (kind, value) = expect_leaf(&tree, "gone");
    assert_eq!(kind, ChangeKind::Deleted);
    assert_eq!(value, &AttributeValue::from(9));

    let pruned = prune(&tree).unwrap();
    assert_eq!(pruned, AttributeValue::Map(attrs(&[])));
}

// S4: nested maps diff recursively, preserving shape
#[test]
fn test_nested_maps_diff_recursively() {
    let old = attrs(&[(
        "outer",
        AttributeValue::Map(attrs(&[("inner", 1.into()), ("same", "s".into())])),
    )]);
    let new = attrs(&[(
        "outer",
        AttributeValue::Map(attrs(&[("inner", 2.into()), ("same", "s".into())])),
    )]);

    let tree = diff_maps(&old, &new).unwrap();
    let outer = match &tree {
        DiffNode::Branch(children) => &children["outer"],
        DiffNode::Leaf { .. } => panic!("expected branch"),
    };
    let (kind, value) = expect_leaf(outer, "inner");
    assert_eq!(kind, ChangeKind::Updated);
    assert_eq!(value, &AttributeValue::from(2));

    let pruned = prune(&tree).unwrap();
    assert_eq!(
        pruned,
        AttributeValue::Map(attrs(&[(
            "outer",
            AttributeValue::Map(attrs(&[("inner", 2.into())]))
        )]))
    );
}

// S5: diffing a callable is an error with no partial result
#[test]
fn test_callable_comparison_fails() {
    let callable = AttributeValue::Callable(CallableRef::new("handler"));
    let plain = AttributeValue::from("data");

    assert_eq!(
        diff(Some(&callable), Some(&plain)),
        Err(MementoError::InvalidArgument)
    );
    assert_eq!(
        diff(Some(&plain), Some(&callable)),
        Err(MementoError::InvalidArgument)
    );
    assert_eq!(
        diff(Some(&callable), Some(&callable)),
        Err(MementoError::InvalidArgument)
    );
}

// S6: callable-valued keys inside containers are skipped, not errors
#[test]
fn test_callable_keys_inside_containers_are_skipped() {
    let old = attrs(&[
        ("data", 1.into()),
        ("on_change", CallableRef::new("f").into()),
    ]);
    let new = attrs(&[
        ("data", 2.into()),
        ("on_change", CallableRef::new("g").into()),
    ]);

    let tree = diff_maps(&old, &new).unwrap();
    match &tree {
        DiffNode::Branch(children) => {
            assert!(children.contains_key("data"));
            assert!(!children.contains_key("on_change"));
        }
        DiffNode::Leaf { .. } => panic!("expected branch"),
    }
}

// S7: lists compare per index, like keyed mappings
#[test]
fn test_lists_compare_per_index() {
    let old = attrs(&[(
        "tags",
        AttributeValue::List(vec!["x".into(), "y".into()]),
    )]);
    let new = attrs(&[(
        "tags",
        AttributeValue::List(vec!["x".into(), "z".into(), "w".into()]),
    )]);

    let tree = diff_maps(&old, &new).unwrap();
    let tags = match &tree {
        DiffNode::Branch(children) => &children["tags"],
        DiffNode::Leaf { .. } => panic!("expected branch"),
    };

    let (kind, _) = expect_leaf(tags, "0");
    assert_eq!(kind, ChangeKind::Unchanged);
    let (kind, value) = expect_leaf(tags, "1");
    assert_eq!(kind, ChangeKind::Updated);
    assert_eq!(value, &AttributeValue::from("z"));
    let (kind, _) = expect_leaf(tags, "2");
    assert_eq!(kind, ChangeKind::Created);
}

// S8: diffing the same state twice is deterministic
#[test]
fn test_diff_is_deterministic() {
    let old = attrs(&[("a", 1.into()), ("nested", AttributeValue::Map(attrs(&[("x", 2.into())])))]);
    let new = attrs(&[("a", 2.into()), ("nested", AttributeValue::Map(attrs(&[("x", 3.into())])))]);

    let first = diff_maps(&old, &new).unwrap();
    let second = diff_maps(&old, &new).unwrap();
    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

// S9: a value replaced by a differently-shaped value is a single updated leaf
#[test]
fn test_shape_change_is_updated_leaf() {
    let old = attrs(&[("field", AttributeValue::Map(attrs(&[("x", 1.into())])))]);
    let new = attrs(&[("field", "flattened".into())]);

    let tree = diff_maps(&old, &new).unwrap();
    let (kind, value) = expect_leaf(&tree, "field");
    assert_eq!(kind, ChangeKind::Updated);
    assert_eq!(value, &AttributeValue::from("flattened"));
}
