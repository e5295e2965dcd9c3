//! Diff computation and pruning.

use std::collections::BTreeMap;

use crate::diff::model::{ChangeKind, DiffNode};
use crate::errors::{MementoError, Result};
use crate::model::{AttributeMap, AttributeValue};

/// Compute a classified diff tree between two attribute trees
///
/// `None` means "no value on this side": keys absent from one tree diff
/// against `None` and classify as created or deleted. Containers (maps and
/// lists, the latter keyed by decimal index) recurse per key; anything else
/// classifies as a leaf by value identity. Keys holding a callable value on
/// either side are skipped entirely, with no diff entry.
///
/// # Errors
///
/// `InvalidArgument` when either given value is itself callable; the whole
/// comparison aborts with no partial result.
pub fn diff(old: Option<&AttributeValue>, new: Option<&AttributeValue>) -> Result<DiffNode> {
    if is_callable(old) || is_callable(new) {
        return Err(MementoError::InvalidArgument);
    }

    let (old_value, new_value) = match (old, new) {
        (Some(o), Some(n)) if o.is_container() && n.is_container() => (o, n),
        _ => return Ok(classify_leaf(old, new)),
    };

    let mut branch = BTreeMap::new();

    for (key, old_entry) in container_entries(old_value) {
        let new_entry = container_get(new_value, &key);
        if old_entry.is_callable() || is_callable(new_entry) {
            continue;
        }
        branch.insert(key, diff(Some(old_entry), new_entry)?);
    }

    for (key, new_entry) in container_entries(new_value) {
        if branch.contains_key(&key) || new_entry.is_callable() {
            continue;
        }
        // A key skipped above because its old value was callable must stay
        // skipped here; only keys genuinely absent from the old side diff
        // as created.
        if is_callable(container_get(old_value, &key)) {
            continue;
        }
        branch.insert(key, diff(None, Some(new_entry))?);
    }

    Ok(DiffNode::Branch(branch))
}

/// Diff two attribute maps, the common entry point for whole-state diffs
///
/// # Errors
///
/// `InvalidArgument` when a callable value is reached outside a container
/// key position.
pub fn diff_maps(old: &AttributeMap, new: &AttributeMap) -> Result<DiffNode> {
    let old_value = AttributeValue::Map(old.clone());
    let new_value = AttributeValue::Map(new.clone());
    diff(Some(&old_value), Some(&new_value))
}

/// Project a diff tree down to only the effective changes
///
/// A leaf survives with its value only when created or updated; deleted and
/// unchanged leaves vanish along with their keys. A branch recurses and is
/// always included as a nested map, even when pruning empties it. `None` is
/// only returned for vanishing leaves, so pruning a branch-rooted tree
/// always yields a map.
pub fn prune(node: &DiffNode) -> Option<AttributeValue> {
    match node {
        DiffNode::Leaf {
            kind: ChangeKind::Created | ChangeKind::Updated,
            value,
        } => Some(value.clone()),
        DiffNode::Leaf { .. } => None,
        DiffNode::Branch(children) => {
            let mut kept = AttributeMap::new();
            for (name, child) in children {
                if let Some(value) = prune(child) {
                    kept.insert(name.clone(), value);
                }
            }
            Some(AttributeValue::Map(kept))
        }
    }
}

fn is_callable(value: Option<&AttributeValue>) -> bool {
    matches!(value, Some(v) if v.is_callable())
}

fn classify_leaf(old: Option<&AttributeValue>, new: Option<&AttributeValue>) -> DiffNode {
    match (old, new) {
        (None, Some(new)) => DiffNode::Leaf {
            kind: ChangeKind::Created,
            value: new.clone(),
        },
        (Some(old), None) => DiffNode::Leaf {
            kind: ChangeKind::Deleted,
            value: old.clone(),
        },
        (Some(old), Some(new)) if old == new => DiffNode::Leaf {
            kind: ChangeKind::Unchanged,
            value: new.clone(),
        },
        (Some(_), Some(new)) => DiffNode::Leaf {
            kind: ChangeKind::Updated,
            value: new.clone(),
        },
        (None, None) => DiffNode::Leaf {
            kind: ChangeKind::Unchanged,
            value: AttributeValue::Null,
        },
    }
}

/// Keyed view over a container: map entries by name, list items by index
fn container_entries(value: &AttributeValue) -> Vec<(String, &AttributeValue)> {
    match value {
        AttributeValue::Map(entries) => entries
            .iter()
            .map(|(name, entry)| (name.clone(), entry))
            .collect(),
        AttributeValue::List(items) => items
            .iter()
            .enumerate()
            .map(|(index, item)| (index.to_string(), item))
            .collect(),
        _ => Vec::new(),
    }
}

fn container_get<'a>(value: &'a AttributeValue, key: &str) -> Option<&'a AttributeValue> {
    match value {
        AttributeValue::Map(entries) => entries.get(key),
        AttributeValue::List(items) => key.parse::<usize>().ok().and_then(|index| items.get(index)),
        _ => None,
    }
}
