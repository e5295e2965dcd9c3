//! Diff output types.
//!
//! All types implement `Debug, Clone, Serialize, Deserialize, PartialEq`.
//! Branches use `BTreeMap` for deterministic serialization.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::model::AttributeValue;

/// Classification of a single field when comparing two state trees
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeKind {
    /// Present in the new tree only
    Created,
    /// Present on both sides with different values
    Updated,
    /// Present in the old tree only
    Deleted,
    /// Present on both sides with equal values
    Unchanged,
}

/// One node of a computed diff tree
///
/// Mirrors the shape of the compared trees: containers become branches
/// keyed by attribute name (or decimal index for lists), everything else
/// becomes a classified leaf.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiffNode {
    /// Terminal comparison of two values
    ///
    /// `value` holds the new value for created/updated/unchanged and the
    /// old (only available) value for deleted.
    Leaf {
        /// How the field changed
        kind: ChangeKind,
        /// The surviving value for this field
        value: AttributeValue,
    },
    /// Keyed container compared per attribute name
    Branch(BTreeMap<String, DiffNode>),
}

impl DiffNode {
    /// True when nothing under this node changed
    pub fn is_unchanged(&self) -> bool {
        match self {
            DiffNode::Leaf { kind, .. } => *kind == ChangeKind::Unchanged,
            DiffNode::Branch(children) => children.values().all(DiffNode::is_unchanged),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_branch_unchanged_only_when_all_children_unchanged() {
        let mut children = BTreeMap::new();
        children.insert(
            "a".to_string(),
            DiffNode::Leaf {
                kind: ChangeKind::Unchanged,
                value: AttributeValue::from(1),
            },
        );
        assert!(DiffNode::Branch(children.clone()).is_unchanged());

        children.insert(
            "b".to_string(),
            DiffNode::Leaf {
                kind: ChangeKind::Updated,
                value: AttributeValue::from(2),
            },
        );
        assert!(!DiffNode::Branch(children).is_unchanged());
    }

    #[test]
    fn test_diff_node_round_trips_through_json() {
        let node = DiffNode::Leaf {
            kind: ChangeKind::Created,
            value: AttributeValue::from("new"),
        };
        let encoded = serde_json::to_string(&node).unwrap();
        let decoded: DiffNode = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, node);
    }
}
