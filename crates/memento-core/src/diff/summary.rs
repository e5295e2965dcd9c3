//! Human-readable summary renderer for diff trees.

use crate::diff::model::{ChangeKind, DiffNode};

/// Render a human-readable text summary of a diff tree
///
/// One bullet per changed field, addressed by its dotted path. Intended
/// for review display; informational only, never affects the structured
/// diff.
pub fn render_change_summary(diff: &DiffNode) -> String {
    let mut out = String::new();
    out.push_str("## State Changes\n\n");

    if diff.is_unchanged() {
        out.push_str("_No changes detected._\n");
        return out;
    }

    let mut lines = Vec::new();
    collect_lines(diff, "", &mut lines);
    for line in &lines {
        out.push_str(line);
        out.push('\n');
    }
    out
}

fn collect_lines(node: &DiffNode, path: &str, lines: &mut Vec<String>) {
    match node {
        DiffNode::Leaf {
            kind: ChangeKind::Unchanged,
            ..
        } => {}
        DiffNode::Leaf {
            kind: ChangeKind::Created,
            value,
        } => lines.push(format!("- `{}`: created (`{}`)", path, value)),
        DiffNode::Leaf {
            kind: ChangeKind::Updated,
            value,
        } => lines.push(format!("- `{}`: updated (→ `{}`)", path, value)),
        DiffNode::Leaf {
            kind: ChangeKind::Deleted,
            value,
        } => lines.push(format!("- `{}`: deleted (was `{}`)", path, value)),
        DiffNode::Branch(children) => {
            for (name, child) in children {
                let child_path = if path.is_empty() {
                    name.clone()
                } else {
                    format!("{}.{}", path, name)
                };
                collect_lines(child, &child_path, lines);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diff::engine::diff_maps;
    use crate::model::{AttributeMap, AttributeValue};

    fn map(pairs: &[(&str, AttributeValue)]) -> AttributeMap {
        pairs
            .iter()
            .map(|(name, value)| (name.to_string(), value.clone()))
            .collect()
    }

    #[test]
    fn test_summary_no_changes() {
        let state = map(&[("a", 1.into())]);
        let tree = diff_maps(&state, &state).unwrap();
        let summary = render_change_summary(&tree);
        assert!(summary.contains("_No changes detected._"));
    }

    #[test]
    fn test_summary_lists_changed_fields_with_paths() {
        let old = map(&[
            ("a", 1.into()),
            ("b", 2.into()),
            ("nested", AttributeValue::Map(map(&[("x", 1.into())]))),
        ]);
        let new = map(&[
            ("a", 1.into()),
            ("b", 3.into()),
            ("c", 4.into()),
            ("nested", AttributeValue::Map(map(&[("x", 9.into())]))),
        ]);

        let tree = diff_maps(&old, &new).unwrap();
        let summary = render_change_summary(&tree);
        assert!(summary.contains("- `b`: updated (→ `3`)"));
        assert!(summary.contains("- `c`: created (`4`)"));
        assert!(summary.contains("- `nested.x`: updated (→ `9`)"));
        assert!(!summary.contains("`a`"));
    }

    #[test]
    fn test_summary_reports_deleted_with_old_value() {
        let old = map(&[("gone", "bye".into())]);
        let new = map(&[]);
        let tree = diff_maps(&old, &new).unwrap();
        let summary = render_change_summary(&tree);
        assert!(summary.contains("- `gone`: deleted (was `\"bye\"`)"));
    }
}
