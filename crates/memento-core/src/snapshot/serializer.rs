//! Snapshot capture and asymmetric restore.
//!
//! Restore is asymmetric because `replace_all` on the singular variant
//! merges rather than clears: attributes added to the structure after the
//! snapshot was taken must be removed explicitly first, or they would
//! survive the restore.

use crate::config::{ConfigOverride, SnapshotConfig};
use crate::model::AttributeMap;
use crate::snapshot::state::StateSnapshot;
use crate::structure::StructureAdapter;

/// Captures and re-applies filtered snapshots of one wrapped structure
///
/// Owns the adapter and the base configuration for its whole lifetime;
/// per-call overrides are merged over the base at each restore.
#[derive(Debug)]
pub struct Serializer<A> {
    adapter: A,
    config: SnapshotConfig,
}

impl<A: StructureAdapter> Serializer<A> {
    /// Bind a serializer to an adapter and base configuration
    pub fn new(adapter: A, config: SnapshotConfig) -> Self {
        Self { adapter, config }
    }

    /// Capture the structure's current state, minus ignored attributes
    ///
    /// Clones the live state; the structure is not touched.
    pub fn serialize(&self) -> StateSnapshot {
        let mut attrs = self.adapter.current_state();
        drop_ignored(&mut attrs, &self.config);
        StateSnapshot::new(attrs)
    }

    /// Re-apply a previously captured snapshot to the structure
    ///
    /// Merges the override over the base configuration, removes every
    /// attribute that exists now but did not exist in the snapshot, then
    /// applies the snapshot's state through `replace_all`. Empty snapshots
    /// are a no-op.
    pub fn deserialize(&mut self, snapshot: &StateSnapshot, overlay: Option<&ConfigOverride>) {
        if snapshot.is_empty() {
            return;
        }

        let effective = self.config.merge(overlay);

        let mut old_attrs = snapshot.attributes().clone();
        drop_ignored(&mut old_attrs, &effective);

        let mut current = self.adapter.current_state();
        drop_ignored(&mut current, &effective);

        // Attributes present now but absent from the snapshot were added
        // after it was taken; the restored state must not have them.
        let added: Vec<String> = current
            .keys()
            .filter(|name| !old_attrs.contains_key(*name))
            .cloned()
            .collect();
        for name in &added {
            self.adapter.remove_attribute(name);
        }

        self.adapter.replace_all(old_attrs);
    }

    /// Cloned copy of the structure's live state, unfiltered
    pub fn current_state(&self) -> AttributeMap {
        self.adapter.current_state()
    }

    /// The base configuration this serializer was bound with
    pub fn config(&self) -> &SnapshotConfig {
        &self.config
    }

    /// Borrow the adapter
    pub fn adapter(&self) -> &A {
        &self.adapter
    }

    /// Mutably borrow the adapter
    pub fn adapter_mut(&mut self) -> &mut A {
        &mut self.adapter
    }
}

fn drop_ignored(attrs: &mut AttributeMap, config: &SnapshotConfig) {
    for name in &config.ignore {
        attrs.remove(name);
    }
}
