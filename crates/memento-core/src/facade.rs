//! Public undo/redo facade.

use std::time::Instant;

use crate::config::{ConfigOverride, SnapshotConfig};
use crate::diff::engine::{diff_maps, prune};
use crate::errors::Result;
use crate::model::{AttributeMap, AttributeValue};
use crate::snapshot::{HistoryStack, Serializer, StateSnapshot};
use crate::structure::{
    AttributeHolder, CollectionAdapter, HolderAdapter, ItemCollection, StructureAdapter,
};
use crate::{log_op_end, log_op_error, log_op_start};

/// Undo/redo snapshotting over one wrapped structure
///
/// Owns one serializer (adapter plus base configuration) and one history
/// stack, bound to one structure instance for its whole lifetime. Intended
/// for cooperative single-actor use: one logical owner mutates the wrapped
/// structure and calls `store`/`restore`/`restart`/`changes` between
/// mutations. Not internally synchronized.
#[derive(Debug)]
pub struct Memento<A> {
    serializer: Serializer<A>,
    stack: HistoryStack,
}

impl<S: AttributeHolder> Memento<HolderAdapter<S>> {
    /// Wrap a singular attribute-holder structure
    pub fn for_holder(structure: S, config: SnapshotConfig) -> Self {
        Self::new(HolderAdapter::new(structure), config)
    }
}

impl<S: ItemCollection> Memento<CollectionAdapter<S>> {
    /// Wrap an ordered item-collection structure
    pub fn for_collection(structure: S, config: SnapshotConfig) -> Self {
        Self::new(CollectionAdapter::new(structure), config)
    }
}

impl<A: StructureAdapter> Memento<A> {
    /// Bind a memento to an already-constructed adapter
    pub fn new(adapter: A, config: SnapshotConfig) -> Self {
        Self {
            serializer: Serializer::new(adapter, config),
            stack: HistoryStack::new(),
        }
    }

    /// Capture the structure's current state onto the history stack
    ///
    /// Grows history by one; identical consecutive states are stored twice.
    pub fn store(&mut self) {
        let started = Instant::now();
        log_op_start!("store");

        let snapshot = self.serializer.serialize();
        let digest = snapshot.semantic_digest().unwrap_or_default();
        self.stack.push(snapshot);

        log_op_end!(
            "store",
            duration_ms = started.elapsed().as_millis() as u64,
            depth = self.stack.len() as u64,
            digest = %digest,
        );
    }

    /// Undo one step: pop the newest snapshot and re-apply it
    ///
    /// Silent no-op when the history is empty: the structure is not
    /// touched and no failure is signaled.
    pub fn restore(&mut self, overlay: Option<&ConfigOverride>) {
        let started = Instant::now();
        log_op_start!("restore");

        let noop = match self.stack.pop() {
            Some(snapshot) => {
                self.serializer.deserialize(&snapshot, overlay);
                false
            }
            None => true,
        };

        log_op_end!(
            "restore",
            duration_ms = started.elapsed().as_millis() as u64,
            depth = self.stack.len() as u64,
            noop = noop,
        );
    }

    /// Jump back to the first ever-captured state, discarding all history
    ///
    /// Always leaves the stack empty, even when the history was already
    /// empty and the structure is left untouched.
    pub fn restart(&mut self, overlay: Option<&ConfigOverride>) {
        let started = Instant::now();
        log_op_start!("restart");

        let noop = match self.stack.rewind() {
            Some(snapshot) => {
                self.serializer.deserialize(&snapshot, overlay);
                false
            }
            None => true,
        };

        log_op_end!(
            "restart",
            duration_ms = started.elapsed().as_millis() as u64,
            noop = noop,
        );
    }

    /// Minimal tree of effective changes since the newest snapshot
    ///
    /// Diffs the newest stored snapshot (the empty baseline when none
    /// exists) against the structure's live state, pruned down to created
    /// and updated values. Never mutates the stack, so repeated calls are
    /// idempotent and later `restore` calls are unaffected.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` when the comparison reaches a callable value
    /// outside a container key position.
    pub fn changes(&self) -> Result<AttributeMap> {
        let baseline = self
            .stack
            .previous()
            .map(|snapshot| snapshot.attributes().clone())
            .unwrap_or_default();
        let current = self.serializer.current_state();

        let tree = match diff_maps(&baseline, &current) {
            Ok(tree) => tree,
            Err(err) => {
                log_op_error!("changes", &err);
                return Err(err);
            }
        };

        match prune(&tree) {
            Some(AttributeValue::Map(changed)) => Ok(changed),
            _ => Ok(AttributeMap::new()),
        }
    }

    /// Peek at the newest stored snapshot without removing it
    pub fn previous_state(&self) -> Option<&StateSnapshot> {
        self.stack.previous()
    }

    /// Number of snapshots currently on the history stack
    pub fn history_len(&self) -> usize {
        self.stack.len()
    }

    /// The base configuration this memento was constructed with
    pub fn config(&self) -> &SnapshotConfig {
        self.serializer.config()
    }

    /// Borrow the adapter (and through it, the wrapped structure)
    pub fn adapter(&self) -> &A {
        self.serializer.adapter()
    }

    /// Mutably borrow the adapter, for host mutations between operations
    pub fn adapter_mut(&mut self) -> &mut A {
        self.serializer.adapter_mut()
    }
}
