//! Memento Core - undo/redo snapshotting for attribute-bearing structures
//!
//! This crate captures point-in-time copies of a mutable structure's
//! attribute state, keeps them on a history stack, restores prior states on
//! demand, and computes semantic diffs between states:
//! - Capability traits for the two structure variants (singular
//!   attribute-holder and ordered item-collection) with a uniform adapter
//! - Filtered snapshot capture with configurable ignore lists
//! - Asymmetric restore that removes attributes added since the snapshot
//! - A LIFO history stack with pop (undo one step) and rewind (jump to the
//!   first captured state, discarding all history)
//! - A recursive deep-diff engine classifying fields as
//!   created/updated/deleted/unchanged, with pruning to effective changes
//!
//! The library is embeddable, synchronous, and single-threaded; it never
//! touches storage, network, or UI.

pub mod config;
pub mod diff;
pub mod errors;
pub mod facade;
pub mod logging;
pub mod model;
pub mod snapshot;
pub mod structure;

// Re-export commonly used types
pub use config::{ConfigOverride, SnapshotConfig};
pub use diff::{diff, diff_maps, prune, render_change_summary, ChangeKind, DiffNode};
pub use errors::{MementoError, Result};
pub use facade::Memento;
pub use model::{AttributeMap, AttributeValue, CallableRef};
pub use snapshot::{HistoryStack, Serializer, StateSnapshot};
pub use structure::{
    AttributeHolder, CollectionAdapter, HolderAdapter, ItemCollection, StructureAdapter,
};

/// The crate version
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
