//! Snapshot capture, restore, and history.
//!
//! ## Responsibilities
//!
//! - Capture filtered, immutable copies of a structure's attribute state
//! - Restore a prior snapshot, removing attributes added since it was taken
//! - Keep captured snapshots on a LIFO history stack
//! - Compute deterministic content digests for captured snapshots
//!
//! ## Non-Responsibilities
//!
//! - Persistence of snapshots or history across process restarts
//! - Deciding when to capture or restore (handled by the facade's caller)

pub mod serializer;
pub mod stack;
pub mod state;

pub use serializer::Serializer;
pub use stack::HistoryStack;
pub use state::StateSnapshot;
