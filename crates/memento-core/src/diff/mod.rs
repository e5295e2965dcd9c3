//! Deep diff engine over attribute trees.
//!
//! Compares two attribute trees and produces a classified diff tree, with
//! pruning down to only the effective changes and a human-readable summary
//! rendering.
//!
//! ## Entry points
//!
//! ```ignore
//! use memento_core::diff::{diff, diff_maps, prune};
//!
//! let tree = diff_maps(&old_state, &new_state)?;
//! let effective = prune(&tree);
//! ```
//!
//! ## Guarantees
//!
//! - **Determinism**: identical inputs produce identical diff trees, with
//!   `BTreeMap`-ordered branches.
//! - **Callable rejection**: comparing a callable value is an error with no
//!   partial result; callable-valued keys inside containers are skipped on
//!   both sides without erroring.
//! - **Array-as-object**: lists diff per decimal index, exactly like keyed
//!   mappings. Insertions and deletions that shift later indices therefore
//!   read as wholesale updates.

pub mod engine;
pub mod model;
pub mod summary;

pub use engine::{diff, diff_maps, prune};
pub use model::{ChangeKind, DiffNode};
pub use summary::render_change_summary;
