//! Host-facing capability contracts for snapshottable structures.
//!
//! A host object becomes snapshottable by implementing exactly one of the
//! two variant traits:
//!
//! - [`AttributeHolder`]: a singular object carrying named attributes
//! - [`ItemCollection`]: an ordered collection of identified items
//!
//! The choice of trait is the variant tag: it is resolved once, at adapter
//! construction, and never re-detected at runtime. Both variants present
//! the same uniform surface to the core through [`StructureAdapter`].

pub mod adapter;

pub use adapter::{CollectionAdapter, HolderAdapter, StructureAdapter};

use crate::model::AttributeMap;

/// Capability contract for the singular structure variant
///
/// The holder carries a flat-or-nested set of named attributes. Setting
/// attributes merges into the existing state; names absent from the given
/// map are left untouched.
pub trait AttributeHolder {
    /// Cloned copy of the full current attribute state
    fn attributes(&self) -> AttributeMap;

    /// Set the given attributes, merging into existing state
    fn set_attributes(&mut self, attrs: AttributeMap);

    /// Unset one named attribute, leaving the others untouched
    fn unset_attribute(&mut self, name: &str);
}

/// Capability contract for the collection structure variant
///
/// The collection holds items identified by name/id. Resetting replaces the
/// entire contents; anything not present in the given map is dropped.
pub trait ItemCollection {
    /// Cloned copy of the collection contents, keyed by item id
    fn items(&self) -> AttributeMap;

    /// Replace the entire collection contents
    fn reset_items(&mut self, items: AttributeMap);

    /// Remove the item with the given id
    fn remove_item(&mut self, id: &str);
}
