//! Uniform adapter over the two structure variants.
//!
//! The serializer talks to one interface regardless of which variant it is
//! restoring; the variant-specific behavior (merge-set vs full reset, unset
//! vs remove) lives in the two concrete adapters below and nowhere else.

use crate::model::AttributeMap;
use crate::structure::{AttributeHolder, ItemCollection};

/// The two operations the core needs over any wrapped structure,
/// plus read access to its current state
///
/// Construction is infallible: any structure satisfying either variant's
/// capability trait can be wrapped, and no variant detection happens after
/// that point. Both mutating operations act on the wrapped structure in
/// place; adapters hold no state of their own.
pub trait StructureAdapter {
    /// Cloned copy of the structure's full current state
    fn current_state(&self) -> AttributeMap;

    /// Remove one named attribute (singular) or identified item (collection)
    fn remove_attribute(&mut self, name: &str);

    /// Apply a replacement state: merge for the singular variant,
    /// full reset for the collection variant
    fn replace_all(&mut self, attrs: AttributeMap);
}

/// Adapter for the singular attribute-holder variant
#[derive(Debug, Clone)]
pub struct HolderAdapter<S> {
    inner: S,
}

impl<S: AttributeHolder> HolderAdapter<S> {
    /// Wrap a singular structure
    pub fn new(structure: S) -> Self {
        Self { inner: structure }
    }

    /// Borrow the wrapped structure
    pub fn structure(&self) -> &S {
        &self.inner
    }

    /// Mutably borrow the wrapped structure
    pub fn structure_mut(&mut self) -> &mut S {
        &mut self.inner
    }

    /// Unwrap, returning the structure
    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S: AttributeHolder> StructureAdapter for HolderAdapter<S> {
    fn current_state(&self) -> AttributeMap {
        self.inner.attributes()
    }

    fn remove_attribute(&mut self, name: &str) {
        self.inner.unset_attribute(name);
    }

    fn replace_all(&mut self, attrs: AttributeMap) {
        self.inner.set_attributes(attrs);
    }
}

/// Adapter for the ordered item-collection variant
#[derive(Debug, Clone)]
pub struct CollectionAdapter<S> {
    inner: S,
}

impl<S: ItemCollection> CollectionAdapter<S> {
    /// Wrap a collection structure
    pub fn new(structure: S) -> Self {
        Self { inner: structure }
    }

    /// Borrow the wrapped structure
    pub fn structure(&self) -> &S {
        &self.inner
    }

    /// Mutably borrow the wrapped structure
    pub fn structure_mut(&mut self) -> &mut S {
        &mut self.inner
    }

    /// Unwrap, returning the structure
    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S: ItemCollection> StructureAdapter for CollectionAdapter<S> {
    fn current_state(&self) -> AttributeMap {
        self.inner.items()
    }

    fn remove_attribute(&mut self, name: &str) {
        self.inner.remove_item(name);
    }

    fn replace_all(&mut self, attrs: AttributeMap) {
        self.inner.reset_items(attrs);
    }
}
