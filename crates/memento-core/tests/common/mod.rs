// Shared by several test binaries; not every binary uses every helper.
#![allow(dead_code)]

use memento_core::{AttributeHolder, AttributeMap, AttributeValue, ItemCollection};

/// Singular test structure: a document carrying named attributes
///
/// `set_attributes` merges, matching the attribute-holder contract.
#[derive(Debug, Clone, Default)]
pub struct TestDocument {
    attrs: AttributeMap,
}

impl TestDocument {
    /// Build a document from name/value pairs
    pub fn with_attrs(pairs: &[(&str, AttributeValue)]) -> Self {
        Self { attrs: attrs(pairs) }
    }

    /// Set one attribute directly (host-side mutation)
    pub fn set(&mut self, name: &str, value: impl Into<AttributeValue>) {
        self.attrs.insert(name.to_string(), value.into());
    }

    /// Read one attribute
    pub fn get(&self, name: &str) -> Option<&AttributeValue> {
        self.attrs.get(name)
    }
}

impl AttributeHolder for TestDocument {
    fn attributes(&self) -> AttributeMap {
        self.attrs.clone()
    }

    fn set_attributes(&mut self, attrs: AttributeMap) {
        self.attrs.extend(attrs);
    }

    fn unset_attribute(&mut self, name: &str) {
        self.attrs.remove(name);
    }
}

/// Collection test structure: a roster of items keyed by id
///
/// `reset_items` replaces the entire contents, matching the collection
/// contract.
#[derive(Debug, Clone, Default)]
pub struct TestRoster {
    items: AttributeMap,
}

impl TestRoster {
    /// Build a roster from id/value pairs
    pub fn with_items(pairs: &[(&str, AttributeValue)]) -> Self {
        Self { items: attrs(pairs) }
    }

    /// Add or replace one item directly (host-side mutation)
    pub fn add(&mut self, id: &str, value: impl Into<AttributeValue>) {
        self.items.insert(id.to_string(), value.into());
    }

    /// Read one item
    pub fn get(&self, id: &str) -> Option<&AttributeValue> {
        self.items.get(id)
    }
}

impl ItemCollection for TestRoster {
    fn items(&self) -> AttributeMap {
        self.items.clone()
    }

    fn reset_items(&mut self, items: AttributeMap) {
        self.items = items;
    }

    fn remove_item(&mut self, id: &str) {
        self.items.remove(id);
    }
}

/// Build an attribute map from name/value pairs
pub fn attrs(pairs: &[(&str, AttributeValue)]) -> AttributeMap {
    pairs
        .iter()
        .map(|(name, value)| (name.to_string(), value.clone()))
        .collect()
}
