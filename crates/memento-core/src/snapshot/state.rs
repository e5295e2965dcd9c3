//! Captured snapshot state and digest computation.
//!
//! Digests are SHA-256 over canonical JSON, hex-encoded. Two digests exist:
//! the full digest covers the capture timestamp, the semantic digest covers
//! attributes only and is stable across capture times.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::errors::Result;
use crate::model::AttributeMap;

/// A filtered point-in-time copy of a structure's attribute state
///
/// Produced by serialization (which clones, never aliases, the live state)
/// and never mutated afterwards. The capture timestamp records when the
/// snapshot was taken; it does not participate in restore or diffing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateSnapshot {
    taken_at: DateTime<Utc>,
    attributes: AttributeMap,
}

impl StateSnapshot {
    /// Capture the given (already filtered) attribute state now
    pub fn new(attributes: AttributeMap) -> Self {
        Self {
            taken_at: Utc::now(),
            attributes,
        }
    }

    /// Borrow the captured attribute state
    pub fn attributes(&self) -> &AttributeMap {
        &self.attributes
    }

    /// Consume the snapshot, returning the captured attribute state
    pub fn into_attributes(self) -> AttributeMap {
        self.attributes
    }

    /// When the snapshot was taken
    pub fn taken_at(&self) -> DateTime<Utc> {
        self.taken_at
    }

    /// Number of captured attributes
    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    /// True when no attributes were captured
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    /// Full snapshot digest, including the capture timestamp
    ///
    /// # Errors
    ///
    /// Returns `Serialization` if canonical JSON encoding fails.
    pub fn digest(&self) -> Result<String> {
        let canonical = serde_json::to_string(self)?;
        Ok(hash_string(&canonical))
    }

    /// Semantic digest over the captured attributes only
    ///
    /// Stable across capture times: two snapshots of identical attribute
    /// state share a semantic digest even when taken at different moments.
    ///
    /// # Errors
    ///
    /// Returns `Serialization` if canonical JSON encoding fails.
    pub fn semantic_digest(&self) -> Result<String> {
        let canonical = serde_json::to_string(&self.attributes)?;
        Ok(hash_string(&canonical))
    }
}

fn hash_string(input: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(input.as_bytes());
    hex::encode(hasher.finalize())
}
