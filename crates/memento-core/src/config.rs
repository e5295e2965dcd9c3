//! Snapshot configuration and per-call override merging.

use serde::{Deserialize, Serialize};

/// Base configuration bound to a memento instance at construction
///
/// `ignore` lists attribute names that are excluded from every snapshot and
/// from every restore comparison. Order is preserved but has no semantic
/// effect.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SnapshotConfig {
    /// Attribute names to exclude from snapshots and restore comparisons
    #[serde(default)]
    pub ignore: Vec<String>,
}

impl SnapshotConfig {
    /// Create a configuration that ignores nothing
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a configuration with the given ignore list
    pub fn with_ignore<I, S>(ignore: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            ignore: ignore.into_iter().map(Into::into).collect(),
        }
    }

    /// Check whether an attribute name is ignored
    pub fn ignores(&self, name: &str) -> bool {
        self.ignore.iter().any(|ignored| ignored == name)
    }

    /// Merge a per-call override over this base configuration
    ///
    /// Override semantics, field by field: a field present in the override
    /// replaces the base field for the returned configuration; an absent
    /// field inherits the base. A present-but-empty ignore list therefore
    /// disables ignoring for that call.
    pub fn merge(&self, overlay: Option<&ConfigOverride>) -> SnapshotConfig {
        let mut merged = self.clone();
        if let Some(overlay) = overlay {
            if let Some(ignore) = &overlay.ignore {
                merged.ignore = ignore.clone();
            }
        }
        merged
    }
}

/// Per-call configuration override for restore/restart
///
/// Every field is optional; `None` means "inherit the base configuration".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConfigOverride {
    /// Replacement ignore list for this call, if present
    pub ignore: Option<Vec<String>>,
}

impl ConfigOverride {
    /// Override the ignore list for a single call
    pub fn with_ignore<I, S>(ignore: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            ignore: Some(ignore.into_iter().map(Into::into).collect()),
        }
    }
}
