//! Persisted snapshot of the registry and view mode
//!
//! Stored under [`STATE_KEY`] as
//! `{ markedFiles: [..], branchTagMap: { branch: [..] }, treeViewMode: "flat" | "tree" }`.
//! Decoding is lenient: each field that is missing or malformed falls back
//! to its default on its own, and unknown fields are ignored.

use crate::branch::BranchId;
use crate::projection::ViewMode;
use crate::registry::MarkRegistry;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::path::PathBuf;
use tracing::{debug, warn};

/// Key the snapshot is stored under
pub const STATE_KEY: &str = "markedFilesData";

/// Wire shape of the persisted state
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub marked_files: Vec<String>,
    pub branch_tag_map: BTreeMap<String, Vec<String>>,
    pub tree_view_mode: ViewMode,
}

impl Snapshot {
    /// Capture the registry and mode
    pub fn capture(registry: &MarkRegistry, mode: ViewMode) -> Self {
        let marked_files = registry
            .all_marked()
            .into_iter()
            .map(|path| path.to_string_lossy().into_owned())
            .collect();

        let branch_tag_map = registry
            .iter()
            .map(|(branch, files)| {
                let files = files.iter().map(|p| p.to_string_lossy().into_owned()).collect();
                (branch.to_string(), files)
            })
            .collect();

        Self {
            marked_files,
            branch_tag_map,
            tree_view_mode: mode,
        }
    }

    /// Decode a stored value field by field
    pub fn decode(value: &Value) -> Self {
        Self {
            marked_files: field(value, "markedFiles"),
            branch_tag_map: field(value, "branchTagMap"),
            tree_view_mode: field(value, "treeViewMode"),
        }
    }

    /// Rebuild the registry and mode
    ///
    /// The set of all marked files is derived from the branch map, so
    /// `markedFiles` entries that no branch holds are dropped.
    pub fn restore(self) -> (MarkRegistry, ViewMode) {
        let mut registry = MarkRegistry::new();
        for (branch, files) in self.branch_tag_map {
            registry.add(&BranchId::from(branch), files.into_iter().map(PathBuf::from));
        }

        let orphaned = self
            .marked_files
            .iter()
            .filter(|path| !registry.is_marked(std::path::Path::new(path)))
            .count();
        if orphaned > 0 {
            debug!("dropping {} marked files that belong to no branch", orphaned);
        }

        (registry, self.tree_view_mode)
    }

    pub fn to_value(&self) -> Value {
        // Strings, string arrays and string maps always encode
        serde_json::to_value(self).unwrap_or(Value::Null)
    }
}

/// Decode one field, defaulting when absent or malformed
fn field<T: DeserializeOwned + Default>(value: &Value, name: &str) -> T {
    match value.get(name) {
        None | Some(Value::Null) => T::default(),
        Some(raw) => serde_json::from_value(raw.clone()).unwrap_or_else(|e| {
            warn!("ignoring malformed '{}' in saved state: {}", name, e);
            T::default()
        }),
    }
}

/// Encode the registry and view mode
pub fn serialize(registry: &MarkRegistry, mode: ViewMode) -> Value {
    Snapshot::capture(registry, mode).to_value()
}

/// Decode a stored value back into a registry and view mode
pub fn deserialize(value: &Value) -> (MarkRegistry, ViewMode) {
    Snapshot::decode(value).restore()
}
