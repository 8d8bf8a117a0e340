//! Branch-partitioned registry of marked files

use crate::branch::BranchId;
use crate::tree::TreeNode;
use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Marked files grouped by the branch they were marked on
///
/// The set of all marked files is derived from the branch sets on demand,
/// so a path stops counting as marked once no branch holds it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MarkRegistry {
    branches: BTreeMap<BranchId, BTreeSet<PathBuf>>,
}

/// Result of removing a node from the registry
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RemoveOutcome {
    /// Number of paths actually removed
    pub removed: usize,
    /// Whether the branch became empty and was dropped
    pub branch_pruned: bool,
}

impl MarkRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `paths` under `branch`, returning how many were new
    pub fn add<I>(&mut self, branch: &BranchId, paths: I) -> usize
    where
        I: IntoIterator<Item = PathBuf>,
    {
        let set = self.branches.entry(branch.clone()).or_default();
        let mut added = 0;
        for path in paths {
            if set.insert(path) {
                added += 1;
            }
        }
        // An empty input must not leave an empty branch behind
        if set.is_empty() {
            self.branches.remove(branch);
        }
        added
    }

    /// Remove every file reachable from `node` from the node's branch
    ///
    /// Folder nodes are walked recursively. If the branch ends up empty its
    /// key is removed. Unknown branches are left untouched.
    pub fn remove(&mut self, node: &TreeNode) -> RemoveOutcome {
        let branch = node.branch();
        let Some(set) = self.branches.get_mut(branch) else {
            debug!("remove on unknown branch '{}'", branch);
            return RemoveOutcome::default();
        };

        let mut removed = 0;
        for path in node.leaf_paths() {
            if set.remove(path) {
                removed += 1;
            }
        }

        let branch_pruned = set.is_empty();
        if branch_pruned {
            self.branches.remove(branch);
        }

        RemoveOutcome { removed, branch_pruned }
    }

    /// Is `path` marked on any branch
    pub fn is_marked(&self, path: &Path) -> bool {
        self.branches.values().any(|set| set.contains(path))
    }

    /// Union of the marked files of every branch
    pub fn all_marked(&self) -> BTreeSet<&Path> {
        self.branches
            .values()
            .flat_map(|set| set.iter().map(PathBuf::as_path))
            .collect()
    }

    /// Marked files of one branch
    pub fn files(&self, branch: &BranchId) -> Option<&BTreeSet<PathBuf>> {
        self.branches.get(branch)
    }

    /// Iterate over branches and their files in branch order
    pub fn iter(&self) -> impl Iterator<Item = (&BranchId, &BTreeSet<PathBuf>)> {
        self.branches.iter()
    }

    pub fn branch_count(&self) -> usize {
        self.branches.len()
    }

    /// Total number of (branch, path) marks
    pub fn mark_count(&self) -> usize {
        self.branches.values().map(BTreeSet::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.branches.is_empty()
    }
}
