//! Tree nodes and the hierarchical (branch -> folders -> files) projection

use crate::branch::BranchId;
use crate::projection::{segments, BranchGroup, ViewState};
use crate::registry::MarkRegistry;
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::{Component, Path, PathBuf};

/// A node of either projection
///
/// Top-level nodes are folders labelled with their branch id. Leaves always
/// carry the absolute path of a marked file. A folder carries one only when
/// that path is itself marked while other marks sit below it (a marked file
/// later replaced by a directory).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum TreeNode {
    Leaf {
        branch: BranchId,
        label: String,
        full_path: PathBuf,
        active: bool,
    },
    Folder {
        branch: BranchId,
        label: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        full_path: Option<PathBuf>,
        children: BTreeMap<String, TreeNode>,
    },
}

impl TreeNode {
    pub fn branch(&self) -> &BranchId {
        match self {
            TreeNode::Leaf { branch, .. } | TreeNode::Folder { branch, .. } => branch,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            TreeNode::Leaf { label, .. } | TreeNode::Folder { label, .. } => label,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, TreeNode::Leaf { .. })
    }

    /// Direct child by label (always `None` for leaves)
    pub fn child(&self, label: &str) -> Option<&TreeNode> {
        match self {
            TreeNode::Folder { children, .. } => children.get(label),
            TreeNode::Leaf { .. } => None,
        }
    }

    /// Children in label order
    pub fn children(&self) -> impl Iterator<Item = &TreeNode> {
        let children = match self {
            TreeNode::Folder { children, .. } => Some(children.values()),
            TreeNode::Leaf { .. } => None,
        };
        children.into_iter().flatten()
    }

    /// Absolute paths of every leaf at or below this node
    pub fn leaf_paths(&self) -> Vec<&Path> {
        let mut out = Vec::new();
        self.collect_leaf_paths(&mut out);
        out
    }

    fn collect_leaf_paths<'a>(&'a self, out: &mut Vec<&'a Path>) {
        match self {
            TreeNode::Leaf { full_path, .. } => out.push(full_path),
            TreeNode::Folder { full_path, children, .. } => {
                if let Some(full_path) = full_path {
                    out.push(full_path);
                }
                for child in children.values() {
                    child.collect_leaf_paths(out);
                }
            }
        }
    }
}

impl BranchGroup {
    /// The branch node of this group, with one leaf per file
    pub fn to_node(&self) -> TreeNode {
        let children = self
            .files
            .iter()
            .map(|entry| {
                let leaf = TreeNode::Leaf {
                    branch: self.branch.clone(),
                    label: entry.label.clone(),
                    full_path: entry.full_path.clone(),
                    active: entry.active,
                };
                (entry.label.clone(), leaf)
            })
            .collect();

        TreeNode::Folder {
            branch: self.branch.clone(),
            label: self.branch.to_string(),
            full_path: None,
            children,
        }
    }
}

/// Intermediate node used while nesting paths
#[derive(Default)]
struct NodeBuilder {
    children: BTreeMap<String, NodeBuilder>,
    full_path: Option<PathBuf>,
}

impl NodeBuilder {
    fn insert(&mut self, segments: Vec<String>, full_path: PathBuf) {
        let mut current = self;
        for segment in segments {
            current = current.children.entry(segment).or_default();
        }
        current.full_path = Some(full_path);
    }

    fn build(self, branch: &BranchId, label: String, view: &ViewState) -> TreeNode {
        let NodeBuilder { children, full_path } = self;
        match full_path {
            Some(full_path) if children.is_empty() => TreeNode::Leaf {
                branch: branch.clone(),
                active: view.is_active(&full_path),
                label,
                full_path,
            },
            full_path => TreeNode::Folder {
                branch: branch.clone(),
                label,
                full_path,
                children: children
                    .into_iter()
                    .map(|(label, child)| {
                        let node = child.build(branch, label.clone(), view);
                        (label, node)
                    })
                    .collect(),
            },
        }
    }
}

/// Hierarchical projection: one folder per branch mirroring the file layout
///
/// A branch whose files are all filtered out stays as an empty folder unless
/// `prune_empty` is set.
pub fn project_tree(
    registry: &MarkRegistry,
    root: &Path,
    view: &ViewState,
    prune_empty: bool,
) -> Vec<TreeNode> {
    registry
        .iter()
        .filter_map(|(branch, files)| {
            let mut builder = NodeBuilder::default();
            for path in files.iter().filter(|path| view.matches(path)) {
                builder.insert(segments(path, root), path.clone());
            }

            if prune_empty && builder.children.is_empty() {
                return None;
            }

            // Branch nodes are folders even when they hold nothing
            let children = builder
                .children
                .into_iter()
                .map(|(label, child)| {
                    let node = child.build(branch, label.clone(), view);
                    (label, node)
                })
                .collect();
            Some(TreeNode::Folder {
                branch: branch.clone(),
                label: branch.to_string(),
                full_path: None,
                children,
            })
        })
        .collect()
}

/// Find the node for `branch` and a workspace-relative path
///
/// An empty `relative` selects the branch node itself; `.` components are
/// ignored. Nodes are matched by their whole label first (flat groups label
/// leaves with the full relative path) and then segment by segment.
pub fn locate<'a>(nodes: &'a [TreeNode], branch: &BranchId, relative: &Path) -> Option<&'a TreeNode> {
    let top = nodes.iter().find(|node| node.branch() == branch)?;

    let relative: PathBuf = relative
        .components()
        .filter(|component| *component != Component::CurDir)
        .collect();
    let whole = relative.to_string_lossy();
    if whole.is_empty() {
        return Some(top);
    }
    if let Some(node) = top.child(&whole) {
        return Some(node);
    }

    let mut current = top;
    for component in relative.components() {
        current = current.child(&component.as_os_str().to_string_lossy())?;
    }
    Some(current)
}
