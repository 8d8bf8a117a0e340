//! Session controller owning the registry and view state
//!
//! A session is opened against a workspace root, a state store and a branch
//! resolver. Every mutating operation persists the snapshot afterwards;
//! persistence is best-effort and failures are only logged.

use crate::branch::{BranchId, BranchResolver};
use crate::codec::{self, STATE_KEY};
use crate::error::{MarkError, StoreError};
use crate::expand::{expand_path, ExpandOptions};
use crate::projection::{project_flat, relativize, BranchGroup, ViewMode, ViewState};
use crate::registry::{MarkRegistry, RemoveOutcome};
use crate::store::StateStore;
use crate::tree::{locate, project_tree, TreeNode};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Behavior knobs for a session
#[derive(Debug, Clone)]
pub struct SessionOptions {
    /// Branch used when the resolver fails
    pub fallback_branch: BranchId,
    /// Drop branches left empty by the filter in tree mode too
    pub prune_empty_tree_branches: bool,
    pub expand: ExpandOptions,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            fallback_branch: BranchId::no_branch(),
            prune_empty_tree_branches: false,
            expand: ExpandOptions::default(),
        }
    }
}

/// Result of marking a file or folder
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkOutcome {
    pub branch: BranchId,
    /// Every file the target expanded to
    pub files: Vec<PathBuf>,
    /// How many of them were not marked on the branch before
    pub added: usize,
}

/// Marks of one workspace plus the current view state
pub struct MarkSession<S, R> {
    root: PathBuf,
    registry: MarkRegistry,
    view: ViewState,
    store: S,
    resolver: R,
    options: SessionOptions,
}

impl<S: StateStore, R: BranchResolver> MarkSession<S, R> {
    /// Open a session, restoring any saved snapshot from `store`
    pub fn open(
        root: impl Into<PathBuf>,
        store: S,
        resolver: R,
        options: SessionOptions,
    ) -> Result<Self, MarkError> {
        let root = root.into();

        let (registry, mode) = match store.load(STATE_KEY) {
            Ok(Some(value)) => codec::deserialize(&value),
            Ok(None) => (MarkRegistry::new(), ViewMode::default()),
            Err(e @ StoreError::Decode { .. }) => {
                warn!("Saved state is unreadable, starting empty: {}", e);
                (MarkRegistry::new(), ViewMode::default())
            }
            Err(e) => return Err(e.into()),
        };

        debug!(
            "opened session at {} ({} branches, {} marks, {} view)",
            root.display(),
            registry.branch_count(),
            registry.mark_count(),
            mode
        );

        Ok(Self {
            root,
            registry,
            view: ViewState::new(mode),
            store,
            resolver,
            options,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn registry(&self) -> &MarkRegistry {
        &self.registry
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    /// Current branch, or the fallback branch when it cannot be resolved
    pub fn current_branch(&self) -> BranchId {
        match self.resolver.current_branch(&self.root) {
            Ok(branch) => branch,
            Err(e) => {
                warn!(
                    "Could not resolve current branch ({}), using '{}'",
                    e, self.options.fallback_branch
                );
                self.options.fallback_branch.clone()
            }
        }
    }

    /// Mark a file or folder on the current branch
    pub fn mark(&mut self, target: &Path) -> Result<MarkOutcome, MarkError> {
        let branch = self.current_branch();
        self.mark_on(branch, target)
    }

    /// Mark a file or folder on an explicit branch
    ///
    /// Folder expansion errors abort the whole operation; nothing is added.
    pub fn mark_on(&mut self, branch: BranchId, target: &Path) -> Result<MarkOutcome, MarkError> {
        let files = expand_path(target, &self.options.expand)?;
        let added = self.registry.add(&branch, files.iter().cloned());

        info!(
            "marked {} files on '{}' ({} new)",
            files.len(),
            branch,
            added
        );
        self.persist();

        Ok(MarkOutcome { branch, files, added })
    }

    /// Remove a node's files from its branch, pruning the branch if emptied
    pub fn remove(&mut self, node: &TreeNode) -> RemoveOutcome {
        let outcome = self.registry.remove(node);

        if let Some(active) = self.view.active_file() {
            if !self.registry.is_marked(active) {
                self.view.set_active_file(None);
            }
        }

        info!(
            "removed {} files from '{}'{}",
            outcome.removed,
            node.branch(),
            if outcome.branch_pruned { " (branch pruned)" } else { "" }
        );
        self.persist();
        outcome
    }

    pub fn switch_to_flat(&mut self) {
        self.set_mode(ViewMode::Flat);
    }

    pub fn switch_to_tree(&mut self) {
        self.set_mode(ViewMode::Tree);
    }

    pub fn set_mode(&mut self, mode: ViewMode) {
        self.view.mode = mode;
        self.persist();
    }

    /// Apply the answer of a filter prompt
    ///
    /// `None` (prompt cancelled) keeps the current filter, an empty string
    /// clears it, anything else replaces it.
    pub fn apply_filter_input(&mut self, input: Option<String>) {
        if let Some(input) = input {
            self.view.set_filter(Some(input));
        }
    }

    /// Record the focused file; it is highlighted only if it is marked
    ///
    /// Returns whether the file is now highlighted.
    pub fn set_active_file(&mut self, path: Option<PathBuf>) -> bool {
        let path = path.filter(|p| self.registry.is_marked(p));
        let highlighted = path.is_some();
        self.view.set_active_file(path);
        highlighted
    }

    pub fn project_flat(&self) -> Vec<BranchGroup> {
        project_flat(&self.registry, &self.root, &self.view)
    }

    pub fn project_tree(&self) -> Vec<TreeNode> {
        project_tree(
            &self.registry,
            &self.root,
            &self.view,
            self.options.prune_empty_tree_branches,
        )
    }

    /// Top-level nodes of the projection for the current mode
    pub fn roots(&self) -> Vec<TreeNode> {
        match self.view.mode {
            ViewMode::Flat => self.project_flat().iter().map(BranchGroup::to_node).collect(),
            ViewMode::Tree => self.project_tree(),
        }
    }

    /// Find a node of the current projection
    ///
    /// `path` may be absolute or relative to the workspace root; an empty
    /// path selects the branch node.
    pub fn locate(&self, branch: &BranchId, path: &Path) -> Option<TreeNode> {
        let relative = if path.is_absolute() {
            relativize(path, &self.root)
        } else {
            path.to_path_buf()
        };
        let roots = self.roots();
        locate(&roots, branch, &relative).cloned()
    }

    /// Write the snapshot to the store, logging failures
    pub fn persist(&self) {
        let value = codec::serialize(&self.registry, self.view.mode);
        if let Err(e) = self.store.save(STATE_KEY, &value) {
            warn!("Failed to persist marks: {}", e);
        }
    }
}
