//! Core bookkeeping for branch-scoped file marks
//!
//! This crate provides:
//! - The mark registry (branch id -> set of marked files)
//! - Flat and hierarchical projections of the registry
//! - The persisted snapshot codec
//! - Recursive folder expansion
//! - The session controller tying those together with a state store
//!   and a branch resolver

pub mod branch;
pub mod codec;
pub mod error;
pub mod expand;
pub mod projection;
pub mod registry;
pub mod session;
pub mod store;
pub mod tree;

// Re-exports
pub use branch::{BranchId, BranchResolutionError, BranchResolver, FixedBranch};
pub use codec::{Snapshot, STATE_KEY};
pub use error::{MarkError, StoreError};
pub use expand::{expand_path, ExpandOptions};
pub use projection::{project_flat, relativize, BranchGroup, FlatEntry, ViewMode, ViewState};
pub use registry::{MarkRegistry, RemoveOutcome};
pub use session::{MarkOutcome, MarkSession, SessionOptions};
pub use store::{MemoryStore, StateStore};
pub use tree::{locate, project_tree, TreeNode};

/// Name of the per-workspace state directory
pub const STATE_DIR: &str = ".markview";

/// Result type for core operations
pub type Result<T> = std::result::Result<T, MarkError>;
