//! Branch identifiers and the branch resolution contract

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Identifier of a source-control line of development
#[derive(Debug, Clone, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BranchId(String);

impl BranchId {
    /// Sentinel used when the current branch cannot be determined
    pub const NO_BRANCH: &'static str = "(no branch)";

    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The default sentinel branch
    pub fn no_branch() -> Self {
        Self::new(Self::NO_BRANCH)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BranchId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for BranchId {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for BranchId {
    fn from(name: String) -> Self {
        Self(name)
    }
}

/// Why the current branch could not be determined
#[derive(Debug, Error)]
pub enum BranchResolutionError {
    /// The source-control tool could not be started
    #[error("Source control tool unavailable: {0}")]
    Unavailable(#[source] std::io::Error),

    /// The workspace is not inside a repository
    #[error("Not a repository: {}", .0.display())]
    NotARepository(PathBuf),

    /// HEAD does not point at a branch
    #[error("HEAD is detached")]
    Detached,

    /// The query ran but reported failure
    #[error("Branch query failed: {0}")]
    QueryFailed(String),
}

/// Source of the current branch for a workspace
pub trait BranchResolver {
    /// Query the branch currently checked out at `root`
    fn current_branch(&self, root: &Path) -> Result<BranchId, BranchResolutionError>;
}

/// Resolver that always answers with the same branch
///
/// Used when the branch is given explicitly and in tests.
#[derive(Debug, Clone)]
pub struct FixedBranch(pub BranchId);

impl BranchResolver for FixedBranch {
    fn current_branch(&self, _root: &Path) -> Result<BranchId, BranchResolutionError> {
        Ok(self.0.clone())
    }
}

impl<R: BranchResolver + ?Sized> BranchResolver for Box<R> {
    fn current_branch(&self, root: &Path) -> Result<BranchId, BranchResolutionError> {
        (**self).current_branch(root)
    }
}
