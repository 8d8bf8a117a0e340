//! Git integration for branch-scoped marks
//!
//! Resolves the branch checked out in a workspace by running the `git`
//! executable, so marks can be grouped by branch.

use markview_core::{BranchId, BranchResolutionError, BranchResolver};
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tracing::debug;

/// Branch resolver backed by the `git` command line
#[derive(Debug, Clone)]
pub struct GitBranchResolver {
    program: PathBuf,
}

impl Default for GitBranchResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl GitBranchResolver {
    /// Resolver using `git` from `PATH`
    pub fn new() -> Self {
        Self::with_program("git")
    }

    /// Resolver using a specific git executable
    pub fn with_program(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    fn git(&self, root: &Path, args: &[&str]) -> Result<Output, BranchResolutionError> {
        Command::new(&self.program)
            .arg("-C")
            .arg(root)
            .args(args)
            .output()
            .map_err(BranchResolutionError::Unavailable)
    }

    /// Is `root` inside a git work tree
    pub fn is_repository(&self, root: &Path) -> bool {
        self.git(root, &["rev-parse", "--git-dir"])
            .map(|output| output.status.success())
            .unwrap_or(false)
    }
}

impl BranchResolver for GitBranchResolver {
    fn current_branch(&self, root: &Path) -> Result<BranchId, BranchResolutionError> {
        let probe = self.git(root, &["rev-parse", "--git-dir"])?;
        if !probe.status.success() {
            return Err(BranchResolutionError::NotARepository(root.to_path_buf()));
        }

        let output = self.git(root, &["branch", "--show-current"])?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(BranchResolutionError::QueryFailed(stderr));
        }

        let branch = String::from_utf8_lossy(&output.stdout).trim().to_string();
        if branch.is_empty() {
            return Err(BranchResolutionError::Detached);
        }

        debug!("current branch at {} is '{}'", root.display(), branch);
        Ok(BranchId::from(branch))
    }
}
