//! Remove a branch, folder or file from the marked set

use crate::util;
use anyhow::Result;
use markview_core::BranchId;
use owo_colors::OwoColorize;
use std::path::Path;

/// Remove the node named by `branch` and an optional path relative to the
/// workspace root; folders are only addressable in tree view
pub fn run(branch: &str, path: Option<&Path>) -> Result<()> {
    let mut session = util::open_current_session()?;
    let branch = BranchId::from(branch);
    let path = path.unwrap_or(Path::new(""));

    let Some(node) = session.locate(&branch, path) else {
        anyhow::bail!(
            "Nothing named '{}' on branch '{}' in the {} view",
            path.display(),
            branch,
            session.view().mode
        );
    };

    let outcome = session.remove(&node);
    println!(
        "{} Removed {} from '{}'",
        "✓".green(),
        util::plural(outcome.removed, "file", "files"),
        branch.yellow()
    );
    if outcome.branch_pruned {
        println!("{}", format!("Branch '{}' has no marked files left", branch).dimmed());
    }
    Ok(())
}
