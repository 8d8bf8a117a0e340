//! Mark a file or folder

use crate::util;
use anyhow::{Context, Result};
use markview_core::BranchId;
use owo_colors::OwoColorize;
use std::path::Path;

pub fn run(path: &Path, branch: Option<String>) -> Result<()> {
    let mut session = util::open_current_session()?;
    let target = util::absolutize(path);

    let outcome = match branch {
        Some(branch) => session.mark_on(BranchId::new(branch), &target),
        None => session.mark(&target),
    }
    .with_context(|| format!("Failed to mark {}", path.display()))?;

    if outcome.files.is_empty() {
        println!("{}", "Nothing to mark (empty folder)".yellow());
        return Ok(());
    }

    println!(
        "{} Marked {} on '{}' {}",
        "✓".green(),
        util::plural(outcome.files.len(), "file", "files"),
        outcome.branch.yellow(),
        format!("({} new)", outcome.added).dimmed()
    );
    Ok(())
}
