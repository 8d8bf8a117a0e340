//! Show workspace status

use crate::{config, util};
use anyhow::{Context, Result};
use markview_git::GitBranchResolver;
use owo_colors::OwoColorize;

pub fn run() -> Result<()> {
    let root = util::find_workspace_root().context("Failed to find workspace")?;
    let session = util::open_session(&root)?;
    let registry = session.registry();

    println!("{}", "Workspace Status".bold());
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!();

    println!("Workspace:     {}", root.display().to_string().cyan());
    println!("Config:        {}", config::config_file_path(&root).display().dimmed());

    let branch = session.current_branch();
    if GitBranchResolver::new().is_repository(&root) {
        println!("Branch:        {}", branch.yellow());
    } else {
        println!(
            "Branch:        {} {}",
            branch.yellow(),
            "(not a git repository)".dimmed()
        );
    }
    println!("View:          {}", session.view().mode);
    println!();

    println!(
        "Marked:        {} across {}",
        util::plural(registry.mark_count(), "file", "files"),
        util::plural(registry.branch_count(), "branch", "branches")
    );
    for (branch, files) in registry.iter() {
        println!("  {:<20} {}", branch.to_string(), files.len());
    }
    Ok(())
}
