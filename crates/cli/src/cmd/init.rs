//! Initialize a markview workspace

use crate::{config, util};
use anyhow::{Context, Result};
use markview_core::STATE_DIR;
use owo_colors::OwoColorize;
use std::env;
use std::fs;

pub fn run() -> Result<()> {
    let current_dir = env::current_dir().context("Failed to get current directory")?;
    let state_dir = util::state_dir(&current_dir);

    if state_dir.exists() {
        anyhow::bail!(
            "markview workspace already initialized at {}/{}/",
            current_dir.display(),
            STATE_DIR
        );
    }

    fs::create_dir_all(&state_dir)
        .with_context(|| format!("Failed to create {}", state_dir.display()))?;

    // Keep workspace state out of version control
    fs::write(state_dir.join(".gitignore"), "*\n")
        .context("Failed to write .markview/.gitignore")?;

    config::init_if_missing(&current_dir)?;

    println!(
        "{} Initialized markview workspace at {}",
        "✓".green(),
        current_dir.display()
    );
    println!();
    println!("Created {}/ directory:", STATE_DIR);
    println!("  - {}/config.toml    (workspace configuration)", STATE_DIR);
    println!("  - {}/state/         (marked files, created on first mark)", STATE_DIR);
    println!();
    println!("Next steps:");
    println!("  - Run 'markview mark <path>' to mark a file or folder");
    println!("  - Run 'markview list' to see marked files");
    Ok(())
}
