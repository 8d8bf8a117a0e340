//! Workspace configuration command
//!
//! View and edit .markview/config.toml.

use crate::config::{self, KEYS};
use crate::util;
use anyhow::{Context, Result};
use owo_colors::OwoColorize;

/// List all configuration values
pub fn run_list() -> Result<()> {
    let root = util::find_workspace_root().context("Failed to find workspace")?;
    let config = config::load(&root)?;

    println!("{}", "Workspace Configuration".bold());
    println!(
        "{}: {}\n",
        "Location".dimmed(),
        config::config_file_path(&root).display().dimmed()
    );

    println!("{}", "[branch]".yellow());
    println!("  {} = {:?}", "fallback".cyan(), config.branch.fallback);

    println!("\n{}", "[view]".yellow());
    println!(
        "  {} = {}",
        "prune_empty_tree_branches".cyan(),
        config.view.prune_empty_tree_branches
    );

    println!("\n{}", "[expand]".yellow());
    println!("  {} = {}", "follow_links".cyan(), config.expand.follow_links);
    println!(
        "  {} = {:?} {}",
        "exclude".cyan(),
        config.expand.exclude,
        if config.expand.exclude.is_empty() {
            "(nothing excluded)".dimmed().to_string()
        } else {
            String::new()
        }
    );

    println!("\n{}", "Keys:".bold());
    for key in KEYS {
        println!("  {}", key);
    }
    Ok(())
}

/// Get a single configuration value
pub fn run_get(key: &str) -> Result<()> {
    let root = util::find_workspace_root().context("Failed to find workspace")?;
    let config = config::load(&root)?;
    println!("{}", config.get(key)?);
    Ok(())
}

/// Set a configuration value
pub fn run_set(key: &str, value: &str) -> Result<()> {
    let root = util::find_workspace_root().context("Failed to find workspace")?;
    let mut config = config::load(&root)?;

    config.set(key, value)?;
    config::save(&root, &config)?;

    println!("{} {} = {}", "✓".green(), key.cyan(), config.get(key)?);
    Ok(())
}

/// Show the config file path and optionally create it
pub fn run_path(create: bool) -> Result<()> {
    let root = util::find_workspace_root().context("Failed to find workspace")?;
    let config_path = config::config_file_path(&root);

    if create && !config_path.exists() {
        config::init_if_missing(&root)?;
        println!("{} Created config file at: {}", "✓".green(), config_path.display());
    } else if config_path.exists() {
        println!("{}", config_path.display());
    } else {
        println!("{}", config_path.display());
        println!("{}", "File does not exist. Use --create to create it.".yellow());
    }
    Ok(())
}

/// Show example configuration
pub fn run_example() -> Result<()> {
    println!("{}", config::example_config());
    Ok(())
}
