//! markview CLI - marks files per git branch

use anyhow::Result;
use clap::{Parser, Subcommand};
use markview_cli::cmd;
use markview_core::ViewMode;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Markview - keep a per-branch list of the files you care about
#[derive(Parser)]
#[command(name = "markview")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize markview in the current directory
    Init,
    /// Mark a file, or every file under a folder
    Mark {
        /// File or folder to mark
        path: PathBuf,
        /// Record under this branch instead of the current one
        #[arg(short, long)]
        branch: Option<String>,
    },
    /// Remove a branch, folder or file from the marks
    Remove {
        /// Branch name
        branch: String,
        /// Path relative to the workspace root (omit to remove the whole branch)
        path: Option<PathBuf>,
    },
    /// Switch to the flat view
    Flat,
    /// Switch to the tree view
    Tree,
    /// Show marked files in the current view
    #[command(alias = "ls")]
    List {
        /// Only show files whose path contains this text
        #[arg(short, long)]
        filter: Option<String>,
        /// Highlight this file
        #[arg(long)]
        active: Option<PathBuf>,
        /// Print the view as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the branch new marks are recorded under
    Branch,
    /// Show workspace status
    Status,
    /// Start an interactive session
    Shell,
    /// View and edit workspace configuration
    #[command(subcommand)]
    Config(ConfigCommands),
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// List all configuration values
    List,
    /// Get a configuration value
    Get {
        /// Key, e.g. branch.fallback
        key: String,
    },
    /// Set a configuration value
    Set {
        /// Key, e.g. view.prune_empty_tree_branches
        key: String,
        /// New value
        value: String,
    },
    /// Show the config file path
    Path {
        /// Create the file with defaults if missing
        #[arg(long)]
        create: bool,
    },
    /// Show an example configuration
    Example,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Init => cmd::init::run(),
        Commands::Mark { path, branch } => cmd::mark::run(&path, branch),
        Commands::Remove { branch, path } => cmd::remove::run(&branch, path.as_deref()),
        Commands::Flat => cmd::view::run(ViewMode::Flat),
        Commands::Tree => cmd::view::run(ViewMode::Tree),
        Commands::List { filter, active, json } => cmd::list::run(filter, active.as_deref(), json),
        Commands::Branch => cmd::branch::run(),
        Commands::Status => cmd::status::run(),
        Commands::Shell => cmd::shell::run(),
        Commands::Config(config_cmd) => match config_cmd {
            ConfigCommands::List => cmd::config::run_list(),
            ConfigCommands::Get { key } => cmd::config::run_get(&key),
            ConfigCommands::Set { key, value } => cmd::config::run_set(&key, &value),
            ConfigCommands::Path { create } => cmd::config::run_path(create),
            ConfigCommands::Example => cmd::config::run_example(),
        },
    }
}
