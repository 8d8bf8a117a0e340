//! Shared utilities for CLI commands

use crate::config;
use anyhow::{Context, Result};
use markview_core::{MarkError, MarkSession, STATE_DIR};
use markview_git::GitBranchResolver;
use markview_store::SledStore;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Session type used by every command
pub type Session = MarkSession<SledStore, GitBranchResolver>;

/// Find the workspace root by walking up from cwd to find .markview/
pub fn find_workspace_root() -> Result<PathBuf> {
    let cwd = std::env::current_dir().context("Failed to get current directory")?;
    let cwd = cwd.canonicalize().unwrap_or(cwd);
    let mut current = cwd.as_path();

    loop {
        let state_dir = current.join(STATE_DIR);
        if state_dir.is_dir() {
            debug!("workspace root: {}", current.display());
            return Ok(current.to_path_buf());
        }

        match current.parent() {
            Some(parent) => current = parent,
            None => return Err(MarkError::WorkspaceNotOpen(cwd.clone()).into()),
        }
    }
}

/// Directory holding workspace state
pub fn state_dir(root: &Path) -> PathBuf {
    root.join(STATE_DIR)
}

/// Open the marks session for a workspace
pub fn open_session(root: &Path) -> Result<Session> {
    let config = config::load(root)?;
    let options = config
        .session_options(root)
        .context("Invalid workspace configuration")?;

    let store = SledStore::open(&state_dir(root).join("state"))
        .context("Failed to open workspace state")?;

    let session = MarkSession::open(root, store, GitBranchResolver::new(), options)
        .context("Failed to load marks")?;
    Ok(session)
}

/// Find the workspace and open its session
pub fn open_current_session() -> Result<Session> {
    let root = find_workspace_root().context("Failed to find workspace")?;
    open_session(&root)
}

/// Make a user-supplied path absolute against the current directory
///
/// Existing paths are canonicalized so they compare equal to marked paths.
pub fn absolutize(path: &Path) -> PathBuf {
    if let Ok(canonical) = path.canonicalize() {
        return canonical;
    }
    if path.is_absolute() {
        return path.to_path_buf();
    }
    match std::env::current_dir() {
        Ok(cwd) => cwd.join(path),
        Err(_) => path.to_path_buf(),
    }
}

/// "1 file" / "3 files"
pub fn plural(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{} {}", count, singular)
    } else {
        format!("{} {}", count, plural)
    }
}

/// Split a command line into words, honoring double quotes
pub fn split_words(line: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut has_word = false;

    for c in line.chars() {
        match c {
            '"' => {
                in_quotes = !in_quotes;
                has_word = true;
            }
            c if c.is_whitespace() && !in_quotes => {
                if has_word {
                    words.push(std::mem::take(&mut current));
                    has_word = false;
                }
            }
            c => {
                current.push(c);
                has_word = true;
            }
        }
    }
    if has_word {
        words.push(current);
    }
    words
}
