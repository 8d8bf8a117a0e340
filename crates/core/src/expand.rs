//! Expansion of a mark target into the files it covers

use crate::error::MarkError;
use crate::STATE_DIR;
use ignore::gitignore::{Gitignore, GitignoreBuilder};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

/// Folder expansion settings
#[derive(Debug, Clone, Default)]
pub struct ExpandOptions {
    /// Descend into symlinked directories
    pub follow_links: bool,
    /// Gitignore-style patterns rooted at the workspace
    exclude: Option<Gitignore>,
}

impl ExpandOptions {
    /// Build options with exclude patterns relative to `root`
    pub fn new(root: &Path, follow_links: bool, patterns: &[String]) -> Result<Self, MarkError> {
        let exclude = if patterns.is_empty() {
            None
        } else {
            let mut builder = GitignoreBuilder::new(root);
            for pattern in patterns {
                builder
                    .add_line(None, pattern)
                    .map_err(|source| MarkError::InvalidPattern {
                        pattern: pattern.clone(),
                        source,
                    })?;
            }
            let matcher = builder.build().map_err(|source| MarkError::InvalidPattern {
                pattern: patterns.join(", "),
                source,
            })?;
            Some(matcher)
        };

        Ok(Self { follow_links, exclude })
    }

    /// Should a walked entry (and, for directories, everything below it) be skipped
    fn is_excluded(&self, path: &Path, is_dir: bool) -> bool {
        if is_dir && path.file_name().is_some_and(|name| name == STATE_DIR) {
            return true;
        }
        match &self.exclude {
            Some(matcher) => matcher.matched(path, is_dir).is_ignore(),
            None => false,
        }
    }
}

/// Expand `target` into absolute file paths
///
/// A file yields itself. A directory yields every non-directory entry found
/// by a full recursive walk, in file-name order per directory; directories
/// themselves are never returned. Any I/O failure aborts the expansion.
///
/// Unless `follow_links` is set, a symlink found during the walk is not
/// descended into and is returned as a file, even when it points at a
/// directory.
pub fn expand_path(target: &Path, options: &ExpandOptions) -> Result<Vec<PathBuf>, MarkError> {
    let target = fs::canonicalize(target).map_err(|source| MarkError::FilesystemAccess {
        path: target.to_path_buf(),
        source,
    })?;
    let metadata = fs::metadata(&target).map_err(|source| MarkError::FilesystemAccess {
        path: target.clone(),
        source,
    })?;

    if !metadata.is_dir() {
        return Ok(vec![target]);
    }

    let mut files = Vec::new();
    let walker = WalkDir::new(&target)
        .follow_links(options.follow_links)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !options.is_excluded(e.path(), e.file_type().is_dir()));

    for entry in walker {
        let entry = entry.map_err(|source| MarkError::Walk {
            path: target.clone(),
            source,
        })?;
        if entry.file_type().is_dir() {
            continue;
        }
        files.push(entry.into_path());
    }

    debug!("expanded {} into {} files", target.display(), files.len());
    Ok(files)
}
