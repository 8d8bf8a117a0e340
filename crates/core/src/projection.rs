//! View state and the flat (branch -> files) projection

use crate::branch::BranchId;
use crate::registry::MarkRegistry;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Component, Path, PathBuf};
use std::str::FromStr;

/// How marks are presented
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    /// Branch -> files, labels relative to the workspace root
    #[default]
    Flat,
    /// Branch -> nested folders -> files
    Tree,
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewMode::Flat => f.write_str("flat"),
            ViewMode::Tree => f.write_str("tree"),
        }
    }
}

impl FromStr for ViewMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "flat" => Ok(ViewMode::Flat),
            "tree" => Ok(ViewMode::Tree),
            other => Err(format!("Unknown view mode '{}' (expected 'flat' or 'tree')", other)),
        }
    }
}

/// Projection parameters
///
/// Only `mode` survives a session; the filter and the active file are
/// session-local.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    pub mode: ViewMode,
    filter: Option<String>,
    active_file: Option<PathBuf>,
}

impl ViewState {
    pub fn new(mode: ViewMode) -> Self {
        Self { mode, ..Self::default() }
    }

    pub fn filter(&self) -> Option<&str> {
        self.filter.as_deref()
    }

    /// Set the name filter; an empty string clears it
    pub fn set_filter(&mut self, filter: Option<String>) {
        self.filter = filter.filter(|f| !f.is_empty());
    }

    pub fn active_file(&self) -> Option<&Path> {
        self.active_file.as_deref()
    }

    pub fn set_active_file(&mut self, path: Option<PathBuf>) {
        self.active_file = path;
    }

    /// Case-sensitive substring match against the absolute path
    pub fn matches(&self, path: &Path) -> bool {
        match self.filter() {
            Some(filter) => path.to_string_lossy().contains(filter),
            None => true,
        }
    }

    pub fn is_active(&self, path: &Path) -> bool {
        self.active_file() == Some(path)
    }
}

/// One file in the flat projection
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlatEntry {
    /// Path relative to the workspace root
    pub label: String,
    pub full_path: PathBuf,
    pub active: bool,
}

/// A branch and its (filtered) files in the flat projection
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BranchGroup {
    pub branch: BranchId,
    pub files: Vec<FlatEntry>,
}

/// Compute `path` relative to `root` lexically
///
/// Shared leading components are dropped and each remaining component of
/// `root` becomes `..`. Neither path is touched on disk.
pub fn relativize(path: &Path, root: &Path) -> PathBuf {
    let mut path_components = path.components().peekable();
    let mut root_components = root.components().peekable();

    while let (Some(a), Some(b)) = (path_components.peek(), root_components.peek()) {
        if a != b {
            break;
        }
        path_components.next();
        root_components.next();
    }

    let mut relative = PathBuf::new();
    for component in root_components {
        if component != Component::CurDir {
            relative.push("..");
        }
    }
    for component in path_components {
        relative.push(component.as_os_str());
    }
    relative
}

/// Label segments of `path` below `root`
///
/// A path equal to the root yields a single segment holding the full path,
/// so every file keeps a non-empty label.
pub(crate) fn segments(path: &Path, root: &Path) -> Vec<String> {
    let relative = relativize(path, root);
    let parts: Vec<String> = relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();
    if parts.is_empty() {
        vec![path.to_string_lossy().into_owned()]
    } else {
        parts
    }
}

/// Flat projection: every branch with at least one file passing the filter
pub fn project_flat(registry: &MarkRegistry, root: &Path, view: &ViewState) -> Vec<BranchGroup> {
    registry
        .iter()
        .filter_map(|(branch, files)| {
            let files: Vec<FlatEntry> = files
                .iter()
                .filter(|path| view.matches(path))
                .map(|path| FlatEntry {
                    label: segments(path, root).join(std::path::MAIN_SEPARATOR_STR),
                    full_path: path.clone(),
                    active: view.is_active(path),
                })
                .collect();

            if files.is_empty() {
                None
            } else {
                Some(BranchGroup { branch: branch.clone(), files })
            }
        })
        .collect()
}
