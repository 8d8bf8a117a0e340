//! Workspace configuration stored in .markview/config.toml
//!
//! Every field has a default, so a missing file or a partial file is fine.

use anyhow::{Context, Result};
use markview_core::{BranchId, ExpandOptions, SessionOptions, STATE_DIR};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Keys accepted by `markview config get/set`
pub const KEYS: &[&str] = &[
    "branch.fallback",
    "view.prune_empty_tree_branches",
    "expand.follow_links",
    "expand.exclude",
];

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkspaceConfig {
    pub branch: BranchConfig,
    pub view: ViewConfig,
    pub expand: ExpandConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BranchConfig {
    /// Branch used when the current branch cannot be determined
    pub fallback: String,
}

impl Default for BranchConfig {
    fn default() -> Self {
        Self {
            fallback: BranchId::NO_BRANCH.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    /// Hide branches with no matching files in tree view, as flat view does
    pub prune_empty_tree_branches: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExpandConfig {
    /// Descend into symlinked directories when marking folders
    pub follow_links: bool,
    /// Gitignore-style patterns skipped when marking folders
    pub exclude: Vec<String>,
}

impl WorkspaceConfig {
    /// Check values before they are saved or used
    pub fn validate(&self) -> Result<()> {
        if self.branch.fallback.trim().is_empty() {
            anyhow::bail!("branch.fallback must not be empty");
        }
        if let Some(blank) = self.expand.exclude.iter().position(|p| p.trim().is_empty()) {
            anyhow::bail!("expand.exclude entry {} is empty", blank + 1);
        }
        Ok(())
    }

    /// Session options for a workspace rooted at `root`
    pub fn session_options(&self, root: &Path) -> Result<SessionOptions> {
        self.validate()?;
        let expand = ExpandOptions::new(root, self.expand.follow_links, &self.expand.exclude)?;
        Ok(SessionOptions {
            fallback_branch: BranchId::new(self.branch.fallback.clone()),
            prune_empty_tree_branches: self.view.prune_empty_tree_branches,
            expand,
        })
    }

    /// Read a single value as text
    pub fn get(&self, key: &str) -> Result<String> {
        let value = match key {
            "branch.fallback" => self.branch.fallback.clone(),
            "view.prune_empty_tree_branches" => self.view.prune_empty_tree_branches.to_string(),
            "expand.follow_links" => self.expand.follow_links.to_string(),
            "expand.exclude" => self.expand.exclude.join(","),
            _ => anyhow::bail!(
                "Unknown config key: {}. Use 'markview config list' to see available keys.",
                key
            ),
        };
        Ok(value)
    }

    /// Set a single value from text
    ///
    /// `expand.exclude` takes a comma-separated list; an empty value clears it.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "branch.fallback" => {
                self.branch.fallback = value.to_string();
            }
            "view.prune_empty_tree_branches" => {
                self.view.prune_empty_tree_branches = value
                    .parse()
                    .context("Invalid value: must be 'true' or 'false'")?;
            }
            "expand.follow_links" => {
                self.expand.follow_links = value
                    .parse()
                    .context("Invalid value: must be 'true' or 'false'")?;
            }
            "expand.exclude" => {
                self.expand.exclude = value
                    .split(',')
                    .map(str::trim)
                    .filter(|p| !p.is_empty())
                    .map(String::from)
                    .collect();
            }
            _ => anyhow::bail!(
                "Unknown config key: {}. Use 'markview config list' to see available keys.",
                key
            ),
        }
        Ok(())
    }
}

/// Location of the config file for a workspace
pub fn config_file_path(root: &Path) -> PathBuf {
    root.join(STATE_DIR).join("config.toml")
}

/// Load the workspace config, defaulting when the file does not exist
pub fn load(root: &Path) -> Result<WorkspaceConfig> {
    let path = config_file_path(root);
    if !path.exists() {
        return Ok(WorkspaceConfig::default());
    }

    let text = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let config: WorkspaceConfig = toml::from_str(&text)
        .with_context(|| format!("Failed to parse {}", path.display()))?;
    Ok(config)
}

/// Validate and write the workspace config
pub fn save(root: &Path, config: &WorkspaceConfig) -> Result<()> {
    config.validate().context("Invalid configuration value")?;

    let path = config_file_path(root);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }

    let text = toml::to_string_pretty(config).context("Failed to serialize configuration")?;
    std::fs::write(&path, text).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}

/// Write the default config if none exists; returns whether it was created
pub fn init_if_missing(root: &Path) -> Result<bool> {
    if config_file_path(root).exists() {
        return Ok(false);
    }
    save(root, &WorkspaceConfig::default())?;
    Ok(true)
}

/// Commented example configuration
pub fn example_config() -> String {
    r#"# markview workspace configuration (.markview/config.toml)

[branch]
# Branch name used when the current git branch cannot be determined
# (not a repository, detached HEAD, git missing)
fallback = "(no branch)"

[view]
# Also hide branches without matching files in tree view
prune_empty_tree_branches = false

[expand]
# Descend into symlinked directories when marking a folder
follow_links = false
# Gitignore-style patterns skipped when marking a folder
exclude = ["target/", "node_modules/", "*.log"]
"#
    .to_string()
}
