//! Error types shared across markview crates

use std::path::PathBuf;
use thiserror::Error;

/// Failures of mark operations
#[derive(Debug, Error)]
pub enum MarkError {
    /// No workspace root could be found
    #[error("No workspace is open (no .markview directory found above {})", .0.display())]
    WorkspaceNotOpen(PathBuf),

    /// A path could not be read while expanding a mark target
    #[error("Cannot access {}: {source}", path.display())]
    FilesystemAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Directory walk failed part way through
    #[error("Failed to walk {}: {source}", path.display())]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    /// An exclude pattern did not parse
    #[error("Invalid exclude pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: ignore::Error,
    },

    /// State store failure
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Failures of a [`crate::StateStore`] backend
#[derive(Debug, Error)]
pub enum StoreError {
    /// Stored bytes were not valid JSON
    #[error("Stored value for '{key}' is not valid JSON: {source}")]
    Decode {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    /// Value could not be encoded
    #[error("Failed to encode value for '{key}': {source}")]
    Encode {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    /// Underlying storage engine error
    #[error("State store backend error: {0}")]
    Backend(#[source] Box<dyn std::error::Error + Send + Sync>),
}
