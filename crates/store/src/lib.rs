//! Workspace state storage using sled
//!
//! Persists the marks snapshot as JSON under a string key in an embedded
//! sled database living in the workspace state directory.

use markview_core::{StateStore, StoreError};
use serde_json::Value;
use sled::Db;
use std::path::Path;
use tracing::debug;

/// Sled-backed key-value store for the workspace state
pub struct SledStore {
    db: Db,
}

fn backend(e: sled::Error) -> StoreError {
    StoreError::Backend(Box::new(e))
}

impl SledStore {
    /// Open or create the store at `path`
    pub fn open(path: &Path) -> Result<Self, StoreError> {
        let db = sled::open(path).map_err(backend)?;
        debug!("opened state store at {}", path.display());
        Ok(Self { db })
    }

    /// Keys currently stored
    pub fn keys(&self) -> Result<Vec<String>, StoreError> {
        self.db
            .iter()
            .keys()
            .map(|key| {
                key.map(|k| String::from_utf8_lossy(&k).into_owned())
                    .map_err(backend)
            })
            .collect()
    }
}

impl StateStore for SledStore {
    fn load(&self, key: &str) -> Result<Option<Value>, StoreError> {
        let Some(bytes) = self.db.get(key).map_err(backend)? else {
            return Ok(None);
        };

        serde_json::from_slice(&bytes)
            .map(Some)
            .map_err(|source| StoreError::Decode {
                key: key.to_string(),
                source,
            })
    }

    fn save(&self, key: &str, value: &Value) -> Result<(), StoreError> {
        let bytes = serde_json::to_vec(value).map_err(|source| StoreError::Encode {
            key: key.to_string(),
            source,
        })?;

        self.db.insert(key, bytes).map_err(backend)?;

        // Flush so the write survives the process exiting right after
        self.db.flush().map_err(backend)?;
        Ok(())
    }
}
