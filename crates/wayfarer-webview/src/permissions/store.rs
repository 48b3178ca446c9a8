use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};
use wayfarer_common::WayfarerError;

/// Flat JSON key-value file of permission decisions.
#[derive(Debug, Default)]
pub struct PermissionStore {
    path: Option<PathBuf>,
    entries: BTreeMap<String, bool>,
}

impl PermissionStore {
    /// Store that never touches disk.
    pub fn in_memory() -> Self {
        Self::default()
    }

    /// Load from `path`. A missing file is an empty store; an unreadable
    /// one is logged and replaced on the next write.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = match read_entries(&path) {
            Ok(entries) => entries,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "discarding permission store");
                BTreeMap::new()
            }
        };
        debug!(path = %path.display(), count = entries.len(), "permission store loaded");
        Self {
            path: Some(path),
            entries,
        }
    }

    pub fn get(&self, key: &str) -> Option<bool> {
        self.entries.get(key).copied()
    }

    /// Record a decision and write the file through.
    pub fn set(&mut self, key: impl Into<String>, allowed: bool) -> Result<(), WayfarerError> {
        self.entries.insert(key.into(), allowed);
        self.save()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    fn save(&self) -> Result<(), WayfarerError> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(&self.entries)
            .map_err(|e| WayfarerError::Storage(e.to_string()))?;
        std::fs::write(path, json)?;
        Ok(())
    }
}

fn read_entries(path: &Path) -> Result<BTreeMap<String, bool>, WayfarerError> {
    if !path.exists() {
        return Ok(BTreeMap::new());
    }
    let raw = std::fs::read_to_string(path)?;
    serde_json::from_str(&raw).map_err(|e| {
        WayfarerError::Storage(format!("{}: {e}", path.display()))
    })
}
