//! JSON-file backed store.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use super::KeyValueStore;
use crate::error::{Error, Result};

/// Store persisted as a flat JSON object on disk.
///
/// The whole map is kept in memory and rewritten on every mutation, which is
/// plenty for the handful of keys a session holds.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: RwLock<HashMap<String, String>>,
}

impl FileStore {
    /// Open the store at `path`. A missing file starts out empty.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        let entries = match fs::read_to_string(&path) {
            Ok(contents) if contents.trim().is_empty() => HashMap::new(),
            Ok(contents) => serde_json::from_str(&contents).map_err(|e| {
                Error::Storage(format!("Corrupt store {}: {}", path.display(), e))
            })?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => HashMap::new(),
            Err(e) => return Err(e.into()),
        };

        tracing::debug!("Opened store {} with {} keys", path.display(), entries.len());

        Ok(Self {
            path,
            entries: RwLock::new(entries),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self, entries: &HashMap<String, String>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let json = serde_json::to_string_pretty(entries)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        let entries = self.entries.read().unwrap_or_else(|e| e.into_inner());
        entries.get(key).cloned()
    }

    // Both mutations write the updated map to disk first and only swap it in
    // once the write succeeded, so memory never runs ahead of the file.

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut entries = self.entries.write().unwrap_or_else(|e| e.into_inner());
        let mut updated = entries.clone();
        updated.insert(key.to_string(), value.to_string());
        self.persist(&updated)?;
        *entries = updated;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let mut entries = self.entries.write().unwrap_or_else(|e| e.into_inner());
        if !entries.contains_key(key) {
            return Ok(());
        }
        let mut updated = entries.clone();
        updated.remove(key);
        self.persist(&updated)?;
        *entries = updated;
        Ok(())
    }
}
