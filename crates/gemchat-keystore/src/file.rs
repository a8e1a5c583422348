//! File-backed key store: one JSON object under the user config directory.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::{KeyStore, KeyStoreError};

pub struct FileKeyStore {
    path: PathBuf,
    entries: HashMap<String, String>,
}

impl FileKeyStore {
    /// Open the default store at `<config_dir>/gemchat/keys.json`.
    pub fn open_default() -> Result<Self, KeyStoreError> {
        let dir = dirs::config_dir().ok_or(KeyStoreError::NoConfigDir)?;
        Self::open(dir.join("gemchat").join("keys.json"))
    }

    /// Open a store at an explicit path. A missing file is an empty store;
    /// the file is created on the first `set`.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, KeyStoreError> {
        let path = path.as_ref().to_path_buf();
        let entries = match fs::read_to_string(&path) {
            Ok(contents) => serde_json::from_str(&contents)
                .map_err(|e| KeyStoreError::Parse(e.to_string()))?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => HashMap::new(),
            Err(e) => return Err(e.into()),
        };
        Ok(Self { path, entries })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self) -> Result<(), KeyStoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(&self.entries)
            .map_err(|e| KeyStoreError::Parse(e.to_string()))?;
        fs::write(&self.path, json)?;
        debug!(path = %self.path.display(), "keystore persisted");
        Ok(())
    }
}

impl KeyStore for FileKeyStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), KeyStoreError> {
        self.entries.insert(key.to_string(), value.to_string());
        self.persist()
    }

    fn remove(&mut self, key: &str) -> Result<(), KeyStoreError> {
        if self.entries.remove(key).is_some() {
            self.persist()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_is_an_empty_store() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileKeyStore::open(dir.path().join("keys.json")).unwrap();
        assert_eq!(store.get("gemini_api_key"), None);
    }

    #[test]
    fn set_persists_across_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("keys.json");

        let mut store = FileKeyStore::open(&path).unwrap();
        store.set("gemini_api_key", "abc123").unwrap();

        let reopened = FileKeyStore::open(&path).unwrap();
        assert_eq!(reopened.get("gemini_api_key"), Some("abc123".to_string()));
    }

    #[test]
    fn remove_persists_across_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("keys.json");

        let mut store = FileKeyStore::open(&path).unwrap();
        store.set("gemini_api_key", "abc123").unwrap();
        store.remove("gemini_api_key").unwrap();

        let reopened = FileKeyStore::open(&path).unwrap();
        assert_eq!(reopened.get("gemini_api_key"), None);
    }

    #[test]
    fn corrupt_file_reports_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("keys.json");
        std::fs::write(&path, "not json {{{").unwrap();

        let result = FileKeyStore::open(&path);
        assert!(matches!(result, Err(KeyStoreError::Parse(_))));
    }

    #[test]
    fn set_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("keys.json");

        let mut store = FileKeyStore::open(&path).unwrap();
        store.set("k", "v").unwrap();
        assert!(path.exists());
    }
}
