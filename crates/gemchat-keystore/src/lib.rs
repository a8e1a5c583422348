//! Credential persistence for gemchat.
//!
//! Abstracts the key-value store the chat client uses to remember the API
//! credential between runs. `FileKeyStore` persists to a JSON file under
//! the user config directory; `MemoryKeyStore` backs tests and ephemeral
//! runs. Whether the credential is written back at all is the caller's
//! decision (the "remember" flag), never the session's.

mod file;

use std::collections::HashMap;

pub use file::FileKeyStore;

/// Key under which the chat credential is stored.
pub const CREDENTIAL_KEY: &str = "gemini_api_key";

#[derive(Debug, thiserror::Error)]
pub enum KeyStoreError {
    #[error("keystore io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("keystore parse error: {0}")]
    Parse(String),

    #[error("no config directory available")]
    NoConfigDir,
}

/// Key-value persistence capability.
pub trait KeyStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), KeyStoreError>;
    fn remove(&mut self, key: &str) -> Result<(), KeyStoreError>;
}

/// In-memory store with no persistence.
#[derive(Debug, Default)]
pub struct MemoryKeyStore {
    entries: HashMap<String, String>,
}

impl MemoryKeyStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyStore for MemoryKeyStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), KeyStoreError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), KeyStoreError> {
        self.entries.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_round_trip() {
        let mut store = MemoryKeyStore::new();
        assert_eq!(store.get(CREDENTIAL_KEY), None);

        store.set(CREDENTIAL_KEY, "abc").unwrap();
        assert_eq!(store.get(CREDENTIAL_KEY), Some("abc".to_string()));

        store.remove(CREDENTIAL_KEY).unwrap();
        assert_eq!(store.get(CREDENTIAL_KEY), None);
    }

    #[test]
    fn remove_missing_key_is_ok() {
        let mut store = MemoryKeyStore::new();
        assert!(store.remove("absent").is_ok());
    }
}
