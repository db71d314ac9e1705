use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::errors::{Result, SessionError};
use crate::store::SessionStore;

/// In-memory store. Clones share the same map, so a test can keep a handle
/// while the session owns another.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> Result<MutexGuard<'_, HashMap<String, String>>> {
        self.entries
            .lock()
            .map_err(|_| SessionError::Storage(std::io::Error::other("memory store poisoned")))
    }
}

impl SessionStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.lock()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.lock()?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.lock()?.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_then_get() {
        let store = MemoryStore::new();
        store.set("k", "v").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("v"));
    }

    #[test]
    fn test_set_overwrites() {
        let store = MemoryStore::new();
        store.set("k", "first").unwrap();
        store.set("k", "second").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("second"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_remove_missing_is_ok() {
        let store = MemoryStore::new();
        store.remove("missing").unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn test_len_survives_poisoned_lock() {
        let store = MemoryStore::new();
        store.set("k", "v").unwrap();

        let handle = store.clone();
        let _ = std::thread::spawn(move || {
            let _guard = handle.entries.lock().unwrap();
            panic!("poison the lock");
        })
        .join();

        assert_eq!(store.len(), 1);
        assert!(!store.is_empty());
        assert!(store.get("k").is_err());
    }

    #[test]
    fn test_clones_share_entries() {
        let store = MemoryStore::new();
        let handle = store.clone();
        store.set("k", "v").unwrap();
        assert_eq!(handle.get("k").unwrap().as_deref(), Some("v"));
        handle.remove("k").unwrap();
        assert_eq!(store.get("k").unwrap(), None);
    }
}
