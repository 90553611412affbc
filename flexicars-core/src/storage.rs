//! JSON helpers over a string key-value store. Failures are logged and swallowed.
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::cell::RefCell;
use std::collections::BTreeMap;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Storage error: {0}")]
    Backend(String),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Raw string storage; the browser backend wraps `localStorage`.
pub trait KeyValueStore {
    /// # Errors
    ///
    /// Returns an error if the backend rejects the write (quota, privacy mode).
    fn set_raw(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// # Errors
    ///
    /// Returns an error if the backend cannot be read.
    fn get_raw(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// # Errors
    ///
    /// Returns an error if the backend rejects the removal.
    fn remove_raw(&self, key: &str) -> Result<(), StorageError>;
}

/// In-memory store for hosts and tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<BTreeMap<String, String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn set_raw(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn get_raw(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn remove_raw(&self, key: &str) -> Result<(), StorageError> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

/// `set`/`get`/`remove` with JSON encoding. Nothing here returns an error to the caller.
#[derive(Debug, Default)]
pub struct JsonStore<S> {
    backend: S,
}

impl<S: KeyValueStore> JsonStore<S> {
    pub const fn new(backend: S) -> Self {
        Self { backend }
    }

    pub const fn backend(&self) -> &S {
        &self.backend
    }

    pub fn set<T: Serialize + ?Sized>(&self, key: &str, value: &T) {
        if let Err(e) = self.try_set(key, value) {
            log::error!("Error saving to storage ({key}): {e}");
        }
    }

    /// `None` when the key is absent, unreadable or fails to decode.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        match self.try_get(key) {
            Ok(value) => value,
            Err(e) => {
                log::error!("Error reading from storage ({key}): {e}");
                None
            }
        }
    }

    pub fn remove(&self, key: &str) {
        if let Err(e) = self.backend.remove_raw(key) {
            log::error!("Error removing from storage ({key}): {e}");
        }
    }

    fn try_set<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<(), StorageError> {
        let text = serde_json::to_string(value)?;
        self.backend.set_raw(key, &text)
    }

    fn try_get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StorageError> {
        match self.backend.get_raw(key)? {
            Some(text) if !text.is_empty() => Ok(Some(serde_json::from_str(&text)?)),
            _ => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct BrokenStore;

    impl KeyValueStore for BrokenStore {
        fn set_raw(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Backend(String::from("quota exceeded")))
        }

        fn get_raw(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Err(StorageError::Backend(String::from("denied")))
        }

        fn remove_raw(&self, _key: &str) -> Result<(), StorageError> {
            Err(StorageError::Backend(String::from("denied")))
        }
    }

    #[test]
    fn round_trips_values() {
        let store = JsonStore::new(MemoryStore::new());
        let mut search = BTreeMap::new();
        search.insert(String::from("location"), String::from("Mumbai"));
        store.set("flexicars.last_search", &search);
        let loaded: Option<BTreeMap<String, String>> = store.get("flexicars.last_search");
        assert_eq!(loaded, Some(search));

        store.remove("flexicars.last_search");
        assert_eq!(store.get::<BTreeMap<String, String>>("flexicars.last_search"), None);
    }

    #[test]
    fn decode_failures_read_as_absent() {
        let store = JsonStore::new(MemoryStore::new());
        store
            .backend()
            .set_raw("broken", "{not json")
            .expect("memory write");
        assert_eq!(store.get::<u32>("broken"), None);
        store.set("count", &3_u32);
        assert_eq!(store.get::<String>("count"), None);
        assert_eq!(store.get::<u32>("count"), Some(3));
    }

    #[test]
    fn backend_failures_are_swallowed() {
        let store = JsonStore::new(BrokenStore);
        store.set("key", &1_u8);
        store.remove("key");
        assert_eq!(store.get::<u8>("key"), None);
    }
}
