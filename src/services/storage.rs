//! String key-value backends the record store persists through.

use std::cell::RefCell;
use std::collections::HashMap;

use wasm_bindgen::JsValue;

use crate::error::{Result, StoreError};

pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
    fn remove(&self, key: &str) -> Result<()>;
}

fn js_error(err: JsValue) -> StoreError {
    StoreError::Backend(format!("{:?}", err))
}

/// The browser's `window.localStorage`.
pub struct LocalStorage {
    storage: web_sys::Storage,
}

impl LocalStorage {
    /// Fails outside a browser window or when the page may not use storage.
    pub fn open() -> Result<Self> {
        let window =
            web_sys::window().ok_or_else(|| StoreError::Backend("no window".into()))?;
        let storage = window
            .local_storage()
            .map_err(js_error)?
            .ok_or_else(|| StoreError::Backend("localStorage is disabled".into()))?;

        Ok(Self { storage })
    }
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        self.storage.get_item(key).map_err(js_error)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.storage.set_item(key, value).map_err(js_error)
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.storage.remove_item(key).map_err(js_error)
    }
}

/// Volatile map, lost with the page.
#[derive(Default)]
pub struct MemoryStorage {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

/// Serves reads from a seeded map and rejects every write, like a full quota.
#[cfg(test)]
#[derive(Default)]
pub(crate) struct ReadOnlyStorage {
    seed: MemoryStorage,
}

#[cfg(test)]
impl ReadOnlyStorage {
    pub(crate) fn with_entry(key: &str, value: &str) -> Self {
        let seed = MemoryStorage::new();
        seed.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Self { seed }
    }
}

#[cfg(test)]
impl KeyValueStore for ReadOnlyStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        self.seed.get(key)
    }

    fn set(&self, _key: &str, _value: &str) -> Result<()> {
        Err(StoreError::Backend("quota exceeded".into()))
    }

    fn remove(&self, _key: &str) -> Result<()> {
        Err(StoreError::Backend("quota exceeded".into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_storage_set_get_remove() {
        let store = MemoryStorage::new();
        assert_eq!(store.get("k").unwrap(), None);

        store.set("k", "v1").unwrap();
        store.set("k", "v2").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("v2"));

        store.remove("k").unwrap();
        store.remove("k").unwrap();
        assert_eq!(store.get("k").unwrap(), None);
    }

    #[test]
    fn read_only_storage_rejects_writes() {
        let store = ReadOnlyStorage::with_entry("k", "v");
        assert_eq!(store.get("k").unwrap().as_deref(), Some("v"));
        assert!(matches!(store.set("k", "w"), Err(StoreError::Backend(_))));
        assert!(matches!(store.remove("k"), Err(StoreError::Backend(_))));
        assert_eq!(store.get("k").unwrap().as_deref(), Some("v"));
    }
}
