use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use thiserror::Error;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsValue;
#[cfg(target_arch = "wasm32")]
use web_sys::Storage;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StorageError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),
    #[error("storage write failed: {0}")]
    Write(String),
}

/// Synchronous string key-value storage, shaped after `window.localStorage`.
pub trait KeyValueStorage {
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// In-process storage. Clones share the same map, which lets two stores
/// observe each other's writes the way two browser tabs would.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    items: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

// ---------- Browser: localStorage -------------------------------------------

#[cfg(target_arch = "wasm32")]
fn js_err(err: JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}

#[cfg(target_arch = "wasm32")]
fn local_storage() -> Result<Storage, StorageError> {
    let window = web_sys::window().ok_or_else(|| StorageError::Unavailable("no window".into()))?;
    window
        .local_storage()
        .map_err(|e| StorageError::Unavailable(js_err(e)))?
        .ok_or_else(|| StorageError::Unavailable("localStorage unavailable".into()))
}

/// `window.localStorage`, resolved on every access.
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorage;

#[cfg(target_arch = "wasm32")]
impl KeyValueStorage for LocalStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        local_storage().ok()?.get_item(key).ok().flatten()
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        local_storage()?
            .set_item(key, value)
            .map_err(|e| StorageError::Write(js_err(e)))
    }
}

/// Storage backing the mode flag on the current target.
#[cfg(target_arch = "wasm32")]
pub type DefaultStorage = LocalStorage;
#[cfg(not(target_arch = "wasm32"))]
pub type DefaultStorage = MemoryStorage;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_clones_share_items() {
        let a = MemoryStorage::new();
        let b = a.clone();
        assert_eq!(b.get_item("mode"), None);
        a.set_item("mode", "admin").unwrap();
        assert_eq!(b.get_item("mode").as_deref(), Some("admin"));
    }
}
