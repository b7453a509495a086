//! `window.localStorage` backed key-value store

use web_sys::Storage;

use super::position::KeyValueStore;
use crate::error::{describe_js, Result, ToolboxError};

pub struct LocalStorage {
    storage: Storage,
}

impl LocalStorage {
    /// Open the window's localStorage
    ///
    /// Fails when storage is disabled (privacy modes, sandboxed frames).
    pub fn open() -> Result<Self> {
        let window = web_sys::window().ok_or_else(|| ToolboxError::Storage("no window".to_string()))?;
        let storage = window
            .local_storage()
            .map_err(|e| ToolboxError::Storage(describe_js(&e)))?
            .ok_or_else(|| ToolboxError::Storage("localStorage is not available".to_string()))?;
        Ok(Self { storage })
    }
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        self.storage
            .get_item(key)
            .map_err(|e| ToolboxError::Storage(describe_js(&e)))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.storage
            .set_item(key, value)
            .map_err(|e| ToolboxError::Storage(describe_js(&e)))
    }
}
