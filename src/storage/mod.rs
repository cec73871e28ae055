//! Playlist persistence
//!
//! The session saves every playlist as one JSON array under a single key.
//! In the browser the backend is `window.localStorage`; tests and native
//! builds use `MemoryStorage`.

use std::collections::HashMap;

use log::warn;

use crate::error::{EditError, Result};
use crate::models::Playlist;

/// Key the playlists are stored under
pub const STORAGE_KEY: &str = "recent_work";

/// A string key/value store in the shape of the Web Storage API
pub trait Storage {
    fn get_item(&self, key: &str) -> Result<Option<String>>;

    fn set_item(&mut self, key: &str, value: &str) -> Result<()>;
}

/// In-memory store
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    items: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(self.items.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<()> {
        self.items.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// `window.localStorage`, looked up on every access
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

impl LocalStorage {
    fn backend() -> Result<web_sys::Storage> {
        let window = web_sys::window()
            .ok_or_else(|| EditError::Storage("no window available".to_string()))?;

        window
            .local_storage()
            .map_err(|e| EditError::Storage(format!("{:?}", e)))?
            .ok_or_else(|| EditError::Storage("localStorage is disabled".to_string()))
    }
}

impl Storage for LocalStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        Self::backend()?
            .get_item(key)
            .map_err(|e| EditError::Storage(format!("{:?}", e)))
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<()> {
        Self::backend()?.set_item(key, value).map_err(|e| {
            warn!("localStorage write failed for {}: {:?}", key, e);
            EditError::Storage(format!("{:?}", e))
        })
    }
}

/// Write all playlists to `storage`
pub fn save_playlists<S: Storage + ?Sized>(storage: &mut S, playlists: &[Playlist]) -> Result<()> {
    let json = serde_json::to_string(playlists)?;
    storage.set_item(STORAGE_KEY, &json)
}

/// Read all playlists from `storage`; `None` when nothing was ever saved
pub fn load_playlists<S: Storage + ?Sized>(storage: &S) -> Result<Option<Vec<Playlist>>> {
    match storage.get_item(STORAGE_KEY)? {
        Some(json) => Ok(Some(serde_json::from_str(&json)?)),
        None => Ok(None),
    }
}
