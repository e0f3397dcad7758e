//! # Browser `localStorage` backend
//!
//! [`LocalStorage`] is the [`KeyValueStore`] used on the **web platform**. It
//! looks up `window.localStorage` on every call rather than caching the handle,
//! since `web_sys::Storage` is not `Send` and the lookup is cheap.
//!
//! `localStorage` can be missing (sandboxed iframes, some private-browsing
//! modes) or throw on write (quota). Both map to a [`StoreError`]; callers
//! decide whether that matters.

use crate::{KeyValueStore, StoreError};

/// `window.localStorage`-backed store.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

impl LocalStorage {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Result<web_sys::Storage, StoreError> {
        web_sys::window()
            .ok_or(StoreError::Unavailable)?
            .local_storage()
            .map_err(|_| StoreError::Unavailable)?
            .ok_or(StoreError::Unavailable)
    }
}

impl KeyValueStore for LocalStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError> {
        Self::storage()?
            .get_item(key)
            .map_err(|e| StoreError::Rejected(format!("{e:?}")))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|e| StoreError::Rejected(format!("{e:?}")))
    }
}
