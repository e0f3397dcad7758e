//! # Durable UI preferences
//!
//! Only one preference is persisted on the client: the dark-mode flag, stored
//! under [`DARK_MODE_KEY`] as the literal string `"true"` or `"false"`.
//!
//! Reads never fail: an absent key, any value other than `"true"`, or an
//! unreachable backend all load as `false` (light theme). Writes report
//! [`StoreError`] so the caller can log it, but the in-memory theme keeps
//! working either way.

use crate::{KeyValueStore, StoreError};

/// Storage key for the dark-mode flag.
pub const DARK_MODE_KEY: &str = "darkMode";

/// Typed access to the persisted preferences.
#[derive(Clone, Debug)]
pub struct Preferences<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> Preferences<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Read the dark-mode flag, defaulting to light.
    pub fn load_dark_mode(&self) -> bool {
        matches!(self.store.get_item(DARK_MODE_KEY), Ok(Some(v)) if v == "true")
    }

    /// Persist the dark-mode flag.
    pub fn save_dark_mode(&self, enabled: bool) -> Result<(), StoreError> {
        self.store
            .set_item(DARK_MODE_KEY, if enabled { "true" } else { "false" })
    }
}
