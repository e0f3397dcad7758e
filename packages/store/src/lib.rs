//! Client-side key/value persistence for the account pages.
//!
//! The only durable client state is the dark-mode flag; it is read through
//! [`Preferences`] on top of any [`KeyValueStore`].

pub mod error;
pub mod kv;
pub mod preferences;

mod memory;
pub use memory::MemoryStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local::LocalStorage;

pub use error::StoreError;
pub use kv::KeyValueStore;
pub use preferences::{Preferences, DARK_MODE_KEY};
