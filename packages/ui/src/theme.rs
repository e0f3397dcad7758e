//! Dark mode: a page-wide signal mirrored to the `dark` class on `<html>` and
//! persisted through [`store::Preferences`].

use dioxus::prelude::*;
use store::{KeyValueStore, Preferences};

/// Handle to the page-wide dark-mode flag.
#[derive(Clone, Copy, PartialEq)]
pub struct DarkMode {
    enabled: Signal<bool>,
}

impl DarkMode {
    pub fn is_enabled(&self) -> bool {
        (self.enabled)()
    }

    /// Switch the theme and remember the choice locally.
    pub fn set(&self, enabled: bool) {
        self.apply(enabled);
        if let Err(e) = preference_store().save_dark_mode(enabled) {
            tracing::warn!("Could not persist dark mode: {}", e);
        }
    }

    fn apply(&self, enabled: bool) {
        let mut signal = self.enabled;
        signal.set(enabled);
        apply_dark_class(enabled);
    }
}

pub fn use_dark_mode() -> DarkMode {
    use_context::<DarkMode>()
}

/// Provides [`DarkMode`] and restores the stored flag on mount.
#[component]
pub fn DarkModeProvider(children: Element) -> Element {
    let enabled = use_signal(|| false);
    let dark_mode = use_context_provider(|| DarkMode { enabled });

    use_effect(move || {
        let stored = preference_store().load_dark_mode();
        dark_mode.apply(stored);
    });

    rsx! { {children} }
}

#[cfg(all(target_arch = "wasm32", feature = "web"))]
fn preference_store() -> Preferences<impl KeyValueStore> {
    Preferences::new(store::LocalStorage::new())
}

/// Off the browser the flag lives for the life of the process.
#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
fn preference_store() -> Preferences<impl KeyValueStore> {
    use std::sync::OnceLock;
    static FALLBACK: OnceLock<store::MemoryStore> = OnceLock::new();
    Preferences::new(FALLBACK.get_or_init(store::MemoryStore::new).clone())
}

#[cfg(target_arch = "wasm32")]
fn apply_dark_class(enabled: bool) {
    let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        return;
    };
    let classes = root.class_list();
    let result = if enabled {
        classes.add_1("dark")
    } else {
        classes.remove_1("dark")
    };
    if let Err(e) = result {
        tracing::warn!("Could not toggle dark class: {:?}", e);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn apply_dark_class(_enabled: bool) {}
