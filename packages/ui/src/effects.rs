//! [`PageEffects`] backed by the running Dioxus app.

use dioxus::prelude::*;
use dioxus::router::Navigator;

use crate::flows::{Destination, PageEffects, SubmitPhase};
use crate::theme::{use_dark_mode, DarkMode};
use crate::toast::{use_toaster, Severity, Toaster};

/// Per-page effects handle. Copy it into event handlers and spawned tasks.
#[derive(Clone, Copy)]
pub struct DioxusEffects {
    toaster: Toaster,
    navigator: Navigator,
    phase: Signal<SubmitPhase>,
    dark_mode: DarkMode,
}

/// Effects for the current page, with its own submit phase.
pub fn use_page_effects() -> DioxusEffects {
    let phase = use_signal(SubmitPhase::default);
    DioxusEffects {
        toaster: use_toaster(),
        navigator: use_navigator(),
        phase,
        dark_mode: use_dark_mode(),
    }
}

impl DioxusEffects {
    /// Reactive read for disabling submit controls.
    pub fn submitting(&self) -> bool {
        (self.phase)() == SubmitPhase::Submitting
    }
}

impl PageEffects for DioxusEffects {
    fn notify(&self, severity: Severity, message: &str) {
        self.toaster.notify(severity, message);
    }

    fn navigate(&self, to: Destination) {
        self.navigator.push(to.path());
    }

    fn phase(&self) -> SubmitPhase {
        *self.phase.peek()
    }

    fn set_phase(&self, phase: SubmitPhase) {
        let mut signal = self.phase;
        signal.set(phase);
    }

    fn sync_dark_mode(&self, enabled: bool) {
        self.dark_mode.set(enabled);
    }
}
