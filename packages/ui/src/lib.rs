//! This crate contains all shared UI for the account pages.
//!
//! Page logic lives in [`flows`] and is independent of Dioxus; the components
//! here wire it to signals, the router and the toast stack.

use dioxus::prelude::*;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub const ACCOUNT_CSS: Asset = asset!("/assets/account.css");

pub mod flows;
pub use flows::{Destination, FlowOutcome, PageEffects, SubmitPhase};

pub mod views;

mod auth;
pub use auth::{use_auth, use_session_client, AuthState, RequireSession, SessionProvider};

mod effects;
pub use effects::{use_page_effects, DioxusEffects};

mod header;
pub use header::Header;

mod password_checklist;
pub use password_checklist::PasswordChecklist;

mod theme;
pub use theme::{use_dark_mode, DarkMode, DarkModeProvider};

pub mod toast;
pub use toast::{use_toaster, Severity, ToastProvider, Toaster};
