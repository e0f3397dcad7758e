use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaClockRotateLeft, FaMoon, FaSun};
use dioxus_free_icons::Icon;

use crate::auth::{use_auth, use_session_client, AuthState};
use crate::effects::use_page_effects;
use crate::flows;
use crate::theme::use_dark_mode;

/// Top bar shared by every page.
///
/// Signed-in pages get the user's initials and a link to the activity log.
/// The dark-mode switch is always shown; while signed in it also saves the
/// choice to the account.
#[component]
pub fn Header(authenticated: bool) -> Element {
    let mut auth = use_auth();
    let dark_mode = use_dark_mode();
    let client = use_session_client();
    let fx = use_page_effects();
    let initials = auth
        .read()
        .user
        .as_ref()
        .map(|u| u.initials())
        .unwrap_or_else(|| "?".to_string());

    rsx! {
        header {
            class: "app-header",

            if authenticated {
                div {
                    class: "avatar",
                    title: "Profile",
                    "{initials}"
                }
            } else {
                span { class: "app-title", "Account" }
            }

            nav {
                class: "header-actions",

                if authenticated {
                    Link {
                        class: "header-link",
                        to: "/activity",
                        Icon { icon: FaClockRotateLeft, width: 14, height: 14 }
                        span { "Activity" }
                    }
                }

                label {
                    class: "theme-switch",
                    Icon { icon: FaSun, width: 14, height: 14 }
                    input {
                        r#type: "checkbox",
                        role: "switch",
                        aria_label: "Dark mode",
                        checked: dark_mode.is_enabled(),
                        onchange: move |_| {
                            let enabled = !dark_mode.is_enabled();
                            let user = if authenticated { auth.peek().user.clone() } else { None };
                            let client = client.clone();
                            spawn(async move {
                                if let Some(user) = flows::dark_mode::set(&client, &fx, user, enabled).await {
                                    auth.set(AuthState { user: Some(user) });
                                }
                            });
                        },
                    }
                    Icon { icon: FaMoon, width: 14, height: 14 }
                }
            }
        }
    }
}
