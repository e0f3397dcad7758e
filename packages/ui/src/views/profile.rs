//! Profile page: personal details, language preferences and security, each in
//! a collapsible section.

use api::{Preferences, TextSize, UpdateProfileRequest};
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaChevronDown, FaChevronUp, FaGear, FaLock, FaUser};
use dioxus_free_icons::Icon;

use crate::auth::{use_auth, use_session_client, AuthState};
use crate::effects::use_page_effects;
use crate::flows::{self, Destination};
use crate::header::Header;
use crate::theme::use_dark_mode;

#[component]
pub fn ProfileView() -> Element {
    let client = use_session_client();
    let fx = use_page_effects();
    let mut auth = use_auth();
    let dark_mode = use_dark_mode();
    let nav = use_navigator();

    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut language = use_signal(String::new);
    let mut text_size = use_signal(TextSize::default);

    let load_client = client.clone();
    let profile = use_resource(move || {
        let client = load_client.clone();
        async move {
            let user = flows::profile::load(&client, &fx).await?;
            name.set(user.name.clone());
            email.set(user.email.clone());
            language.set(user.preferences.default_language.clone());
            text_size.set(user.preferences.text_size);
            auth.set(AuthState { user: Some(user) });
            Some(())
        }
    });

    let save_client = client.clone();
    let handle_save = move |_| {
        let client = save_client.clone();
        let request = UpdateProfileRequest {
            name: name(),
            email: email(),
            preferences: Preferences {
                default_language: language(),
                dark_mode: dark_mode.is_enabled(),
                text_size: text_size(),
            },
        };
        spawn(async move {
            flows::profile::save(&client, &fx, request).await;
        });
    };

    let handle_logout = move |_| {
        let client = client.clone();
        spawn(async move {
            flows::profile::logout(&client, &fx).await;
            auth.set(AuthState::default());
        });
    };

    if profile().flatten().is_none() {
        return rsx! {
            div { class: "page-message", "Loading..." }
        };
    }

    rsx! {
        div {
            class: "page",
            Header { authenticated: true }

            main {
                class: "content",

                div {
                    class: "toolbar",
                    button {
                        class: "outline",
                        onclick: handle_logout,
                        "Logout"
                    }
                }

                Section {
                    title: "Personal Information",
                    icon: rsx! { Icon { icon: FaUser, width: 16, height: 16 } },
                    initially_open: true,

                    div {
                        class: "form-field",
                        label { r#for: "name", "Name" }
                        input {
                            id: "name",
                            r#type: "text",
                            value: name(),
                            oninput: move |evt: FormEvent| name.set(evt.value()),
                        }
                    }
                    div {
                        class: "form-field",
                        label { r#for: "email", "Email" }
                        input {
                            id: "email",
                            r#type: "email",
                            value: email(),
                            oninput: move |evt: FormEvent| email.set(evt.value()),
                        }
                    }
                }

                Section {
                    title: "Language Preferences",
                    icon: rsx! { Icon { icon: FaGear, width: 16, height: 16 } },

                    div {
                        class: "form-field",
                        label { r#for: "language", "Default Language" }
                        input {
                            id: "language",
                            r#type: "text",
                            value: language(),
                            oninput: move |evt: FormEvent| language.set(evt.value()),
                        }
                    }
                    div {
                        class: "form-field",
                        label { r#for: "text-size", "Text Size" }
                        select {
                            id: "text-size",
                            value: text_size().as_str(),
                            onchange: move |evt: FormEvent| text_size.set(TextSize::from_value(&evt.value())),
                            for size in TextSize::ALL {
                                option {
                                    value: size.as_str(),
                                    selected: size == text_size(),
                                    {size.label()}
                                }
                            }
                        }
                    }
                }

                Section {
                    title: "Security",
                    icon: rsx! { Icon { icon: FaLock, width: 16, height: 16 } },

                    button {
                        class: "outline wide",
                        onclick: move |_| {
                            nav.push(Destination::ChangePassword.path());
                        },
                        "Change Password"
                    }
                    div {
                        class: "setting-row",
                        span { "Two-Factor Authentication" }
                        input {
                            r#type: "checkbox",
                            role: "switch",
                            aria_label: "Two-Factor Authentication",
                            disabled: true,
                        }
                    }
                }

                div {
                    class: "toolbar",
                    button {
                        class: "primary",
                        disabled: fx.submitting(),
                        onclick: handle_save,
                        if fx.submitting() { "Saving..." } else { "Save Changes" }
                    }
                }
            }
        }
    }
}

/// Card whose body can be folded away from its header.
#[component]
fn Section(
    title: String,
    icon: Element,
    #[props(default)] initially_open: bool,
    children: Element,
) -> Element {
    let mut open = use_signal(|| initially_open);

    rsx! {
        section {
            class: "card",
            div {
                class: "card-header",
                h2 {
                    class: "card-title",
                    {icon}
                    span { "{title}" }
                }
                button {
                    class: "ghost",
                    aria_expanded: open(),
                    onclick: move |_| open.toggle(),
                    if open() {
                        Icon { icon: FaChevronUp, width: 16, height: 16 }
                    } else {
                        Icon { icon: FaChevronDown, width: 16, height: 16 }
                    }
                }
            }
            if open() {
                div { class: "card-body", {children} }
            }
        }
    }
}
