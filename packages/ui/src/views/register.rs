//! Registration form with a live password checklist.

use api::RegisterRequest;
use dioxus::prelude::*;

use crate::auth::use_session_client;
use crate::effects::use_page_effects;
use crate::flows;
use crate::header::Header;
use crate::password_checklist::PasswordChecklist;

#[component]
pub fn RegisterView() -> Element {
    let client = use_session_client();
    let fx = use_page_effects();
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);

    let handle_register = move |evt: FormEvent| {
        evt.prevent_default();
        let client = client.clone();
        spawn(async move {
            let request = RegisterRequest {
                name: name().trim().to_string(),
                email: email().trim().to_string(),
                password: password(),
            };
            flows::register::submit(&client, &fx, request).await;
        });
    };

    rsx! {
        div {
            class: "page",
            Header { authenticated: false }

            main {
                class: "auth-card",
                h1 { "Register" }

                form {
                    onsubmit: handle_register,
                    class: "form",

                    div {
                        class: "form-field",
                        label { r#for: "name", "Name" }
                        input {
                            id: "name",
                            r#type: "text",
                            placeholder: "Enter your name",
                            required: true,
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
                            placeholder: "Enter your email",
                            required: true,
                            value: email(),
                            oninput: move |evt: FormEvent| email.set(evt.value()),
                        }
                    }

                    div {
                        class: "form-field",
                        label { r#for: "password", "Password" }
                        input {
                            id: "password",
                            r#type: "password",
                            placeholder: "Create a password",
                            required: true,
                            value: password(),
                            oninput: move |evt: FormEvent| password.set(evt.value()),
                        }
                        PasswordChecklist { password: password() }
                    }

                    button {
                        class: "primary",
                        r#type: "submit",
                        disabled: fx.submitting(),
                        if fx.submitting() { "Registering..." } else { "Register" }
                    }
                }

                p {
                    class: "auth-switch",
                    "Already have an account? "
                    Link { to: "/login", "Login" }
                }
            }
        }
    }
}
