use api::LoginRequest;
use dioxus::prelude::*;

use crate::auth::use_session_client;
use crate::effects::use_page_effects;
use crate::flows;
use crate::header::Header;

#[component]
pub fn LoginView() -> Element {
    let client = use_session_client();
    let fx = use_page_effects();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        let client = client.clone();
        spawn(async move {
            let request = LoginRequest {
                email: email().trim().to_string(),
                password: password(),
            };
            flows::login::submit(&client, &fx, request).await;
        });
    };

    rsx! {
        div {
            class: "page",
            Header { authenticated: false }

            main {
                class: "auth-card",
                h1 { "Login" }

                form {
                    onsubmit: handle_login,
                    class: "form",

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
                            placeholder: "Enter your password",
                            required: true,
                            value: password(),
                            oninput: move |evt: FormEvent| password.set(evt.value()),
                        }
                    }

                    button {
                        class: "primary",
                        r#type: "submit",
                        disabled: fx.submitting(),
                        if fx.submitting() { "Logging in..." } else { "Login" }
                    }
                }

                p {
                    class: "auth-switch",
                    "Don't have an account? "
                    Link { to: "/register", "Register" }
                }
            }
        }
    }
}
