use api::ChangePasswordRequest;
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaArrowLeft;
use dioxus_free_icons::Icon;

use crate::auth::use_session_client;
use crate::effects::use_page_effects;
use crate::flows::{self, FlowOutcome};
use crate::header::Header;
use crate::password_checklist::PasswordChecklist;

/// Change-password form. Rendered behind [`crate::RequireSession`].
#[component]
pub fn ChangePasswordView() -> Element {
    let client = use_session_client();
    let fx = use_page_effects();
    let mut current_password = use_signal(String::new);
    let mut new_password = use_signal(String::new);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let client = client.clone();
        spawn(async move {
            let request = ChangePasswordRequest {
                current_password: current_password(),
                new_password: new_password(),
            };
            if flows::change_password::submit(&client, &fx, request).await == FlowOutcome::Succeeded {
                current_password.set(String::new());
                new_password.set(String::new());
            }
        });
    };

    rsx! {
        div {
            class: "page",
            Header { authenticated: true }

            main {
                class: "content",
                BackToProfile {}

                section {
                    class: "card",
                    div {
                        class: "card-header stacked",
                        h2 { class: "card-title", "Change Password" }
                        p { class: "card-description", "Update your account password" }
                    }

                    form {
                        onsubmit: handle_submit,
                        class: "form card-body",

                        div {
                            class: "form-field",
                            label { r#for: "currentPassword", "Current Password" }
                            input {
                                id: "currentPassword",
                                r#type: "password",
                                placeholder: "Enter current password",
                                required: true,
                                value: current_password(),
                                oninput: move |evt: FormEvent| current_password.set(evt.value()),
                            }
                        }

                        div {
                            class: "form-field",
                            label { r#for: "newPassword", "New Password" }
                            input {
                                id: "newPassword",
                                r#type: "password",
                                placeholder: "Enter new password",
                                required: true,
                                value: new_password(),
                                oninput: move |evt: FormEvent| new_password.set(evt.value()),
                            }
                            PasswordChecklist { password: new_password() }
                        }

                        button {
                            class: "primary",
                            r#type: "submit",
                            disabled: fx.submitting(),
                            if fx.submitting() { "Updating..." } else { "Change Password" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub(crate) fn BackToProfile() -> Element {
    rsx! {
        Link {
            class: "back-link",
            to: "/",
            Icon { icon: FaArrowLeft, width: 14, height: 14 }
            span { "Back to Profile" }
        }
    }
}
