use dioxus::prelude::*;
use ui::views::ChangePasswordView;
use ui::RequireSession;

#[component]
pub fn ChangePassword() -> Element {
    rsx! {
        RequireSession {
            ChangePasswordView {}
        }
    }
}
