use dioxus::prelude::*;
use ui::views::ActivityView;
use ui::RequireSession;

#[component]
pub fn Activity() -> Element {
    rsx! {
        RequireSession {
            ActivityView {}
        }
    }
}
