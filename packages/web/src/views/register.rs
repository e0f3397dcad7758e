use dioxus::prelude::*;
use ui::views::RegisterView;

#[component]
pub fn Register() -> Element {
    rsx! { RegisterView {} }
}
