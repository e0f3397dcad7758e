use dioxus::prelude::*;
use ui::views::ProfileView;

/// The profile page runs its own session check so it can fill the form from
/// the same details request.
#[component]
pub fn Profile() -> Element {
    rsx! { ProfileView {} }
}
