use api::ActivityEntry;
use dioxus::prelude::*;

use crate::auth::use_session_client;
use crate::flows;
use crate::header::Header;
use crate::views::change_password::BackToProfile;

/// The account's activity log, newest first. Rendered behind
/// [`crate::RequireSession`].
#[component]
pub fn ActivityView() -> Element {
    let client = use_session_client();
    let activities = use_resource(move || {
        let client = client.clone();
        async move { flows::activity::load(&client).await }
    });

    let body = match &*activities.read() {
        None => rsx! { p { "Loading..." } },
        Some(Err(message)) => rsx! { p { class: "error-text", "{message}" } },
        Some(Ok(entries)) if entries.is_empty() => rsx! { p { "No activities found." } },
        Some(Ok(entries)) => rsx! {
            ul {
                class: "activity-list",
                for (i, entry) in entries.iter().enumerate() {
                    li {
                        key: "{i}",
                        class: "activity-item",
                        p { class: "activity-action", "{entry.action}" }
                        p { class: "activity-time", {format_timestamp(entry)} }
                    }
                }
            }
        },
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
                        class: "card-header",
                        h2 { class: "card-title", "Activity Log" }
                    }
                    div { class: "card-body", {body} }
                }
            }
        }
    }
}

/// Render a timestamp in the browser's locale.
#[cfg(target_arch = "wasm32")]
fn format_timestamp(entry: &ActivityEntry) -> String {
    let date = js_sys::Date::new(&entry.timestamp.as_str().into());
    if date.get_time().is_nan() {
        return entry.timestamp.clone();
    }
    date.to_locale_string("default", &js_sys::Object::new()).into()
}

/// Render a timestamp as UTC; unparseable values are shown as sent.
#[cfg(not(target_arch = "wasm32"))]
fn format_timestamp(entry: &ActivityEntry) -> String {
    match entry.parsed_timestamp() {
        Some(at) => at.naive_utc().format("%Y-%m-%d %H:%M:%S UTC").to_string(),
        None => entry.timestamp.clone(),
    }
}
