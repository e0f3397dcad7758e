//! Session context and guards for the UI.

use api::{ClientConfig, HttpSessionClient, User};
use dioxus::prelude::*;

use crate::effects::use_page_effects;
use crate::flows;

/// Who is signed in, as last reported by the backend.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthState {
    pub user: Option<User>,
}

/// Get the current authentication state.
pub fn use_auth() -> Signal<AuthState> {
    use_context::<Signal<AuthState>>()
}

/// Get the backend client provided by [`SessionProvider`].
pub fn use_session_client() -> HttpSessionClient {
    use_context::<HttpSessionClient>()
}

/// Builds the backend client from `config` and provides it with an empty
/// [`AuthState`]. A config that cannot produce a client renders an error
/// instead of the app.
#[component]
pub fn SessionProvider(config: ClientConfig, children: Element) -> Element {
    use_context_provider(|| Signal::new(AuthState::default()));
    let client = use_hook(|| match HttpSessionClient::new(&config) {
        Ok(client) => {
            tracing::info!("Using account API at {}", client.base_url());
            Some(provide_context(client))
        }
        Err(e) => {
            tracing::error!("Cannot create account API client: {}", e);
            None
        }
    });

    match client {
        Some(_) => rsx! { {children} },
        None => rsx! {
            div {
                class: "page-message",
                "The account service is not configured."
            }
        },
    }
}

/// Renders `children` only for a signed-in user; everyone else is sent to
/// the login page.
#[component]
pub fn RequireSession(children: Element) -> Element {
    let client = use_session_client();
    let fx = use_page_effects();
    let mut auth = use_auth();

    let session = use_resource(move || {
        let client = client.clone();
        async move {
            let user = flows::profile::load(&client, &fx).await;
            auth.set(AuthState { user: user.clone() });
            user.is_some()
        }
    });

    match session() {
        Some(true) => rsx! { {children} },
        _ => rsx! {
            div { class: "page-message", "Loading..." }
        },
    }
}
