use api::ClientConfig;
use dioxus::prelude::*;

use ui::{DarkModeProvider, SessionProvider, ToastProvider};
use views::{Activity, ChangePassword, Login, Profile, Register};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[redirect("/", || Route::Profile {})]
    #[route("/login")]
    Login {},
    #[route("/register")]
    Register {},
    #[route("/profile")]
    Profile {},
    #[route("/change-password")]
    ChangePassword {},
    #[route("/activity")]
    Activity {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

/// Baked into the bundle; see `account.toml`.
const ACCOUNT_TOML: &str = include_str!("../account.toml");

fn main() {
    dioxus::launch(App);
}

fn load_config() -> ClientConfig {
    let config = match ClientConfig::from_toml(ACCOUNT_TOML) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Invalid {}: {}", ClientConfig::filename(), e);
            ClientConfig::default()
        }
    };
    config.with_env_overrides()
}

#[component]
fn App() -> Element {
    let config = use_hook(load_config);

    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: ui::ACCOUNT_CSS }
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        DarkModeProvider {
            ToastProvider {
                SessionProvider {
                    config,
                    Router::<Route> {}
                }
            }
        }
    }
}
