//! # Client configuration (`account.toml`)
//!
//! Where the backend lives and how long to wait for it. Resolved once when the
//! app starts and handed to [`crate::HttpSessionClient::new`]; no page carries
//! its own URL.
//!
//! ## Structure
//!
//! ```toml
//! [api]
//! base_url = "http://localhost:3002"   # origin serving /user/*
//! request_timeout_secs = 15             # 0 keeps the transport default
//! ```
//!
//! ## Overrides
//!
//! [`ClientConfig::with_env_overrides`] replaces `base_url` with
//! `ACCOUNT_API_BASE_URL` when set. In the browser there is no process
//! environment, so the variable is read at compile time; native builds also
//! consult `.env` and the runtime environment.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Environment variable that overrides [`ApiConfig::base_url`].
pub const BASE_URL_ENV: &str = "ACCOUNT_API_BASE_URL";

/// Top-level configuration stored in `account.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default)]
    pub api: ApiConfig,
}

/// Backend connection settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Origin of the account backend, without the `/user/...` path.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Per-request timeout in seconds. 0 disables the client-side timeout.
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

fn default_base_url() -> String {
    "http://localhost:3002".to_string()
}

fn default_request_timeout() -> u64 {
    15
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            request_timeout_secs: default_request_timeout(),
        }
    }
}

impl ClientConfig {
    /// Create a config pointing at `base_url`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            api: ApiConfig {
                base_url: base_url.into(),
                ..ApiConfig::default()
            },
        }
    }

    /// Builder method to set the request timeout.
    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.api.request_timeout_secs = secs;
        self
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "account.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Apply `ACCOUNT_API_BASE_URL`, if present.
    pub fn with_env_overrides(mut self) -> Self {
        if let Some(url) = option_env!("ACCOUNT_API_BASE_URL") {
            self.api.base_url = url.to_string();
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            dotenvy::dotenv().ok();
            if let Ok(url) = std::env::var(BASE_URL_ENV) {
                self.api.base_url = url;
            }
        }
        self
    }

    /// Base URL with any trailing slash removed.
    pub fn base_url(&self) -> &str {
        self.api.base_url.trim().trim_end_matches('/')
    }

    /// Request timeout, or `None` when disabled.
    pub fn request_timeout(&self) -> Option<Duration> {
        match self.api.request_timeout_secs {
            0 => None,
            secs => Some(Duration::from_secs(secs)),
        }
    }
}
