use serde::Deserialize;

use super::{ActivityEntry, User};

/// Envelope shared by every backend response.
///
/// Which fields are present depends on the endpoint; errors carry only
/// `message`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub user: Option<User>,
    #[serde(default)]
    pub activity_log: Option<Vec<ActivityEntry>>,
}

impl ApiResponse {
    /// Parse a response body, treating an empty or malformed body as an
    /// empty envelope.
    pub fn parse_lenient(body: &str) -> Self {
        if body.trim().is_empty() {
            return Self::default();
        }
        match serde_json::from_str(body) {
            Ok(parsed) => parsed,
            Err(e) => {
                tracing::debug!("Ignoring unparseable response body: {}", e);
                Self::default()
            }
        }
    }
}
