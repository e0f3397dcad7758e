//! # Client error type
//!
//! Every failed backend call ends up as an [`ApiError`]. Pages never show the
//! raw error; they ask for [`ApiError::user_message`] with a page-specific
//! fallback, which keeps server-supplied messages ("Invalid credentials") and
//! hides transport noise behind one generic sentence.

use thiserror::Error;

/// Shown when the request never produced a usable response.
pub const UNEXPECTED_ERROR_MESSAGE: &str = "An unexpected error occurred. Please try again.";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Network failure, CORS rejection, DNS, ...
    #[error("request failed: {0}")]
    Transport(String),
    /// No response within the configured timeout.
    #[error("request timed out")]
    Timeout,
    /// The backend answered with a non-2xx status.
    #[error("server returned {status}{}", status_suffix(.message))]
    Status { status: u16, message: Option<String> },
    /// A 2xx response lacked a field the endpoint promises.
    #[error("response is missing `{0}`")]
    MissingField(&'static str),
    /// The client could not be constructed from its configuration.
    #[error("invalid client configuration: {0}")]
    Config(String),
}

fn status_suffix(message: &Option<String>) -> String {
    message.as_deref().map(|m| format!(": {m}")).unwrap_or_default()
}

impl ApiError {
    /// Message suitable for a toast.
    ///
    /// Non-2xx responses use the server's message, or `fallback` when it sent
    /// none. Anything else gets [`UNEXPECTED_ERROR_MESSAGE`].
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Status { message, .. } => message
                .as_deref()
                .filter(|m| !m.trim().is_empty())
                .unwrap_or(fallback)
                .to_string(),
            _ => UNEXPECTED_ERROR_MESSAGE.to_string(),
        }
    }

    /// True when the backend answered but refused the request, which for
    /// session-bound calls means there is no valid session.
    pub fn is_unauthenticated(&self) -> bool {
        matches!(self, ApiError::Status { .. })
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        #[cfg(not(target_arch = "wasm32"))]
        if e.is_timeout() {
            return ApiError::Timeout;
        }
        ApiError::Transport(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_uses_server_message() {
        let err = ApiError::Status {
            status: 401,
            message: Some("Invalid credentials".to_string()),
        };
        assert_eq!(err.user_message("fallback"), "Invalid credentials");
    }

    #[test]
    fn test_status_without_message_uses_fallback() {
        let err = ApiError::Status {
            status: 500,
            message: None,
        };
        assert_eq!(err.user_message("Error updating profile"), "Error updating profile");

        let blank = ApiError::Status {
            status: 400,
            message: Some("  ".to_string()),
        };
        assert_eq!(blank.user_message("Error updating profile"), "Error updating profile");
    }

    #[test]
    fn test_transport_is_generic() {
        assert_eq!(
            ApiError::Transport("connection refused".to_string()).user_message("fallback"),
            UNEXPECTED_ERROR_MESSAGE
        );
        assert_eq!(ApiError::Timeout.user_message("fallback"), UNEXPECTED_ERROR_MESSAGE);
        assert_eq!(
            ApiError::MissingField("user").user_message("fallback"),
            UNEXPECTED_ERROR_MESSAGE
        );
    }

    #[test]
    fn test_display() {
        let err = ApiError::Status {
            status: 404,
            message: Some("Not found".to_string()),
        };
        assert_eq!(err.to_string(), "server returned 404: Not found");
        let bare = ApiError::Status {
            status: 502,
            message: None,
        };
        assert_eq!(bare.to_string(), "server returned 502");
    }

    #[test]
    fn test_unauthenticated() {
        assert!(ApiError::Status { status: 401, message: None }.is_unauthenticated());
        assert!(!ApiError::Timeout.is_unauthenticated());
    }
}
