use api::{ApiError, SessionClient, User};

/// Result of asking the backend who is signed in.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionStatus {
    Authenticated(User),
    Unauthenticated,
}

/// Probe the session with a details request.
///
/// Any non-2xx reply counts as signed out. Transport failures are returned as
/// errors so the caller can tell the user something went wrong.
pub async fn check<C: SessionClient>(client: &C) -> Result<SessionStatus, ApiError> {
    match client.fetch_details().await {
        Ok(user) => Ok(SessionStatus::Authenticated(user)),
        Err(e) if e.is_unauthenticated() => {
            tracing::debug!("No active session: {}", e);
            Ok(SessionStatus::Unauthenticated)
        }
        Err(e) => Err(e),
    }
}
