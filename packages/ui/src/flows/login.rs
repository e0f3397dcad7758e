use api::{LoginRequest, SessionClient};

use super::{run_submitting, Destination, FlowOutcome, PageEffects};

pub const LOGIN_FAILED: &str = "An error occurred. Please try again.";

/// Sign in; the backend sets the session cookie on success.
pub async fn submit<C, E>(client: &C, fx: &E, request: LoginRequest) -> FlowOutcome
where
    C: SessionClient,
    E: PageEffects,
{
    if fx.is_submitting() {
        return FlowOutcome::Busy;
    }

    match run_submitting(fx, client.login(&request)).await {
        Ok(_) => {
            fx.navigate(Destination::Profile);
            FlowOutcome::Succeeded
        }
        Err(e) => {
            tracing::warn!("Login failed: {}", e);
            fx.notify_error(&e.user_message(LOGIN_FAILED));
            FlowOutcome::Failed
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flows::testing::{status, Call, FakeClient, RecordingEffects};
    use crate::toast::Severity;

    fn request() -> LoginRequest {
        LoginRequest {
            email: "ada@example.com".into(),
            password: "Abcdef1!".into(),
        }
    }

    #[tokio::test]
    async fn test_empty_success_body_navigates_once() {
        let client = FakeClient::ok();
        let fx = RecordingEffects::new();

        let outcome = submit(&client, &fx, request()).await;

        assert_eq!(outcome, FlowOutcome::Succeeded);
        assert_eq!(client.calls(), vec![Call::Login(request())]);
        assert_eq!(fx.navigations(), vec![Destination::Profile]);
        assert!(fx.notifications().is_empty());
    }

    #[tokio::test]
    async fn test_bad_credentials_show_server_message() {
        let client = FakeClient::failing(status(401, Some("Invalid credentials")));
        let fx = RecordingEffects::new();

        let outcome = submit(&client, &fx, request()).await;

        assert_eq!(outcome, FlowOutcome::Failed);
        assert!(fx.navigations().is_empty());
        assert_eq!(
            fx.notifications(),
            vec![(Severity::Error, "Invalid credentials".to_string())]
        );
    }

    #[tokio::test]
    async fn test_blank_server_message_uses_fallback() {
        let client = FakeClient::failing(status(401, Some("  ")));
        let fx = RecordingEffects::new();

        submit(&client, &fx, request()).await;

        assert_eq!(
            fx.notifications(),
            vec![(Severity::Error, LOGIN_FAILED.to_string())]
        );
    }
}
