use api::{ChangePasswordRequest, PasswordCriteria, SessionClient};

use super::{run_submitting, FlowOutcome, PageEffects, PASSWORD_POLICY_MESSAGE};

pub const PASSWORD_CHANGED: &str = "Password changed successfully.";
pub const CHANGE_FAILED: &str = "Password change failed. Please try again.";

/// Replace the account password. Only the new password is checked locally.
pub async fn submit<C, E>(client: &C, fx: &E, request: ChangePasswordRequest) -> FlowOutcome
where
    C: SessionClient,
    E: PageEffects,
{
    if fx.is_submitting() {
        return FlowOutcome::Busy;
    }
    if !PasswordCriteria::validate(&request.new_password).all_met() {
        fx.notify_error(PASSWORD_POLICY_MESSAGE);
        return FlowOutcome::Rejected;
    }

    match run_submitting(fx, client.change_password(&request)).await {
        Ok(response) => {
            let message = response
                .message
                .filter(|m| !m.trim().is_empty())
                .unwrap_or_else(|| PASSWORD_CHANGED.to_string());
            fx.notify_success(&message);
            FlowOutcome::Succeeded
        }
        Err(e) => {
            tracing::warn!("Password change failed: {}", e);
            fx.notify_error(&e.user_message(CHANGE_FAILED));
            FlowOutcome::Failed
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flows::testing::{status, Call, FakeClient, RecordingEffects};
    use crate::flows::SubmitPhase;
    use crate::toast::Severity;

    fn request(new_password: &str) -> ChangePasswordRequest {
        ChangePasswordRequest {
            current_password: "OldPass1!".into(),
            new_password: new_password.into(),
        }
    }

    #[tokio::test]
    async fn test_valid_password_sends_one_request() {
        let client = FakeClient::ok().with_message("Password updated");
        let fx = RecordingEffects::new();

        let outcome = submit(&client, &fx, request("Abcdef1!")).await;

        assert_eq!(outcome, FlowOutcome::Succeeded);
        assert_eq!(client.calls(), vec![Call::ChangePassword(request("Abcdef1!"))]);
        assert_eq!(
            fx.notifications(),
            vec![(Severity::Success, "Password updated".to_string())]
        );
        assert_eq!(fx.phases(), vec![SubmitPhase::Submitting, SubmitPhase::Idle]);
    }

    #[tokio::test]
    async fn test_success_without_message_uses_default() {
        let client = FakeClient::ok();
        let fx = RecordingEffects::new();

        submit(&client, &fx, request("Abcdef1!")).await;

        assert_eq!(
            fx.notifications(),
            vec![(Severity::Success, PASSWORD_CHANGED.to_string())]
        );
    }

    #[tokio::test]
    async fn test_each_missing_rule_rejects() {
        for weak in ["Abcdef1", "abcdefg!", "ABCDEFG!", "Abcdefgh"] {
            let client = FakeClient::ok();
            let fx = RecordingEffects::new();

            assert_eq!(submit(&client, &fx, request(weak)).await, FlowOutcome::Rejected);
            assert!(client.calls().is_empty(), "{weak} should not be sent");
        }
    }

    #[tokio::test]
    async fn test_wrong_current_password_shows_server_message() {
        let client = FakeClient::failing(status(400, Some("Current password is incorrect")));
        let fx = RecordingEffects::new();

        assert_eq!(submit(&client, &fx, request("Abcdef1!")).await, FlowOutcome::Failed);
        assert_eq!(
            fx.notifications(),
            vec![(Severity::Error, "Current password is incorrect".to_string())]
        );
    }
}
