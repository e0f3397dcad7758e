use api::{PasswordCriteria, RegisterRequest, SessionClient};

use super::{run_submitting, Destination, FlowOutcome, PageEffects, PASSWORD_POLICY_MESSAGE};

pub const REGISTER_FAILED: &str = "Registration failed. Please try again.";

/// Create an account, then send the user to the login page.
pub async fn submit<C, E>(client: &C, fx: &E, request: RegisterRequest) -> FlowOutcome
where
    C: SessionClient,
    E: PageEffects,
{
    if fx.is_submitting() {
        return FlowOutcome::Busy;
    }
    if !PasswordCriteria::validate(&request.password).all_met() {
        fx.notify_error(PASSWORD_POLICY_MESSAGE);
        return FlowOutcome::Rejected;
    }

    match run_submitting(fx, client.register(&request)).await {
        Ok(_) => {
            tracing::info!("Registered {}", request.email);
            fx.navigate(Destination::Login);
            FlowOutcome::Succeeded
        }
        Err(e) => {
            tracing::warn!("Registration failed: {}", e);
            fx.notify_error(&e.user_message(REGISTER_FAILED));
            FlowOutcome::Failed
        }
    }
}
