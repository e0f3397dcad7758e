//! Profile page: load on mount, save edits, log out.

use api::{SessionClient, UpdateProfileRequest, User};

use super::session::{check, SessionStatus};
use super::{run_submitting, Destination, FlowOutcome, PageEffects};

pub const DETAILS_FAILED: &str = "Error fetching user details";
pub const PROFILE_UPDATED: &str = "Profile updated successfully!";
pub const UPDATE_FAILED: &str = "Error updating profile";

/// Fetch the signed-in user, or leave for the login page.
///
/// On success the account's dark-mode preference replaces the local one.
pub async fn load<C, E>(client: &C, fx: &E) -> Option<User>
where
    C: SessionClient,
    E: PageEffects,
{
    match check(client).await {
        Ok(SessionStatus::Authenticated(user)) => {
            fx.sync_dark_mode(user.preferences.dark_mode);
            Some(user)
        }
        Ok(SessionStatus::Unauthenticated) => {
            fx.navigate(Destination::Login);
            None
        }
        Err(e) => {
            tracing::warn!("Fetching user details failed: {}", e);
            fx.notify_error(DETAILS_FAILED);
            fx.navigate(Destination::Login);
            None
        }
    }
}

pub async fn save<C, E>(client: &C, fx: &E, request: UpdateProfileRequest) -> FlowOutcome
where
    C: SessionClient,
    E: PageEffects,
{
    if fx.is_submitting() {
        return FlowOutcome::Busy;
    }

    match run_submitting(fx, client.update_profile(&request)).await {
        Ok(_) => {
            fx.notify_success(PROFILE_UPDATED);
            FlowOutcome::Succeeded
        }
        Err(e) => {
            tracing::warn!("Profile update failed: {}", e);
            fx.notify_error(&e.user_message(UPDATE_FAILED));
            FlowOutcome::Failed
        }
    }
}

/// End the session. The user lands on the login page whatever the backend says.
pub async fn logout<C, E>(client: &C, fx: &E)
where
    C: SessionClient,
    E: PageEffects,
{
    if let Err(e) = client.logout().await {
        tracing::error!("Error during logout: {}", e);
    }
    fx.navigate(Destination::Login);
}
