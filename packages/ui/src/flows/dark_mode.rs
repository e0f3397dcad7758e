use api::{SessionClient, UpdateProfileRequest, User};

use super::profile::UPDATE_FAILED;
use super::PageEffects;

/// Switch the theme. For a signed-in `user` the choice is also saved to the
/// account, so the next session check agrees with it.
///
/// Returns the user as now stored by the backend, or `None` when nothing was
/// saved.
pub async fn set<C, E>(client: &C, fx: &E, user: Option<User>, enabled: bool) -> Option<User>
where
    C: SessionClient,
    E: PageEffects,
{
    fx.sync_dark_mode(enabled);

    let mut user = user?;
    if user.preferences.dark_mode == enabled {
        return None;
    }
    user.preferences.dark_mode = enabled;
    let request = UpdateProfileRequest {
        name: user.name.clone(),
        email: user.email.clone(),
        preferences: user.preferences.clone(),
    };

    match client.update_profile(&request).await {
        Ok(_) => Some(user),
        Err(e) => {
            tracing::warn!("Saving dark mode failed: {}", e);
            fx.notify_error(&e.user_message(UPDATE_FAILED));
            None
        }
    }
}
