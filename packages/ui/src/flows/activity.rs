use api::{ActivityEntry, SessionClient};

pub const ACTIVITY_FAILED: &str = "Unable to load activity log. Please try again later.";

/// Load the activity log, newest first. Failures become an inline message.
pub async fn load<C: SessionClient>(client: &C) -> Result<Vec<ActivityEntry>, String> {
    client.fetch_activity().await.map_err(|e| {
        tracing::error!("Error fetching activity log: {}", e);
        ACTIVITY_FAILED.to_string()
    })
}
