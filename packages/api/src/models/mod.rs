//! Wire types exchanged with the account backend.

mod activity;
mod requests;
mod response;
mod user;

pub use activity::{sort_newest_first, ActivityEntry};
pub use requests::{ChangePasswordRequest, LoginRequest, RegisterRequest, UpdateProfileRequest};
pub use response::ApiResponse;
pub use user::{Preferences, TextSize, User};
