use serde::Serialize;

use super::Preferences;

/// Body of `POST /user/register`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Body of `POST /user/login`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Body of `PUT /user/update`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UpdateProfileRequest {
    pub name: String,
    pub email: String,
    pub preferences: Preferences,
}

/// Body of `PUT /user/change-password`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordRequest {
    pub current_password: String,
    pub new_password: String,
}
