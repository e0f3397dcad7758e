//! # API crate: client side of the account backend
//!
//! The account pages never talk to a database or hash a password; every
//! business rule lives in a separate HTTP/JSON service. This crate is the
//! boundary to that service and the home of the few rules the pages enforce
//! locally.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | [`SessionClient`] trait and its reqwest implementation [`HttpSessionClient`] |
//! | [`config`] | [`ClientConfig`]: backend base URL and request timeout, loaded once at start |
//! | [`endpoint`] | The seven backend calls with their method, path and credential policy |
//! | [`error`] | [`ApiError`] and the user-facing messages derived from it |
//! | [`models`] | Wire types: `User`, `Preferences`, `ActivityEntry`, request bodies |
//! | [`password`] | Client-side password policy ([`PasswordCriteria`]) |
//!
//! ## Session handling
//!
//! The backend authenticates with a session cookie set on login. In the browser
//! every credentialed request uses `credentials: "include"`; on native targets
//! the reqwest cookie jar plays the same role.

pub mod client;
pub mod config;
pub mod endpoint;
pub mod error;
pub mod models;
pub mod password;

pub use client::{HttpSessionClient, SessionClient};
pub use config::ClientConfig;
pub use endpoint::Endpoint;
pub use error::ApiError;
pub use models::{
    sort_newest_first, ActivityEntry, ApiResponse, ChangePasswordRequest, LoginRequest,
    Preferences, RegisterRequest, TextSize, UpdateProfileRequest, User,
};
pub use password::PasswordCriteria;
