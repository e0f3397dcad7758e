//! # Page flows
//!
//! What happens when a form is submitted or a protected page mounts, written
//! without any reference to Dioxus so it can be driven by a fake client in
//! tests. Every flow talks to the outside world through two seams:
//!
//! - [`api::SessionClient`] for the backend;
//! - [`PageEffects`] for everything the user sees: toasts, navigation, the
//!   submit button's enabled state and the theme.
//!
//! ## Submission lifecycle
//!
//! ```text
//! Idle ──submit──▶ Submitting ──response──▶ Idle (+ navigate | toast)
//!  │
//!  └─ local validation fails ──▶ Idle (error toast, no request)
//! ```
//!
//! A submit arriving while the page is already `Submitting` is dropped with
//! [`FlowOutcome::Busy`]. Errors never escape a flow; each one ends in a
//! visible message and a return to `Idle`.

use std::future::Future;

use api::ApiError;

use crate::toast::Severity;

pub mod activity;
pub mod change_password;
pub mod dark_mode;
pub mod login;
pub mod profile;
pub mod register;
pub mod session;

#[cfg(test)]
pub(crate) mod testing;

/// Shown when a password fails any policy rule.
pub const PASSWORD_POLICY_MESSAGE: &str = "Please meet all password criteria.";

/// Pages a flow can send the user to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destination {
    Home,
    Login,
    Register,
    Profile,
    ChangePassword,
    Activity,
}

impl Destination {
    pub fn path(&self) -> &'static str {
        match self {
            Destination::Home => "/",
            Destination::Login => "/login",
            Destination::Register => "/register",
            Destination::Profile => "/profile",
            Destination::ChangePassword => "/change-password",
            Destination::Activity => "/activity",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Submitting,
}

/// How a single submit ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowOutcome {
    /// The request succeeded and its success effect ran.
    Succeeded,
    /// The request failed; an error toast was shown.
    Failed,
    /// Local validation blocked the submit before any request.
    Rejected,
    /// A previous submit is still in flight.
    Busy,
}

/// Side effects a flow may trigger on its page.
pub trait PageEffects {
    fn notify(&self, severity: Severity, message: &str);
    fn navigate(&self, to: Destination);
    fn phase(&self) -> SubmitPhase;
    fn set_phase(&self, phase: SubmitPhase);
    /// Adopt the account's dark-mode preference as the local theme.
    fn sync_dark_mode(&self, enabled: bool);

    fn notify_success(&self, message: &str) {
        self.notify(Severity::Success, message);
    }

    fn notify_error(&self, message: &str) {
        self.notify(Severity::Error, message);
    }

    fn is_submitting(&self) -> bool {
        self.phase() == SubmitPhase::Submitting
    }
}

/// Await `request` with the page in the `Submitting` phase.
pub(crate) async fn run_submitting<E, T>(
    fx: &E,
    request: impl Future<Output = Result<T, ApiError>>,
) -> Result<T, ApiError>
where
    E: PageEffects + ?Sized,
{
    fx.set_phase(SubmitPhase::Submitting);
    let result = request.await;
    fx.set_phase(SubmitPhase::Idle);
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_destination_paths() {
        assert_eq!(Destination::Home.path(), "/");
        assert_eq!(Destination::Login.path(), "/login");
        assert_eq!(Destination::Profile.path(), "/profile");
        assert_eq!(Destination::ChangePassword.path(), "/change-password");
        assert_eq!(Destination::Activity.path(), "/activity");
    }

    #[test]
    fn test_default_phase_is_idle() {
        assert_eq!(SubmitPhase::default(), SubmitPhase::Idle);
    }
}
