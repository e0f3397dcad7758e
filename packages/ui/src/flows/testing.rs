//! Fakes for driving flows in tests.

use std::cell::{Cell, RefCell};

use api::{
    ActivityEntry, ApiError, ApiResponse, ChangePasswordRequest, LoginRequest, RegisterRequest,
    SessionClient, UpdateProfileRequest, User,
};

use super::{Destination, PageEffects, SubmitPhase};
use crate::toast::Severity;

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Register(RegisterRequest),
    Login(LoginRequest),
    Details,
    Update(UpdateProfileRequest),
    ChangePassword(ChangePasswordRequest),
    Logout,
    Activity,
}

/// Records every call and answers from canned results. A successful profile
/// update is reflected in later details responses.
pub struct FakeClient {
    calls: RefCell<Vec<Call>>,
    pub response: Result<ApiResponse, ApiError>,
    details: RefCell<Result<User, ApiError>>,
    pub activity: Result<Vec<ActivityEntry>, ApiError>,
}

impl FakeClient {
    /// Every call succeeds with an empty body.
    pub fn ok() -> Self {
        Self {
            calls: RefCell::new(Vec::new()),
            response: Ok(ApiResponse::default()),
            details: RefCell::new(Ok(User::default())),
            activity: Ok(Vec::new()),
        }
    }

    /// Every call fails with `err`.
    pub fn failing(err: ApiError) -> Self {
        Self {
            calls: RefCell::new(Vec::new()),
            response: Err(err.clone()),
            details: RefCell::new(Err(err.clone())),
            activity: Err(err),
        }
    }

    pub fn with_message(mut self, message: &str) -> Self {
        self.response = Ok(ApiResponse {
            message: Some(message.to_string()),
            ..ApiResponse::default()
        });
        self
    }

    pub fn with_user(self, user: User) -> Self {
        *self.details.borrow_mut() = Ok(user);
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    fn record(&self, call: Call) {
        self.calls.borrow_mut().push(call);
    }
}

impl SessionClient for FakeClient {
    async fn register(&self, request: &RegisterRequest) -> Result<ApiResponse, ApiError> {
        self.record(Call::Register(request.clone()));
        self.response.clone()
    }

    async fn login(&self, request: &LoginRequest) -> Result<ApiResponse, ApiError> {
        self.record(Call::Login(request.clone()));
        self.response.clone()
    }

    async fn fetch_details(&self) -> Result<User, ApiError> {
        self.record(Call::Details);
        self.details.borrow().clone()
    }

    async fn update_profile(&self, request: &UpdateProfileRequest) -> Result<ApiResponse, ApiError> {
        self.record(Call::Update(request.clone()));
        if self.response.is_ok() {
            *self.details.borrow_mut() = Ok(User {
                name: request.name.clone(),
                email: request.email.clone(),
                preferences: request.preferences.clone(),
            });
        }
        self.response.clone()
    }

    async fn change_password(
        &self,
        request: &ChangePasswordRequest,
    ) -> Result<ApiResponse, ApiError> {
        self.record(Call::ChangePassword(request.clone()));
        self.response.clone()
    }

    async fn logout(&self) -> Result<ApiResponse, ApiError> {
        self.record(Call::Logout);
        self.response.clone()
    }

    async fn fetch_activity(&self) -> Result<Vec<ActivityEntry>, ApiError> {
        self.record(Call::Activity);
        self.activity.clone()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    Notify(Severity, String),
    Navigate(Destination),
    Phase(SubmitPhase),
    DarkMode(bool),
}

/// Records effects in the order a page would see them.
#[derive(Default)]
pub struct RecordingEffects {
    log: RefCell<Vec<Effect>>,
    phase: Cell<SubmitPhase>,
}

impl RecordingEffects {
    pub fn new() -> Self {
        Self::default()
    }

    /// Effects for a page that already has a submit in flight.
    pub fn submitting() -> Self {
        let fx = Self::default();
        fx.phase.set(SubmitPhase::Submitting);
        fx
    }

    pub fn effects(&self) -> Vec<Effect> {
        self.log.borrow().clone()
    }

    pub fn navigations(&self) -> Vec<Destination> {
        self.log
            .borrow()
            .iter()
            .filter_map(|e| match e {
                Effect::Navigate(to) => Some(*to),
                _ => None,
            })
            .collect()
    }

    pub fn notifications(&self) -> Vec<(Severity, String)> {
        self.log
            .borrow()
            .iter()
            .filter_map(|e| match e {
                Effect::Notify(severity, message) => Some((*severity, message.clone())),
                _ => None,
            })
            .collect()
    }

    pub fn phases(&self) -> Vec<SubmitPhase> {
        self.log
            .borrow()
            .iter()
            .filter_map(|e| match e {
                Effect::Phase(phase) => Some(*phase),
                _ => None,
            })
            .collect()
    }
}

impl PageEffects for RecordingEffects {
    fn notify(&self, severity: Severity, message: &str) {
        self.log
            .borrow_mut()
            .push(Effect::Notify(severity, message.to_string()));
    }

    fn navigate(&self, to: Destination) {
        self.log.borrow_mut().push(Effect::Navigate(to));
    }

    fn phase(&self) -> SubmitPhase {
        self.phase.get()
    }

    fn set_phase(&self, phase: SubmitPhase) {
        self.phase.set(phase);
        self.log.borrow_mut().push(Effect::Phase(phase));
    }

    fn sync_dark_mode(&self, enabled: bool) {
        self.log.borrow_mut().push(Effect::DarkMode(enabled));
    }
}

/// Shorthand for a non-2xx error.
pub fn status(code: u16, message: Option<&str>) -> ApiError {
    ApiError::Status {
        status: code,
        message: message.map(str::to_string),
    }
}
