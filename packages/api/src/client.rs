//! # Session API client
//!
//! [`SessionClient`] is the seam between the pages and the backend: one method
//! per [`Endpoint`], each a single request/response exchange with no retry.
//! Page flows are written against the trait so they can be exercised with a
//! fake; the app uses [`HttpSessionClient`].
//!
//! ## HttpSessionClient
//!
//! Built once from [`ClientConfig`] and cloned freely (the inner
//! `reqwest::Client` is reference-counted).
//!
//! - **Credentials**: in the browser, credentialed endpoints are sent with
//!   `credentials: "include"` so the session cookie travels cross-origin. On
//!   native targets a cookie jar stores the cookie set by login.
//! - **Timeout**: the configured timeout applies to every request. Native
//!   builds use reqwest's own timeout; WASM races the fetch against a timer.
//! - **Responses**: a 2xx body is parsed leniently into [`ApiResponse`]; any
//!   other status becomes [`ApiError::Status`] carrying the server's
//!   `message`, if it sent one.

use std::future::Future;
use std::time::Duration;

use serde::Serialize;

use crate::config::ClientConfig;
use crate::endpoint::Endpoint;
use crate::error::ApiError;
use crate::models::{
    sort_newest_first, ActivityEntry, ApiResponse, ChangePasswordRequest, LoginRequest,
    RegisterRequest, UpdateProfileRequest, User,
};

/// Calls the account backend on behalf of the current browser session.
pub trait SessionClient {
    fn register(
        &self,
        request: &RegisterRequest,
    ) -> impl Future<Output = Result<ApiResponse, ApiError>>;
    fn login(&self, request: &LoginRequest)
        -> impl Future<Output = Result<ApiResponse, ApiError>>;
    fn fetch_details(&self) -> impl Future<Output = Result<User, ApiError>>;
    fn update_profile(
        &self,
        request: &UpdateProfileRequest,
    ) -> impl Future<Output = Result<ApiResponse, ApiError>>;
    fn change_password(
        &self,
        request: &ChangePasswordRequest,
    ) -> impl Future<Output = Result<ApiResponse, ApiError>>;
    fn logout(&self) -> impl Future<Output = Result<ApiResponse, ApiError>>;
    /// Activity entries, most recent first.
    fn fetch_activity(&self) -> impl Future<Output = Result<Vec<ActivityEntry>, ApiError>>;
}

/// reqwest-backed [`SessionClient`].
#[derive(Clone, Debug)]
pub struct HttpSessionClient {
    http: reqwest::Client,
    base_url: String,
    timeout: Option<Duration>,
}

impl HttpSessionClient {
    pub fn new(config: &ClientConfig) -> Result<Self, ApiError> {
        let base_url = config.base_url().to_string();
        if base_url.is_empty() {
            return Err(ApiError::Config("api.base_url is empty".to_string()));
        }

        let builder = reqwest::Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.cookie_store(true);
        let http = builder
            .build()
            .map_err(|e| ApiError::Config(e.to_string()))?;

        Ok(Self {
            http,
            base_url,
            timeout: config.request_timeout(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, endpoint: Endpoint) -> String {
        format!("{}{}", self.base_url, endpoint.path())
    }

    async fn send<B: Serialize + ?Sized>(
        &self,
        endpoint: Endpoint,
        body: Option<&B>,
    ) -> Result<ApiResponse, ApiError> {
        let url = self.url(endpoint);
        tracing::debug!("{} {}", endpoint.method(), url);

        let mut request = self.http.request(endpoint.method(), &url);
        if let Some(body) = body {
            request = request.json(body);
        }
        #[cfg(target_arch = "wasm32")]
        if endpoint.includes_credentials() {
            request = request.fetch_credentials_include();
        }

        let (status, text) = match self.dispatch(request).await {
            Ok(exchange) => exchange,
            Err(e) => {
                tracing::warn!("{} {} failed: {}", endpoint.method(), url, e);
                return Err(e);
            }
        };
        let parsed = ApiResponse::parse_lenient(&text);

        if status.is_success() {
            Ok(parsed)
        } else {
            tracing::warn!("{} {} returned {}", endpoint.method(), url, status);
            Err(ApiError::Status {
                status: status.as_u16(),
                message: parsed.message,
            })
        }
    }

    /// Send the request and read the whole body under the timeout.
    #[cfg(not(target_arch = "wasm32"))]
    async fn dispatch(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<(reqwest::StatusCode, String), ApiError> {
        let request = match self.timeout {
            Some(timeout) => request.timeout(timeout),
            None => request,
        };
        exchange(request).await
    }

    /// Send the request and read the whole body under the timeout.
    #[cfg(target_arch = "wasm32")]
    async fn dispatch(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<(reqwest::StatusCode, String), ApiError> {
        use futures::future::{select, Either};

        let exchange = exchange(request);
        let Some(timeout) = self.timeout else {
            return exchange.await;
        };
        let deadline = gloo_timers::future::sleep(timeout);
        futures::pin_mut!(exchange, deadline);
        match select(exchange, deadline).await {
            Either::Left((result, _)) => result,
            Either::Right(_) => Err(ApiError::Timeout),
        }
    }
}

async fn exchange(
    request: reqwest::RequestBuilder,
) -> Result<(reqwest::StatusCode, String), ApiError> {
    let response = request.send().await?;
    let status = response.status();
    let body = response.text().await?;
    Ok((status, body))
}

impl SessionClient for HttpSessionClient {
    async fn register(&self, request: &RegisterRequest) -> Result<ApiResponse, ApiError> {
        self.send(Endpoint::Register, Some(request)).await
    }

    async fn login(&self, request: &LoginRequest) -> Result<ApiResponse, ApiError> {
        self.send(Endpoint::Login, Some(request)).await
    }

    async fn fetch_details(&self) -> Result<User, ApiError> {
        self.send::<()>(Endpoint::Details, None)
            .await?
            .user
            .ok_or(ApiError::MissingField("user"))
    }

    async fn update_profile(&self, request: &UpdateProfileRequest) -> Result<ApiResponse, ApiError> {
        self.send(Endpoint::Update, Some(request)).await
    }

    async fn change_password(
        &self,
        request: &ChangePasswordRequest,
    ) -> Result<ApiResponse, ApiError> {
        self.send(Endpoint::ChangePassword, Some(request)).await
    }

    async fn logout(&self) -> Result<ApiResponse, ApiError> {
        self.send::<()>(Endpoint::Logout, None).await
    }

    async fn fetch_activity(&self) -> Result<Vec<ActivityEntry>, ApiError> {
        let mut entries = self
            .send::<()>(Endpoint::Activity, None)
            .await?
            .activity_log
            .ok_or(ApiError::MissingField("activityLog"))?;
        sort_newest_first(&mut entries);
        Ok(entries)
    }
}
