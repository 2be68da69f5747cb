//! REST client for the external rating API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): every call returns `ApiError::Unavailable`; the SSR pass
//! renders loading states only and the browser fetches after hydration.
//!
//! ERROR HANDLING
//! ==============
//! Calls return `Result<_, ApiError>`. Rejections keep the server's `message`
//! verbatim so forms can show it unchanged; transport failures get a generic
//! message. Nothing here panics or retries.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{
    AdminStats, AdminStore, LoginRequest, LoginResponse, NewUserRequest, OwnerStore, RateRequest, SignupRequest,
    StoreFilters, StoresResponse, UpdatePasswordRequest, UserFilters, UserStore, UsersResponse,
};
#[cfg(any(test, feature = "hydrate"))]
use super::types::ApiMessage;
use crate::util::session_store::SessionStore;

/// Default API origin when none is configured at build time.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000";

/// API origin, from `STORERATE_API_BASE_URL` at compile time.
pub fn api_base_url() -> String {
    normalize_base_url(option_env!("STORERATE_API_BASE_URL").unwrap_or(DEFAULT_API_BASE_URL))
}

fn normalize_base_url(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() { DEFAULT_API_BASE_URL.to_owned() } else { trimmed.to_owned() }
}

/// Failure of an API call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// Non-2xx response. `message` is the server's text, if it sent one.
    #[error("request rejected ({status})")]
    Rejected { status: u16, message: Option<String> },

    /// The request never produced a response.
    #[error("network error: {0}")]
    Transport(String),

    /// A 2xx response whose body did not match the expected shape.
    #[error("unexpected response: {0}")]
    Decode(String),

    /// Called outside the browser.
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// Text shown to the user: the server's message when present, otherwise
    /// `fallback`. Transport failures always read as a generic network error.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::Rejected { message: Some(message), .. } if !message.trim().is_empty() => message.clone(),
            Self::Transport(_) => "Network error. Please try again.".to_owned(),
            _ => fallback.to_owned(),
        }
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn rejection_from_body(status: u16, body: &str) -> ApiError {
    let message = serde_json::from_str::<ApiMessage>(body).ok().and_then(|m| m.message);
    ApiError::Rejected { status, message }
}

#[cfg(any(test, feature = "hydrate"))]
fn bearer_header(token: &str) -> String {
    format!("Bearer {token}")
}

#[cfg(any(test, feature = "hydrate"))]
fn rate_store_path(store_id: i64) -> String {
    format!("/stores/{store_id}/rate")
}

/// HTTP client bound to an API origin and the session store it reads the
/// bearer token from.
#[derive(Clone, Debug)]
pub struct ApiClient {
    base_url: String,
    #[cfg_attr(not(any(test, feature = "hydrate")), allow(dead_code))]
    session: SessionStore,
}

impl ApiClient {
    pub fn new(base_url: impl AsRef<str>, session: SessionStore) -> Self {
        Self { base_url: normalize_base_url(base_url.as_ref()), session }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for an API path.
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// `Authorization` header value for the current session, read at call time.
    #[cfg(any(test, feature = "hydrate"))]
    fn authorization(&self) -> Option<String> {
        self.session.get().bearer_token().map(bearer_header)
    }

    // -------------------------------------------------------------------------
    // Auth
    // -------------------------------------------------------------------------

    /// `POST /auth/login`.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` on transport failure, rejection, or a malformed body.
    pub async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
        self.post_json("/auth/login", request, false).await?.json().await
    }

    /// `POST /auth/signup`.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` on transport failure or rejection.
    pub async fn signup(&self, request: &SignupRequest) -> Result<(), ApiError> {
        self.post_json("/auth/signup", request, false).await.map(drop)
    }

    /// `PATCH /user/password`.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` on transport failure or rejection.
    pub async fn update_password(&self, request: &UpdatePasswordRequest) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let builder = gloo_net::http::Request::patch(&self.url("/user/password"));
            let resp = self.send_json(builder, request).await?;
            check_status(resp).await.map(drop)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
            Err(ApiError::Unavailable)
        }
    }

    // -------------------------------------------------------------------------
    // Admin
    // -------------------------------------------------------------------------

    /// `GET /admin/dashboard`.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` on transport failure, rejection, or a malformed body.
    pub async fn admin_stats(&self) -> Result<AdminStats, ApiError> {
        self.get_json("/admin/dashboard", Vec::new()).await
    }

    /// `GET /admin/users` with blank filters omitted.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` on transport failure, rejection, or a malformed body.
    pub async fn admin_users(&self, filters: &UserFilters) -> Result<UsersResponse, ApiError> {
        self.get_json("/admin/users", filters.query_params()).await
    }

    /// `GET /admin/stores`.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` on transport failure, rejection, or a malformed body.
    pub async fn admin_stores(&self) -> Result<StoresResponse<AdminStore>, ApiError> {
        self.get_json("/admin/stores", Vec::new()).await
    }

    /// `POST /admin/users`.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` on transport failure or rejection.
    pub async fn create_user(&self, request: &NewUserRequest) -> Result<(), ApiError> {
        self.post_json("/admin/users", request, true).await.map(drop)
    }

    // -------------------------------------------------------------------------
    // Owner / user
    // -------------------------------------------------------------------------

    /// `GET /owner/dashboard`.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` on transport failure, rejection, or a malformed body.
    pub async fn owner_dashboard(&self) -> Result<StoresResponse<OwnerStore>, ApiError> {
        self.get_json("/owner/dashboard", Vec::new()).await
    }

    /// `GET /stores` with blank filters omitted.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` on transport failure, rejection, or a malformed body.
    pub async fn stores(&self, filters: &StoreFilters) -> Result<StoresResponse<UserStore>, ApiError> {
        self.get_json("/stores", filters.query_params()).await
    }

    /// `POST /stores/:id/rate`.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` on transport failure or rejection.
    pub async fn rate_store(&self, store_id: i64, request: RateRequest) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            self.post_json(&rate_store_path(store_id), &request, true).await.map(drop)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (store_id, request);
            Err(ApiError::Unavailable)
        }
    }

    // -------------------------------------------------------------------------
    // Transport
    // -------------------------------------------------------------------------

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        params: Vec<(&'static str, String)>,
    ) -> Result<T, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let mut builder = gloo_net::http::Request::get(&self.url(path));
            if !params.is_empty() {
                builder = builder.query(params.iter().map(|(k, v)| (*k, v.as_str())));
            }
            if let Some(auth) = self.authorization() {
                builder = builder.header("Authorization", &auth);
            }
            let resp = builder.send().await.map_err(|e| transport_error(path, &e))?;
            check_status(resp).await?.json().await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (path, params);
            Err(ApiError::Unavailable)
        }
    }

    async fn post_json<B: serde::Serialize>(&self, path: &str, body: &B, authorized: bool) -> Result<Response, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let builder = gloo_net::http::Request::post(&self.url(path));
            let resp = if authorized {
                self.send_json(builder, body).await?
            } else {
                // Auth endpoints never carry the (possibly stale) bearer token.
                send_body(builder, body).await?
            };
            check_status(resp).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (path, body, authorized);
            Err(ApiError::Unavailable)
        }
    }

    #[cfg(feature = "hydrate")]
    async fn send_json<B: serde::Serialize>(
        &self,
        mut builder: gloo_net::http::RequestBuilder,
        body: &B,
    ) -> Result<gloo_net::http::Response, ApiError> {
        if let Some(auth) = self.authorization() {
            builder = builder.header("Authorization", &auth);
        }
        send_body(builder, body).await
    }
}

#[cfg(feature = "hydrate")]
async fn send_body<B: serde::Serialize>(
    builder: gloo_net::http::RequestBuilder,
    body: &B,
) -> Result<gloo_net::http::Response, ApiError> {
    let request = builder.json(body).map_err(|e| ApiError::Decode(e.to_string()))?;
    let url = request.url();
    request.send().await.map_err(|e| transport_error(&url, &e))
}

/// Successful HTTP response awaiting body decoding.
pub struct Response {
    #[cfg(feature = "hydrate")]
    inner: gloo_net::http::Response,
}

impl Response {
    async fn json<T: serde::de::DeserializeOwned>(self) -> Result<T, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            self.inner.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(ApiError::Unavailable)
        }
    }
}

#[cfg(feature = "hydrate")]
async fn check_status(resp: gloo_net::http::Response) -> Result<Response, ApiError> {
    if resp.ok() {
        return Ok(Response { inner: resp });
    }
    let status = resp.status();
    let url = resp.url();
    let body = resp.text().await.unwrap_or_default();
    log::warn!("api {url} rejected: {status}");
    Err(rejection_from_body(status, &body))
}

#[cfg(feature = "hydrate")]
fn transport_error(path: &str, err: &gloo_net::Error) -> ApiError {
    log::warn!("api {path} failed: {err}");
    ApiError::Transport(err.to_string())
}
