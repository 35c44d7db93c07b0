//! REST calls against the marketplace backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning [`ApiError::Unavailable`] or a network
//! refresh failure, since tokens only exist in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Authorized requests that come back `401` trigger exactly one refresh and
//! one retry. A failed refresh has already logged the user out by the time
//! [`ApiError::SessionExpired`] reaches the caller. A refresh that lost to a
//! concurrent session change retries with whatever session is current.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::future::Future;

use serde::de::DeserializeOwned;
use session::{RefreshError, RefreshResponse, Role, Session, TokenRefresher};

use super::types::Profile;
use crate::config::ClientConfig;
use crate::state::auth::AuthContext;

#[cfg(any(test, feature = "hydrate"))]
const UNAUTHORIZED: u16 = 401;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("not signed in")]
    Unauthenticated,
    #[error("session expired: {0}")]
    SessionExpired(RefreshError),
    #[error("request failed: {0}")]
    Status(u16),
    #[error("network error: {0}")]
    Network(String),
    #[error("unexpected response: {0}")]
    Decode(String),
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// User-facing line for a failed request.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Unauthenticated => "Please sign in to continue.".to_owned(),
            Self::SessionExpired(err) if err.is_network() => {
                "Could not reach the server to renew your session. Please sign in again.".to_owned()
            }
            Self::SessionExpired(_) => "Your session has expired. Please sign in again.".to_owned(),
            Self::Status(status) => status_message(*status),
            Self::Network(_) => "Network error. Check your connection and try again.".to_owned(),
            Self::Decode(_) => "The server sent an unexpected response.".to_owned(),
            Self::Unavailable => "Not available yet. Try again in a moment.".to_owned(),
        }
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn should_refresh(status: u16) -> bool {
    status == UNAUTHORIZED
}

fn status_message(status: u16) -> String {
    match status {
        400 | 401 | 403 => "Invalid credentials.".to_owned(),
        404 => "No account found for that identifier.".to_owned(),
        _ => format!("request failed: {status}"),
    }
}

/// Next step for a request that got `401` and went through a refresh.
#[cfg(any(test, feature = "hydrate"))]
#[derive(Debug, PartialEq, Eq)]
enum RetryPlan {
    Retry(Session),
    Fail(ApiError),
}

#[cfg(any(test, feature = "hydrate"))]
fn retry_plan(refreshed: Result<Session, RefreshError>, current: Option<Session>) -> RetryPlan {
    match refreshed {
        Ok(session) => RetryPlan::Retry(session),
        Err(RefreshError::Superseded) => current.map_or(RetryPlan::Fail(ApiError::Unauthenticated), RetryPlan::Retry),
        Err(RefreshError::NoSession) => RetryPlan::Fail(ApiError::Unauthenticated),
        Err(e) => RetryPlan::Fail(ApiError::SessionExpired(e)),
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn refresh_status_error(status: u16) -> RefreshError {
    RefreshError::Rejected { status }
}

/// Refresher that posts to the configured `/auth/refresh` endpoint.
#[derive(Debug, Clone)]
pub struct HttpRefresher {
    url: String,
}

impl HttpRefresher {
    #[must_use]
    pub fn new(config: &ClientConfig) -> Self {
        Self { url: config.refresh_url() }
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }
}

impl TokenRefresher for HttpRefresher {
    fn refresh(&self, refresh_token: &str) -> impl Future<Output = Result<RefreshResponse, RefreshError>> {
        let url = self.url.clone();
        let refresh_token = refresh_token.to_owned();
        async move {
            #[cfg(feature = "hydrate")]
            {
                let body = session::RefreshRequest::new(&refresh_token);
                let resp = gloo_net::http::Request::post(&url)
                    .json(&body)
                    .map_err(|e| RefreshError::Network(e.to_string()))?
                    .send()
                    .await
                    .map_err(|e| RefreshError::Network(e.to_string()))?;
                if !resp.ok() {
                    return Err(refresh_status_error(resp.status()));
                }
                resp.json::<RefreshResponse>()
                    .await
                    .map_err(|e| RefreshError::Malformed(e.to_string()))
            }
            #[cfg(not(feature = "hydrate"))]
            {
                let _ = (url, refresh_token);
                Err(RefreshError::Network("not available on server".to_owned()))
            }
        }
    }
}

/// Sign in as `role` via `POST {api}/{role}/login`.
///
/// # Errors
///
/// Returns [`ApiError::Status`] for rejected credentials, and
/// [`ApiError::Decode`] if the body cannot become a complete session.
pub async fn login(
    config: &ClientConfig,
    role: Role,
    identifier: &str,
    password: &str,
) -> Result<Session, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body = super::types::LoginRequest {
            identifier: identifier.to_owned(),
            password: password.to_owned(),
        };
        let resp = gloo_net::http::Request::post(&config.login_url(role))
            .json(&body)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(ApiError::Status(resp.status()));
        }
        let parsed: super::types::LoginResponse =
            resp.json().await.map_err(|e| ApiError::Decode(e.to_string()))?;
        parsed.into_session(role).map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, role, identifier, password);
        Err(ApiError::Unavailable)
    }
}

#[cfg(feature = "hydrate")]
async fn send_get(url: &str, session: &Session) -> Result<gloo_net::http::Response, ApiError> {
    gloo_net::http::Request::get(url)
        .header("Authorization", &session.bearer())
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))
}

/// `GET url` with the current bearer token, refreshing once on `401`.
///
/// # Errors
///
/// Returns [`ApiError::Unauthenticated`] without a session and
/// [`ApiError::SessionExpired`] when the refresh fails and forced a logout.
pub async fn authorized_get<T: DeserializeOwned>(auth: &AuthContext, url: &str) -> Result<T, ApiError> {
    let Some(current) = auth.session_untracked() else {
        return Err(ApiError::Unauthenticated);
    };
    #[cfg(feature = "hydrate")]
    {
        let mut resp = send_get(url, &current).await?;
        if should_refresh(resp.status()) {
            let refreshed = auth.refresh_access_token().await;
            match retry_plan(refreshed, auth.session_untracked()) {
                RetryPlan::Retry(session) => resp = send_get(url, &session).await?,
                RetryPlan::Fail(e) => return Err(e),
            }
        }
        if !resp.ok() {
            return Err(ApiError::Status(resp.status()));
        }
        resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (current, url);
        Err(ApiError::Unavailable)
    }
}

/// Profile of the signed-in principal from `GET {api}/{role}/{subjectId}`.
///
/// # Errors
///
/// See [`authorized_get`].
pub async fn fetch_profile(auth: &AuthContext, config: &ClientConfig) -> Result<Profile, ApiError> {
    let Some(current) = auth.session_untracked() else {
        return Err(ApiError::Unauthenticated);
    };
    let url = config.profile_url(current.role(), current.subject_id());
    authorized_get(auth, &url).await
}
