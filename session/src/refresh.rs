//! Token-refresh contract with the backend.
//!
//! The manager only knows the [`TokenRefresher`] trait; the `client` crate
//! implements it over HTTP and tests implement it with channels.

#[cfg(test)]
#[path = "refresh_test.rs"]
mod refresh_test;

use std::future::Future;

use serde::{Deserialize, Serialize};

/// Body posted to the refresh endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshRequest<'a> {
    pub refresh_token: &'a str,
}

impl<'a> RefreshRequest<'a> {
    #[must_use]
    pub fn new(refresh_token: &'a str) -> Self {
        Self { refresh_token }
    }
}

/// Successful refresh body. `refresh_token` is set when the backend rotates it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshResponse {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
}

impl RefreshResponse {
    #[must_use]
    pub fn new(access_token: impl Into<String>) -> Self {
        Self { access_token: access_token.into(), refresh_token: None }
    }

    #[must_use]
    pub fn with_refresh_token(mut self, token: impl Into<String>) -> Self {
        self.refresh_token = Some(token.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RefreshError {
    #[error("no active session to refresh")]
    NoSession,
    #[error("refresh rejected by backend (status {status})")]
    Rejected { status: u16 },
    #[error("refresh request failed: {0}")]
    Network(String),
    #[error("malformed refresh response: {0}")]
    Malformed(String),
    /// The session was replaced or cleared while the request was in flight.
    #[error("session changed while refresh was in flight")]
    Superseded,
}

impl RefreshError {
    /// Backend unreachable, as opposed to an explicit credential rejection.
    #[must_use]
    pub fn is_network(&self) -> bool {
        matches!(self, Self::Network(_))
    }

    /// Whether the manager treats this outcome as an unrecoverable auth failure.
    #[must_use]
    pub fn forces_logout(&self) -> bool {
        matches!(self, Self::Rejected { .. } | Self::Network(_) | Self::Malformed(_))
    }
}

/// Exchanges a refresh token for a new access token.
pub trait TokenRefresher {
    fn refresh(&self, refresh_token: &str) -> impl Future<Output = Result<RefreshResponse, RefreshError>>;
}
