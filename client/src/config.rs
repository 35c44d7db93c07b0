//! Client configuration and REST endpoint layout.
//!
//! The API base URL is fixed at build time from `MARKETPLACE_API_URL` (the
//! WASM bundle has no process environment) and defaults to `/api` so a
//! reverse proxy on the same origin works without configuration.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use session::Role;

pub const DEFAULT_API_BASE_URL: &str = "/api";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    api_base_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE_URL)
    }
}

impl ClientConfig {
    #[must_use]
    pub fn new(api_base_url: impl Into<String>) -> Self {
        let raw: String = api_base_url.into();
        let trimmed = raw.trim().trim_end_matches('/');
        let api_base_url =
            if trimmed.is_empty() { DEFAULT_API_BASE_URL.to_owned() } else { trimmed.to_owned() };
        Self { api_base_url }
    }

    /// Configuration baked in at compile time.
    #[must_use]
    pub fn from_build_env() -> Self {
        option_env!("MARKETPLACE_API_URL").map_or_else(Self::default, Self::new)
    }

    #[must_use]
    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    /// `POST` target for `{refreshToken}` exchanges.
    #[must_use]
    pub fn refresh_url(&self) -> String {
        format!("{}/auth/refresh", self.api_base_url)
    }

    /// Role-specific credential exchange.
    #[must_use]
    pub fn login_url(&self, role: Role) -> String {
        format!("{}/{}/login", self.api_base_url, role.as_str())
    }

    /// Profile of the signed-in principal.
    #[must_use]
    pub fn profile_url(&self, role: Role, subject_id: &str) -> String {
        format!("{}/{}/{subject_id}", self.api_base_url, role.as_str())
    }
}
