//! REST DTOs for the marketplace backend.
//!
//! DESIGN
//! ======
//! Wire names are camelCase to match the backend. Responses that populate a
//! [`Session`] go through [`LoginResponse::into_session`] so a partial body
//! can never become a partial session.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};
use session::{Role, Session, SessionError};

/// Credentials posted to `/{role}/login`.
///
/// `identifier` is the role-specific unique id, email or mobile number.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub identifier: String,
    pub password: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub subject_id: String,
    /// Authoritative role when the backend reports one.
    #[serde(default)]
    pub role: Option<Role>,
}

impl LoginResponse {
    /// Build the session, falling back to the role the user signed in as.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::EmptyField`] if any credential is blank.
    pub fn into_session(self, requested: Role) -> Result<Session, SessionError> {
        Session::new(
            self.access_token,
            self.refresh_token,
            self.role.unwrap_or(requested),
            self.subject_id,
        )
    }
}

/// Profile of the signed-in principal, as much of it as the dashboards show.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub mobile: Option<String>,
}

impl Profile {
    /// Name to greet the user with: profile name, else email, else `fallback`.
    #[must_use]
    pub fn display_name<'a>(&'a self, fallback: &'a str) -> &'a str {
        let present = |value: &'a Option<String>| value.as_deref().filter(|s| !s.trim().is_empty());
        present(&self.name).or_else(|| present(&self.email)).unwrap_or(fallback)
    }
}
