//! The session credential bundle.
//!
//! DESIGN
//! ======
//! A `Session` is either fully present or absent: fields are private and the
//! only constructors reject empty values, including the deserializer used for
//! persisted records. Callers model "logged out" as `Option<Session>::None`.

#[cfg(test)]
#[path = "model_test.rs"]
mod model_test;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::role::Role;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("session field `{0}` must not be empty")]
    EmptyField(&'static str),
    #[error("unknown role: {0}")]
    UnknownRole(String),
    #[error("a guarded route needs at least one allowed role")]
    NoAllowedRoles,
}

/// Authenticated principal's credentials and role.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "SessionRecord")]
pub struct Session {
    access_token: String,
    refresh_token: String,
    role: Role,
    subject_id: String,
}

/// Unchecked wire shape; converted through [`Session::new`].
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SessionRecord {
    access_token: String,
    refresh_token: String,
    role: Role,
    subject_id: String,
}

impl TryFrom<SessionRecord> for Session {
    type Error = SessionError;

    fn try_from(record: SessionRecord) -> Result<Self, Self::Error> {
        Self::new(record.access_token, record.refresh_token, record.role, record.subject_id)
    }
}

fn require(field: &'static str, value: String) -> Result<String, SessionError> {
    if value.trim().is_empty() {
        Err(SessionError::EmptyField(field))
    } else {
        Ok(value)
    }
}

impl Session {
    /// Build a session from a completed credential exchange.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::EmptyField`] if any token or the subject id is blank.
    pub fn new(
        access_token: impl Into<String>,
        refresh_token: impl Into<String>,
        role: Role,
        subject_id: impl Into<String>,
    ) -> Result<Self, SessionError> {
        Ok(Self {
            access_token: require("accessToken", access_token.into())?,
            refresh_token: require("refreshToken", refresh_token.into())?,
            role,
            subject_id: require("subjectId", subject_id.into())?,
        })
    }

    /// Copy of this session carrying a newly minted access token.
    ///
    /// A rotated refresh token replaces the current one when present and
    /// non-blank. Role and subject id are carried over unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::EmptyField`] if `access_token` is blank.
    pub fn with_refreshed(
        &self,
        access_token: impl Into<String>,
        refresh_token: Option<String>,
    ) -> Result<Self, SessionError> {
        let refresh_token = refresh_token
            .filter(|t| !t.trim().is_empty())
            .unwrap_or_else(|| self.refresh_token.clone());
        Ok(Self {
            access_token: require("accessToken", access_token.into())?,
            refresh_token,
            role: self.role,
            subject_id: self.subject_id.clone(),
        })
    }

    #[must_use]
    pub fn access_token(&self) -> &str {
        &self.access_token
    }

    #[must_use]
    pub fn refresh_token(&self) -> &str {
        &self.refresh_token
    }

    #[must_use]
    pub fn role(&self) -> Role {
        self.role
    }

    #[must_use]
    pub fn subject_id(&self) -> &str {
        &self.subject_id
    }

    /// `Authorization` header value for API calls.
    #[must_use]
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.access_token)
    }
}

// Tokens never reach logs.
impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("access_token", &"<redacted>")
            .field("refresh_token", &"<redacted>")
            .field("role", &self.role)
            .field("subject_id", &self.subject_id)
            .finish()
    }
}
