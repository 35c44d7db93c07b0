//! Route authorization decision.
//!
//! DESIGN
//! ======
//! The guard is a pure function of (session, allowed roles) to a render
//! decision. It never navigates itself: the client's route component turns
//! `RedirectTo` into a router redirect, so the check is re-run on every
//! guarded render and can be unit tested without a UI.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::model::{Session, SessionError};
use crate::role::Role;

/// Login entry point unauthenticated visitors are sent to.
pub const LOGIN_PATH: &str = "/login";

/// Non-empty set of roles a route admits.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AllowedRoles(Vec<Role>);

impl AllowedRoles {
    /// # Errors
    ///
    /// Returns [`SessionError::NoAllowedRoles`] if `roles` is empty.
    pub fn new(roles: impl IntoIterator<Item = Role>) -> Result<Self, SessionError> {
        let mut roles: Vec<Role> = roles.into_iter().collect();
        roles.sort_unstable();
        roles.dedup();
        if roles.is_empty() {
            return Err(SessionError::NoAllowedRoles);
        }
        Ok(Self(roles))
    }

    #[must_use]
    pub fn only(role: Role) -> Self {
        Self(vec![role])
    }

    #[must_use]
    pub fn contains(&self, role: Role) -> bool {
        self.0.contains(&role)
    }

    pub fn iter(&self) -> impl Iterator<Item = Role> + '_ {
        self.0.iter().copied()
    }
}

impl From<Role> for AllowedRoles {
    fn from(role: Role) -> Self {
        Self::only(role)
    }
}

/// What a guarded route should do for the current session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    Render,
    RedirectTo(String),
}

/// Redirect targets used by [`RouteGuard`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GuardPaths {
    login: String,
}

impl Default for GuardPaths {
    fn default() -> Self {
        Self { login: LOGIN_PATH.to_owned() }
    }
}

impl GuardPaths {
    #[must_use]
    pub fn with_login(mut self, path: impl Into<String>) -> Self {
        self.login = path.into();
        self
    }

    #[must_use]
    pub fn login(&self) -> &str {
        &self.login
    }
}

/// Session presence and role check for one protected route.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteGuard {
    allowed: AllowedRoles,
    paths: GuardPaths,
}

impl RouteGuard {
    #[must_use]
    pub fn new(allowed: impl Into<AllowedRoles>) -> Self {
        Self { allowed: allowed.into(), paths: GuardPaths::default() }
    }

    #[must_use]
    pub fn with_paths(mut self, paths: GuardPaths) -> Self {
        self.paths = paths;
        self
    }

    #[must_use]
    pub fn allowed(&self) -> &AllowedRoles {
        &self.allowed
    }

    /// - no session: redirect to login
    /// - role outside the allowed set: redirect to that role's landing page
    /// - otherwise: render
    #[must_use]
    pub fn evaluate(&self, session: Option<&Session>) -> GuardDecision {
        match session {
            None => GuardDecision::RedirectTo(self.paths.login.clone()),
            Some(s) if self.allowed.contains(s.role()) => GuardDecision::Render,
            Some(s) => GuardDecision::RedirectTo(s.role().landing_path().to_owned()),
        }
    }
}
