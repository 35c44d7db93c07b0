//! Auth context shared by the whole render tree.
//!
//! SYSTEM CONTEXT
//! ==============
//! Wraps the core [`SessionManager`] in Leptos signals. The manager stays the
//! only writer of the token store; a subscription mirrors every committed
//! change into `session` so guards and views re-render on the next pass.
//!
//! TRADE-OFFS
//! ==========
//! Server renders cannot see `localStorage`, so `ready` starts `false` on both
//! sides and flips in the first client effect. Guarded views show a neutral
//! placeholder until then instead of flashing the logged-out redirect.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use session::{AuthStatus, RefreshError, Session, SessionManager, TokenRefresher, TokenStore};

use crate::config::ClientConfig;
use crate::net::api::HttpRefresher;
use crate::util::storage::BrowserStorage;

pub type BrowserSessionManager = SessionManager<BrowserStorage>;

/// Copyable handle to the app's session state, provided via context.
#[derive(Clone, Copy)]
pub struct AuthContext {
    session: RwSignal<Option<Session>>,
    ready: RwSignal<bool>,
    manager: StoredValue<BrowserSessionManager>,
    refresher: StoredValue<HttpRefresher>,
}

impl AuthContext {
    #[must_use]
    pub fn new(manager: BrowserSessionManager, config: &ClientConfig) -> Self {
        let session = RwSignal::new(None);
        let ready = RwSignal::new(false);
        manager.subscribe(move |current| session.set(current.cloned()));
        Self {
            session,
            ready,
            manager: StoredValue::new(manager),
            refresher: StoredValue::new(HttpRefresher::new(config)),
        }
    }

    /// Context backed by browser storage under the default key.
    #[must_use]
    pub fn from_browser(config: &ClientConfig) -> Self {
        Self::new(SessionManager::new(TokenStore::new(BrowserStorage::default())), config)
    }

    /// Publish the persisted session to views. Runs once, client-side.
    pub fn hydrate(&self) {
        self.session.set(self.manager().session());
        self.ready.set(true);
    }

    fn manager(&self) -> BrowserSessionManager {
        self.manager.get_value()
    }

    /// Current session, tracked.
    pub fn session(&self) -> Option<Session> {
        self.session.get()
    }

    /// Current session without subscribing the caller.
    pub fn session_untracked(&self) -> Option<Session> {
        self.manager().session()
    }

    pub fn session_signal(&self) -> ReadSignal<Option<Session>> {
        self.session.read_only()
    }

    pub fn ready_signal(&self) -> ReadSignal<bool> {
        self.ready.read_only()
    }

    pub fn status(&self) -> AuthStatus {
        self.session.with(|s| AuthStatus::of(s.as_ref()))
    }

    pub fn login(&self, session: Session) {
        self.manager().login(session);
        self.ready.set(true);
    }

    /// Views navigate away themselves; guards redirect on their next render.
    pub fn logout(&self) {
        self.manager().logout();
    }

    /// Refresh against the configured backend endpoint.
    ///
    /// # Errors
    ///
    /// See [`SessionManager::refresh_access_token`]; forced logout has already
    /// happened when the error is returned.
    pub async fn refresh_access_token(&self) -> Result<Session, RefreshError> {
        let refresher = self.refresher.get_value();
        self.refresh_with(&refresher).await
    }

    /// # Errors
    ///
    /// See [`SessionManager::refresh_access_token`].
    pub async fn refresh_with<R: TokenRefresher>(&self, refresher: &R) -> Result<Session, RefreshError> {
        let manager = self.manager();
        manager.refresh_access_token(refresher).await
    }
}

/// Create the auth context and provide it to descendants.
pub fn provide_auth_context(config: &ClientConfig) -> AuthContext {
    let auth = AuthContext::from_browser(config);
    provide_context(auth);
    auth
}

/// # Panics
///
/// Panics if called outside the tree below [`provide_auth_context`].
pub fn use_auth() -> AuthContext {
    expect_context::<AuthContext>()
}
