//! Single source of truth for the current session.
//!
//! SYSTEM CONTEXT
//! ==============
//! One `SessionManager` is constructed per app instance and shared by handle.
//! Views never write the token store directly; `login`, `logout` and
//! `refresh_access_token` are the only mutation paths, and every mutation
//! notifies subscribers once the internal lock is released.
//!
//! TRADE-OFFS
//! ==========
//! Every committed change bumps a generation counter. A refresh captures the
//! generation before suspending on the network and only applies its result
//! if nothing else committed meanwhile, so a late success cannot revive a
//! session that was logged out, and a late failure cannot log out a newer one.
//!
//! The browser drives the manager from a single thread. State sits behind a
//! `Mutex` only so SSR hosts can move and drop a handle across worker
//! threads; the lock is never held across an `.await` or a listener call.

#[cfg(test)]
#[path = "manager_test.rs"]
mod manager_test;

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::model::Session;
use crate::refresh::{RefreshError, TokenRefresher};
use crate::role::Role;
use crate::store::{KeyValueStorage, TokenStore};

/// Observable authentication state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AuthStatus {
    Unauthenticated,
    Authenticated { role: Role, subject_id: String },
}

impl AuthStatus {
    #[must_use]
    pub fn of(session: Option<&Session>) -> Self {
        match session {
            Some(s) => Self::Authenticated { role: s.role(), subject_id: s.subject_id().to_owned() },
            None => Self::Unauthenticated,
        }
    }
}

/// Handle returned by [`SessionManager::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Arc<dyn Fn(Option<&Session>) + Send + Sync>;

struct Inner<S> {
    store: TokenStore<S>,
    current: Option<Session>,
    generation: u64,
    next_subscription: u64,
    listeners: Vec<(SubscriptionId, Listener)>,
}

/// Shared session state holder. Clones refer to the same session.
pub struct SessionManager<S> {
    inner: Arc<Mutex<Inner<S>>>,
}

// Manual Clone: avoid derive adding an `S: Clone` bound.
impl<S> Clone for SessionManager<S> {
    fn clone(&self) -> Self {
        Self { inner: Arc::clone(&self.inner) }
    }
}

impl<S: KeyValueStorage> SessionManager<S> {
    /// Create a manager, restoring any persisted session synchronously.
    #[must_use]
    pub fn new(store: TokenStore<S>) -> Self {
        let current = store.load();
        if let Some(session) = &current {
            log::info!("restored {} session for {}", session.role(), session.subject_id());
        }
        Self {
            inner: Arc::new(Mutex::new(Inner {
                store,
                current,
                generation: 0,
                next_subscription: 0,
                listeners: Vec::new(),
            })),
        }
    }

    // Poisoning is ignored: every mutation completes before listeners run.
    fn lock(&self) -> MutexGuard<'_, Inner<S>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    #[must_use]
    pub fn session(&self) -> Option<Session> {
        self.lock().current.clone()
    }

    #[must_use]
    pub fn status(&self) -> AuthStatus {
        AuthStatus::of(self.lock().current.as_ref())
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.lock().current.is_some()
    }

    /// Number of committed session changes since construction.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.lock().generation
    }

    /// Start a session from a validated credential exchange.
    ///
    /// Replaces any existing session (including one with a different role).
    pub fn login(&self, session: Session) {
        log::info!("login as {} {}", session.role(), session.subject_id());
        self.commit(Some(session));
    }

    /// End the session. Navigation away from protected views is left to the caller.
    pub fn logout(&self) {
        if self.is_authenticated() {
            log::info!("logout");
        }
        self.commit(None);
    }

    /// Exchange the current refresh token for a new access token.
    ///
    /// On success the refreshed session (same role and subject) is committed
    /// and returned. Rejection, network failure or a malformed response forces
    /// a logout and the error is returned. If the session changed while the
    /// request was in flight the result is dropped with
    /// [`RefreshError::Superseded`] and the newer state is left untouched.
    ///
    /// # Errors
    ///
    /// See [`RefreshError`].
    pub async fn refresh_access_token<R>(&self, refresher: &R) -> Result<Session, RefreshError>
    where
        R: TokenRefresher,
    {
        let (session, issued_at) = {
            let inner = self.lock();
            let session = inner.current.clone().ok_or(RefreshError::NoSession)?;
            (session, inner.generation)
        };

        let outcome = refresher.refresh(session.refresh_token()).await;

        let refreshed = outcome.and_then(|response| {
            session
                .with_refreshed(response.access_token, response.refresh_token)
                .map_err(|e| RefreshError::Malformed(e.to_string()))
        });

        let next = match &refreshed {
            Ok(session) => Some(session.clone()),
            Err(_) => None,
        };
        if !self.commit_if(issued_at, next) {
            log::debug!("discarding refresh result issued at generation {issued_at}");
            return Err(RefreshError::Superseded);
        }
        match refreshed {
            Ok(next) => {
                log::info!("access token refreshed for {}", next.subject_id());
                Ok(next)
            }
            Err(e) => {
                log::warn!("token refresh failed, forced logout: {e}");
                Err(e)
            }
        }
    }

    /// Register a callback run after every committed change.
    pub fn subscribe(&self, listener: impl Fn(Option<&Session>) + Send + Sync + 'static) -> SubscriptionId {
        let mut inner = self.lock();
        let id = SubscriptionId(inner.next_subscription);
        inner.next_subscription += 1;
        inner.listeners.push((id, Arc::new(listener)));
        id
    }

    /// Returns `false` if `id` was not subscribed.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut inner = self.lock();
        let before = inner.listeners.len();
        inner.listeners.retain(|(existing, _)| *existing != id);
        inner.listeners.len() != before
    }

    fn commit(&self, next: Option<Session>) {
        self.apply(None, next);
    }

    /// Commit only if no other change landed since `expected`. The check and
    /// the write happen under one lock acquisition.
    pub(crate) fn commit_if(&self, expected: u64, next: Option<Session>) -> bool {
        self.apply(Some(expected), next)
    }

    fn apply(&self, expected: Option<u64>, next: Option<Session>) -> bool {
        let (snapshot, listeners) = {
            let mut inner = self.lock();
            if expected.is_some_and(|generation| generation != inner.generation) {
                return false;
            }
            let written = match &next {
                Some(session) => inner.store.save(session),
                None => inner.store.clear(),
            };
            if let Err(e) = written {
                log::warn!("session storage not updated: {e}");
            }
            inner.current = next;
            inner.generation += 1;
            let listeners: Vec<Listener> = inner.listeners.iter().map(|(_, l)| Arc::clone(l)).collect();
            (inner.current.clone(), listeners)
        };
        for listener in listeners {
            listener(snapshot.as_ref());
        }
        true
    }
}
