//! Client-side session core for the marketplace front-end.
//!
//! This crate owns the credential bundle that identifies the signed-in
//! principal, its persistence, the single session manager every view reads
//! from, and the route-guard decision used before protected views render.
//! It has no UI or HTTP dependencies; the `client` crate supplies the
//! browser storage backend and the network refresher.
//!
//! SYSTEM CONTEXT
//! ==============
//! Login view -> [`SessionManager::login`] -> [`TokenStore::save`].
//! Protected routes read [`SessionManager::session`] and run it through
//! [`RouteGuard::evaluate`]. Authorized API calls read the bearer token and
//! call [`SessionManager::refresh_access_token`] when it has expired.

pub mod guard;
pub mod manager;
pub mod model;
pub mod refresh;
pub mod role;
pub mod store;

pub use guard::{AllowedRoles, GuardDecision, GuardPaths, LOGIN_PATH, RouteGuard};
pub use manager::{AuthStatus, SessionManager, SubscriptionId};
pub use model::{Session, SessionError};
pub use refresh::{RefreshError, RefreshRequest, RefreshResponse, TokenRefresher};
pub use role::Role;
pub use store::{KeyValueStorage, MemoryStorage, STORAGE_KEY, StoreError, TokenStore};
