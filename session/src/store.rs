//! Durable session persistence.
//!
//! DESIGN
//! ======
//! `KeyValueStorage` is the raw string backend (browser `localStorage` in the
//! client, [`MemoryStorage`] in tests and during SSR). `TokenStore` owns the
//! storage key and the JSON codec on top of it.
//!
//! ERROR HANDLING
//! ==============
//! A missing or unreadable record loads as "no session". Only backend writes
//! can fail, and the manager decides how loudly to report that.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::model::Session;

/// Key the serialized session lives under.
pub const STORAGE_KEY: &str = "marketplace.session";

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("storage backend unavailable")]
    Unavailable,
    #[error("storage write failed: {0}")]
    Write(String),
    #[error("failed to encode session: {0}")]
    Encode(#[from] serde_json::Error),
}

/// String key/value backend scoped to the current browser profile.
pub trait KeyValueStorage {
    fn get(&self, key: &str) -> Option<String>;

    /// # Errors
    ///
    /// Returns [`StoreError`] if the backend refuses the write.
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// # Errors
    ///
    /// Returns [`StoreError`] if the backend refuses the removal.
    fn remove(&self, key: &str) -> Result<(), StoreError>;
}

/// In-process backend. Clones share the same entries.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn entries(&self) -> MutexGuard<'_, HashMap<String, String>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries().insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.entries().remove(key);
        Ok(())
    }
}

/// Typed session persistence over a [`KeyValueStorage`] backend.
#[derive(Clone, Debug)]
pub struct TokenStore<S> {
    backend: S,
    key: String,
}

impl<S: KeyValueStorage> TokenStore<S> {
    #[must_use]
    pub fn new(backend: S) -> Self {
        Self { backend, key: STORAGE_KEY.to_owned() }
    }

    /// Store under a different key (separate apps sharing one origin).
    #[must_use]
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Serialize `session` and overwrite whatever was stored before.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if encoding fails or the backend refuses the write.
    pub fn save(&self, session: &Session) -> Result<(), StoreError> {
        let raw = serde_json::to_string(session)?;
        self.backend.set(&self.key, &raw)
    }

    /// Read back the stored session. Missing or corrupt data is `None`.
    pub fn load(&self) -> Option<Session> {
        let raw = self.backend.get(&self.key)?;
        match serde_json::from_str::<Session>(&raw) {
            Ok(session) => Some(session),
            Err(e) => {
                log::warn!("ignoring unreadable persisted session under {}: {e}", self.key);
                None
            }
        }
    }

    /// # Errors
    ///
    /// Returns [`StoreError`] if the backend refuses the removal.
    pub fn clear(&self) -> Result<(), StoreError> {
        self.backend.remove(&self.key)
    }
}
