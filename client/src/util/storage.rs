//! Browser `localStorage` backend for the session token store.
//!
//! SYSTEM CONTEXT
//! ==============
//! Hydrate builds read and write `window.localStorage`. SSR and native test
//! builds have no browser, so they fall back to an in-process map; server
//! renders therefore always start logged out and defer to the client.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use session::{KeyValueStorage, StoreError};
#[cfg(not(feature = "hydrate"))]
use session::MemoryStorage;

#[derive(Clone, Debug, Default)]
pub struct BrowserStorage {
    #[cfg(not(feature = "hydrate"))]
    fallback: MemoryStorage,
}

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl KeyValueStorage for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            self.fallback.get(key)
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()
                .ok_or(StoreError::Unavailable)?
                .set_item(key, value)
                .map_err(|e| StoreError::Write(format!("{e:?}")))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            self.fallback.set(key, value)
        }
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()
                .ok_or(StoreError::Unavailable)?
                .remove_item(key)
                .map_err(|e| StoreError::Write(format!("{e:?}")))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            self.fallback.remove(key)
        }
    }
}
