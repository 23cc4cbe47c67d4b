//! Client-side credential persistence.
//!
//! DESIGN
//! ======
//! A dumb, typed key-value shim over browser localStorage: two credential
//! keys plus a display-convenience user cache. No token structure is
//! validated here. The store is constructed once at app start and handed to
//! the API client and auth context by reference — never reached for as a
//! module global.
//!
//! Under `csr` the medium is localStorage; otherwise (native tests) an
//! in-memory map shared through `Arc` stands in, so store logic is testable
//! without a browser.

#[cfg(test)]
#[path = "token_store_test.rs"]
mod token_store_test;

#[cfg(not(feature = "csr"))]
use std::collections::HashMap;
#[cfg(not(feature = "csr"))]
use std::sync::{Arc, Mutex};

use super::types::{Credential, User};

const ACCESS_TOKEN_KEY: &str = "access_token";
const REFRESH_TOKEN_KEY: &str = "refresh_token";
const USER_DATA_KEY: &str = "user_data";

/// Persistent store for the bearer credential and cached user display data.
///
/// All operations are synchronous and idempotent; `clear` on an empty store
/// is a no-op. Clones share the same underlying medium.
#[derive(Clone, Default)]
pub struct TokenStore {
    #[cfg(not(feature = "csr"))]
    mem: Arc<Mutex<HashMap<String, String>>>,
}

impl TokenStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Persist a credential, replacing any previous one. A missing refresh
    /// companion removes a previously stored one rather than leaving it
    /// stale.
    pub fn store(&self, credential: &Credential) {
        self.set(ACCESS_TOKEN_KEY, &credential.access);
        match &credential.refresh {
            Some(refresh) => self.set(REFRESH_TOKEN_KEY, refresh),
            None => self.remove(REFRESH_TOKEN_KEY),
        }
    }

    /// Read the stored credential, if any.
    #[must_use]
    pub fn read(&self) -> Option<Credential> {
        let access = self.get(ACCESS_TOKEN_KEY)?;
        Some(Credential { access, refresh: self.get(REFRESH_TOKEN_KEY) })
    }

    /// Remove the credential and the cached user.
    pub fn clear(&self) {
        self.remove(ACCESS_TOKEN_KEY);
        self.remove(REFRESH_TOKEN_KEY);
        self.remove(USER_DATA_KEY);
    }

    /// Cache the last resolved user for display while the next verification
    /// is in flight. Never treated as proof of authentication.
    pub fn cache_user(&self, user: &User) {
        if let Ok(json) = serde_json::to_string(user) {
            self.set(USER_DATA_KEY, &json);
        }
    }

    /// Read the cached user, if present and decodable.
    #[must_use]
    pub fn cached_user(&self) -> Option<User> {
        let json = self.get(USER_DATA_KEY)?;
        serde_json::from_str(&json).ok()
    }

    // -------------------------------------------------------------------------
    // Underlying medium
    // -------------------------------------------------------------------------

    #[cfg(feature = "csr")]
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }

    #[cfg(feature = "csr")]
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok()?
    }

    #[cfg(feature = "csr")]
    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.set_item(key, value);
        }
    }

    #[cfg(feature = "csr")]
    fn remove(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(key);
        }
    }

    #[cfg(not(feature = "csr"))]
    fn get(&self, key: &str) -> Option<String> {
        self.mem.lock().ok()?.get(key).cloned()
    }

    #[cfg(not(feature = "csr"))]
    fn set(&self, key: &str, value: &str) {
        if let Ok(mut map) = self.mem.lock() {
            map.insert(key.to_owned(), value.to_owned());
        }
    }

    #[cfg(not(feature = "csr"))]
    fn remove(&self, key: &str) {
        if let Ok(mut map) = self.mem.lock() {
            map.remove(key);
        }
    }
}
