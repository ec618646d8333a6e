//! Session context: the token and user-identifier storage.
//!
//! DESIGN
//! ======
//! All session reads and writes go through one `Session` handle that is
//! constructed at application start and provided via context. Call sites
//! never reach for `localStorage` themselves, so the storage backend can
//! be swapped for an in-memory map in tests and server renders.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

/// Storage key holding the session token.
pub const TOKEN_KEY: &str = "wasatext_token";

/// Storage key holding the logged-in user's identifier.
pub const USER_ID_KEY: &str = "wasatext_user_id";

/// Key-value backend for session data.
///
/// `Send + Sync` because session handles live in the reactive context,
/// whose values must be shareable across threads.
pub trait SessionStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// In-memory store used by tests and server-side renders, where no
/// browser storage exists.
#[derive(Default)]
pub struct MemoryStore {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    fn values(&self) -> std::sync::MutexGuard<'_, HashMap<String, String>> {
        self.values.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl SessionStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.values().insert(key.to_owned(), value.to_owned());
    }

    fn remove(&self, key: &str) {
        self.values().remove(key);
    }
}

/// `localStorage`-backed store. Storage failures (private browsing,
/// quota) degrade to "no value" rather than panicking.
#[cfg(feature = "hydrate")]
#[derive(Default)]
pub struct BrowserStore;

#[cfg(feature = "hydrate")]
impl BrowserStore {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

#[cfg(feature = "hydrate")]
impl SessionStore for BrowserStore {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.set_item(key, value);
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(key);
        }
    }
}

/// Cheap-to-clone handle over the session store.
///
/// Token presence is the sole authorization signal: the navigation guard
/// and the request pipeline both consult it through this handle.
#[derive(Clone)]
pub struct Session {
    store: Arc<dyn SessionStore>,
}

impl Session {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    /// Session backed by an in-memory map.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStore::default()))
    }

    /// Session backed by the browser's `localStorage`.
    #[cfg(feature = "hydrate")]
    pub fn browser() -> Self {
        Self::new(Arc::new(BrowserStore))
    }

    pub fn token(&self) -> Option<String> {
        self.store.get(TOKEN_KEY)
    }

    pub fn user_id(&self) -> Option<String> {
        self.store.get(USER_ID_KEY)
    }

    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    /// Persist both session keys after a successful login.
    pub fn establish(&self, token: &str, user_id: &str) {
        self.store.set(TOKEN_KEY, token);
        self.store.set(USER_ID_KEY, user_id);
    }

    /// Remove both session keys. Used by logout and by the 401 handler.
    pub fn clear(&self) {
        self.store.remove(TOKEN_KEY);
        self.store.remove(USER_ID_KEY);
    }
}
