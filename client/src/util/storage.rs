//! Key/value persistence backends for session-scoped browser data.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session store writes its record to `localStorage` (durable) and to a
//! cookie (shared across tabs), and navigation history lives in
//! `sessionStorage`. All three sit behind [`KeyValueStore`] so the store and
//! history logic run unchanged against [`MemoryStore`] in tests and during
//! server rendering.
//!
//! ERROR HANDLING
//! ==============
//! Reads and removals are infallible from the caller's view: a missing or
//! unreachable backend reads as empty. Only writes report [`StorageError`],
//! since a rejected write (quota, privacy mode) is worth logging.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

#[cfg(any(test, feature = "hydrate"))]
use cookie::{Cookie, SameSite};
#[cfg(any(test, feature = "hydrate"))]
use time::Duration;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    #[error("storage backend unavailable")]
    Unavailable,
    #[error("storage write rejected: {0}")]
    Write(String),
}

/// A string key/value store with browser-storage semantics.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;

    /// # Errors
    ///
    /// Returns [`StorageError`] if the backend is missing or refuses the write.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    fn remove(&self, key: &str);

    /// Remove every entry this store can see.
    fn clear(&self);
}

/// In-memory store. Clones share the same entries.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }

    fn clear(&self) {
        self.entries.borrow_mut().clear();
    }
}

/// The three stores a session touches.
#[derive(Clone)]
pub struct StorageSet {
    /// Device-scoped, survives browser restarts (`localStorage`).
    pub durable: Rc<dyn KeyValueStore>,
    /// Browsing-context scoped, visible to every tab (session cookie).
    pub shared: Rc<dyn KeyValueStore>,
    /// Tab-scoped ephemeral data (`sessionStorage`).
    pub scratch: Rc<dyn KeyValueStore>,
}

impl StorageSet {
    pub fn new(
        durable: Rc<dyn KeyValueStore>,
        shared: Rc<dyn KeyValueStore>,
        scratch: Rc<dyn KeyValueStore>,
    ) -> Self {
        Self { durable, shared, scratch }
    }

    /// Three independent empty in-memory stores.
    pub fn memory() -> Self {
        Self::new(
            Rc::new(MemoryStore::new()),
            Rc::new(MemoryStore::new()),
            Rc::new(MemoryStore::new()),
        )
    }

    /// Browser-backed stores under `hydrate`, in-memory stores otherwise.
    pub fn browser() -> Self {
        #[cfg(feature = "hydrate")]
        {
            Self::new(
                Rc::new(browser::WebStorage::local()),
                Rc::new(browser::CookieStore),
                Rc::new(browser::WebStorage::session()),
            )
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Self::memory()
        }
    }
}

impl fmt::Debug for StorageSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StorageSet").finish_non_exhaustive()
    }
}

/// Decoded value of cookie `name` in a `document.cookie` string.
#[cfg(any(test, feature = "hydrate"))]
fn cookie_value(header: &str, name: &str) -> Option<String> {
    Cookie::split_parse_encoded(header)
        .filter_map(Result::ok)
        .find(|cookie| cookie.name() == name)
        .map(|cookie| cookie.value().to_owned())
}

/// Every cookie name present in a `document.cookie` string.
#[cfg(any(test, feature = "hydrate"))]
fn cookie_names(header: &str) -> Vec<String> {
    Cookie::split_parse_encoded(header)
        .filter_map(Result::ok)
        .map(|cookie| cookie.name().to_owned())
        .collect()
}

/// `document.cookie` assignment storing `value` under `name` for the session.
#[cfg(any(test, feature = "hydrate"))]
fn session_cookie(name: &str, value: &str) -> String {
    Cookie::build((name, value))
        .path("/")
        .same_site(SameSite::Lax)
        .build()
        .encoded()
        .to_string()
}

/// `document.cookie` assignment that expires `name` immediately.
#[cfg(any(test, feature = "hydrate"))]
fn removal_cookie(name: &str) -> String {
    Cookie::build((name, ""))
        .path("/")
        .max_age(Duration::ZERO)
        .build()
        .encoded()
        .to_string()
}

#[cfg(feature = "hydrate")]
mod browser {
    use wasm_bindgen::JsCast;

    use super::{KeyValueStore, StorageError, cookie_names, cookie_value, removal_cookie, session_cookie};

    #[derive(Clone, Copy, Debug)]
    enum Area {
        Local,
        Session,
    }

    /// `window.localStorage` or `window.sessionStorage`.
    #[derive(Clone, Copy, Debug)]
    pub struct WebStorage {
        area: Area,
    }

    impl WebStorage {
        pub fn local() -> Self {
            Self { area: Area::Local }
        }

        pub fn session() -> Self {
            Self { area: Area::Session }
        }

        fn storage(self) -> Option<web_sys::Storage> {
            let window = web_sys::window()?;
            match self.area {
                Area::Local => window.local_storage().ok().flatten(),
                Area::Session => window.session_storage().ok().flatten(),
            }
        }
    }

    impl KeyValueStore for WebStorage {
        fn get(&self, key: &str) -> Option<String> {
            self.storage()?.get_item(key).ok().flatten()
        }

        fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
            let storage = self.storage().ok_or(StorageError::Unavailable)?;
            storage
                .set_item(key, value)
                .map_err(|e| StorageError::Write(format!("{e:?}")))
        }

        fn remove(&self, key: &str) {
            if let Some(storage) = self.storage() {
                let _ = storage.remove_item(key);
            }
        }

        fn clear(&self) {
            if let Some(storage) = self.storage() {
                let _ = storage.clear();
            }
        }
    }

    /// Session cookies on the current document, path `/`.
    #[derive(Clone, Copy, Debug)]
    pub struct CookieStore;

    impl CookieStore {
        fn document() -> Option<web_sys::HtmlDocument> {
            web_sys::window()?.document()?.dyn_into::<web_sys::HtmlDocument>().ok()
        }

        fn expire(document: &web_sys::HtmlDocument, key: &str) {
            let _ = document.set_cookie(&removal_cookie(key));
        }
    }

    impl KeyValueStore for CookieStore {
        fn get(&self, key: &str) -> Option<String> {
            let header = Self::document()?.cookie().ok()?;
            cookie_value(&header, key)
        }

        fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
            let document = Self::document().ok_or(StorageError::Unavailable)?;
            document
                .set_cookie(&session_cookie(key, value))
                .map_err(|e| StorageError::Write(format!("{e:?}")))
        }

        fn remove(&self, key: &str) {
            if let Some(document) = Self::document() {
                Self::expire(&document, key);
            }
        }

        fn clear(&self) {
            let Some(document) = Self::document() else {
                return;
            };
            let Ok(header) = document.cookie() else {
                return;
            };
            for key in cookie_names(&header) {
                Self::expire(&document, &key);
            }
        }
    }
}
