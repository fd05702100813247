//! Back-button history kept in tab-scoped storage.
//!
//! Only paths the guard rendered are recorded (the admin layout records on
//! mount), so the back target is always the most recent distinct page the
//! user actually saw, never a redirect source.

#[cfg(test)]
#[path = "history_test.rs"]
mod history_test;

use std::fmt;
use std::rc::Rc;

use super::HOME_PATH;
use crate::util::storage::KeyValueStore;

pub const CURRENT_KEY: &str = "nav.current";
pub const PREVIOUS_KEY: &str = "nav.previous";

#[derive(Clone)]
pub struct NavHistory {
    store: Rc<dyn KeyValueStore>,
}

impl NavHistory {
    pub fn new(store: Rc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    pub fn current(&self) -> Option<String> {
        self.store.get(CURRENT_KEY)
    }

    pub fn previous(&self) -> Option<String> {
        self.store.get(PREVIOUS_KEY)
    }

    /// Note that `path` was rendered.
    pub fn record(&self, path: &str) {
        let current = self.current();
        if current.as_deref() == Some(path) {
            return;
        }
        if let Some(current) = current {
            self.write(PREVIOUS_KEY, &current);
        }
        self.write(CURRENT_KEY, path);
    }

    /// Where the back button goes.
    pub fn back_target(&self) -> String {
        self.previous().unwrap_or_else(|| HOME_PATH.to_owned())
    }

    fn write(&self, key: &str, value: &str) {
        if let Err(err) = self.store.set(key, value) {
            log::debug!("navigation history not saved: {err}");
        }
    }
}

impl fmt::Debug for NavHistory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NavHistory")
            .field("current", &self.current())
            .field("previous", &self.previous())
            .finish()
    }
}
