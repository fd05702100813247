//! Session store: the single owner of "who, if anyone, is signed in".
//!
//! SYSTEM CONTEXT
//! ==============
//! The app creates one [`SessionStore`] at boot, restores it from persisted
//! storage after hydration, and projects every change into a reactive
//! `RwSignal<AuthState>` through [`SessionStore::subscribe`]. Route guards and
//! components read that signal; only this module reads or writes the
//! persisted session record.
//!
//! PERSISTENCE
//! ===========
//! The record is written to the durable store and the shared store together
//! on sign-in and removed from both on sign-out. At restore the durable copy
//! wins; the shared copy is consulted only when the durable one is missing.
//! A record that fails to parse or validate restores as "no session".
//!
//! CONCURRENCY
//! ===========
//! Single-threaded. The only await point is the backend invalidation inside
//! [`SessionStore::sign_out`]; no borrow of the store is held across it.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use super::identity::{Credential, Identity, Permission, Role};
use crate::net::api::AuthApi;
use crate::net::types::{SessionRecord, UserInfo};
use crate::util::storage::StorageSet;

/// Storage key of the persisted session record, in both stores.
pub const SESSION_KEY: &str = "user";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("credential must not be empty")]
    EmptyCredential,
    #[error("unsupported role: {0}")]
    UnknownRole(String),
    #[error("malformed session record: {0}")]
    Malformed(String),
}

/// A fully populated authenticated session.
///
/// Identity and credential are set together or not at all; absence is
/// `Option::<Session>::None`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    identity: Identity,
    credential: Credential,
}

impl Session {
    /// # Errors
    ///
    /// Returns [`SessionError::EmptyCredential`] for a blank token.
    pub fn new(identity: Identity, credential: Credential) -> Result<Self, SessionError> {
        if credential.is_empty() {
            return Err(SessionError::EmptyCredential);
        }
        Ok(Self { identity, credential })
    }

    /// Validate a sign-in response / persisted record into a session.
    ///
    /// Blank permission names are dropped; an unknown role rejects the record.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError`] for an empty token or an unknown role.
    pub fn from_record(record: SessionRecord) -> Result<Self, SessionError> {
        let SessionRecord { token, user_info, permissions } = record;
        let role: Role = user_info.role.parse().map_err(SessionError::UnknownRole)?;
        let permissions = permissions
            .iter()
            .filter_map(|name| match name.parse::<Permission>() {
                Ok(permission) => Some(permission),
                Err(blank) => {
                    log::warn!("dropping blank permission {blank:?}");
                    None
                }
            })
            .collect();
        let identity = Identity {
            id: user_info.id,
            name: user_info.name,
            email: user_info.email,
            role,
            permissions,
        };
        Self::new(identity, Credential::new(token))
    }

    /// Parse the JSON form of a persisted record.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Malformed`] for invalid JSON, or any
    /// [`Session::from_record`] error.
    pub fn from_json(raw: &str) -> Result<Self, SessionError> {
        let record: SessionRecord = serde_json::from_str(raw).map_err(|e| SessionError::Malformed(e.to_string()))?;
        Self::from_record(record)
    }

    pub fn to_record(&self) -> SessionRecord {
        SessionRecord {
            token: self.credential.as_str().to_owned(),
            user_info: UserInfo {
                id: self.identity.id,
                name: self.identity.name.clone(),
                email: self.identity.email.clone(),
                role: self.identity.role.as_str().to_owned(),
            },
            permissions: self.identity.permissions.iter().map(|p| p.as_str().to_owned()).collect(),
        }
    }

    pub fn identity(&self) -> &Identity {
        &self.identity
    }

    pub fn credential(&self) -> &Credential {
        &self.credential
    }
}

/// Snapshot of the session store, as seen by subscribers and the UI.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthState {
    pub session: Option<Session>,
    /// `true` until the first restore (or sign-in) completes.
    pub loading: bool,
    /// `true` while a sign-out is talking to the backend.
    pub logging_out: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self { session: None, loading: true, logging_out: false }
    }
}

impl AuthState {
    pub fn is_present(&self) -> bool {
        self.session.is_some()
    }

    pub fn user(&self) -> Option<&Identity> {
        self.session.as_ref().map(Session::identity)
    }
}

/// Handle returned by [`SessionStore::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Subscriber = Rc<dyn Fn(&AuthState)>;

struct Inner {
    state: AuthState,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_id: u64,
}

/// Owner of the current session. Clones share state.
#[derive(Clone)]
pub struct SessionStore {
    inner: Rc<RefCell<Inner>>,
    storage: StorageSet,
}

impl SessionStore {
    pub fn new(storage: StorageSet) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner {
                state: AuthState::default(),
                subscribers: Vec::new(),
                next_id: 0,
            })),
            storage,
        }
    }

    pub fn storage(&self) -> &StorageSet {
        &self.storage
    }

    pub fn snapshot(&self) -> AuthState {
        self.inner.borrow().state.clone()
    }

    pub fn current(&self) -> Option<Session> {
        self.inner.borrow().state.session.clone()
    }

    pub fn is_present(&self) -> bool {
        self.inner.borrow().state.is_present()
    }

    pub fn is_restored(&self) -> bool {
        !self.inner.borrow().state.loading
    }

    pub fn is_logging_out(&self) -> bool {
        self.inner.borrow().state.logging_out
    }

    /// Call `f` synchronously after every state change, in subscription order.
    pub fn subscribe(&self, f: impl Fn(&AuthState) + 'static) -> SubscriptionId {
        let mut inner = self.inner.borrow_mut();
        let id = SubscriptionId(inner.next_id);
        inner.next_id += 1;
        inner.subscribers.push((id, Rc::new(f)));
        id
    }

    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.inner.borrow_mut().subscribers.retain(|(sid, _)| *sid != id);
    }

    /// Load the session from persisted storage. Never writes to storage.
    pub fn restore(&self) {
        let session = self.read_persisted();
        log::debug!("session restore finished, present={}", session.is_some());
        self.update(|state| {
            state.session = session;
            state.loading = false;
        });
    }

    /// Make `identity` + `credential` the current session and persist it.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::EmptyCredential`] for a blank token; the store
    /// is left untouched.
    pub fn sign_in(&self, identity: Identity, credential: Credential) -> Result<(), SessionError> {
        let session = Session::new(identity, credential)?;
        self.persist(&session);
        self.update(|state| {
            state.session = Some(session);
            state.loading = false;
        });
        Ok(())
    }

    /// Validate a sign-in response body and sign in with it.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError`] if the record is invalid; the store is left
    /// untouched.
    pub fn sign_in_record(&self, record: SessionRecord) -> Result<(), SessionError> {
        let session = Session::from_record(record)?;
        let Session { identity, credential } = session;
        self.sign_in(identity, credential)
    }

    /// Tear down the session.
    ///
    /// The backend is told to invalidate the credential on a best-effort
    /// basis; whatever happens there, the local session and every persisted
    /// copy are cleared. Safe to call with no session.
    pub async fn sign_out<A: AuthApi>(&self, api: &A) {
        let credential = self.current().map(|session| session.credential);
        self.update(|state| state.logging_out = true);

        if let Some(credential) = credential {
            if let Err(err) = api.invalidate(&credential).await {
                log::warn!("backend logout failed, clearing session locally: {err}");
            }
        }

        self.clear_persisted();
        self.update(|state| {
            state.session = None;
            state.loading = false;
            state.logging_out = false;
        });
    }

    fn read_persisted(&self) -> Option<Session> {
        let (source, raw) = self
            .storage
            .durable
            .get(SESSION_KEY)
            .map(|raw| ("durable", raw))
            .or_else(|| self.storage.shared.get(SESSION_KEY).map(|raw| ("shared", raw)))?;
        match Session::from_json(&raw) {
            Ok(session) => {
                log::debug!("restored session from {source} store");
                Some(session)
            }
            Err(err) => {
                log::warn!("ignoring {source} session record: {err}");
                None
            }
        }
    }

    fn persist(&self, session: &Session) {
        let raw = match serde_json::to_string(&session.to_record()) {
            Ok(raw) => raw,
            Err(err) => {
                log::warn!("could not serialize session record: {err}");
                return;
            }
        };
        for (name, store) in [("durable", &self.storage.durable), ("shared", &self.storage.shared)] {
            if let Err(err) = store.set(SESSION_KEY, &raw) {
                log::warn!("could not persist session to {name} store: {err}");
            }
        }
    }

    fn clear_persisted(&self) {
        self.storage.durable.remove(SESSION_KEY);
        self.storage.shared.remove(SESSION_KEY);
        self.storage.durable.clear();
        self.storage.scratch.clear();
    }

    /// Apply `f`, then notify subscribers with no borrow held.
    fn update(&self, f: impl FnOnce(&mut AuthState)) {
        let (snapshot, subscribers) = {
            let mut inner = self.inner.borrow_mut();
            f(&mut inner.state);
            let subscribers: Vec<Subscriber> = inner.subscribers.iter().map(|(_, s)| Rc::clone(s)).collect();
            (inner.state.clone(), subscribers)
        };
        for subscriber in subscribers {
            subscriber(&snapshot);
        }
    }
}

impl fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionStore")
            .field("state", &self.inner.borrow().state)
            .finish_non_exhaustive()
    }
}
