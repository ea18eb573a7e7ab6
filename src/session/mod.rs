//! Persisted login session.
//!
//! The session is three plain entries in persistent storage. Token presence is the only
//! notion of "logged in": nothing checks signatures or expiry locally, a stale token stays
//! valid until the backend answers 401 and the gateway clears it.

pub mod storage;

use std::rc::Rc;

use dioxus_logger::tracing;

pub use storage::{KeyValueStore, MemoryStorage};

use crate::error::StorageError;

pub const TOKEN_KEY: &str = "access_token";
pub const USERNAME_KEY: &str = "username";
pub const COMPANY_NAME_KEY: &str = "company_name";

const SESSION_KEYS: [&str; 3] = [TOKEN_KEY, USERNAME_KEY, COMPANY_NAME_KEY];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    pub username: String,
    /// Empty when the backend did not tell us which company the account belongs to.
    pub company_name: String,
}

/// Single source of truth for authentication status.
///
/// Cheap to clone; every clone reads and writes the same underlying storage. It is handed
/// to the gateway and the UI explicitly rather than reached through a global.
#[derive(Clone)]
pub struct SessionStore {
    storage: Rc<dyn KeyValueStore>,
}

impl SessionStore {
    pub fn new(storage: impl KeyValueStore + 'static) -> Self {
        Self {
            storage: Rc::new(storage),
        }
    }

    /// Persist a session, overwriting any previous one.
    pub fn save(&self, session: &Session) -> Result<(), StorageError> {
        self.storage.set(TOKEN_KEY, &session.token)?;
        self.storage.set(USERNAME_KEY, &session.username)?;
        self.storage.set(COMPANY_NAME_KEY, &session.company_name)?;

        Ok(())
    }

    /// True iff a non-empty token is stored.
    pub fn is_active(&self) -> bool {
        self.token().is_some()
    }

    pub fn token(&self) -> Option<String> {
        self.storage.get(TOKEN_KEY).filter(|token| !token.is_empty())
    }

    /// The stored session, if a token is present.
    pub fn current(&self) -> Option<Session> {
        let token = self.token()?;

        Some(Session {
            token,
            username: self.storage.get(USERNAME_KEY).unwrap_or_default(),
            company_name: self.storage.get(COMPANY_NAME_KEY).unwrap_or_default(),
        })
    }

    /// Remove every session entry. Safe to call with no session stored.
    ///
    /// A key that cannot be removed is logged and the remaining keys are still attempted.
    pub fn clear(&self) {
        for key in SESSION_KEYS {
            if let Err(err) = self.storage.remove(key) {
                tracing::error!("{}", err);
            }
        }
    }
}
