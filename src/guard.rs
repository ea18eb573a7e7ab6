//! Route guard deciding whether a protected view may render.
//!
//! The decision is local and synchronous: it only asks the session store whether a token is
//! present. A guard is created per mount, so the check is repeated each time a protected
//! view mounts.

use crate::session::SessionStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardState {
    /// Initial state before the session has been consulted.
    Checking,
    /// Protected content may render.
    Allowed,
    /// The view must be replaced by a redirect to the login entry point.
    Denied,
}

pub struct RouteGuard<'a> {
    session: &'a SessionStore,
    state: GuardState,
}

impl<'a> RouteGuard<'a> {
    pub fn new(session: &'a SessionStore) -> Self {
        Self {
            session,
            state: GuardState::Checking,
        }
    }

    pub fn state(&self) -> GuardState {
        self.state
    }

    /// Resolve the guard. `Allowed` and `Denied` are terminal for the guard's lifetime, so
    /// later calls return the first decision even if the session changed meanwhile.
    pub fn check(&mut self) -> GuardState {
        if self.state == GuardState::Checking {
            self.state = if self.session.is_active() {
                GuardState::Allowed
            } else {
                GuardState::Denied
            };
        }

        self.state
    }
}
