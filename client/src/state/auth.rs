//! Auth-session state for the current browser tab.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by route gates and role-aware components. The server render cannot see
//! browser storage, so the state starts in `loading` and is settled from the
//! session store once the app hydrates; no redirect fires before that.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use super::session::{Role, Session};

/// Authentication state tracking the stored session and loading status.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthState {
    pub session: Session,
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self { session: Session::default(), loading: true }
    }
}

impl AuthState {
    /// State after the session store has been read.
    pub fn loaded(session: Session) -> Self {
        Self { session, loading: false }
    }

    pub fn role(&self) -> Option<Role> {
        if self.loading { None } else { self.session.role() }
    }
}
