//! Session data and the auth gate.
//!
//! SYSTEM CONTEXT
//! ==============
//! A `Session` is whatever the browser storage currently holds. It may be
//! partial or tampered with, so every downstream decision goes through
//! `is_authenticated` / `Session::role`, which collapse any invalid session
//! into the logged-out case.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use serde::{Deserialize, Serialize};

/// Account role recognized by the client.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Owner,
    User,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Admin, Role::Owner, Role::User];

    /// Parse the lowercase wire value. Anything else is not a role.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "admin" => Some(Self::Admin),
            "owner" => Some(Self::Owner),
            "user" => Some(Self::User),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Owner => "owner",
            Self::User => "user",
        }
    }

    /// Human label used in selects and tables.
    pub fn label(self) -> &'static str {
        match self {
            Self::Admin => "Admin",
            Self::Owner => "Store Owner",
            Self::User => "Normal User",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw session fields as persisted in browser storage.
///
/// `role` is kept as the stored string so corrupted values survive a
/// round-trip and can be rejected by the gate instead of at read time.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    pub token: Option<String>,
    pub role: Option<String>,
}

impl Session {
    pub fn new(token: impl Into<String>, role: impl Into<String>) -> Self {
        Self { token: Some(token.into()), role: Some(role.into()) }
    }

    /// Role of an authenticated session; `None` for any invalid session.
    pub fn role(&self) -> Option<Role> {
        if !has_token(self) {
            return None;
        }
        self.role.as_deref().and_then(Role::parse)
    }

    /// Bearer token of an authenticated session.
    pub fn bearer_token(&self) -> Option<&str> {
        if is_authenticated(self) { self.token.as_deref() } else { None }
    }
}

/// True iff the token is non-empty and the role is a recognized value.
pub fn is_authenticated(session: &Session) -> bool {
    session.role().is_some()
}

fn has_token(session: &Session) -> bool {
    session.token.as_deref().is_some_and(|t| !t.is_empty())
}
