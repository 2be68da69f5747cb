//! Route table and redirect decisions.
//!
//! SYSTEM CONTEXT
//! ==============
//! `resolve` is the single place that decides, for a requested route and the
//! current session, whether the view renders or which route to redirect to.
//! `components::route_gate::RouteGate` re-runs it on every navigation and every
//! session change.
//!
//! Cross-role dashboard access is an authorization failure and goes to login;
//! it is never rewritten to the caller's own dashboard.

#[cfg(test)]
#[path = "routing_test.rs"]
mod routing_test;

use crate::state::session::{Role, Session};

/// Every route the client knows about.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AppRoute {
    Root,
    Login,
    Signup,
    AdminDashboard,
    OwnerDashboard,
    UserDashboard,
    NotFound,
}

/// Who may see a route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteAccess {
    /// Anyone, any session.
    Public,
    /// Only visitors without a valid session.
    GuestOnly,
    /// Never rendered; forwards to the session's own dashboard.
    RoleHome,
    /// Only sessions carrying exactly this role.
    Role(Role),
}

/// Outcome of evaluating a route against a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteDecision {
    Render(AppRoute),
    Redirect(AppRoute),
}

impl AppRoute {
    /// Routes with a path, in table order.
    pub const ALL: [AppRoute; 6] = [
        AppRoute::Root,
        AppRoute::Login,
        AppRoute::Signup,
        AppRoute::AdminDashboard,
        AppRoute::OwnerDashboard,
        AppRoute::UserDashboard,
    ];

    pub fn path(self) -> &'static str {
        match self {
            Self::Root => "/",
            Self::Login => "/login",
            Self::Signup => "/signup",
            Self::AdminDashboard => "/admin/dashboard",
            Self::OwnerDashboard => "/owner/dashboard",
            Self::UserDashboard => "/user/dashboard",
            Self::NotFound => "/404",
        }
    }

    /// Match a request path. Trailing slashes are ignored; anything unknown
    /// is `NotFound`.
    pub fn from_path(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let trimmed = path.trim_end_matches('/');
        let normalized = if trimmed.is_empty() { "/" } else { trimmed };
        Self::ALL
            .into_iter()
            .find(|route| route.path() == normalized)
            .unwrap_or(Self::NotFound)
    }

    pub fn access(self) -> RouteAccess {
        match self {
            Self::Root => RouteAccess::RoleHome,
            Self::Login | Self::Signup => RouteAccess::GuestOnly,
            Self::AdminDashboard => RouteAccess::Role(Role::Admin),
            Self::OwnerDashboard => RouteAccess::Role(Role::Owner),
            Self::UserDashboard => RouteAccess::Role(Role::User),
            Self::NotFound => RouteAccess::Public,
        }
    }

    /// Landing dashboard for a role.
    pub fn dashboard_for(role: Role) -> Self {
        match role {
            Role::Admin => Self::AdminDashboard,
            Role::Owner => Self::OwnerDashboard,
            Role::User => Self::UserDashboard,
        }
    }
}

/// Decide what to show for `route` given `session`.
///
/// Invalid sessions (missing token, unknown role) behave exactly like no
/// session at all.
pub fn resolve(route: AppRoute, session: &Session) -> RouteDecision {
    let role = session.role();
    match (route.access(), role) {
        (RouteAccess::Public, _) | (RouteAccess::GuestOnly, None) => RouteDecision::Render(route),
        (RouteAccess::GuestOnly, Some(_)) => RouteDecision::Redirect(AppRoute::Root),
        (RouteAccess::RoleHome, Some(role)) => RouteDecision::Redirect(AppRoute::dashboard_for(role)),
        (RouteAccess::Role(required), Some(role)) if required == role => RouteDecision::Render(route),
        (RouteAccess::RoleHome | RouteAccess::Role(_), _) => RouteDecision::Redirect(AppRoute::Login),
    }
}

/// `resolve` keyed by a raw request path.
pub fn resolve_path(path: &str, session: &Session) -> RouteDecision {
    resolve(AppRoute::from_path(path), session)
}
