//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (fetching, form submission) and
//! delegates rendering details to `components`. Access control is not done
//! here; `components::route_gate::RouteGate` wraps every page.

pub mod admin_dashboard;
pub(crate) mod load;
pub mod login;
pub mod not_found;
pub mod owner_dashboard;
pub mod signup;
pub mod user_dashboard;
