use std::sync::Arc;

use super::*;
use crate::net::types::AccountSummary;
use crate::util::session_store::MemoryStorage;

fn response(token: &str, role: &str) -> LoginResponse {
    LoginResponse {
        token: token.to_owned(),
        user: AccountSummary { role: role.to_owned(), name: None, email: None },
    }
}

#[test]
fn login_request_trims_email_only() {
    let request = login_request("  a@b.com ", " pass ");
    assert_eq!(request.email, "a@b.com");
    assert_eq!(request.password, " pass ");
}

#[test]
fn apply_login_stores_token_and_role() {
    let store = SessionStore::new(Arc::new(MemoryStorage::default()));
    assert_eq!(apply_login(&store, &response("tok", "owner")), Some(Role::Owner));
    let session = store.get();
    assert_eq!(session.token.as_deref(), Some("tok"));
    assert_eq!(session.role.as_deref(), Some("owner"));
}

#[test]
fn apply_login_with_unknown_role_leaves_invalid_session() {
    let store = SessionStore::new(Arc::new(MemoryStorage::default()));
    assert_eq!(apply_login(&store, &response("tok", "superadmin")), None);
    assert_eq!(store.get().role(), None);
}

#[test]
fn apply_login_replaces_previous_session() {
    let store = SessionStore::new(Arc::new(MemoryStorage::default()));
    apply_login(&store, &response("old", "user"));
    apply_login(&store, &response("new", "admin"));
    assert_eq!(store.get(), crate::state::session::Session::new("new", "admin"));
}

#[test]
fn server_message_is_shown_verbatim() {
    let err = ApiError::Rejected { status: 401, message: Some("Invalid credentials".to_owned()) };
    assert_eq!(login_error_message(&err), "Invalid credentials");
}

#[test]
fn missing_server_message_falls_back_to_login_failed() {
    let err = ApiError::Rejected { status: 500, message: None };
    assert_eq!(login_error_message(&err), LOGIN_FAILED);
}
