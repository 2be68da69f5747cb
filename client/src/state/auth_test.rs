use super::*;

#[test]
fn default_state_is_loading_and_anonymous() {
    let state = AuthState::default();
    assert!(state.loading);
    assert_eq!(state.role(), None);
}

#[test]
fn loading_state_hides_a_valid_session() {
    let state = AuthState { session: Session::new("t", "admin"), loading: true };
    assert_eq!(state.role(), None);
}

#[test]
fn loaded_valid_session_exposes_role() {
    let state = AuthState::loaded(Session::new("t", "owner"));
    assert_eq!(state.role(), Some(Role::Owner));
}

#[test]
fn loaded_tampered_session_is_anonymous() {
    let state = AuthState::loaded(Session::new("t", "root"));
    assert!(!state.loading);
    assert_eq!(state.role(), None);
}
