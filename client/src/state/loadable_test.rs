use super::*;

#[test]
fn default_is_loading_without_data() {
    let state = Loadable::<Vec<u8>>::default();
    assert!(state.loading);
    assert_eq!(state.data, None);
    assert!(!state.is_empty());
}

#[test]
fn finish_applies_latest_result() {
    let mut state = Loadable::default();
    let ticket = state.begin();
    assert!(state.finish(ticket, Ok(vec![1, 2])));
    assert!(!state.loading);
    assert_eq!(state.items(), &[1, 2]);
}

#[test]
fn stale_ticket_is_ignored() {
    let mut state = Loadable::default();
    let old = state.begin();
    let new = state.begin();
    assert!(state.finish(new, Ok(vec!["new"])));
    assert!(!state.finish(old, Ok(vec!["old"])));
    assert_eq!(state.items(), &["new"]);
}

#[test]
fn stale_ticket_does_not_release_loading() {
    let mut state: Loadable<Vec<u8>> = Loadable::default();
    let old = state.begin();
    let _new = state.begin();
    state.finish(old, Err("boom".to_owned()));
    assert!(state.loading);
    assert_eq!(state.error, None);
}

#[test]
fn error_keeps_previous_data() {
    let mut state = Loadable::default();
    let first = state.begin();
    state.finish(first, Ok(vec![7]));
    let second = state.begin();
    state.finish(second, Err("Failed to fetch stores".to_owned()));
    assert_eq!(state.error.as_deref(), Some("Failed to fetch stores"));
    assert_eq!(state.items(), &[7]);
}

#[test]
fn begin_clears_error() {
    let mut state: Loadable<Vec<u8>> = Loadable::default();
    let t = state.begin();
    state.finish(t, Err("x".to_owned()));
    state.begin();
    assert_eq!(state.error, None);
}

#[test]
fn is_empty_after_successful_empty_fetch() {
    let mut state: Loadable<Vec<u8>> = Loadable::default();
    let t = state.begin();
    state.finish(t, Ok(Vec::new()));
    assert!(state.is_empty());
}
