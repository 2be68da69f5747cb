use super::*;

#[test]
fn begin_marks_store_pending() {
    let mut state = RatingSubmission::default();
    assert!(state.begin(3));
    assert!(state.is_pending(3));
    assert!(!state.is_pending(4));
}

#[test]
fn duplicate_begin_for_same_store_is_refused() {
    let mut state = RatingSubmission::default();
    assert!(state.begin(3));
    assert!(!state.begin(3));
}

#[test]
fn finish_releases_store() {
    let mut state = RatingSubmission::default();
    state.begin(3);
    state.finish(3);
    assert!(!state.is_pending(3));
    assert!(state.begin(3));
}

#[test]
fn stores_are_tracked_independently() {
    let mut state = RatingSubmission::default();
    state.begin(3);
    state.begin(5);
    state.finish(3);
    assert!(!state.is_pending(3));
    assert!(state.is_pending(5));
}
