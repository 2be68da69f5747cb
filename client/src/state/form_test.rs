use super::*;
use crate::net::types::LoginRequest;
use crate::util::validation::check;

#[test]
fn begin_blocks_duplicate_submission() {
    let mut form = FormState::default();
    assert!(form.begin());
    assert!(form.busy);
    assert!(!form.begin());
}

#[test]
fn failure_releases_busy_and_keeps_message() {
    let mut form = FormState::default();
    form.begin();
    form.fail("Invalid credentials");
    assert!(!form.busy);
    assert_eq!(form.notice, Some(Notice { kind: NoticeKind::Error, text: "Invalid credentials".to_owned() }));
    assert!(form.begin());
}

#[test]
fn begin_clears_previous_notice_and_field_errors() {
    let mut form = FormState::default();
    let errors = check(LoginRequest::default()).unwrap_err();
    form.reject_fields(errors);
    assert!(form.field_error("email").is_some());

    form.begin();
    assert_eq!(form.field_error("email"), None);
    assert_eq!(form.notice, None);
}

#[test]
fn reject_fields_does_not_mark_busy() {
    let mut form = FormState::default();
    form.reject_fields(check(LoginRequest::default()).unwrap_err());
    assert!(!form.busy);
    assert_eq!(form.field_error("password").as_deref(), Some("Password is required"));
}

#[test]
fn success_notice_class() {
    let mut form = FormState::default();
    form.begin();
    form.succeed("User added successfully");
    let notice = form.notice.unwrap();
    assert_eq!(notice.kind, NoticeKind::Success);
    assert_eq!(notice.css_class(), "form-notice form-notice--success");
}
