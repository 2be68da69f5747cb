use super::*;
use crate::net::types::{LoginRequest, UpdatePasswordRequest};

#[test]
fn valid_request_passes_through() {
    let req = LoginRequest { email: "a@b.com".to_owned(), password: "pw".to_owned() };
    assert_eq!(check(req.clone()), Ok(req));
}

#[test]
fn invalid_request_reports_message_per_field() {
    let req = LoginRequest { email: "nope".to_owned(), password: String::new() };
    let errors = check(req).unwrap_err();
    assert_eq!(errors.get("email"), Some("Invalid email address"));
    assert_eq!(errors.get("password"), Some("Password is required"));
    assert!(!errors.is_empty());
}

#[test]
fn custom_rule_message_is_surfaced() {
    let req = UpdatePasswordRequest { current_password: "old".to_owned(), new_password: "nouppercase#1".to_owned() };
    let errors = check(req).unwrap_err();
    assert_eq!(errors.get("new_password"), Some("Must contain at least one uppercase letter"));
    assert_eq!(errors.get("current_password"), None);
}

#[test]
fn default_is_empty() {
    assert!(FieldErrors::default().is_empty());
}
