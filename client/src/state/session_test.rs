use super::*;

#[test]
fn role_parse_accepts_only_known_lowercase_values() {
    assert_eq!(Role::parse("admin"), Some(Role::Admin));
    assert_eq!(Role::parse("owner"), Some(Role::Owner));
    assert_eq!(Role::parse("user"), Some(Role::User));
    assert_eq!(Role::parse("Admin"), None);
    assert_eq!(Role::parse("superadmin"), None);
    assert_eq!(Role::parse(""), None);
}

#[test]
fn role_as_str_round_trips_through_parse() {
    for role in Role::ALL {
        assert_eq!(Role::parse(role.as_str()), Some(role));
    }
}

#[test]
fn role_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&Role::Owner).unwrap(), "\"owner\"");
    let parsed: Role = serde_json::from_str("\"admin\"").unwrap();
    assert_eq!(parsed, Role::Admin);
}

#[test]
fn empty_session_is_not_authenticated() {
    assert!(!is_authenticated(&Session::default()));
}

#[test]
fn token_and_known_role_is_authenticated() {
    for role in Role::ALL {
        let session = Session::new("t", role.as_str());
        assert!(is_authenticated(&session));
        assert_eq!(session.role(), Some(role));
    }
}

#[test]
fn empty_token_is_not_authenticated() {
    let session = Session::new("", "admin");
    assert!(!is_authenticated(&session));
    assert_eq!(session.role(), None);
}

#[test]
fn missing_role_is_not_authenticated() {
    let session = Session { token: Some("t".to_owned()), role: None };
    assert!(!is_authenticated(&session));
}

#[test]
fn missing_token_with_role_is_not_authenticated() {
    let session = Session { token: None, role: Some("user".to_owned()) };
    assert!(!is_authenticated(&session));
    assert_eq!(session.role(), None);
}

#[test]
fn unrecognized_role_is_not_authenticated() {
    let session = Session::new("t", "superadmin");
    assert!(!is_authenticated(&session));
    assert_eq!(session.role(), None);
    assert_eq!(session.bearer_token(), None);
}

#[test]
fn bearer_token_only_for_valid_sessions() {
    assert_eq!(Session::new("abc", "user").bearer_token(), Some("abc"));
    assert_eq!(Session::default().bearer_token(), None);
}
