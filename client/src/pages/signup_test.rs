use validator::Validate;

use super::*;

fn draft() -> SignupDraft {
    SignupDraft {
        name: "  Alexandra Montgomery-Smith ".to_owned(),
        email: " alex@example.com ".to_owned(),
        password: "Secret#123".to_owned(),
        address: " 221B Baker Street ".to_owned(),
        role: None,
    }
}

#[test]
fn draft_trims_text_fields_and_keeps_password() {
    let request = draft().to_request();
    assert_eq!(request.name, "Alexandra Montgomery-Smith");
    assert_eq!(request.email, "alex@example.com");
    assert_eq!(request.address, "221B Baker Street");
    assert_eq!(request.password, "Secret#123");
    assert!(request.validate().is_ok());
}

#[test]
fn draft_role_defaults_to_user() {
    assert_eq!(draft().to_request().role, Role::User);
    let owner = SignupDraft { role: Some(Role::Owner), ..draft() };
    assert_eq!(owner.to_request().role, Role::Owner);
}

#[test]
fn follow_up_login_uses_signup_credentials() {
    let credentials = draft().to_request().credentials();
    assert_eq!(credentials.email, "alex@example.com");
    assert_eq!(credentials.password, "Secret#123");
}
