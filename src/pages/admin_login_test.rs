use super::*;

#[test]
fn validate_login_input_trims_both_fields() {
    assert_eq!(
        validate_login_input("  ops@parlay.example  ", " hunter2 "),
        Ok(("ops@parlay.example".to_owned(), "hunter2".to_owned()))
    );
}

#[test]
fn validate_login_input_requires_email() {
    assert_eq!(
        validate_login_input("   ", "hunter2"),
        Err("Enter both email and password.")
    );
}

#[test]
fn validate_login_input_requires_password() {
    assert_eq!(
        validate_login_input("ops@parlay.example", "   "),
        Err("Enter both email and password.")
    );
}
