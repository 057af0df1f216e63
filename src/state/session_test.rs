use super::*;

fn support_admin() -> SessionUser {
    SessionUser {
        id: "u1".to_owned(),
        email: "support@example.com".to_owned(),
        name: "Sam".to_owned(),
        is_admin: true,
        roles: vec!["support".to_owned(), "support".to_owned(), "finance".to_owned()],
    }
}

#[test]
fn default_state_is_loading_with_no_user() {
    let state = SessionState::default();
    assert!(state.loading);
    assert!(state.user.is_none());
}

#[test]
fn signed_out_is_terminal_and_userless() {
    let state = SessionState::signed_out();
    assert!(!state.loading);
    assert!(state.user.is_none());
}

#[test]
fn signed_in_is_terminal_with_user() {
    let state = SessionState::signed_in(support_admin());
    assert!(!state.loading);
    assert!(state.user.is_some());
}

#[test]
fn identity_of_missing_user_is_fully_absent() {
    let identity = SessionState::signed_out().identity();
    assert!(!identity.user_present);
    assert!(!identity.is_admin);
    assert!(identity.roles.is_empty());
}

#[test]
fn identity_projects_admin_flag_and_dedupes_roles() {
    let identity = SessionState::signed_in(support_admin()).identity();
    assert!(identity.user_present);
    assert!(identity.is_admin);
    assert_eq!(identity.roles.len(), 2);
    assert!(identity.roles.contains("support"));
    assert!(identity.roles.contains("finance"));
}

#[test]
fn identity_of_non_admin_user_keeps_user_present() {
    let mut user = support_admin();
    user.is_admin = false;
    let identity = SessionState::signed_in(user).identity();
    assert!(identity.user_present);
    assert!(!identity.is_admin);
}
