use super::*;
use crate::net::types::SessionUser;

fn resolved_admin(roles: &[&str]) -> SessionState {
    SessionState::signed_in(SessionUser {
        id: "u1".to_owned(),
        email: "ops@example.com".to_owned(),
        name: "Ops".to_owned(),
        is_admin: true,
        roles: roles.iter().map(|r| (*r).to_owned()).collect(),
    })
}

#[test]
fn guard_policy_records_role_and_fallback_presence() {
    let policy = guard_policy(Some("support".to_owned()), true);
    assert_eq!(policy.required_role.as_deref(), Some("support"));
    assert!(policy.has_fallback);

    let bare = guard_policy(None, false);
    assert!(bare.required_role.is_none());
    assert!(!bare.has_fallback);
}

#[test]
fn role_restricted_policy_denies_admin_without_role() {
    let state = resolved_admin(&["moderator"]);
    let policy = guard_policy(Some("support".to_owned()), false);
    let decision = access::evaluate(state.loading, &state.identity(), &policy);
    assert_eq!(decision, AccessDecision::Denied);
}

#[test]
fn bare_policy_grants_any_resolved_admin() {
    let state = resolved_admin(&[]);
    let policy = guard_policy(None, false);
    let decision = access::evaluate(state.loading, &state.identity(), &policy);
    assert_eq!(decision, AccessDecision::Granted);
}

#[test]
fn fallback_policy_prefers_fallback_over_redirect_when_signed_out() {
    let state = SessionState::signed_out();
    let policy = guard_policy(Some("support".to_owned()), true);
    let decision = access::evaluate(state.loading, &state.identity(), &policy);
    assert_eq!(decision, AccessDecision::Fallback);
}

#[test]
fn unresolved_session_keeps_guard_loading() {
    let state = SessionState::default();
    let policy = guard_policy(None, false);
    let decision = access::evaluate(state.loading, &state.identity(), &policy);
    assert_eq!(decision, AccessDecision::Loading);
}
