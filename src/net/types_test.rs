use super::*;

#[test]
fn session_user_roles_default_to_empty_when_absent() {
    let json = r#"{
        "id": "u1",
        "email": "ops@example.com",
        "name": "Ops",
        "is_admin": true
    }"#;
    let user: SessionUser = serde_json::from_str(json).expect("valid session user");
    assert!(user.is_admin);
    assert!(user.roles.is_empty());
}

#[test]
fn session_response_without_user_deserializes_to_none() {
    let json = r#"{ "user": null }"#;
    let resp: SessionResponse = serde_json::from_str(json).expect("valid session response");
    assert!(resp.user.is_none());
}

#[test]
fn session_response_with_user_carries_roles() {
    let json = r#"{
        "user": {
            "id": "u2",
            "email": "support@example.com",
            "name": "Sam",
            "is_admin": true,
            "roles": ["support", "moderator"]
        }
    }"#;
    let resp: SessionResponse = serde_json::from_str(json).expect("valid session response");
    let user = resp.user.expect("user present");
    assert_eq!(user.roles, vec!["support".to_owned(), "moderator".to_owned()]);
}

#[test]
fn game_summary_is_new_defaults_to_false() {
    let json = r#"{
        "id": "g1",
        "name": "Neon Rush",
        "provider": "Starlight Studios",
        "rtp": 96.5,
        "is_live": false
    }"#;
    let game: GameSummary = serde_json::from_str(json).expect("valid game summary");
    assert!(!game.is_new);
    assert!((game.rtp - 96.5).abs() < f64::EPSILON);
}

#[test]
fn wallet_summary_round_trips() {
    let summary = WalletSummary {
        total_balance_cents: 1_234_567,
        player_count: 42,
        pending_withdrawals: 3,
    };
    let json = serde_json::to_string(&summary).expect("serialize");
    let back: WalletSummary = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(back, summary);
}

#[test]
fn support_ticket_deserializes() {
    let json = r#"{
        "id": "t1",
        "subject": "Withdrawal stuck",
        "status": "open",
        "opened_by": "player77",
        "opened_at": 1700000000000
    }"#;
    let ticket: SupportTicket = serde_json::from_str(json).expect("valid ticket");
    assert_eq!(ticket.status, "open");
    assert_eq!(ticket.opened_by, "player77");
}
