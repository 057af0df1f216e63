use super::*;

#[test]
fn login_failed_message_maps_unauthorized_to_friendly_text() {
    assert_eq!(login_failed_message(401), "Invalid email or password.");
}

#[test]
fn login_failed_message_formats_other_statuses() {
    assert_eq!(login_failed_message(503), "login failed: 503");
}

#[test]
fn games_request_failed_message_formats_status() {
    assert_eq!(games_request_failed_message(500), "game catalog request failed: 500");
}

#[test]
fn wallets_request_failed_message_formats_status() {
    assert_eq!(wallets_request_failed_message(403), "wallet summary request failed: 403");
}

#[test]
fn tickets_request_failed_message_formats_status() {
    assert_eq!(tickets_request_failed_message(401), "ticket request failed: 401");
}
