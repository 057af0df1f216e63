use super::*;

#[test]
fn status_class_maps_known_statuses() {
    assert_eq!(status_class("open"), "ticket-status--open");
    assert_eq!(status_class("pending"), "ticket-status--pending");
    assert_eq!(status_class("closed"), "ticket-status--closed");
}

#[test]
fn status_class_defaults_unknown_statuses() {
    assert_eq!(status_class("escalated"), "ticket-status--unknown");
    assert_eq!(status_class(""), "ticket-status--unknown");
}
