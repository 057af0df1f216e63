use super::*;

#[test]
fn format_cents_zero() {
    assert_eq!(format_cents(0), "$0.00");
}

#[test]
fn format_cents_small_amount_pads_cents() {
    assert_eq!(format_cents(5), "$0.05");
}

#[test]
fn format_cents_groups_thousands() {
    assert_eq!(format_cents(1_234_567), "$12,345.67");
}

#[test]
fn format_cents_groups_millions() {
    assert_eq!(format_cents(987_654_321_00), "$987,654,321.00");
}

#[test]
fn format_cents_negative() {
    assert_eq!(format_cents(-150), "-$1.50");
}
