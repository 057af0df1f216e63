use super::*;

#[test]
fn stat_lines_format_balance_and_counts() {
    let summary = WalletSummary {
        total_balance_cents: 1_234_567,
        player_count: 42,
        pending_withdrawals: 3,
    };
    let lines = stat_lines(&summary);
    assert_eq!(lines[0], ("Total player balance", "$12,345.67".to_owned()));
    assert_eq!(lines[1], ("Funded players", "42".to_owned()));
    assert_eq!(lines[2], ("Pending withdrawals", "3".to_owned()));
}
