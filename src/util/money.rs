//! Currency display formatting for wallet figures.

#[cfg(test)]
#[path = "money_test.rs"]
mod money_test;

/// Format an integer cent amount as a dollar string with thousands
/// separators, e.g. `1234567` → `"$12,345.67"`.
#[must_use]
pub fn format_cents(cents: i64) -> String {
    let negative = cents < 0;
    let magnitude = cents.unsigned_abs();
    let dollars = magnitude / 100;
    let remainder = magnitude % 100;

    let digits = dollars.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if negative { "-" } else { "" };
    format!("{sign}${grouped}.{remainder:02}")
}
