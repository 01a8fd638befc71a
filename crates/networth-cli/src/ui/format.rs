//! String formatting utilities for UI rendering.

use crate::constants::SHORT_ID_LEN;

/// Truncate a string to max length, adding ellipsis if needed.
pub fn truncate(s: &str, max_len: usize) -> String {
    let char_count = s.chars().count();
    if char_count <= max_len {
        return s.to_string();
    }
    if max_len <= 3 {
        return s.chars().take(max_len).collect();
    }
    let truncated: String = s.chars().take(max_len - 3).collect();
    format!("{}...", truncated)
}

/// First characters of a record id.
pub fn short_id(id: &str) -> String {
    id.chars().take(SHORT_ID_LEN).collect()
}

/// Format an amount.
///
/// Pretty: currency symbol, thousands separators, two decimals
/// (`-£1,234.50`). Plain: bare number with two decimals (`-1234.50`).
pub fn money(value: f64, currency: &str, pretty: bool) -> String {
    if !pretty {
        return format!("{:.2}", value);
    }
    let sign = if value < 0.0 { "-" } else { "" };
    let fixed = format!("{:.2}", value.abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((&fixed, "00"));
    format!("{}{}{}.{}", sign, currency, group_thousands(whole), cents)
}

/// Format a percentage with two decimals, e.g. `12.50%`.
pub fn percent(value: f64) -> String {
    format!("{:.2}%", value)
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
