//! HTML escaping and value formatting.

/// Escape a user-supplied string for embedding in HTML text or attributes.
pub fn escape_html(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Format a price in MYR with thousands separators, e.g. `RM 1,500,000`.
///
/// Non-integer prices keep two decimals: `RM 1,234.50`.
pub fn format_price(price: f64) -> String {
    let whole = price.trunc() as i64;
    let fraction = (price.fract() * 100.0).round() as i64;

    let digits = whole.abs().to_string();
    let mut grouped = String::new();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    let sign = if whole < 0 { "-" } else { "" };

    if fraction == 0 {
        format!("RM {}{}", sign, grouped)
    } else {
        format!("RM {}{}.{:02}", sign, grouped, fraction.abs())
    }
}
