/// Formats a count with `,` between thousands groups: 1234567 -> "1,234,567".
pub fn format_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut result = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result
}

/// Drops the fractional part (toward zero) and groups thousands.
pub fn format_truncated(value: f64) -> String {
    let whole = value.trunc();
    // `as` saturates and maps NaN to 0
    let grouped = format_thousands(whole.abs() as u64);
    if whole < 0.0 {
        return format!("-{}", grouped);
    }
    grouped
}
