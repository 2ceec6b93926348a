//! Indonesian rupiah formatting. Prices are whole rupiah; thousands are
//! grouped with dots, e.g. `Rp 50.000`.

pub fn format_idr(amount: u64) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }
    format!("Rp {grouped}")
}

/// Inverse of [`format_idr`]. Ignores the `Rp` prefix, whitespace and
/// grouping dots.
pub fn parse_idr(text: &str) -> Option<u64> {
    let digits: String = text
        .trim()
        .trim_start_matches("Rp")
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '.')
        .collect();
    digits.parse().ok()
}
