//! Naira display formatting.
//!
//! Account balances are whole-currency integers; the back-office shows them
//! with thousands separators and a `.00` suffix.

/// Currency symbol used throughout the back-office.
pub const NAIRA: &str = "₦";

/// Format a whole-naira amount for display (e.g. `₦1,234,567.00`).
///
/// ```
/// use lendsqr_core::format_naira;
///
/// assert_eq!(format_naira(0), "₦0.00");
/// assert_eq!(format_naira(1_234_567), "₦1,234,567.00");
/// ```
#[must_use]
pub fn format_naira(amount: u64) -> String {
    format!("{NAIRA}{}.00", group_thousands(amount))
}

/// Insert `,` between groups of three digits.
#[must_use]
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1_000), "1,000");
        assert_eq!(group_thousands(50_000), "50,000");
        assert_eq!(group_thousands(1_009_999), "1,009,999");
    }
}
