//! Host-side number formatting. The browser build prefers `Intl.NumberFormat` and
//! falls back to these.

/// Western digit grouping: `1234567` → `1,234,567`.
#[must_use]
pub fn group_thousands(amount: u64) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Indian digit grouping: the last three digits, then pairs (`10000000` → `1,00,00,000`).
#[must_use]
pub fn group_indian(amount: u64) -> String {
    let digits = amount.to_string();
    if digits.len() <= 3 {
        return digits;
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut out = String::with_capacity(digits.len() + digits.len() / 2);
    for (idx, ch) in head.chars().enumerate() {
        if idx > 0 && (head.len() - idx) % 2 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out.push(',');
    out.push_str(tail);
    out
}

/// Whole-rupee amount with the rupee sign and Indian grouping, no fraction digits.
#[must_use]
pub fn format_inr(amount: u64) -> String {
    format!("₹{}", group_indian(amount))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_by_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1800), "1,800");
        assert_eq!(group_thousands(1_234_567), "1,234,567");
    }

    #[test]
    fn groups_indian_style() {
        assert_eq!(group_indian(950), "950");
        assert_eq!(group_indian(4000), "4,000");
        assert_eq!(group_indian(100_000), "1,00,000");
        assert_eq!(group_indian(12_345_678), "1,23,45,678");
        assert_eq!(format_inr(2300), "₹2,300");
    }
}
