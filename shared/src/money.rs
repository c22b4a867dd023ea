//! Rupee display helpers. Prices travel as integer paise; only formatting
//! happens client-side.

/// Formats paise as a rupee string with Indian digit grouping,
/// e.g. `123456789` → `"₹12,34,567.89"`.
pub fn format_paise(paise: u64) -> String {
    let rupees = paise / 100;
    let fraction = paise % 100;
    format!("₹{}.{fraction:02}", group_indian(rupees))
}

// Indian grouping: last three digits, then groups of two.
fn group_indian(value: u64) -> String {
    let digits = value.to_string();
    if digits.len() <= 3 {
        return digits;
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut grouped = Vec::new();
    let head_bytes = head.as_bytes();
    let mut index = head_bytes.len();
    while index > 2 {
        grouped.push(&head[index - 2..index]);
        index -= 2;
    }
    grouped.push(&head[..index]);
    grouped.reverse();
    format!("{},{tail}", grouped.join(","))
}

/// Parses a rupee amount typed into a form ("149", "149.5", "149.50") into
/// paise. Rejects negative amounts, more than two decimals, and non-numeric
/// input.
pub fn parse_rupees(input: &str) -> Option<u64> {
    let trimmed = input.trim().strip_prefix('₹').unwrap_or_else(|| input.trim());
    let trimmed = trimmed.replace(',', "");
    let mut parts = trimmed.splitn(2, '.');
    let whole = parts.next()?;
    if whole.is_empty() || !whole.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let rupees: u64 = whole.parse().ok()?;
    let paise = match parts.next() {
        None | Some("") => 0,
        Some(frac) if frac.len() <= 2 && frac.bytes().all(|b| b.is_ascii_digit()) => {
            let value: u64 = frac.parse().ok()?;
            if frac.len() == 1 {
                value * 10
            } else {
                value
            }
        }
        Some(_) => return None,
    };
    rupees.checked_mul(100)?.checked_add(paise)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_with_indian_grouping() {
        assert_eq!(format_paise(0), "₹0.00");
        assert_eq!(format_paise(123450), "₹1,234.50");
        assert_eq!(format_paise(123456789), "₹12,34,567.89");
        assert_eq!(format_paise(100000000000), "₹1,00,00,00,000.00");
    }

    #[test]
    fn parses_common_form_inputs() {
        assert_eq!(parse_rupees("149"), Some(14900));
        assert_eq!(parse_rupees("149.5"), Some(14950));
        assert_eq!(parse_rupees(" ₹1,234.05 "), Some(123405));
        assert_eq!(parse_rupees("149.505"), None);
        assert_eq!(parse_rupees("-5"), None);
        assert_eq!(parse_rupees("abc"), None);
        assert_eq!(parse_rupees(""), None);
    }

    #[test]
    fn parse_and_format_agree() {
        let paise = parse_rupees("2,499.99").expect("parse");
        assert_eq!(format_paise(paise), "₹2,499.99");
    }
}
