//! Rupee display formatting: Indian digit grouping (12,34,567), lakh/crore
//! abbreviations for large amounts, signed change strings.

/// Group an unsigned whole-rupee amount Indian style: the last three digits,
/// then pairs. 1234567 -> "12,34,567".
fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups = Vec::new();
    let head_bytes = head.as_bytes();
    let mut end = head_bytes.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();
    format!("{},{}", groups.join(","), tail)
}

/// "₹12,34,567.89"
pub fn format_inr(amount: f64) -> String {
    let sign = if amount < 0.0 { "-" } else { "" };
    let abs = amount.abs();
    let whole = abs.trunc() as u64;
    let paise = ((abs - abs.trunc()) * 100.0).round() as u64;
    // rounding paise can carry into the whole part
    let (whole, paise) = if paise >= 100 {
        (whole + 1, 0)
    } else {
        (whole, paise)
    };
    format!("{}₹{}.{:02}", sign, group_indian(&whole.to_string()), paise)
}

/// "₹12,34,568", rounded to the nearest rupee.
pub fn format_inr_whole(amount: f64) -> String {
    let sign = if amount < 0.0 { "-" } else { "" };
    let whole = amount.abs().round() as u64;
    format!("{}₹{}", sign, group_indian(&whole.to_string()))
}

/// Abbreviate to crore/lakh for large amounts, grouped rupees otherwise.
pub fn format_inr_compact(amount: f64) -> String {
    let sign = if amount < 0.0 { "-" } else { "" };
    let abs = amount.abs();
    if abs >= 1_00_00_000.0 {
        format!("{}₹{:.2} Cr", sign, abs / 1_00_00_000.0)
    } else if abs >= 1_00_000.0 {
        format!("{}₹{:.2} L", sign, abs / 1_00_000.0)
    } else {
        format_inr_whole(amount)
    }
}

/// "+0.42%" / "-0.18%"
pub fn format_signed_percent(percentage: f64) -> String {
    let sign = if percentage >= 0.0 { "+" } else { "" };
    format!("{}{:.2}%", sign, percentage)
}

/// Signed rupee change for the dashboard: "+₹1,245 today".
pub fn format_signed_inr(amount: f64) -> String {
    if amount >= 0.0 {
        format!("+{}", format_inr_whole(amount))
    } else {
        format_inr_whole(amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indian_grouping() {
        assert_eq!(format_inr_whole(0.0), "₹0");
        assert_eq!(format_inr_whole(999.0), "₹999");
        assert_eq!(format_inr_whole(1000.0), "₹1,000");
        assert_eq!(format_inr_whole(12345.0), "₹12,345");
        assert_eq!(format_inr_whole(123456.0), "₹1,23,456");
        assert_eq!(format_inr_whole(1234567.0), "₹12,34,567");
        assert_eq!(format_inr_whole(123456789.0), "₹12,34,56,789");
    }

    #[test]
    fn paise_and_rounding() {
        assert_eq!(format_inr(1234567.89), "₹12,34,567.89");
        assert_eq!(format_inr(42.5), "₹42.50");
        assert_eq!(format_inr(9.999), "₹10.00");
    }

    #[test]
    fn negative_amounts_keep_the_sign_outside() {
        assert_eq!(format_inr_whole(-1234.0), "-₹1,234");
        assert_eq!(format_inr(-42.25), "-₹42.25");
    }

    #[test]
    fn lakh_crore_abbreviations() {
        assert_eq!(format_inr_compact(25_000.0), "₹25,000");
        assert_eq!(format_inr_compact(2_50_000.0), "₹2.50 L");
        assert_eq!(format_inr_compact(1_50_00_000.0), "₹1.50 Cr");
        assert_eq!(format_inr_compact(-3_20_000.0), "-₹3.20 L");
    }

    #[test]
    fn signed_strings() {
        assert_eq!(format_signed_percent(0.42), "+0.42%");
        assert_eq!(format_signed_percent(-0.18), "-0.18%");
        assert_eq!(format_signed_inr(1245.0), "+₹1,245");
        assert_eq!(format_signed_inr(-310.0), "-₹310");
    }
}
