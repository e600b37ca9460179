//! Indian digit grouping: the last three digits, then groups of two
//! (12,34,567.89).

fn group_indian(integer: &str) -> String {
    if integer.len() <= 3 {
        return integer.to_string();
    }
    let (head, tail) = integer.split_at(integer.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();
    format!("{},{}", groups.join(","), tail)
}

/// Number with Indian grouping and `decimals` fraction digits
pub fn format_indian(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.*}", decimals, value.abs());
    let (integer, fraction) = match formatted.split_once('.') {
        Some((i, f)) => (i.to_string(), Some(f.to_string())),
        None => (formatted.clone(), None),
    };
    let sign = if value < 0.0 && formatted.chars().any(|c| c != '0' && c != '.') {
        "-"
    } else {
        ""
    };
    match fraction {
        Some(f) => format!("{}{}.{}", sign, group_indian(&integer), f),
        None => format!("{}{}", sign, group_indian(&integer)),
    }
}

/// Rupee amount, e.g. "₹12,34,567.89"
pub fn format_rupees(value: f64) -> String {
    let text = format_indian(value, 2);
    match text.strip_prefix('-') {
        Some(rest) => format!("-₹{}", rest),
        None => format!("₹{}", text),
    }
}

/// Quantity without trailing zeros, e.g. 12.5 -> "12.5", 3.0 -> "3"
pub fn format_quantity(value: f64) -> String {
    let text = format!("{:.2}", value);
    text.trim_end_matches('0').trim_end_matches('.').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indian_grouping() {
        assert_eq!(format_indian(1234567.891, 2), "12,34,567.89");
        assert_eq!(format_indian(999.0, 0), "999");
        assert_eq!(format_indian(1000.0, 0), "1,000");
        assert_eq!(format_indian(100000.0, 0), "1,00,000");
    }

    #[test]
    fn test_rupees() {
        assert_eq!(format_rupees(1500.5), "₹1,500.50");
        assert_eq!(format_rupees(-2500.0), "-₹2,500.00");
        assert_eq!(format_rupees(0.0), "₹0.00");
    }

    #[test]
    fn test_quantity() {
        assert_eq!(format_quantity(12.5), "12.5");
        assert_eq!(format_quantity(3.0), "3");
    }
}
