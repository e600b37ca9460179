mod complete;
mod dispatch;
mod payment;
mod reject;
mod sales_return;

pub use complete::CompleteOrderModal;
pub use dispatch::DispatchModal;
pub use payment::PaymentModal;
pub use reject::RejectOrderModal;
pub use sales_return::SalesReturnModal;

/// Optional text field: blank becomes `None`
pub(crate) fn opt_text(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Numeric field; unparsable input reads as zero and fails validation later
pub(crate) fn parse_amount(value: &str) -> f64 {
    value.trim().replace(',', "").parse().unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opt_text() {
        assert_eq!(opt_text("  ".to_string()), None);
        assert_eq!(opt_text(" UTR123 ".to_string()), Some("UTR123".to_string()));
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("1,250.50"), 1250.5);
        assert_eq!(parse_amount(" 40 "), 40.0);
        assert_eq!(parse_amount("abc"), 0.0);
    }
}
