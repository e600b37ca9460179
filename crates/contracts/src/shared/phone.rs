//! Phone number normalization shared by every recipient source.
//!
//! Two forms are in use:
//! - the 10-digit subscriber number, which is the de-duplication key for
//!   every recipient set in the console;
//! - the 12-digit `91`-prefixed MSISDN, which is what the messaging
//!   transport expects.

use thiserror::Error;

/// Country calling code for India
pub const COUNTRY_CODE: &str = "91";

/// Errors raised while accepting a manually typed number
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PhoneError {
    #[error("Please enter a mobile number")]
    Empty,
    #[error("Enter a valid 10-digit mobile number (or 12 digits starting with 91)")]
    InvalidLength { digits: usize },
}

/// Keep only ASCII digits
pub fn digits_only(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// De-duplication key: the last 10 digits of the subscriber number.
///
/// Strips non-digits, drops a leading `91` only when exactly 10 digits
/// remain after it, then drops a single leading `0`.
/// Example: "+91 98765 43210" -> "9876543210", "09876543210" -> "9876543210"
pub fn normalize_phone(raw: &str) -> String {
    let mut digits = digits_only(raw);

    if digits.len() == 12 && digits.starts_with(COUNTRY_CODE) {
        digits = digits[2..].to_string();
    }
    if digits.len() == 11 && digits.starts_with('0') {
        digits = digits[1..].to_string();
    }

    if digits.len() > 10 {
        digits[digits.len() - 10..].to_string()
    } else {
        digits
    }
}

/// Accept a manually typed number.
///
/// Only a 10-digit number or `91` followed by 10 digits is accepted once all
/// other characters are stripped.
pub fn parse_manual_phone(raw: &str) -> Result<String, PhoneError> {
    let digits = digits_only(raw);
    match digits.len() {
        0 => Err(PhoneError::Empty),
        10 => Ok(digits),
        12 if digits.starts_with(COUNTRY_CODE) => Ok(digits[2..].to_string()),
        n => Err(PhoneError::InvalidLength { digits: n }),
    }
}

/// 12-digit `91`-prefixed form required by the messaging transport
pub fn to_msisdn(raw: &str) -> String {
    let local = normalize_phone(raw);
    if local.is_empty() {
        return String::new();
    }
    format!("{}{}", COUNTRY_CODE, local)
}

/// Exactly 10 digits, nothing else
pub fn is_valid_mobile(raw: &str) -> bool {
    let trimmed = raw.trim();
    trimmed.len() == 10 && trimmed.chars().all(|c| c.is_ascii_digit())
}

/// Backend object id: 24 hex characters.
/// Manually entered recipients carry synthetic ids and fail this check.
pub fn is_object_id(id: &str) -> bool {
    id.len() == 24 && id.chars().all(|c| c.is_ascii_hexdigit())
}

/// Masked display form, e.g. "98XXXXXX10"
pub fn mask_phone(raw: &str) -> String {
    let local = normalize_phone(raw);
    if local.len() < 4 {
        return local;
    }
    format!(
        "{}{}{}",
        &local[..2],
        "X".repeat(local.len() - 4),
        &local[local.len() - 2..]
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_variants_agree() {
        assert_eq!(normalize_phone("9876543210"), "9876543210");
        assert_eq!(normalize_phone("919876543210"), "9876543210");
        assert_eq!(normalize_phone("09876543210"), "9876543210");
        assert_eq!(normalize_phone("+91 98765 43210"), "9876543210");
        assert_eq!(normalize_phone("+91-98765-43210"), "9876543210");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        for raw in ["9876543210", "919876543210", "09876543210", "+91 91234 56789"] {
            let once = normalize_phone(raw);
            assert_eq!(normalize_phone(&once), once, "input {}", raw);
        }
    }

    #[test]
    fn test_normalize_keeps_91_prefix_of_ten_digit_number() {
        // A real 10-digit number that happens to start with 91
        assert_eq!(normalize_phone("9123456789"), "9123456789");
    }

    #[test]
    fn test_normalize_short_input_passes_through() {
        assert_eq!(normalize_phone("12345"), "12345");
        assert_eq!(normalize_phone(""), "");
    }

    #[test]
    fn test_parse_manual_phone() {
        assert_eq!(parse_manual_phone("+91 98765 43210"), Ok("9876543210".to_string()));
        assert_eq!(parse_manual_phone("9876543210"), Ok("9876543210".to_string()));
        assert_eq!(parse_manual_phone("   "), Err(PhoneError::Empty));
        assert_eq!(
            parse_manual_phone("09876543210"),
            Err(PhoneError::InvalidLength { digits: 11 })
        );
        assert_eq!(
            parse_manual_phone("449876543210"),
            Err(PhoneError::InvalidLength { digits: 12 })
        );
    }

    #[test]
    fn test_to_msisdn() {
        assert_eq!(to_msisdn("9876543210"), "919876543210");
        assert_eq!(to_msisdn("919876543210"), "919876543210");
        assert_eq!(to_msisdn("0 98765 43210"), "919876543210");
        assert_eq!(to_msisdn(""), "");
    }

    #[test]
    fn test_is_object_id() {
        assert!(is_object_id("64b7f0c2a1e4d3b2c1a09f8e"));
        assert!(!is_object_id("manual-9876543210"));
        assert!(!is_object_id("64b7f0c2a1e4d3b2c1a09f8"));
        assert!(!is_object_id("zzb7f0c2a1e4d3b2c1a09f8e"));
    }

    #[test]
    fn test_is_valid_mobile() {
        assert!(is_valid_mobile("9876543210"));
        assert!(!is_valid_mobile("98765 43210"));
        assert!(!is_valid_mobile("987654321"));
    }

    #[test]
    fn test_mask_phone() {
        assert_eq!(mask_phone("+919876543210"), "98XXXXXX10");
    }
}
