//! CEP (postal code) formatting and validation.
//!
//! Display template: `ddddd-ddd`. No check digits; validity is length.

use crate::digits::only_digits;

/// Format a CEP: raw digits up to five, `ddddd-ddd` beyond that.
///
/// Digits beyond the 8th are dropped.
///
/// # Examples
///
/// ```
/// use mask_core::format_cep;
///
/// assert_eq!(format_cep("12345"), "12345");
/// assert_eq!(format_cep("123456"), "12345-6");
/// assert_eq!(format_cep("12345678"), "12345-678");
/// assert_eq!(format_cep("12345-678"), "12345-678");
/// ```
pub fn format_cep(value: &str) -> String {
    let digits = only_digits(value);
    if digits.len() <= 5 {
        return digits.into_owned();
    }
    let d = &digits[..digits.len().min(8)];
    format!("{}-{}", &d[..5], &d[5..])
}

/// A CEP is valid iff it has exactly 8 digits.
///
/// # Examples
///
/// ```
/// use mask_core::validate_cep;
///
/// assert!(validate_cep("12345-678"));
/// assert!(validate_cep("12345678"));
/// assert!(!validate_cep("12345"));
/// ```
pub fn validate_cep(value: &str) -> bool {
    only_digits(value).len() == 8
}
