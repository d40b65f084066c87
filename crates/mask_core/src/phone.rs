//! Phone number formatting and validation (Brazilian numbering).
//!
//! Ten digits are a fixed line (`(dd) dddd-dddd`); eleven digits are a
//! mobile number with its leading 9 (`(dd) ddddd-dddd`). The template
//! grows with the input, so a half-typed number still renders sensibly.

use crate::digits::only_digits;

/// Progressively format a phone number.
///
/// Digits beyond the 11th are dropped. The area code parentheses appear
/// once a third digit exists; the hyphen moves right when the 11th digit
/// turns a fixed-line layout into a mobile one.
///
/// # Examples
///
/// ```
/// use mask_core::format_phone;
///
/// assert_eq!(format_phone("11"), "11");
/// assert_eq!(format_phone("1198"), "(11) 98");
/// assert_eq!(format_phone("1187654321"), "(11) 8765-4321");
/// assert_eq!(format_phone("11987654321"), "(11) 98765-4321");
/// ```
pub fn format_phone(value: &str) -> String {
    let digits = only_digits(value);
    let d = &digits[..digits.len().min(11)];
    match d.len() {
        0..=2 => d.to_string(),
        3..=6 => format!("({}) {}", &d[..2], &d[2..]),
        7..=10 => format!("({}) {}-{}", &d[..2], &d[2..6], &d[6..]),
        _ => format!("({}) {}-{}", &d[..2], &d[2..7], &d[7..]),
    }
}

/// A phone number is valid iff it has exactly 10 or 11 digits.
///
/// # Examples
///
/// ```
/// use mask_core::validate_phone;
///
/// assert!(validate_phone("(11) 8765-4321"));
/// assert!(validate_phone("(11) 98765-4321"));
/// assert!(!validate_phone("(11) 8765"));
/// ```
pub fn validate_phone(value: &str) -> bool {
    let len = only_digits(value).len();
    len == 10 || len == 11
}
