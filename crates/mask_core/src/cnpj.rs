//! CNPJ (company taxpayer id) formatting and validation.
//!
//! Display template: `dd.ddd.ddd/dddd-dd` (14 digits, two trailing check
//! digits). The checksum weights cycle 2..=9 from the rightmost digit,
//! which the reference algorithm expresses as a decrementing position that
//! resets to 9 when it drops below 2.

use crate::digits::{all_same_digit, digit_values, only_digits};

/// Progressively format a CNPJ.
///
/// Non-digits are stripped first; digits beyond the 14th are dropped.
///
/// # Examples
///
/// ```
/// use mask_core::format_cnpj;
///
/// assert_eq!(format_cnpj("11"), "11");
/// assert_eq!(format_cnpj("11222"), "11.222");
/// assert_eq!(format_cnpj("11222333"), "11.222.333");
/// assert_eq!(format_cnpj("112223330001"), "11.222.333/0001");
/// assert_eq!(format_cnpj("11222333000181"), "11.222.333/0001-81");
/// ```
pub fn format_cnpj(value: &str) -> String {
    let digits = only_digits(value);
    let d = &digits[..digits.len().min(14)];
    match d.len() {
        0..=2 => d.to_string(),
        3..=5 => format!("{}.{}", &d[..2], &d[2..]),
        6..=8 => format!("{}.{}.{}", &d[..2], &d[2..5], &d[5..]),
        9..=12 => format!("{}.{}.{}/{}", &d[..2], &d[2..5], &d[5..8], &d[8..]),
        _ => format!(
            "{}.{}.{}/{}-{}",
            &d[..2],
            &d[2..5],
            &d[5..8],
            &d[8..12],
            &d[12..]
        ),
    }
}

/// Validate a CNPJ by its two check digits.
///
/// Requires exactly 14 digits after extraction and rejects repeated-digit
/// sequences. The first check digit covers the leading 12 digits, the
/// second covers 13 (including the first check digit).
///
/// # Examples
///
/// ```
/// use mask_core::validate_cnpj;
///
/// assert!(validate_cnpj("11.222.333/0001-81"));
/// assert!(validate_cnpj("11222333000181"));
/// assert!(!validate_cnpj("11222333000180"));
/// assert!(!validate_cnpj("11111111111111"));
/// ```
pub fn validate_cnpj(value: &str) -> bool {
    let digits = only_digits(value);
    if digits.len() != 14 || all_same_digit(&digits) {
        return false;
    }

    let d = digit_values(&digits);
    check_digit(&d, 12) == d[12] && check_digit(&d, 13) == d[13]
}

/// Check digit over the first `len` digits with the cycling weight scheme.
///
/// The weight starts at `len - 7`, decrements per digit, and wraps from 2
/// back to 9.
fn check_digit(d: &[u32], len: usize) -> u32 {
    let mut pos = (len - 7) as u32;
    let mut sum = 0u32;
    for &v in &d[..len] {
        sum += v * pos;
        pos = if pos == 2 { 9 } else { pos - 1 };
    }

    let digit = 11 - sum % 11;
    if digit >= 10 { 0 } else { digit }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_progressive_stages() {
        assert_eq!(format_cnpj(""), "");
        assert_eq!(format_cnpj("1"), "1");
        assert_eq!(format_cnpj("112"), "11.2");
        assert_eq!(format_cnpj("112223"), "11.222.3");
        assert_eq!(format_cnpj("112223330"), "11.222.333/0");
        assert_eq!(format_cnpj("1122233300018"), "11.222.333/0001-8");
        assert_eq!(format_cnpj("11222333000181"), "11.222.333/0001-81");
    }

    #[test]
    fn format_drops_excess_digits() {
        assert_eq!(format_cnpj("112223330001810000"), "11.222.333/0001-81");
    }

    #[test]
    fn format_ignores_junk() {
        assert_eq!(format_cnpj("11.222.333/0001-81"), "11.222.333/0001-81");
        assert_eq!(format_cnpj("x11y222z333w0001v81"), "11.222.333/0001-81");
    }

    #[test]
    fn format_idempotent() {
        for raw in ["", "11", "11222", "112223330001", "11222333000181"] {
            let once = format_cnpj(raw);
            assert_eq!(format_cnpj(&once), once, "raw: {raw:?}");
        }
    }

    #[test]
    fn validate_known_documents() {
        assert!(validate_cnpj("11222333000181"));
        assert!(validate_cnpj("12345678000195"));
        assert!(validate_cnpj("11.222.333/0001-81"));
    }

    #[test]
    fn validate_rejects_bad_check_digits() {
        assert!(!validate_cnpj("11222333000182"));
        assert!(!validate_cnpj("11222333000191"));
        assert!(!validate_cnpj("12345678000190"));
    }

    #[test]
    fn validate_rejects_repeated_digits() {
        assert!(!validate_cnpj("11111111111111"));
        assert!(!validate_cnpj("00000000000000"));
    }

    #[test]
    fn validate_rejects_wrong_length() {
        assert!(!validate_cnpj(""));
        assert!(!validate_cnpj("1122233300018"));
        assert!(!validate_cnpj("112223330001811"));
    }
}
