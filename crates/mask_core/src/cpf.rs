//! CPF (individual taxpayer id) formatting and validation.
//!
//! Display template: `ddd.ddd.ddd-dd` (11 digits, two trailing check
//! digits). Formatting is progressive: partial input stops at whichever
//! template segment fits, so the mask grows as the user types.

use crate::digits::{all_same_digit, digit_values, only_digits};

/// Progressively format a CPF.
///
/// Non-digits are stripped first; digits beyond the 11th are dropped.
/// No group is ever over-filled, so the output is stable under
/// re-formatting of its own result.
///
/// # Examples
///
/// ```
/// use mask_core::format_cpf;
///
/// assert_eq!(format_cpf("529"), "529");
/// assert_eq!(format_cpf("529982"), "529.982");
/// assert_eq!(format_cpf("529982247"), "529.982.247");
/// assert_eq!(format_cpf("52998224725"), "529.982.247-25");
/// assert_eq!(format_cpf("529.982.247-25"), "529.982.247-25");
/// ```
pub fn format_cpf(value: &str) -> String {
    let digits = only_digits(value);
    let d = &digits[..digits.len().min(11)];
    match d.len() {
        0..=3 => d.to_string(),
        4..=6 => format!("{}.{}", &d[..3], &d[3..]),
        7..=9 => format!("{}.{}.{}", &d[..3], &d[3..6], &d[6..]),
        _ => format!("{}.{}.{}-{}", &d[..3], &d[3..6], &d[6..9], &d[9..]),
    }
}

/// Validate a CPF by its two check digits.
///
/// Requires exactly 11 digits after extraction and rejects repeated-digit
/// sequences (`"111.111.111-11"` passes the checksum but is not a real
/// document). The first check digit weighs digits 0..=8 with 10..2, the
/// second weighs digits 0..=9 with 11..2; both reduce mod 11 with 10 and
/// 11 collapsing to 0.
///
/// # Examples
///
/// ```
/// use mask_core::validate_cpf;
///
/// assert!(validate_cpf("529.982.247-25"));
/// assert!(validate_cpf("52998224725"));
/// assert!(!validate_cpf("52998224724"));
/// assert!(!validate_cpf("00000000000"));
/// assert!(!validate_cpf("529982247"));
/// ```
pub fn validate_cpf(value: &str) -> bool {
    let digits = only_digits(value);
    if digits.len() != 11 || all_same_digit(&digits) {
        return false;
    }

    let d = digit_values(&digits);
    check_digit(&d, 9) == d[9] && check_digit(&d, 10) == d[10]
}

/// Check digit over the first `len` digits, weighted `len + 1` down to 2.
fn check_digit(d: &[u32], len: usize) -> u32 {
    let sum: u32 = d[..len]
        .iter()
        .enumerate()
        .map(|(i, &v)| v * (len as u32 + 1 - i as u32))
        .sum();

    let digit = 11 - sum % 11;
    if digit >= 10 { 0 } else { digit }
}
