//! Combined CNPJ/CPF strategy.
//!
//! A single field that accepts either document and detects which one
//! purely from how many digits have been typed so far: the CPF template
//! while the count fits a CPF (≤ 11), the CNPJ template beyond that.

use crate::cnpj::{format_cnpj, validate_cnpj};
use crate::cpf::{format_cpf, validate_cpf};
use crate::digits::only_digits;

/// Format as CPF while at most 11 digits are present, as CNPJ otherwise.
///
/// # Examples
///
/// ```
/// use mask_core::format_cnpj_cpf;
///
/// assert_eq!(format_cnpj_cpf("52998224725"), "529.982.247-25");
/// assert_eq!(format_cnpj_cpf("11222333000181"), "11.222.333/0001-81");
/// // 12 digits: already on the CNPJ template, still partial.
/// assert_eq!(format_cnpj_cpf("112223330001"), "11.222.333/0001");
/// ```
pub fn format_cnpj_cpf(value: &str) -> String {
    let digits = only_digits(value);
    if digits.len() <= 11 {
        format_cpf(&digits)
    } else {
        format_cnpj(&digits)
    }
}

/// Validate as CPF at exactly 11 digits, as CNPJ at exactly 14.
///
/// Any other digit count is invalid: a 12- or 13-digit value is a
/// document still being typed, not a shorter document of the other kind.
///
/// # Examples
///
/// ```
/// use mask_core::validate_cnpj_cpf;
///
/// assert!(validate_cnpj_cpf("529.982.247-25"));
/// assert!(validate_cnpj_cpf("11.222.333/0001-81"));
/// assert!(!validate_cnpj_cpf("11.222.333/0001"));
/// ```
pub fn validate_cnpj_cpf(value: &str) -> bool {
    let digits = only_digits(value);
    match digits.len() {
        11 => validate_cpf(&digits),
        14 => validate_cnpj(&digits),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_cpf_up_to_eleven_digits() {
        for raw in ["", "5", "529982", "52998224725"] {
            assert_eq!(format_cnpj_cpf(raw), format_cpf(raw), "raw: {raw:?}");
        }
    }

    #[test]
    fn matches_cnpj_from_twelve_digits() {
        for raw in ["112223330001", "1122233300018", "11222333000181"] {
            assert_eq!(format_cnpj_cpf(raw), format_cnpj(raw), "raw: {raw:?}");
        }
    }

    #[test]
    fn twelve_and_thirteen_digits_use_partial_cnpj_template() {
        assert_eq!(format_cnpj_cpf("112223330001"), "11.222.333/0001");
        assert_eq!(format_cnpj_cpf("1122233300018"), "11.222.333/0001-8");
    }

    #[test]
    fn switches_template_at_the_twelfth_digit() {
        // Same leading digits, one keystroke apart.
        assert_eq!(format_cnpj_cpf("11222333000"), "112.223.330-00");
        assert_eq!(format_cnpj_cpf("112223330001"), "11.222.333/0001");
    }

    #[test]
    fn validate_dispatches_by_length() {
        assert!(validate_cnpj_cpf("52998224725"));
        assert!(validate_cnpj_cpf("11222333000181"));
        assert!(!validate_cnpj_cpf("52998224724"));
        assert!(!validate_cnpj_cpf("11222333000180"));
    }

    #[test]
    fn validate_rejects_intermediate_lengths() {
        assert!(!validate_cnpj_cpf(""));
        assert!(!validate_cnpj_cpf("529982247"));
        assert!(!validate_cnpj_cpf("112223330001"));
        assert!(!validate_cnpj_cpf("1122233300018"));
        assert!(!validate_cnpj_cpf("112223330001811"));
    }
}
