//! Digit extraction shared by every masking strategy.

use std::borrow::Cow;

/// Strip every character that is not an ASCII digit.
///
/// Returns a `Cow::Borrowed` if the string is already digits-only
/// (fast path), or a `Cow::Owned` with non-digits removed. Unicode
/// digits outside ASCII are dropped like any other character.
///
/// # Examples
///
/// ```
/// use mask_core::only_digits;
///
/// assert_eq!(only_digits("12345678901"), "12345678901");
/// assert_eq!(only_digits("529.982.247-25"), "52998224725");
/// assert_eq!(only_digits("(11) 98765-4321"), "11987654321");
/// assert_eq!(only_digits("abc"), "");
/// ```
pub fn only_digits(s: &str) -> Cow<'_, str> {
    if s.bytes().all(|b| b.is_ascii_digit()) {
        return Cow::Borrowed(s);
    }
    Cow::Owned(s.chars().filter(char::is_ascii_digit).collect())
}

/// Returns `true` if `digits` is non-empty and every byte equals the first.
///
/// Callers pass pre-extracted digit strings; repeated-digit sequences like
/// `"11111111111"` satisfy the CPF/CNPJ checksums but are not real
/// documents, so validators reject them up front.
pub(crate) fn all_same_digit(digits: &str) -> bool {
    let mut bytes = digits.bytes();
    let Some(first) = bytes.next() else {
        return false;
    };
    bytes.all(|b| b == first)
}

/// Numeric values of a pre-extracted ASCII digit string.
pub(crate) fn digit_values(digits: &str) -> Vec<u32> {
    digits.bytes().map(|b| u32::from(b - b'0')).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_digits_borrows_when_clean() {
        assert!(matches!(only_digits("123456"), Cow::Borrowed(_)));
        assert!(matches!(only_digits(""), Cow::Borrowed(_)));
        assert!(matches!(only_digits("12.34"), Cow::Owned(_)));
    }

    #[test]
    fn only_digits_strips_punctuation_and_letters() {
        assert_eq!(only_digits("529.982.247-25"), "52998224725");
        assert_eq!(only_digits("R$ 1.234,56"), "123456");
        assert_eq!(only_digits("no digits"), "");
    }

    #[test]
    fn only_digits_drops_non_ascii() {
        // U+0660 ARABIC-INDIC DIGIT ZERO and friends are not ASCII digits.
        assert_eq!(only_digits("٠١٢3"), "3");
        assert_eq!(only_digits("１２３"), "");
    }

    #[test]
    fn all_same_digit_basic() {
        assert!(all_same_digit("11111111111"));
        assert!(all_same_digit("0"));
        assert!(!all_same_digit("11111111112"));
        assert!(!all_same_digit(""));
    }
}
