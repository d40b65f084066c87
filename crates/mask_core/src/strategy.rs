//! Per-field masking strategy dispatch.
//!
//! The set of strategies is closed, so dispatch is an enum rather than a
//! string-keyed registry. Hosts parse incoming configuration names with
//! [`FromStr`] at their boundary; past that point an invalid strategy
//! cannot exist.

use crate::cep::{format_cep, validate_cep};
use crate::cnpj::{format_cnpj, validate_cnpj};
use crate::combined::{format_cnpj_cpf, validate_cnpj_cpf};
use crate::cpf::{format_cpf, validate_cpf};
use crate::currency::{format_currency, validate_currency};
use crate::phone::{format_phone, validate_phone};
use std::str::FromStr;

/// Masking strategy for a single text field.
///
/// Each strategy pairs a progressive formatter with a validity predicate
/// and, for the fixed-width templates, a cap on the formatted length.
/// [`Strategy::Normal`] is the identity: format passes through, validate
/// is always true, no cap.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Pass-through; the field is not masked.
    #[default]
    Normal,
    /// 11-digit individual taxpayer id, `ddd.ddd.ddd-dd`.
    Cpf,
    /// 14-digit company taxpayer id, `dd.ddd.ddd/dddd-dd`.
    Cnpj,
    /// Either document, detected from the typed digit count.
    CnpjCpf,
    /// 8-digit postal code, `ddddd-ddd`.
    Cep,
    /// 10/11-digit phone number, `(dd) dddd-dddd` / `(dd) ddddd-dddd`.
    Phone,
    /// BRL amount typed in cents.
    Currency,
}

impl Strategy {
    /// Every declared strategy, in configuration-name order.
    pub const ALL: [Strategy; 7] = [
        Strategy::Normal,
        Strategy::Cpf,
        Strategy::Cnpj,
        Strategy::CnpjCpf,
        Strategy::Cep,
        Strategy::Phone,
        Strategy::Currency,
    ];

    /// The configuration name this strategy parses from.
    ///
    /// # Examples
    ///
    /// ```
    /// use mask_core::Strategy;
    ///
    /// assert_eq!(Strategy::CnpjCpf.name(), "cnpj-cpf");
    /// assert_eq!("cnpj-cpf".parse(), Ok(Strategy::CnpjCpf));
    /// ```
    pub const fn name(self) -> &'static str {
        match self {
            Strategy::Normal => "normal",
            Strategy::Cpf => "cpf",
            Strategy::Cnpj => "cnpj",
            Strategy::CnpjCpf => "cnpj-cpf",
            Strategy::Cep => "cep",
            Strategy::Phone => "phone",
            Strategy::Currency => "currency",
        }
    }

    /// Cap on the *formatted* string length in characters, if any.
    ///
    /// The caps equal the full template widths (digits plus separators);
    /// `Normal` and `Currency` are uncapped.
    pub const fn max_length(self) -> Option<usize> {
        match self {
            Strategy::Normal | Strategy::Currency => None,
            Strategy::Cpf => Some(14),
            Strategy::Cnpj | Strategy::CnpjCpf => Some(18),
            Strategy::Cep => Some(9),
            Strategy::Phone => Some(15),
        }
    }

    /// Format raw field text into its display form.
    ///
    /// Total over arbitrary input; see the per-format modules for the
    /// template rules.
    pub fn format(self, raw: &str) -> String {
        match self {
            Strategy::Normal => raw.to_string(),
            Strategy::Cpf => format_cpf(raw),
            Strategy::Cnpj => format_cnpj(raw),
            Strategy::CnpjCpf => format_cnpj_cpf(raw),
            Strategy::Cep => format_cep(raw),
            Strategy::Phone => format_phone(raw),
            Strategy::Currency => format_currency(raw),
        }
    }

    /// Validity predicate for a (typically formatted) field value.
    pub fn validate(self, value: &str) -> bool {
        match self {
            Strategy::Normal => true,
            Strategy::Cpf => validate_cpf(value),
            Strategy::Cnpj => validate_cnpj(value),
            Strategy::CnpjCpf => validate_cnpj_cpf(value),
            Strategy::Cep => validate_cep(value),
            Strategy::Phone => validate_phone(value),
            Strategy::Currency => validate_currency(value),
        }
    }

    /// Format, then truncate the formatted string to [`max_length`]
    /// characters when a cap is declared.
    ///
    /// The cap counts characters of the *formatted* string, not digits,
    /// so an over-cap result is cut wherever the cap lands, separator or
    /// not. The declared caps match the template widths, which keeps the
    /// truncation dormant for the shipped strategies.
    ///
    /// [`max_length`]: Strategy::max_length
    pub fn apply(self, raw: &str) -> String {
        let mut formatted = self.format(raw);
        if let Some(cap) = self.max_length() {
            let cut = formatted.char_indices().nth(cap).map(|(idx, _)| idx);
            if let Some(idx) = cut {
                formatted.truncate(idx);
            }
        }
        formatted
    }
}

/// Error returned when parsing an undeclared strategy name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StrategyParseError {
    UnknownName(String),
}

impl std::fmt::Display for StrategyParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StrategyParseError::UnknownName(name) => {
                write!(f, "unknown masking strategy '{name}'")
            }
        }
    }
}

impl std::error::Error for StrategyParseError {}

impl FromStr for Strategy {
    type Err = StrategyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "normal" => Ok(Strategy::Normal),
            "cpf" => Ok(Strategy::Cpf),
            "cnpj" => Ok(Strategy::Cnpj),
            "cnpj-cpf" => Ok(Strategy::CnpjCpf),
            "cep" => Ok(Strategy::Cep),
            "phone" => Ok(Strategy::Phone),
            "currency" => Ok(Strategy::Currency),
            other => Err(StrategyParseError::UnknownName(other.to_string())),
        }
    }
}
