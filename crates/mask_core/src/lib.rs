//! # mask_core
//!
//! UI-agnostic masking/validation engine for masked text fields.
//!
//! This crate provides the pure text transformations behind masked input
//! fields for Brazilian document formats:
//! - [`Strategy`]: a closed set of per-field masking strategies
//! - Progressive formatters that fill a display template as the user types
//! - Validators for the documents that carry check digits (CPF, CNPJ)
//!
//! ## Design Principles
//!
//! This crate is intentionally UI-agnostic and does not depend on:
//! - Any rendering or widget framework
//! - Event/focus handling (see the `field` crate for that layer)
//! - Locale databases; the single supported locale's rules are built in
//!
//! Every operation is total over arbitrary `&str` input: non-digit
//! characters are discarded during extraction, over-length input degrades
//! to the digits-only prefix, and nothing panics or allocates an error.
//! Invalidity is only ever expressed as `validate` returning `false`.
//!
//! ## Integration
//!
//! Hosts select a strategy per field, run the raw text through
//! [`Strategy::apply`] on every change event, and render the returned
//! string back into the field:
//!
//! ```
//! use mask_core::Strategy;
//!
//! assert_eq!(Strategy::Cpf.apply("52998224725"), "529.982.247-25");
//! assert!(Strategy::Cpf.validate("529.982.247-25"));
//! ```

mod cep;
mod cnpj;
mod combined;
mod cpf;
mod currency;
mod digits;
mod phone;
mod strategy;

pub use cep::{format_cep, validate_cep};
pub use cnpj::{format_cnpj, validate_cnpj};
pub use combined::{format_cnpj_cpf, validate_cnpj_cpf};
pub use cpf::{format_cpf, validate_cpf};
pub use currency::{format_currency, validate_currency};
pub use digits::only_digits;
pub use phone::{format_phone, validate_phone};
pub use strategy::{Strategy, StrategyParseError};
