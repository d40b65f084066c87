//! # molde
//!
//! Masked text-input toolkit for Brazilian document formats.
//!
//! This facade re-exports the two layers of the workspace:
//! - [`mask_core`]: the pure formatting/validation engine (CPF, CNPJ,
//!   combined CNPJ/CPF, CEP, phone, BRL currency)
//! - [`field`]: the UI-agnostic host field state layer that applies a
//!   [`Strategy`] on every change event and records blur validity
//!
//! ## Example
//!
//! ```
//! use molde::{FieldId, FieldStore, Strategy};
//!
//! let mut store = FieldStore::new();
//! let id = FieldId::from_raw(1);
//!
//! store.ensure_initial(id, Strategy::Cpf, "", false);
//! assert_eq!(store.change(id, "52998224725"), "529.982.247-25");
//! assert_eq!(store.blur(id), Some(true));
//! ```

pub use field::{FieldId, FieldStore, MaskedStore};
pub use mask_core::{Strategy, StrategyParseError, only_digits};

pub use field;
pub use mask_core;
