//! # field
//!
//! Host field state layer for masked text inputs.
//!
//! This crate owns the transient state of masked fields and drives the
//! `mask_core` engine through the field lifecycle:
//! - [`FieldId`]: a generic, opaque identifier for field instances
//! - [`FieldStore`]: central store for field values, revisions, and blur
//!   validity
//! - [`MaskedStore`]: the trait seam frontends integrate against
//!
//! ## Design Principles
//!
//! This crate is UI-agnostic: it knows nothing about widgets, styling, or
//! events beyond the change/blur lifecycle. Rendering layers call
//! [`FieldStore::change`] with the raw text of each change event and paint
//! whatever string comes back; on blur they may ask for a validity verdict
//! to drive error styling. Strategy names arriving from configuration are
//! parsed with [`Strategy`]'s `FromStr` here at the boundary — the engine
//! itself never sees an undeclared strategy.
//!
//! ## Integration
//!
//! ```
//! use field::{FieldId, FieldStore};
//! use mask_core::Strategy;
//!
//! let mut store = FieldStore::new();
//! let id = FieldId::from_raw(7);
//!
//! let strategy: Strategy = "phone".parse().expect("declared name");
//! store.ensure_initial(id, strategy, "", false);
//!
//! assert_eq!(store.change(id, "11987654321"), "(11) 98765-4321");
//! assert_eq!(store.blur(id), Some(true));
//! ```

mod id;
mod state;
mod store;
mod traits;

pub use id::FieldId;
pub use store::FieldStore;
pub use traits::MaskedStore;
