//! Store trait defining the masked-field interface.
//!
//! Frontends integrate against this trait rather than the concrete
//! [`FieldStore`], so tests and alternative implementations (e.g. a
//! recording store) can be swapped in behind the same surface.

use crate::id::FieldId;
use crate::store::FieldStore;
use mask_core::Strategy;

/// Trait capturing the masked-field lifecycle:
/// - Registration with a strategy ([`ensure_initial`])
/// - Change events returning the display string ([`change`])
/// - Controlled write-back ([`set_value`])
/// - Blur validation ([`blur`])
/// - Read-only state access for rendering
///
/// [`ensure_initial`]: MaskedStore::ensure_initial
/// [`change`]: MaskedStore::change
/// [`set_value`]: MaskedStore::set_value
/// [`blur`]: MaskedStore::blur
pub trait MaskedStore {
    /// Ensure an entry exists; if missing, registers the field with the
    /// given strategy and formatted initial value.
    fn ensure_initial(&mut self, id: FieldId, strategy: Strategy, initial: &str, controlled: bool);

    /// Handle a change event; returns the string to render.
    fn change(&mut self, id: FieldId, raw: &str) -> &str;

    /// Controlled write-back of a caller-owned value.
    fn set_value(&mut self, id: FieldId, value: &str);

    /// Handle a blur event; returns the recorded validity verdict, or
    /// `None` for unregistered fields and empty values.
    fn blur(&mut self, id: FieldId) -> Option<bool>;

    /// Returns the stored display value for this field, if any.
    fn get(&self, id: FieldId) -> Option<&str>;

    /// Monotonic revision counter for the field's value.
    fn value_revision(&self, id: FieldId) -> u64;

    /// The verdict recorded by the most recent blur, if still current.
    fn is_valid(&self, id: FieldId) -> Option<bool>;

    /// Clear all stored field state.
    fn clear(&mut self);
}

impl MaskedStore for FieldStore {
    #[inline]
    fn ensure_initial(&mut self, id: FieldId, strategy: Strategy, initial: &str, controlled: bool) {
        FieldStore::ensure_initial(self, id, strategy, initial, controlled)
    }

    #[inline]
    fn change(&mut self, id: FieldId, raw: &str) -> &str {
        FieldStore::change(self, id, raw)
    }

    #[inline]
    fn set_value(&mut self, id: FieldId, value: &str) {
        FieldStore::set_value(self, id, value)
    }

    #[inline]
    fn blur(&mut self, id: FieldId) -> Option<bool> {
        FieldStore::blur(self, id)
    }

    #[inline]
    fn get(&self, id: FieldId) -> Option<&str> {
        FieldStore::get(self, id)
    }

    #[inline]
    fn value_revision(&self, id: FieldId) -> u64 {
        FieldStore::value_revision(self, id)
    }

    #[inline]
    fn is_valid(&self, id: FieldId) -> Option<bool> {
        FieldStore::is_valid(self, id)
    }

    #[inline]
    fn clear(&mut self) {
        FieldStore::clear(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drive(store: &mut dyn MaskedStore) -> Option<bool> {
        let id = FieldId::from_raw(1);
        store.ensure_initial(id, Strategy::Cep, "", false);
        store.change(id, "12345678");
        store.blur(id)
    }

    #[test]
    fn field_store_is_object_safe_behind_the_trait() {
        let mut store = FieldStore::new();
        assert_eq!(drive(&mut store), Some(true));
        assert_eq!(MaskedStore::get(&store, FieldId::from_raw(1)), Some("12345-678"));
    }
}
