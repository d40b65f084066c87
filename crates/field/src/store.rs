//! Central store for masked field values and blur validity.
//!
//! The store is UI-agnostic: it does not render, measure, or listen for
//! events. Rendering layers feed it the raw text of each change event and
//! paint the formatted string it returns.

use crate::id::FieldId;
use crate::state::FieldState;
use mask_core::Strategy;
use std::collections::HashMap;

/// Central store for masked field state.
///
/// Each field pairs a [`Strategy`] with its current display value. On
/// every change event the raw text runs through the strategy (format,
/// then cap) and the result becomes the new display value; on blur the
/// current value is validated and the verdict recorded for error styling.
///
/// Fields are either *uncontrolled* (the store owns the value) or
/// *controlled* (the caller owns it and writes back via
/// [`set_value`](FieldStore::set_value)). In both modes [`change`]
/// returns the formatted string and keeps the stored copy in sync, so
/// [`get`] and [`value_revision`] stay coherent with what was last
/// rendered.
///
/// [`change`]: FieldStore::change
/// [`get`]: FieldStore::get
///
/// # Example
///
/// ```
/// use field::{FieldId, FieldStore};
/// use mask_core::Strategy;
///
/// let mut store = FieldStore::new();
/// let id = FieldId::from_raw(1);
///
/// store.ensure_initial(id, Strategy::Cep, "", false);
/// assert_eq!(store.change(id, "12345678"), "12345-678");
/// assert_eq!(store.blur(id), Some(true));
/// ```
#[derive(Clone, Debug, Default)]
pub struct FieldStore {
    fields: HashMap<FieldId, FieldState>,
}

impl FieldStore {
    /// Create a new, empty field store.
    pub fn new() -> Self {
        Self {
            fields: HashMap::new(),
        }
    }

    /// Returns `true` if an entry exists for this field.
    pub fn has(&self, id: FieldId) -> bool {
        self.fields.contains_key(&id)
    }

    /// Ensure an entry exists; if missing, registers the field with the
    /// given strategy and initial value.
    ///
    /// The initial value runs through the strategy so a pre-filled field
    /// starts out formatted. If an entry already exists, this is a no-op.
    pub fn ensure_initial(
        &mut self,
        id: FieldId,
        strategy: Strategy,
        initial: &str,
        controlled: bool,
    ) {
        self.fields.entry(id).or_insert_with(|| FieldState {
            value: strategy.apply(initial),
            value_rev: 0,
            strategy,
            controlled,
            valid: None,
        });
    }

    /// Handle a change event: format the raw field text and return the
    /// string to render.
    ///
    /// The formatted value is stored (bumping the revision if it differs
    /// from the previous one) and any stale blur verdict is cleared.
    /// An unregistered field is created on the fly with the identity
    /// strategy, mirroring how the raw text would have rendered anyway.
    pub fn change(&mut self, id: FieldId, raw: &str) -> &str {
        let st = self.fields.entry(id).or_default();
        let formatted = st.strategy.apply(raw);
        if formatted != st.value {
            st.value = formatted;
            st.value_rev = st.value_rev.wrapping_add(1);
            st.valid = None;
        }
        log::trace!(
            target: "field.store",
            "change {id:?} rev={} len={}",
            st.value_rev,
            st.value.len()
        );
        &st.value
    }

    /// Controlled write-back: replace the stored value with the caller's.
    ///
    /// The value runs through the field's strategy so the stored copy
    /// stays canonical even if the caller hands back unformatted text.
    pub fn set_value(&mut self, id: FieldId, value: &str) {
        let st = self.fields.entry(id).or_default();
        let formatted = st.strategy.apply(value);
        if formatted != st.value {
            st.value = formatted;
            st.value_rev = st.value_rev.wrapping_add(1);
            st.valid = None;
        }
    }

    /// Handle a blur event: validate the current value and record the
    /// verdict.
    ///
    /// Returns `None` for unregistered fields and for empty values — an
    /// untouched field is not an invalid one. The verdict is purely
    /// informational; callers use it to drive error styling.
    pub fn blur(&mut self, id: FieldId) -> Option<bool> {
        let st = self.fields.get_mut(&id)?;
        if st.value.is_empty() {
            st.valid = None;
            return None;
        }
        let verdict = st.strategy.validate(&st.value);
        st.valid = Some(verdict);
        log::trace!(target: "field.store", "blur {id:?} valid={verdict}");
        Some(verdict)
    }

    /// Returns the stored display value for this field, if any.
    pub fn get(&self, id: FieldId) -> Option<&str> {
        self.fields.get(&id).map(|s| s.value.as_str())
    }

    /// Monotonic revision counter for the field's value.
    ///
    /// Increments whenever the stored value changes. Useful for cache
    /// invalidation; unregistered fields report 0.
    pub fn value_revision(&self, id: FieldId) -> u64 {
        self.fields.get(&id).map(|s| s.value_rev).unwrap_or(0)
    }

    /// The verdict recorded by the most recent blur, if still current.
    ///
    /// `None` means "no styling": the field is unregistered, untouched,
    /// or has been edited since it was last blurred.
    pub fn is_valid(&self, id: FieldId) -> Option<bool> {
        self.fields.get(&id).and_then(|s| s.valid)
    }

    /// Returns `true` if the caller owns this field's value.
    pub fn is_controlled(&self, id: FieldId) -> bool {
        self.fields.get(&id).is_some_and(|s| s.controlled)
    }

    /// The strategy this field was registered with, if any.
    pub fn strategy(&self, id: FieldId) -> Option<Strategy> {
        self.fields.get(&id).map(|s| s.strategy)
    }

    /// Clear all stored field state.
    ///
    /// Typically called when the hosting view is torn down or navigated
    /// away from; no field state outlives its session.
    pub fn clear(&mut self) {
        self.fields.clear();
    }
}
