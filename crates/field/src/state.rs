//! Internal per-field state.
//!
//! Managed by [`FieldStore`](crate::FieldStore); not exposed publicly.

use mask_core::Strategy;

/// State for a single masked field.
#[derive(Clone, Debug, Default)]
pub(crate) struct FieldState {
    /// The current display value (already formatted and capped).
    pub value: String,

    /// Monotonic revision counter, incremented whenever `value` changes.
    /// Useful for cache invalidation in rendering layers.
    pub value_rev: u64,

    /// The masking strategy applied on every change.
    pub strategy: Strategy,

    /// Whether the caller owns the value (controlled) or the store does.
    pub controlled: bool,

    /// Verdict of the most recent blur validation. `None` until the field
    /// has been blurred with content, and again after any edit.
    pub valid: Option<bool>,
}
