//! Generic, UI-agnostic identifier for field instances.
//!
//! A plain `u64` wrapper so this crate stays decoupled from any widget
//! tree or DOM id scheme. Integration layers convert their native ids at
//! the call boundary with `From` implementations of their own.

/// Opaque handle for a field inside a [`FieldStore`](crate::FieldStore).
///
/// The wrapped value carries no meaning here; it is only a map key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FieldId(u64);

impl FieldId {
    /// Wrap a raw id from an external id system.
    #[inline]
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// The raw value, for converting back to an external id system.
    #[inline]
    pub const fn as_raw(self) -> u64 {
        self.0
    }
}

impl From<u64> for FieldId {
    #[inline]
    fn from(raw: u64) -> Self {
        Self::from_raw(raw)
    }
}

impl From<u32> for FieldId {
    #[inline]
    fn from(raw: u32) -> Self {
        Self::from_raw(raw as u64)
    }
}

impl From<FieldId> for u64 {
    #[inline]
    fn from(id: FieldId) -> Self {
        id.as_raw()
    }
}
