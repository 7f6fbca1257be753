//! Strongly-typed identifiers used across the domain.

/// Persistent identity of a warehouse record.
///
/// Assigned by the warehouse store on first persistence and immutable after.
/// Candidate values built by callers carry no identity until they have been
/// stored; reads always come back with one.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WarehouseId(i64);

impl WarehouseId {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl core::fmt::Display for WarehouseId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<i64> for WarehouseId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<WarehouseId> for i64 {
    fn from(value: WarehouseId) -> Self {
        value.0
    }
}
