//! Rejection taxonomy of the lifecycle engine.

use thiserror::Error;

use crate::ports::StoreError;

/// Why the lifecycle engine refused (or failed) an operation.
///
/// Validation rejections are deterministic: repeating the call with unchanged
/// inputs and unchanged port state yields the same variant. Store failures
/// are passed through unchanged in [`LifecycleError::Store`] so callers can
/// tell a refused operation apart from a broken backend.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LifecycleError {
    /// Create or replace asked for a business-unit code already claimed.
    #[error("business unit code '{code}' is already in use")]
    DuplicateBusinessUnit { code: String },

    /// The candidate names a location the catalog cannot resolve.
    #[error("unknown location: {identifier}")]
    UnknownLocation { identifier: String },

    /// The location cannot host one more warehouse.
    #[error("location {location} cannot host another warehouse")]
    LocationFull { location: String },

    /// Requested capacity exceeds the location's ceiling.
    #[error("requested capacity {requested} exceeds location maximum {max}")]
    CapacityExceeded { requested: i64, max: i64 },

    /// Declared stock does not fit the requested capacity.
    #[error("current stock {stock} exceeds requested capacity {capacity}")]
    StockExceedsCapacity { stock: i64, capacity: i64 },

    /// The location lacks aggregate headroom for the requested capacity.
    #[error("location {location} lacks headroom for capacity {requested}")]
    InsufficientLocationCapacity { location: String, requested: i64 },

    /// Replace or archive referenced an identifier with no persisted record.
    #[error("no warehouse with identifier '{identifier}'")]
    WarehouseNotFound { identifier: String },

    /// Replacement capacity cannot hold the stock already on hand.
    #[error("new capacity {capacity} cannot accommodate existing stock {existing_stock}")]
    CapacityBelowExistingStock { capacity: i64, existing_stock: i64 },

    /// Replacement tried to change stock, which replacement never does.
    #[error("replacement stock {stock} does not match existing stock {existing_stock}")]
    StockMismatch { stock: i64, existing_stock: i64 },

    /// Archive refused because units are still on hand.
    #[error("cannot archive with {current_stock} units still on hand")]
    NonZeroStock { current_stock: i64 },

    /// Archive is terminal and cannot be repeated.
    #[error("warehouse '{identifier}' is already archived")]
    AlreadyArchived { identifier: String },

    /// The warehouse store failed; not a validation verdict.
    #[error(transparent)]
    Store(#[from] StoreError),
}
