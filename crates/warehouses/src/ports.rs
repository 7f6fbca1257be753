//! Collaborator contracts consumed by the lifecycle engine.
//!
//! These are capability boundaries, not storage or wire formats: the engine
//! validates against whatever implements them. `fulfilment-infra` provides
//! configuration-backed statics and an in-memory store; tests provide
//! recording fakes.

use std::sync::Arc;

use thiserror::Error;

use fulfilment_core::WarehouseId;

use crate::location::Location;
use crate::warehouse::Warehouse;

/// Registry of business-unit codes already claimed.
///
/// Backed by configuration, not by the warehouse store: the engine asks it
/// whether a code is free and does not cross-check persisted records.
pub trait BusinessUnitRegistry: Send + Sync {
    /// Whether `code` is free to take.
    ///
    /// Implementations trim surrounding whitespace before matching; blank
    /// codes are never unique.
    fn is_unique(&self, code: &str) -> bool;
}

impl<R> BusinessUnitRegistry for Arc<R>
where
    R: BusinessUnitRegistry + ?Sized,
{
    fn is_unique(&self, code: &str) -> bool {
        (**self).is_unique(code)
    }
}

/// Read-only lookup of known locations.
pub trait LocationCatalog: Send + Sync {
    /// Resolve a location identifier. Matching is exact and case-sensitive;
    /// unknown identifiers yield `None`.
    fn resolve(&self, identifier: &str) -> Option<Location>;

    /// Every known location, in registration order. Returns an owned copy;
    /// callers cannot mutate catalog state through it.
    fn all(&self) -> Vec<Location>;
}

impl<C> LocationCatalog for Arc<C>
where
    C: LocationCatalog + ?Sized,
{
    fn resolve(&self, identifier: &str) -> Option<Location> {
        (**self).resolve(identifier)
    }

    fn all(&self) -> Vec<Location> {
        (**self).all()
    }
}

/// Per-location capacity policy.
///
/// Answers yes/no questions about a site's headroom. Locations the policy
/// does not know about can host nothing.
pub trait CapacityAuthority: Send + Sync {
    /// Whether the location can host one more warehouse given the current
    /// count of active warehouses there.
    fn can_add_warehouse(&self, location: &str, current_count: u32) -> bool;

    /// Whether the location can hand out `requested_capacity` units of
    /// storage to a single warehouse.
    fn has_headroom(&self, location: &str, requested_capacity: i64) -> bool;
}

impl<A> CapacityAuthority for Arc<A>
where
    A: CapacityAuthority + ?Sized,
{
    fn can_add_warehouse(&self, location: &str, current_count: u32) -> bool {
        (**self).can_add_warehouse(location, current_count)
    }

    fn has_headroom(&self, location: &str, requested_capacity: i64) -> bool {
        (**self).has_headroom(location, requested_capacity)
    }
}

/// Warehouse store operation error.
///
/// These are **infrastructure errors** (identity discipline, backend
/// availability) as opposed to pipeline rejections. The engine never matches
/// on them; they pass through [`crate::LifecycleError::Store`] unchanged.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Create was handed a business identifier that is already persisted.
    #[error("warehouse identifier already persisted: {0}")]
    DuplicateIdentifier(String),

    /// Create was handed a value that already carries a persisted identity.
    #[error("identity already assigned: {0}")]
    IdentityAlreadyAssigned(WarehouseId),

    /// Update was handed a value that never went through create.
    #[error("warehouse '{0}' has no persisted identity")]
    MissingIdentity(String),

    /// Update referenced an identity unknown to the store.
    #[error("no persisted warehouse with identity {0}")]
    UnknownIdentity(WarehouseId),

    /// The storage backend failed (e.g. a poisoned lock).
    #[error("warehouse store unavailable: {0}")]
    Unavailable(String),
}

/// Persisted collection of warehouse records.
///
/// ## Identity
///
/// The store owns identity assignment: `create` takes an identity-less
/// candidate and hands back the persisted record with a fresh [`WarehouseId`];
/// `update` requires an identity and overwrites that record in place.
///
/// ## Visibility
///
/// Archived records stay persisted but drop out of every query except
/// `find_by_identifier`, which deliberately sees them so callers can tell
/// "already archived" apart from "never existed".
///
/// ## Implementation Requirements
///
/// Implementations must:
/// - enforce business-identifier uniqueness on create
/// - reject updates for values without an identity or with an unknown one
/// - keep `find_by_identifier` exact-match over all records, archived included
/// - restrict every other query to active records
pub trait WarehouseStore: Send + Sync {
    /// Persist a new record and assign its identity.
    fn create(&self, warehouse: Warehouse) -> Result<Warehouse, StoreError>;

    /// Overwrite the record addressed by the value's identity.
    fn update(&self, warehouse: Warehouse) -> Result<Warehouse, StoreError>;

    /// Exact-match lookup by business identifier, archived records included.
    fn find_by_identifier(&self, identifier: &str) -> Result<Option<Warehouse>, StoreError>;

    /// First active record using `code`, if any.
    fn find_by_business_unit(&self, code: &str) -> Result<Option<Warehouse>, StoreError>;

    /// Number of active records at `location`.
    fn count_at_location(&self, location: &str) -> Result<u32, StoreError>;

    /// Summed capacity of active records at `location`.
    fn total_capacity_at_location(&self, location: &str) -> Result<i64, StoreError>;

    /// Active records at `location`.
    fn find_all_at_location(&self, location: &str) -> Result<Vec<Warehouse>, StoreError>;

    /// All active records.
    fn find_all_active(&self) -> Result<Vec<Warehouse>, StoreError>;
}

impl<S> WarehouseStore for Arc<S>
where
    S: WarehouseStore + ?Sized,
{
    fn create(&self, warehouse: Warehouse) -> Result<Warehouse, StoreError> {
        (**self).create(warehouse)
    }

    fn update(&self, warehouse: Warehouse) -> Result<Warehouse, StoreError> {
        (**self).update(warehouse)
    }

    fn find_by_identifier(&self, identifier: &str) -> Result<Option<Warehouse>, StoreError> {
        (**self).find_by_identifier(identifier)
    }

    fn find_by_business_unit(&self, code: &str) -> Result<Option<Warehouse>, StoreError> {
        (**self).find_by_business_unit(code)
    }

    fn count_at_location(&self, location: &str) -> Result<u32, StoreError> {
        (**self).count_at_location(location)
    }

    fn total_capacity_at_location(&self, location: &str) -> Result<i64, StoreError> {
        (**self).total_capacity_at_location(location)
    }

    fn find_all_at_location(&self, location: &str) -> Result<Vec<Warehouse>, StoreError> {
        (**self).find_all_at_location(location)
    }

    fn find_all_active(&self) -> Result<Vec<Warehouse>, StoreError> {
        (**self).find_all_active()
    }
}
