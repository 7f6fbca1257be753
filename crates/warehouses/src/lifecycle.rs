//! Warehouse lifecycle pipelines (application-level orchestration).
//!
//! This module implements the **validated lifecycle pattern** for warehouse
//! records. It orchestrates the three transitions a warehouse can go
//! through: being created, being replaced in a single atomic swap, and being
//! archived.
//!
//! ## Pipeline Shape
//!
//! Every operation runs the same way:
//!
//! ```text
//! Candidate / identifier
//!   ↓
//! 1. Ordered validation checks (registry, catalog, authority, store reads)
//!   ↓      first violated check aborts with its dedicated error variant
//! 2. Lifecycle flag adjustment (activate / archive)
//!   ↓
//! 3. Exactly one store write (create or update)
//! ```
//!
//! ## Why This Orchestration?
//!
//! - **Deterministic verdicts**: checks run in a fixed order, so an input
//!   that breaks several rules at once always surfaces the same rejection
//! - **No partial writes**: the single store write happens after the last
//!   check, so a rejected operation leaves no trace behind
//! - **Composed collaborators**: the engine composes the four port traits,
//!   making it testable with recording fakes and swappable with real
//!   backends
//!
//! ## Check Asymmetry
//!
//! Create consults the capacity authority twice (warehouse count and
//! aggregate headroom). Replace re-checks everything a replacement can
//! change except aggregate headroom: the site already hosts the record, and
//! replacement never adds a warehouse to the location. Archive only checks
//! what makes archival safe (no residual stock, not already archived).

use crate::error::LifecycleError;
use crate::ports::{BusinessUnitRegistry, CapacityAuthority, LocationCatalog, WarehouseStore};
use crate::warehouse::Warehouse;

/// Reusable lifecycle execution engine for warehouse records.
///
/// The engine sits between callers (an HTTP handler, a test harness) and the
/// four collaborator ports. It owns no state of its own: every verdict is
/// derived from the candidate value and what the ports report at call time.
///
/// ## Execution Guarantees
///
/// - **Single write**: an accepted operation issues exactly one store write;
///   a rejected one issues none
/// - **Fixed check order**: rejections are deterministic for unchanged
///   inputs and unchanged port state
/// - **Identity discipline**: create hands identity assignment to the store;
///   replace carries the existing identity forward; archive never touches it
///
/// ## Generic Parameters
///
/// - `S`: warehouse store (persisted records)
/// - `L`: location catalog (known sites)
/// - `R`: business-unit registry (claimed codes)
/// - `C`: capacity authority (per-site hosting policy)
///
/// All four accept `Arc`-wrapped implementations, so tests can keep a handle
/// on a fake while the engine owns another.
#[derive(Debug)]
pub struct LifecycleEngine<S, L, R, C> {
    store: S,
    catalog: L,
    registry: R,
    capacity: C,
}

impl<S, L, R, C> LifecycleEngine<S, L, R, C> {
    pub fn new(store: S, catalog: L, registry: R, capacity: C) -> Self {
        Self {
            store,
            catalog,
            registry,
            capacity,
        }
    }

    pub fn into_parts(self) -> (S, L, R, C) {
        (self.store, self.catalog, self.registry, self.capacity)
    }
}

impl<S, L, R, C> LifecycleEngine<S, L, R, C>
where
    S: WarehouseStore,
    L: LocationCatalog,
    R: BusinessUnitRegistry,
    C: CapacityAuthority,
{
    /// Bring a new warehouse into service.
    ///
    /// The candidate must carry no persisted identity; the store assigns one
    /// during the final write. Checks run in order: business-unit
    /// uniqueness, location existence, room for one more warehouse at the
    /// site, capacity within the location ceiling, stock within capacity,
    /// and aggregate headroom at the site. The first violated check aborts
    /// the pipeline with its dedicated [`LifecycleError`] variant.
    ///
    /// On success the persisted record comes back active, unarchived, and
    /// with its fresh identity.
    pub fn create(&self, candidate: Warehouse) -> Result<Warehouse, LifecycleError> {
        // 1) Business-unit uniqueness
        if !self.registry.is_unique(candidate.business_unit_code()) {
            return Err(LifecycleError::DuplicateBusinessUnit {
                code: candidate.business_unit_code().to_string(),
            });
        }

        // 2) Location must exist
        let location = self
            .catalog
            .resolve(candidate.location_identifier())
            .ok_or_else(|| LifecycleError::UnknownLocation {
                identifier: candidate.location_identifier().to_string(),
            })?;

        // 3) Room for one more warehouse at the site
        let current_count = self.store.count_at_location(candidate.location_identifier())?;
        if !self
            .capacity
            .can_add_warehouse(candidate.location_identifier(), current_count)
        {
            return Err(LifecycleError::LocationFull {
                location: candidate.location_identifier().to_string(),
            });
        }

        // 4) Requested capacity within the location ceiling
        if candidate.capacity() > location.max_capacity() {
            return Err(LifecycleError::CapacityExceeded {
                requested: candidate.capacity(),
                max: location.max_capacity(),
            });
        }

        // 5) Declared stock within requested capacity
        if candidate.current_stock() > candidate.capacity() {
            return Err(LifecycleError::StockExceedsCapacity {
                stock: candidate.current_stock(),
                capacity: candidate.capacity(),
            });
        }

        // 6) Aggregate headroom at the site
        if !self
            .capacity
            .has_headroom(candidate.location_identifier(), candidate.capacity())
        {
            return Err(LifecycleError::InsufficientLocationCapacity {
                location: candidate.location_identifier().to_string(),
                requested: candidate.capacity(),
            });
        }

        // Accepted: activate and persist (identity assigned by the store).
        let mut candidate = candidate;
        candidate.activate();
        Ok(self.store.create(candidate)?)
    }

    /// Swap a persisted warehouse for a replacement in one step.
    ///
    /// The replacement is addressed by its business identifier; the replaced
    /// record must exist (archived records are found too, and get revived by
    /// a successful swap). Business-unit uniqueness is only re-checked when
    /// the code actually changes. Stock is not adjustable through
    /// replacement: the new record must declare exactly the stock already on
    /// hand, and its capacity must accommodate it.
    ///
    /// The persisted identity carries over unchanged; the swapped record
    /// comes back active and unarchived.
    pub fn replace(&self, replacement: Warehouse) -> Result<Warehouse, LifecycleError> {
        // 1) The replaced record must exist
        let existing = self
            .store
            .find_by_identifier(replacement.identifier())?
            .ok_or_else(|| LifecycleError::WarehouseNotFound {
                identifier: replacement.identifier().to_string(),
            })?;

        // 2) Business-unit uniqueness, only when the code changes
        if replacement.business_unit_code() != existing.business_unit_code()
            && !self.registry.is_unique(replacement.business_unit_code())
        {
            return Err(LifecycleError::DuplicateBusinessUnit {
                code: replacement.business_unit_code().to_string(),
            });
        }

        // 3) Target location must exist (replacement may move sites)
        let location = self
            .catalog
            .resolve(replacement.location_identifier())
            .ok_or_else(|| LifecycleError::UnknownLocation {
                identifier: replacement.location_identifier().to_string(),
            })?;

        // 4) Requested capacity within the location ceiling
        if replacement.capacity() > location.max_capacity() {
            return Err(LifecycleError::CapacityExceeded {
                requested: replacement.capacity(),
                max: location.max_capacity(),
            });
        }

        // 5) Declared stock within requested capacity
        if replacement.current_stock() > replacement.capacity() {
            return Err(LifecycleError::StockExceedsCapacity {
                stock: replacement.current_stock(),
                capacity: replacement.capacity(),
            });
        }

        // 6) New capacity must hold the stock already on hand
        if replacement.capacity() < existing.current_stock() {
            return Err(LifecycleError::CapacityBelowExistingStock {
                capacity: replacement.capacity(),
                existing_stock: existing.current_stock(),
            });
        }

        // 7) Stock must match the existing record exactly
        if replacement.current_stock() != existing.current_stock() {
            return Err(LifecycleError::StockMismatch {
                stock: replacement.current_stock(),
                existing_stock: existing.current_stock(),
            });
        }

        // Accepted: carry the identity over, re-activate, overwrite.
        // Aggregate headroom is not re-checked; see the module docs.
        let mut replacement = replacement;
        replacement.adopt_identity(&existing);
        replacement.activate();
        Ok(self.store.update(replacement)?)
    }

    /// Take a warehouse out of service for good.
    ///
    /// The input value only names the record; the store's copy is what gets
    /// flagged and written back, so stale fields on the input cannot leak
    /// into persistence. Archival requires zero residual stock and is
    /// terminal: archiving twice is an error, not a no-op.
    pub fn archive(&self, warehouse: &Warehouse) -> Result<(), LifecycleError> {
        // 1) The record must exist
        let mut existing = self
            .store
            .find_by_identifier(warehouse.identifier())?
            .ok_or_else(|| LifecycleError::WarehouseNotFound {
                identifier: warehouse.identifier().to_string(),
            })?;

        // 2) Nothing may remain on hand
        if existing.current_stock() > 0 {
            return Err(LifecycleError::NonZeroStock {
                current_stock: existing.current_stock(),
            });
        }

        // 3) Archival is terminal, not repeatable
        if existing.is_archived() {
            return Err(LifecycleError::AlreadyArchived {
                identifier: existing.identifier().to_string(),
            });
        }

        existing.archive();
        self.store.update(existing)?;
        Ok(())
    }
}
