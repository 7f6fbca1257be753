use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use fulfilment_core::WarehouseId;
use fulfilment_warehouses::{StoreError, Warehouse, WarehouseStore};

#[derive(Debug, Default)]
struct StoreInner {
    records: HashMap<WarehouseId, Warehouse>,
    last_id: i64,
}

/// In-memory warehouse store.
///
/// Thread-safe behind a single `RwLock`; identity assignment is sequential,
/// starting at 1. Archived records stay in the map but drop out of every
/// query except `find_by_identifier`. Suitable for tests and single-process
/// deployments.
#[derive(Debug, Default)]
pub struct InMemoryWarehouseStore {
    inner: RwLock<StoreInner>,
}

impl InMemoryWarehouseStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read_inner(&self) -> Result<RwLockReadGuard<'_, StoreInner>, StoreError> {
        self.inner
            .read()
            .map_err(|_| StoreError::Unavailable("lock poisoned".to_string()))
    }

    fn write_inner(&self) -> Result<RwLockWriteGuard<'_, StoreInner>, StoreError> {
        self.inner
            .write()
            .map_err(|_| StoreError::Unavailable("lock poisoned".to_string()))
    }
}

impl WarehouseStore for InMemoryWarehouseStore {
    fn create(&self, warehouse: Warehouse) -> Result<Warehouse, StoreError> {
        if let Some(id) = warehouse.id() {
            return Err(StoreError::IdentityAlreadyAssigned(id));
        }

        let mut inner = self.write_inner()?;
        if inner
            .records
            .values()
            .any(|w| w.identifier() == warehouse.identifier())
        {
            return Err(StoreError::DuplicateIdentifier(
                warehouse.identifier().to_string(),
            ));
        }

        inner.last_id += 1;
        let id = WarehouseId::new(inner.last_id);
        let persisted = warehouse.with_id(id);
        inner.records.insert(id, persisted.clone());

        tracing::debug!(identifier = %persisted.identifier(), %id, "warehouse persisted");
        Ok(persisted)
    }

    fn update(&self, warehouse: Warehouse) -> Result<Warehouse, StoreError> {
        let id = warehouse
            .id()
            .ok_or_else(|| StoreError::MissingIdentity(warehouse.identifier().to_string()))?;

        let mut inner = self.write_inner()?;
        if !inner.records.contains_key(&id) {
            return Err(StoreError::UnknownIdentity(id));
        }

        // Identifier uniqueness holds across updates too.
        if inner
            .records
            .values()
            .any(|w| w.id() != Some(id) && w.identifier() == warehouse.identifier())
        {
            return Err(StoreError::DuplicateIdentifier(
                warehouse.identifier().to_string(),
            ));
        }

        inner.records.insert(id, warehouse.clone());
        tracing::debug!(identifier = %warehouse.identifier(), %id, "warehouse updated");
        Ok(warehouse)
    }

    fn find_by_identifier(&self, identifier: &str) -> Result<Option<Warehouse>, StoreError> {
        let inner = self.read_inner()?;
        Ok(inner
            .records
            .values()
            .find(|w| w.identifier() == identifier)
            .cloned())
    }

    fn find_by_business_unit(&self, code: &str) -> Result<Option<Warehouse>, StoreError> {
        let inner = self.read_inner()?;
        Ok(inner
            .records
            .values()
            .filter(|w| w.is_active() && w.business_unit_code() == code)
            .min_by_key(|w| w.id())
            .cloned())
    }

    fn count_at_location(&self, location: &str) -> Result<u32, StoreError> {
        let inner = self.read_inner()?;
        Ok(inner
            .records
            .values()
            .filter(|w| w.is_active() && w.location_identifier() == location)
            .count() as u32)
    }

    fn total_capacity_at_location(&self, location: &str) -> Result<i64, StoreError> {
        let inner = self.read_inner()?;
        Ok(inner
            .records
            .values()
            .filter(|w| w.is_active() && w.location_identifier() == location)
            .map(|w| w.capacity())
            .sum())
    }

    fn find_all_at_location(&self, location: &str) -> Result<Vec<Warehouse>, StoreError> {
        let inner = self.read_inner()?;
        let mut found: Vec<Warehouse> = inner
            .records
            .values()
            .filter(|w| w.is_active() && w.location_identifier() == location)
            .cloned()
            .collect();
        found.sort_by_key(|w| w.id());
        Ok(found)
    }

    fn find_all_active(&self) -> Result<Vec<Warehouse>, StoreError> {
        let inner = self.read_inner()?;
        let mut found: Vec<Warehouse> = inner
            .records
            .values()
            .filter(|w| w.is_active())
            .cloned()
            .collect();
        found.sort_by_key(|w| w.id());
        Ok(found)
    }
}
