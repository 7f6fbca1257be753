use chrono::{DateTime, Utc};

use fulfilment_core::{DomainError, DomainResult, WarehouseId};

/// A physical storage unit tied to one location and one business unit.
///
/// Values are only obtainable through the validated [`WarehouseBuilder`] or
/// by reading persisted records back out of a store, so identifiers are never
/// blank and quantities never negative; the lifecycle flags are never both
/// set. Candidates may still declare more stock than capacity; the lifecycle
/// engine enforces that bound before anything is persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Warehouse {
    id: Option<WarehouseId>,
    identifier: String,
    business_unit_code: String,
    location_identifier: String,
    capacity: i64,
    current_stock: i64,
    name: Option<String>,
    active: bool,
    archived: bool,
    created_at: DateTime<Utc>,
}

impl Warehouse {
    pub fn builder() -> WarehouseBuilder {
        WarehouseBuilder::default()
    }

    /// Builder pre-seeded with this record's fields, used to derive
    /// replacement candidates from an existing record.
    pub fn to_builder(&self) -> WarehouseBuilder {
        WarehouseBuilder {
            id: self.id,
            identifier: self.identifier.clone(),
            business_unit_code: self.business_unit_code.clone(),
            location_identifier: self.location_identifier.clone(),
            capacity: self.capacity,
            current_stock: self.current_stock,
            name: self.name.clone(),
            active: self.active,
            archived: self.archived,
            created_at: Some(self.created_at),
        }
    }

    pub fn id(&self) -> Option<WarehouseId> {
        self.id
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn business_unit_code(&self) -> &str {
        &self.business_unit_code
    }

    pub fn location_identifier(&self) -> &str {
        &self.location_identifier
    }

    pub fn capacity(&self) -> i64 {
        self.capacity
    }

    pub fn current_stock(&self) -> i64 {
        self.current_stock
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn is_archived(&self) -> bool {
        self.archived
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Attach a store-assigned identity.
    ///
    /// The identity of a persisted record is immutable; this is meant for
    /// store adapters handing back freshly persisted records.
    pub fn with_id(mut self, id: WarehouseId) -> Self {
        self.id = Some(id);
        self
    }

    /// Carry the persisted identity of `existing` onto this value.
    ///
    /// Replacement keeps the replaced record's identity, whatever it is.
    pub fn adopt_identity(&mut self, existing: &Warehouse) {
        self.id = existing.id;
    }

    /// Put the record in service. Clears the archived flag.
    pub fn activate(&mut self) {
        self.active = true;
        self.archived = false;
    }

    /// Move the record to the terminal archived state.
    pub fn archive(&mut self) {
        self.archived = true;
        self.active = false;
    }
}

/// Validated constructor for [`Warehouse`].
///
/// Candidates default to inactive and unarchived with no identity; the
/// lifecycle engine decides flag state, and the store assigns identity.
#[derive(Debug, Clone, Default)]
pub struct WarehouseBuilder {
    id: Option<WarehouseId>,
    identifier: String,
    business_unit_code: String,
    location_identifier: String,
    capacity: i64,
    current_stock: i64,
    name: Option<String>,
    active: bool,
    archived: bool,
    created_at: Option<DateTime<Utc>>,
}

impl WarehouseBuilder {
    pub fn id(mut self, id: WarehouseId) -> Self {
        self.id = Some(id);
        self
    }

    pub fn identifier(mut self, identifier: impl Into<String>) -> Self {
        self.identifier = identifier.into();
        self
    }

    pub fn business_unit_code(mut self, code: impl Into<String>) -> Self {
        self.business_unit_code = code.into();
        self
    }

    pub fn location_identifier(mut self, identifier: impl Into<String>) -> Self {
        self.location_identifier = identifier.into();
        self
    }

    pub fn capacity(mut self, capacity: i64) -> Self {
        self.capacity = capacity;
        self
    }

    pub fn current_stock(mut self, stock: i64) -> Self {
        self.current_stock = stock;
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    pub fn archived(mut self, archived: bool) -> Self {
        self.archived = archived;
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = Some(created_at);
        self
    }

    /// Validate and build.
    ///
    /// Blank (empty or whitespace-only) identifiers are rejected, quantities
    /// must be non-negative, and a record may not be active and archived at
    /// once. Stock is not bounded by capacity here; that is a lifecycle
    /// pipeline verdict, not a construction failure.
    pub fn build(self) -> DomainResult<Warehouse> {
        if self.identifier.trim().is_empty() {
            return Err(DomainError::validation("warehouse identifier cannot be empty"));
        }
        if self.business_unit_code.trim().is_empty() {
            return Err(DomainError::validation("business unit code cannot be empty"));
        }
        if self.location_identifier.trim().is_empty() {
            return Err(DomainError::validation("location identifier cannot be empty"));
        }
        if self.capacity < 0 {
            return Err(DomainError::validation("capacity cannot be negative"));
        }
        if self.current_stock < 0 {
            return Err(DomainError::validation("current stock cannot be negative"));
        }
        if self.active && self.archived {
            return Err(DomainError::invariant(
                "a warehouse cannot be active and archived at once",
            ));
        }

        Ok(Warehouse {
            id: self.id,
            identifier: self.identifier,
            business_unit_code: self.business_unit_code,
            location_identifier: self.location_identifier,
            capacity: self.capacity,
            current_stock: self.current_stock,
            name: self.name,
            active: self.active,
            archived: self.archived,
            created_at: self.created_at.unwrap_or_else(Utc::now),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn candidate() -> WarehouseBuilder {
        Warehouse::builder()
            .identifier("MWH.001")
            .business_unit_code("BU-001")
            .location_identifier("ZWOLLE-001")
            .capacity(100)
            .current_stock(10)
    }

    #[test]
    fn builder_builds_an_inactive_candidate_by_default() {
        let warehouse = candidate().build().unwrap();

        assert_eq!(warehouse.id(), None);
        assert_eq!(warehouse.identifier(), "MWH.001");
        assert_eq!(warehouse.business_unit_code(), "BU-001");
        assert_eq!(warehouse.location_identifier(), "ZWOLLE-001");
        assert_eq!(warehouse.capacity(), 100);
        assert_eq!(warehouse.current_stock(), 10);
        assert_eq!(warehouse.name(), None);
        assert!(!warehouse.is_active());
        assert!(!warehouse.is_archived());
    }

    #[test]
    fn builder_rejects_blank_identifier() {
        let err = candidate().identifier("   ").build().unwrap_err();
        match err {
            DomainError::Validation(_) => {}
            _ => panic!("Expected Validation error for blank identifier"),
        }
    }

    #[test]
    fn builder_rejects_blank_business_unit_code() {
        let err = candidate().business_unit_code("").build().unwrap_err();
        match err {
            DomainError::Validation(_) => {}
            _ => panic!("Expected Validation error for blank business unit code"),
        }
    }

    #[test]
    fn builder_rejects_blank_location_identifier() {
        let err = candidate().location_identifier("  ").build().unwrap_err();
        match err {
            DomainError::Validation(_) => {}
            _ => panic!("Expected Validation error for blank location identifier"),
        }
    }

    #[test]
    fn builder_rejects_negative_capacity() {
        let err = candidate().capacity(-1).build().unwrap_err();
        match err {
            DomainError::Validation(_) => {}
            _ => panic!("Expected Validation error for negative capacity"),
        }
    }

    #[test]
    fn builder_rejects_negative_stock() {
        let err = candidate().current_stock(-5).build().unwrap_err();
        match err {
            DomainError::Validation(_) => {}
            _ => panic!("Expected Validation error for negative stock"),
        }
    }

    #[test]
    fn builder_does_not_bound_stock_by_capacity() {
        // Candidates may declare stock above capacity; the pipeline rejects
        // them before anything is persisted.
        let warehouse = candidate().capacity(100).current_stock(150).build().unwrap();
        assert_eq!(warehouse.capacity(), 100);
        assert_eq!(warehouse.current_stock(), 150);
    }

    #[test]
    fn builder_rejects_active_and_archived_together() {
        let err = candidate().active(true).archived(true).build().unwrap_err();
        match err {
            DomainError::InvariantViolation(_) => {}
            _ => panic!("Expected InvariantViolation for active and archived"),
        }
    }

    #[test]
    fn to_builder_round_trips_every_field() {
        let original = candidate()
            .id(WarehouseId::new(7))
            .name("Main warehouse")
            .active(true)
            .build()
            .unwrap();

        let rebuilt = original.to_builder().build().unwrap();
        assert_eq!(rebuilt, original);
    }

    #[test]
    fn with_id_attaches_identity() {
        let warehouse = candidate().build().unwrap().with_id(WarehouseId::new(42));
        assert_eq!(warehouse.id(), Some(WarehouseId::new(42)));
    }

    #[test]
    fn adopt_identity_copies_the_persisted_identity() {
        let existing = candidate().id(WarehouseId::new(9)).build().unwrap();
        let mut replacement = candidate().business_unit_code("BU-002").build().unwrap();

        replacement.adopt_identity(&existing);
        assert_eq!(replacement.id(), Some(WarehouseId::new(9)));
    }

    #[test]
    fn activate_and_archive_flip_both_flags() {
        let mut warehouse = candidate().build().unwrap();

        warehouse.activate();
        assert!(warehouse.is_active());
        assert!(!warehouse.is_archived());

        warehouse.archive();
        assert!(!warehouse.is_active());
        assert!(warehouse.is_archived());
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: the builder rejects exactly the inputs that break a
        /// field-level rule, and anything it releases has non-negative
        /// quantities and consistent lifecycle flags.
        #[test]
        fn builder_never_releases_an_invalid_warehouse(
            identifier in prop_oneof![
                Just(String::new()),
                Just("   ".to_string()),
                "[A-Z]{2,5}\\.[0-9]{3}",
            ],
            business_unit in prop_oneof![Just(String::new()), "BU-[0-9]{3}"],
            location in prop_oneof![Just("  ".to_string()), "[A-Z]{4,9}-[0-9]{3}"],
            capacity in -50i64..200,
            stock in -50i64..200,
        ) {
            let built = Warehouse::builder()
                .identifier(identifier.clone())
                .business_unit_code(business_unit.clone())
                .location_identifier(location.clone())
                .capacity(capacity)
                .current_stock(stock)
                .build();

            let inputs_valid = !identifier.trim().is_empty()
                && !business_unit.trim().is_empty()
                && !location.trim().is_empty()
                && capacity >= 0
                && stock >= 0;

            match built {
                Ok(warehouse) => {
                    prop_assert!(inputs_valid);
                    prop_assert!(warehouse.capacity() >= 0);
                    prop_assert!(warehouse.current_stock() >= 0);
                    prop_assert!(!(warehouse.is_active() && warehouse.is_archived()));
                }
                Err(_) => prop_assert!(!inputs_valid),
            }
        }
    }
}
