use fulfilment_core::{DomainError, DomainResult};

/// Constraints of one physical site: how many warehouses it may host and how
/// much aggregate storage capacity it may hand out.
///
/// Locations are owned and enumerated by the location catalog. The lifecycle
/// engine reads them but never persists them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    identification: String,
    name: Option<String>,
    max_number_of_warehouses: u32,
    max_capacity: i64,
}

impl Location {
    /// Build a validated location.
    ///
    /// `identification` must be non-blank and `max_capacity` non-negative.
    pub fn new(
        identification: impl Into<String>,
        max_number_of_warehouses: u32,
        max_capacity: i64,
    ) -> DomainResult<Self> {
        let identification = identification.into();
        if identification.trim().is_empty() {
            return Err(DomainError::validation(
                "location identification cannot be empty",
            ));
        }
        if max_capacity < 0 {
            return Err(DomainError::validation(
                "location max capacity cannot be negative",
            ));
        }
        Ok(Self {
            identification,
            name: None,
            max_number_of_warehouses,
            max_capacity,
        })
    }

    /// Attach a human-readable name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn identification(&self) -> &str {
        &self.identification
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn max_number_of_warehouses(&self) -> u32 {
        self.max_number_of_warehouses
    }

    pub fn max_capacity(&self) -> i64 {
        self.max_capacity
    }
}
