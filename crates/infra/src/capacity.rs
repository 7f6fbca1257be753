use std::collections::HashMap;

use fulfilment_warehouses::CapacityAuthority;

/// Hosting limits for one location.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct CapacityRule {
    /// How many warehouses the location may host at once.
    pub max_warehouses: u32,
    /// Largest storage capacity the location hands out to a single warehouse.
    pub total_capacity: i64,
}

/// Capacity authority backed by a fixed rule table, keyed by location
/// identifier. Locations without a rule can host nothing.
#[derive(Debug, Clone, Default)]
pub struct StaticCapacityAuthority {
    rules: HashMap<String, CapacityRule>,
}

impl StaticCapacityAuthority {
    pub fn new(rules: HashMap<String, CapacityRule>) -> Self {
        Self { rules }
    }
}

impl CapacityAuthority for StaticCapacityAuthority {
    fn can_add_warehouse(&self, location: &str, current_count: u32) -> bool {
        self.rules
            .get(location)
            .is_some_and(|rule| current_count < rule.max_warehouses)
    }

    fn has_headroom(&self, location: &str, requested_capacity: i64) -> bool {
        self.rules
            .get(location)
            .is_some_and(|rule| requested_capacity <= rule.total_capacity)
    }
}
