use fulfilment_warehouses::{Location, LocationCatalog};

/// Location catalog backed by a fixed list.
///
/// Lookup is exact and case-sensitive; enumeration preserves registration
/// order. The list never changes after construction, so the catalog is
/// freely shareable across threads.
#[derive(Debug, Clone, Default)]
pub struct StaticLocationCatalog {
    locations: Vec<Location>,
}

impl StaticLocationCatalog {
    pub fn new(locations: Vec<Location>) -> Self {
        Self { locations }
    }
}

impl LocationCatalog for StaticLocationCatalog {
    fn resolve(&self, identifier: &str) -> Option<Location> {
        self.locations
            .iter()
            .find(|l| l.identification() == identifier)
            .cloned()
    }

    fn all(&self) -> Vec<Location> {
        self.locations.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> StaticLocationCatalog {
        StaticLocationCatalog::new(vec![
            Location::new("ZWOLLE-001", 1, 40).unwrap(),
            Location::new("AMSTERDAM-001", 5, 100).unwrap(),
        ])
    }

    #[test]
    fn resolve_finds_known_locations() {
        let found = catalog().resolve("ZWOLLE-001").unwrap();
        assert_eq!(found.identification(), "ZWOLLE-001");
        assert_eq!(found.max_number_of_warehouses(), 1);
        assert_eq!(found.max_capacity(), 40);
    }

    #[test]
    fn resolve_is_case_sensitive_and_exact() {
        let catalog = catalog();
        assert!(catalog.resolve("zwolle-001").is_none());
        assert!(catalog.resolve(" ZWOLLE-001").is_none());
        assert!(catalog.resolve("ZWOLLE").is_none());
    }

    #[test]
    fn all_preserves_registration_order() {
        let identifications: Vec<String> = catalog()
            .all()
            .iter()
            .map(|l| l.identification().to_string())
            .collect();
        assert_eq!(identifications, vec!["ZWOLLE-001", "AMSTERDAM-001"]);
    }

    #[test]
    fn all_hands_out_an_independent_copy() {
        let catalog = catalog();
        let mut copy = catalog.all();
        copy.clear();
        assert_eq!(catalog.all().len(), 2);
    }
}
