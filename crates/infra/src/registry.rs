use std::collections::HashSet;

use fulfilment_warehouses::BusinessUnitRegistry;

/// Business-unit registry backed by a fixed set of claimed codes.
///
/// Codes are trimmed on ingest and on lookup, so `" BU-001 "` and `"BU-001"`
/// refer to the same claim. Blank codes are never unique.
#[derive(Debug, Clone, Default)]
pub struct StaticBusinessUnitRegistry {
    taken: HashSet<String>,
}

impl StaticBusinessUnitRegistry {
    pub fn new<I, S>(codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            taken: codes
                .into_iter()
                .map(|code| code.into().trim().to_string())
                .collect(),
        }
    }
}

impl BusinessUnitRegistry for StaticBusinessUnitRegistry {
    fn is_unique(&self, code: &str) -> bool {
        let trimmed = code.trim();
        if trimmed.is_empty() {
            return false;
        }
        !self.taken.contains(trimmed)
    }
}
