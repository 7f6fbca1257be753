//! Configuration loading and representation.
//!
//! The static adapters (catalog, registry, capacity authority) are built
//! from a `FulfilmentConfig`: either the seeded defaults or a JSON document
//! supplied by the operator. Raw records are validated while the adapters
//! are built, so a malformed document never produces a half-working engine.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use fulfilment_core::DomainError;
use fulfilment_warehouses::Location;

use crate::capacity::{CapacityRule, StaticCapacityAuthority};
use crate::catalog::StaticLocationCatalog;
use crate::registry::StaticBusinessUnitRegistry;

/// Raw location entry as configured.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationRecord {
    pub identification: String,
    #[serde(default)]
    pub name: Option<String>,
    pub max_number_of_warehouses: u32,
    pub max_capacity: i64,
}

/// Raw capacity rule entry as configured.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapacityRuleRecord {
    pub location: String,
    pub max_warehouses: u32,
    pub total_capacity: i64,
}

/// Configuration error.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("configuration is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error(transparent)]
    Invalid(#[from] DomainError),

    #[error("duplicate location in configuration: {0}")]
    DuplicateLocation(String),

    #[error("duplicate capacity rule in configuration: {0}")]
    DuplicateCapacityRule(String),

    #[error("negative capacity ceiling for location {0}")]
    NegativeCapacityCeiling(String),
}

/// Static dataset the fulfilment adapters are built from.
///
/// `Default` seeds the known sites, claimed business units, and per-site
/// hosting rules; `from_json_str` loads an operator-supplied document with
/// the same shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FulfilmentConfig {
    pub locations: Vec<LocationRecord>,
    pub business_units: Vec<String>,
    pub capacity_rules: Vec<CapacityRuleRecord>,
}

impl FulfilmentConfig {
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        tracing::info!(
            locations = config.locations.len(),
            business_units = config.business_units.len(),
            capacity_rules = config.capacity_rules.len(),
            "fulfilment configuration loaded"
        );
        if config.locations.is_empty() {
            tracing::warn!("configuration has no locations; every create will be rejected");
        }
        Ok(config)
    }

    /// Build the location catalog, validating every record.
    pub fn location_catalog(&self) -> Result<StaticLocationCatalog, ConfigError> {
        let mut seen = HashSet::new();
        let mut locations = Vec::with_capacity(self.locations.len());
        for record in &self.locations {
            if !seen.insert(record.identification.clone()) {
                return Err(ConfigError::DuplicateLocation(record.identification.clone()));
            }
            let mut location = Location::new(
                record.identification.as_str(),
                record.max_number_of_warehouses,
                record.max_capacity,
            )?;
            if let Some(name) = record.name.as_deref() {
                location = location.with_name(name);
            }
            locations.push(location);
        }
        Ok(StaticLocationCatalog::new(locations))
    }

    /// Build the business-unit registry. Raw codes need no validation here;
    /// the registry trims them on ingest.
    pub fn business_unit_registry(&self) -> StaticBusinessUnitRegistry {
        StaticBusinessUnitRegistry::new(self.business_units.iter().cloned())
    }

    /// Build the capacity authority, validating every rule.
    pub fn capacity_authority(&self) -> Result<StaticCapacityAuthority, ConfigError> {
        let mut rules = HashMap::with_capacity(self.capacity_rules.len());
        for record in &self.capacity_rules {
            if record.total_capacity < 0 {
                return Err(ConfigError::NegativeCapacityCeiling(record.location.clone()));
            }
            let previous = rules.insert(
                record.location.clone(),
                CapacityRule {
                    max_warehouses: record.max_warehouses,
                    total_capacity: record.total_capacity,
                },
            );
            if previous.is_some() {
                return Err(ConfigError::DuplicateCapacityRule(record.location.clone()));
            }
        }
        Ok(StaticCapacityAuthority::new(rules))
    }
}

impl Default for FulfilmentConfig {
    fn default() -> Self {
        let locations = [
            ("ZWOLLE-001", 1, 40),
            ("ZWOLLE-002", 2, 50),
            ("AMSTERDAM-001", 5, 100),
            ("AMSTERDAM-002", 3, 75),
            ("TILBURG-001", 2, 60),
            ("HELMOND-001", 1, 45),
            ("EINDHOVEN-001", 2, 70),
            ("VETSBY-001", 1, 30),
        ]
        .into_iter()
        .map(
            |(identification, max_number_of_warehouses, max_capacity)| LocationRecord {
                identification: identification.to_string(),
                name: None,
                max_number_of_warehouses,
                max_capacity,
            },
        )
        .collect();

        let business_units = (1..=5).map(|n| format!("BU-{n:03}")).collect();

        let capacity_rules = [
            ("ZWOLLE-001", 5, 500),
            ("ZWOLLE-002", 5, 500),
            ("AMSTERDAM-001", 10, 1000),
            ("AMSTERDAM-002", 8, 800),
            ("TILBURG-001", 3, 300),
            ("HELMOND-001", 3, 300),
            ("EINDHOVEN-001", 5, 500),
            ("VETSBY-001", 2, 200),
        ]
        .into_iter()
        .map(|(location, max_warehouses, total_capacity)| CapacityRuleRecord {
            location: location.to_string(),
            max_warehouses,
            total_capacity,
        })
        .collect();

        Self {
            locations,
            business_units,
            capacity_rules,
        }
    }
}
