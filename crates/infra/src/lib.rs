//! Infrastructure layer: adapters behind the warehouse domain ports.
//!
//! Configuration-loaded static registries plus an in-memory repository.
//! Every adapter here implements a `fulfilment-warehouses` port, so callers
//! wire them into the lifecycle engine without caring about the backing.

pub mod capacity;
pub mod catalog;
pub mod config;
pub mod registry;
pub mod store;

pub use capacity::{CapacityRule, StaticCapacityAuthority};
pub use catalog::StaticLocationCatalog;
pub use config::{CapacityRuleRecord, ConfigError, FulfilmentConfig, LocationRecord};
pub use registry::StaticBusinessUnitRegistry;
pub use store::InMemoryWarehouseStore;
