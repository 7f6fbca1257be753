//! `fulfilment-warehouses` — warehouse lifecycle domain.
//!
//! Models, ports, and the lifecycle engine. The engine runs ordered
//! validation pipelines over injected collaborator ports and finishes each
//! accepted operation with exactly one warehouse store write.

pub mod error;
pub mod lifecycle;
pub mod location;
pub mod ports;
pub mod warehouse;

pub use error::LifecycleError;
pub use lifecycle::LifecycleEngine;
pub use location::Location;
pub use ports::{
    BusinessUnitRegistry, CapacityAuthority, LocationCatalog, StoreError, WarehouseStore,
};
pub use warehouse::{Warehouse, WarehouseBuilder};
