//! Warehouse repository adapters.
//!
//! One implementation of the `WarehouseStore` port ships today; a
//! database-backed adapter slots in beside it without touching the domain.

pub mod in_memory;

pub use in_memory::InMemoryWarehouseStore;
