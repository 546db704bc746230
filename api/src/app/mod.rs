//! Application layer
//!
//! Contains use cases and service orchestration.
//! Services coordinate between domain entities and ports.

pub mod inventory_service;

pub use inventory_service::InventoryService;
