//! Domain entities
//!
//! Pure domain models for the car inventory.

pub mod car;
pub mod inventory;

pub use car::Car;
pub use inventory::{Inventory, InventoryCatalog, InventoryKind};
