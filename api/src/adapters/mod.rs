//! Adapters layer
//!
//! Implementations of port traits for external systems.

pub mod static_data;

pub use static_data::StaticInventoryRepository;
