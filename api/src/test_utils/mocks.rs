//! Mock implementations of port traits
//!
//! In-memory implementations that tests can seed and change between calls.

use async_trait::async_trait;
use std::sync::RwLock;

use crate::domain::entities::{Car, Inventory, InventoryKind};
use crate::domain::ports::InventoryRepository;
use crate::error::DomainError;

// ============================================================================
// In-Memory Inventory Repository
// ============================================================================

/// Each collection lives behind its own lock so tests can swap one side
/// without touching the other.
#[derive(Default)]
pub struct InMemoryInventoryRepository {
    dealer: RwLock<Vec<Car>>,
    warehouse: RwLock<Vec<Car>>,
}

impl InMemoryInventoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate the dealer collection
    pub fn with_dealer(self, cars: Vec<Car>) -> Self {
        *self.dealer.write().unwrap() = cars;
        self
    }

    /// Pre-populate the warehouse collection
    pub fn with_warehouse(self, cars: Vec<Car>) -> Self {
        *self.warehouse.write().unwrap() = cars;
        self
    }

    /// Swap the records of one collection
    pub fn replace(&self, kind: InventoryKind, cars: Vec<Car>) {
        *self.slot(kind).write().unwrap() = cars;
    }

    fn slot(&self, kind: InventoryKind) -> &RwLock<Vec<Car>> {
        match kind {
            InventoryKind::Dealer => &self.dealer,
            InventoryKind::Warehouse => &self.warehouse,
        }
    }
}

#[async_trait]
impl InventoryRepository for InMemoryInventoryRepository {
    async fn find_by_kind(&self, kind: InventoryKind) -> Result<Inventory, DomainError> {
        let cars = self.slot(kind).read().unwrap().clone();
        Inventory::new(kind, cars)
    }
}
