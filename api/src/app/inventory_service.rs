//! Inventory service
//!
//! Read-only access to the dealer and warehouse collections.

use std::sync::Arc;

use serde::Serialize;

use crate::domain::entities::{Inventory, InventoryKind};
use crate::domain::ports::InventoryRepository;
use crate::error::AppError;

/// Record counts per collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct InventoryCounts {
    pub dealer: usize,
    pub warehouse: usize,
}

/// Service for reading inventories
pub struct InventoryService<R: InventoryRepository> {
    inventory_repo: Arc<R>,
}

impl<R: InventoryRepository> InventoryService<R> {
    pub fn new(inventory_repo: Arc<R>) -> Self {
        Self { inventory_repo }
    }

    /// Get a collection by kind
    pub async fn inventory(&self, kind: InventoryKind) -> Result<Inventory, AppError> {
        let inventory = self.inventory_repo.find_by_kind(kind).await?;
        tracing::debug!("Serving {} {} cars", inventory.len(), kind);
        Ok(inventory)
    }

    /// Vehicles currently at the dealership
    pub async fn dealer_inventory(&self) -> Result<Inventory, AppError> {
        self.inventory(InventoryKind::Dealer).await
    }

    /// Vehicles held in storage
    pub async fn warehouse_inventory(&self) -> Result<Inventory, AppError> {
        self.inventory(InventoryKind::Warehouse).await
    }

    pub async fn counts(&self) -> Result<InventoryCounts, AppError> {
        Ok(InventoryCounts {
            dealer: self.inventory_repo.find_by_kind(InventoryKind::Dealer).await?.len(),
            warehouse: self
                .inventory_repo
                .find_by_kind(InventoryKind::Warehouse)
                .await?
                .len(),
        })
    }
}
