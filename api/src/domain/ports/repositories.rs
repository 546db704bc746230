//! Repository port traits
//!
//! Read-only access to inventory collections. Implementations are provided by
//! adapters (e.g., the static data loaded at startup).

use async_trait::async_trait;

use crate::domain::entities::{Inventory, InventoryKind};
use crate::error::DomainError;

/// Repository for inventory collections
#[async_trait]
pub trait InventoryRepository: Send + Sync {
    /// Get the full collection for `kind`, in stored order
    async fn find_by_kind(&self, kind: InventoryKind) -> Result<Inventory, DomainError>;
}
