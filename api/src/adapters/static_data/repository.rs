//! Static adapter for InventoryRepository

use async_trait::async_trait;

use super::loader::{load_inventory, InventorySource};
use crate::config::Config;
use crate::domain::entities::{Inventory, InventoryCatalog, InventoryKind};
use crate::domain::ports::InventoryRepository;
use crate::error::DomainError;

/// InventoryRepository over a catalog fixed at construction
pub struct StaticInventoryRepository {
    catalog: InventoryCatalog,
}

impl StaticInventoryRepository {
    pub fn new(catalog: InventoryCatalog) -> Self {
        Self { catalog }
    }

    /// Load both inventories from the sources named in `config`
    pub async fn load(config: &Config) -> Result<Self, DomainError> {
        let dealer_source = InventorySource::from_path(config.dealer_inventory_path.clone());
        let warehouse_source = InventorySource::from_path(config.warehouse_inventory_path.clone());

        let dealer = load_inventory(InventoryKind::Dealer, &dealer_source).await?;
        let warehouse = load_inventory(InventoryKind::Warehouse, &warehouse_source).await?;

        Ok(Self::new(InventoryCatalog::new(dealer, warehouse)?))
    }

    pub fn catalog(&self) -> &InventoryCatalog {
        &self.catalog
    }
}

#[async_trait]
impl InventoryRepository for StaticInventoryRepository {
    async fn find_by_kind(&self, kind: InventoryKind) -> Result<Inventory, DomainError> {
        Ok(self.catalog.get(kind).clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn default_config_uses_built_in_data() {
        let repo = StaticInventoryRepository::load(&Config::default())
            .await
            .unwrap();

        let dealer = repo.find_by_kind(InventoryKind::Dealer).await.unwrap();
        let warehouse = repo.find_by_kind(InventoryKind::Warehouse).await.unwrap();

        assert_eq!(dealer.kind(), InventoryKind::Dealer);
        assert_eq!(warehouse.kind(), InventoryKind::Warehouse);
        assert_eq!(dealer.len(), repo.catalog().dealer().len());
    }

    #[tokio::test]
    async fn file_override_replaces_one_side_only() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "[]").unwrap();

        let config = Config {
            warehouse_inventory_path: Some(file.path().to_path_buf()),
            ..Config::default()
        };
        let repo = StaticInventoryRepository::load(&config).await.unwrap();

        assert!(repo.catalog().warehouse().is_empty());
        assert!(!repo.catalog().dealer().is_empty());
    }

    #[tokio::test]
    async fn mismatched_override_shape_fails_startup() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"id":1,"make":"Toyota","model":"Corolla","year":2022,"price":21000}}]"#
        )
        .unwrap();

        let config = Config {
            dealer_inventory_path: Some(file.path().to_path_buf()),
            ..Config::default()
        };
        let result = StaticInventoryRepository::load(&config).await;

        assert!(matches!(result, Err(DomainError::Validation(_))));
    }

    #[tokio::test]
    async fn repeated_reads_return_the_same_sequence() {
        let repo = StaticInventoryRepository::load(&Config::default())
            .await
            .unwrap();

        let first = repo.find_by_kind(InventoryKind::Dealer).await.unwrap();
        let second = repo.find_by_kind(InventoryKind::Dealer).await.unwrap();
        assert_eq!(first.cars(), second.cars());
    }
}
