//! Inventory loading
//!
//! Reads a JSON array of cars from an embedded fixture or a file and turns it
//! into a checked [`Inventory`].

use std::path::PathBuf;

use crate::domain::entities::{Car, Inventory, InventoryKind};
use crate::error::DomainError;

const DEALER_FIXTURE: &str = include_str!("../../../data/dealer.json");
const WAREHOUSE_FIXTURE: &str = include_str!("../../../data/warehouse.json");

/// Where an inventory's records come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InventorySource {
    /// Listings compiled into the binary
    Embedded,
    /// A JSON file on disk
    File(PathBuf),
}

impl InventorySource {
    pub fn from_path(path: Option<PathBuf>) -> Self {
        path.map_or(InventorySource::Embedded, InventorySource::File)
    }
}

impl std::fmt::Display for InventorySource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InventorySource::Embedded => write!(f, "built-in data"),
            InventorySource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

fn embedded_fixture(kind: InventoryKind) -> &'static str {
    match kind {
        InventoryKind::Dealer => DEALER_FIXTURE,
        InventoryKind::Warehouse => WAREHOUSE_FIXTURE,
    }
}

/// Parse and check a JSON array of cars
pub fn parse_inventory(
    kind: InventoryKind,
    source: &InventorySource,
    json: &str,
) -> Result<Inventory, DomainError> {
    let cars: Vec<Car> = serde_json::from_str(json).map_err(|e| DomainError::Malformed {
        kind,
        source_name: source.to_string(),
        message: e.to_string(),
    })?;

    Inventory::new(kind, cars)
}

/// Load one inventory from its source
pub async fn load_inventory(
    kind: InventoryKind,
    source: &InventorySource,
) -> Result<Inventory, DomainError> {
    let inventory = match source {
        InventorySource::Embedded => parse_inventory(kind, source, embedded_fixture(kind))?,
        InventorySource::File(path) => {
            let json = tokio::fs::read_to_string(path)
                .await
                .map_err(|e| DomainError::Io {
                    kind,
                    path: path.clone(),
                    message: e.to_string(),
                })?;
            parse_inventory(kind, source, &json)?
        }
    };

    tracing::info!(
        "Loaded {} {} cars from {}",
        inventory.len(),
        kind,
        source
    );

    Ok(inventory)
}
