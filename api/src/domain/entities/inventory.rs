//! Inventory domain entities
//!
//! An inventory is an ordered, immutable sequence of cars. The catalog pairs
//! the dealer and warehouse inventories and checks that both share one record
//! shape.

use std::collections::HashSet;
use std::sync::Arc;

use serde::{Serialize, Serializer};

use super::car::{Car, CarShape};
use crate::error::DomainError;

/// Which collection an inventory represents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InventoryKind {
    /// Vehicles currently at the dealership
    Dealer,
    /// Vehicles held in storage
    Warehouse,
}

impl InventoryKind {
    pub const ALL: [InventoryKind; 2] = [InventoryKind::Dealer, InventoryKind::Warehouse];

    pub fn as_str(&self) -> &'static str {
        match self {
            InventoryKind::Dealer => "dealer",
            InventoryKind::Warehouse => "warehouse",
        }
    }
}

impl std::fmt::Display for InventoryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for InventoryKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "dealer" => Ok(InventoryKind::Dealer),
            "warehouse" => Ok(InventoryKind::Warehouse),
            _ => Err(format!("Unknown inventory: {}", s)),
        }
    }
}

/// An ordered collection of cars
///
/// Cloning is cheap; all clones share the same buffer. Serializes as a plain
/// JSON array in stored order.
#[derive(Debug, Clone)]
pub struct Inventory {
    kind: InventoryKind,
    cars: Arc<[Car]>,
}

impl Inventory {
    /// Build an inventory, requiring unique ids and one record shape
    pub fn new(kind: InventoryKind, cars: Vec<Car>) -> Result<Self, DomainError> {
        let mut seen = HashSet::with_capacity(cars.len());
        let mut shape: Option<CarShape> = None;

        for (index, car) in cars.iter().enumerate() {
            if !seen.insert(&car.id) {
                return Err(DomainError::InvalidRecord {
                    kind,
                    index,
                    reason: format!("duplicate id {}", car.id),
                });
            }

            let current = car.shape();
            match shape {
                None => shape = Some(current),
                Some(expected) if expected != current => {
                    return Err(DomainError::InvalidRecord {
                        kind,
                        index,
                        reason: format!(
                            "has {} but earlier records have {}",
                            current, expected
                        ),
                    });
                }
                Some(_) => {}
            }
        }

        Ok(Self {
            kind,
            cars: cars.into(),
        })
    }

    pub fn empty(kind: InventoryKind) -> Self {
        Self {
            kind,
            cars: Arc::from(Vec::new()),
        }
    }

    pub fn kind(&self) -> InventoryKind {
        self.kind
    }

    pub fn cars(&self) -> &[Car] {
        &self.cars
    }

    pub fn len(&self) -> usize {
        self.cars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cars.is_empty()
    }

    /// Shape shared by every record, `None` when empty
    pub fn shape(&self) -> Option<CarShape> {
        self.cars.first().map(Car::shape)
    }
}

impl Serialize for Inventory {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.cars.as_ref().serialize(serializer)
    }
}

/// Dealer and warehouse inventories loaded together
#[derive(Debug, Clone)]
pub struct InventoryCatalog {
    dealer: Inventory,
    warehouse: Inventory,
}

impl InventoryCatalog {
    /// Pair two inventories, requiring both to use the same record shape
    pub fn new(dealer: Inventory, warehouse: Inventory) -> Result<Self, DomainError> {
        if dealer.kind() != InventoryKind::Dealer || warehouse.kind() != InventoryKind::Warehouse {
            return Err(DomainError::Internal(format!(
                "catalog built from {} and {} inventories",
                dealer.kind(),
                warehouse.kind()
            )));
        }

        if let (Some(a), Some(b)) = (dealer.shape(), warehouse.shape()) {
            if a != b {
                return Err(DomainError::Validation(format!(
                    "dealer records have {} but warehouse records have {}",
                    a, b
                )));
            }
        }

        Ok(Self { dealer, warehouse })
    }

    pub fn get(&self, kind: InventoryKind) -> &Inventory {
        match kind {
            InventoryKind::Dealer => &self.dealer,
            InventoryKind::Warehouse => &self.warehouse,
        }
    }

    pub fn dealer(&self) -> &Inventory {
        &self.dealer
    }

    pub fn warehouse(&self) -> &Inventory {
        &self.warehouse
    }
}
