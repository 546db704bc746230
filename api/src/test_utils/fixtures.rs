//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.

use crate::domain::entities::car::CarType;
use crate::domain::entities::{Car, Inventory, InventoryCatalog, InventoryKind};

/// The single-record dealer seed: 2022 Toyota Corolla at 21000
pub fn corolla() -> Car {
    Car::new(1u64, "Toyota", "Corolla", 2022, 21000u32)
}

/// Create a core-fields-only car with a specific id and make
pub fn test_car(id: u64, make: &str) -> Car {
    Car::new(id, make, "Test Model", 2021, 15000u32 + id as u32)
}

/// Create `count` core-fields-only cars with ids starting at 1
pub fn test_cars(count: u64) -> Vec<Car> {
    (1..=count).map(|id| test_car(id, "TestMake")).collect()
}

/// Create a car with every descriptive field filled in
pub fn test_car_detailed(id: &str) -> Car {
    let mut car = Car::new(id, "Hyundai", "Ioniq 5", 2023, 44100u32);
    car.car_type = Some(CarType::Electric);
    car.color = Some("Digital Teal".to_string());
    car.mileage = Some(3100);
    car.description = Some("Electric crossover".to_string());
    car.features = Some(vec!["800V Charging".to_string()]);
    car.image_url = Some(format!("https://example.com/{}.jpg", id));
    car
}

/// Build a catalog from two record lists
pub fn test_catalog(dealer: Vec<Car>, warehouse: Vec<Car>) -> InventoryCatalog {
    InventoryCatalog::new(
        Inventory::new(InventoryKind::Dealer, dealer).unwrap(),
        Inventory::new(InventoryKind::Warehouse, warehouse).unwrap(),
    )
    .unwrap()
}
