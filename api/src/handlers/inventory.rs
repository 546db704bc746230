//! Inventory handlers
//!
//! Read-only endpoints for the dealer and warehouse collections.

use axum::{extract::State, Json};

use crate::domain::entities::Inventory;
use crate::error::AppError;
use crate::AppState;

/// GET /api/dealer/inventory
///
/// Every car at the dealership, in stored order.
pub async fn get_dealer_inventory(
    State(state): State<AppState>,
) -> Result<Json<Inventory>, AppError> {
    let inventory = state.inventory_service.dealer_inventory().await?;
    Ok(Json(inventory))
}

/// GET /api/warehouse/inventory
///
/// Every car in storage, in stored order.
pub async fn get_warehouse_inventory(
    State(state): State<AppState>,
) -> Result<Json<Inventory>, AppError> {
    let inventory = state.inventory_service.warehouse_inventory().await?;
    Ok(Json(inventory))
}
