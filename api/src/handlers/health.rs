use axum::{extract::State, Json};
use serde::Serialize;

use crate::error::AppError;
use crate::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    status: &'static str,
    version: &'static str,
    dealer_count: usize,
    warehouse_count: usize,
}

/// GET /health
pub async fn health(State(state): State<AppState>) -> Result<Json<HealthResponse>, AppError> {
    let counts = state.inventory_service.counts().await?;

    Ok(Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        dealer_count: counts.dealer,
        warehouse_count: counts.warehouse,
    }))
}
