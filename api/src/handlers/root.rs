//! Welcome handler

use axum::Json;
use serde::Serialize;

use crate::routes::{DEALER_INVENTORY_PATH, DOCS_PATH, WAREHOUSE_INVENTORY_PATH};

pub const WELCOME_MESSAGE: &str = "Welcome to Auto Bazaar API";

/// Response for the welcome endpoint
#[derive(Debug, Serialize)]
pub struct RootResponse {
    pub message: &'static str,
    pub docs: &'static str,
    pub dealer_inventory_endpoint: &'static str,
    pub warehouse_inventory_endpoint: &'static str,
}

/// GET /
///
/// Welcome message plus the paths of the main endpoints.
pub async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: WELCOME_MESSAGE,
        docs: DOCS_PATH,
        dealer_inventory_endpoint: DEALER_INVENTORY_PATH,
        warehouse_inventory_endpoint: WAREHOUSE_INVENTORY_PATH,
    })
}
