//! HTTP handlers
//!
//! Axum request handlers for the API endpoints.

pub mod docs;
pub mod health;
pub mod inventory;
pub mod root;

use axum::http::Uri;

use crate::error::AppError;

pub use docs::{docs, openapi};
pub use health::health;
pub use inventory::{get_dealer_inventory, get_warehouse_inventory};
pub use root::root;

/// Fallback for unmatched paths
pub async fn not_found(uri: Uri) -> AppError {
    tracing::debug!("No route for {}", uri.path());
    AppError::NotFound(uri.path().to_string())
}
