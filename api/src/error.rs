//! Unified error types for the Auto Bazaar API
//!
//! This module defines error types for each layer:
//! - `DomainError`: Inventory loading and record shape errors
//! - `ConfigError`: Settings that cannot be turned into a running server
//! - `AppError`: Application layer errors (wraps domain errors for HTTP responses)

use std::path::PathBuf;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::domain::entities::InventoryKind;

/// Domain layer errors - raised while loading and checking inventory data
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid {kind} inventory record #{index}: {reason}")]
    InvalidRecord {
        kind: InventoryKind,
        index: usize,
        reason: String,
    },

    #[error("Malformed {kind} inventory data from {source_name}: {message}")]
    Malformed {
        kind: InventoryKind,
        source_name: String,
        message: String,
    },

    #[error("Failed to read {kind} inventory from {}: {message}", .path.display())]
    Io {
        kind: InventoryKind,
        path: PathBuf,
        message: String,
    },

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Configuration errors - raised once at startup
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("No valid CORS origins in {0:?}")]
    NoCorsOrigins(String),
}

/// Application layer errors - used by HTTP handlers
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Error response body for JSON responses
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, details) = match &self {
            AppError::Domain(e) => {
                tracing::error!("Inventory error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error",
                    None,
                )
            }
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "Not found", Some(msg.clone())),
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error",
                    None,
                )
            }
        };

        let body = Json(ErrorResponse {
            error: error.to_string(),
            details,
        });

        (status, body).into_response()
    }
}
