//! Route table and router construction
//!
//! Paths are defined once here; the router, the welcome response and the
//! generated docs all read from the same constants.

use axum::{http::HeaderValue, routing::get, Router};
use tower::ServiceBuilder;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::error::ConfigError;
use crate::handlers;
use crate::AppState;

pub const ROOT_PATH: &str = "/";
pub const DOCS_PATH: &str = "/docs";
pub const OPENAPI_PATH: &str = "/openapi.json";
pub const HEALTH_PATH: &str = "/health";
pub const DEALER_INVENTORY_PATH: &str = "/api/dealer/inventory";
pub const WAREHOUSE_INVENTORY_PATH: &str = "/api/warehouse/inventory";

/// What a route responds with, used to pick its documented schema
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseKind {
    Welcome,
    CarList,
    DocsPage,
    OpenApi,
    Health,
}

/// A documented GET endpoint
#[derive(Debug, Clone, Copy)]
pub struct RouteDoc {
    pub path: &'static str,
    pub operation_id: &'static str,
    pub tag: &'static str,
    pub summary: &'static str,
    pub description: &'static str,
    pub response: ResponseKind,
}

pub const ROUTES: &[RouteDoc] = &[
    RouteDoc {
        path: ROOT_PATH,
        operation_id: "root",
        tag: "meta",
        summary: "Welcome",
        description: "Welcome message and the paths of the main endpoints.",
        response: ResponseKind::Welcome,
    },
    RouteDoc {
        path: DEALER_INVENTORY_PATH,
        operation_id: "get_dealer_inventory",
        tag: "inventory",
        summary: "Dealer inventory",
        description: "Every car currently at the dealership, in listing order.",
        response: ResponseKind::CarList,
    },
    RouteDoc {
        path: WAREHOUSE_INVENTORY_PATH,
        operation_id: "get_warehouse_inventory",
        tag: "inventory",
        summary: "Warehouse inventory",
        description: "Every car held in storage, in listing order.",
        response: ResponseKind::CarList,
    },
    RouteDoc {
        path: HEALTH_PATH,
        operation_id: "health",
        tag: "meta",
        summary: "Health check",
        description: "Liveness probe with the loaded record counts.",
        response: ResponseKind::Health,
    },
    RouteDoc {
        path: DOCS_PATH,
        operation_id: "docs",
        tag: "meta",
        summary: "API documentation",
        description: "This page, or the OpenAPI document when the Accept header asks for application/json.",
        response: ResponseKind::DocsPage,
    },
    RouteDoc {
        path: OPENAPI_PATH,
        operation_id: "openapi",
        tag: "meta",
        summary: "OpenAPI document",
        description: "Machine-readable description of every endpoint.",
        response: ResponseKind::OpenApi,
    },
];

/// Build the application router
pub fn build_router(state: AppState, cors: CorsLayer) -> Router {
    Router::new()
        .route(ROOT_PATH, get(handlers::root))
        .route(DEALER_INVENTORY_PATH, get(handlers::get_dealer_inventory))
        .route(WAREHOUSE_INVENTORY_PATH, get(handlers::get_warehouse_inventory))
        .route(HEALTH_PATH, get(handlers::health))
        .route(DOCS_PATH, get(handlers::docs))
        .route(OPENAPI_PATH, get(handlers::openapi))
        .fallback(handlers::not_found)
        // Middleware
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(state)
}

/// CORS policy from `cors_allowed_origins`
///
/// Methods and headers are always open; origins are `*` or the configured
/// list. Invalid origins are skipped with a warning; a list with none left
/// is an error.
pub fn cors_layer(config: &Config) -> Result<CorsLayer, ConfigError> {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    if config.allows_any_origin() {
        return Ok(layer.allow_origin(Any));
    }

    let origins: Vec<HeaderValue> = config
        .allowed_origins()
        .into_iter()
        .filter_map(|origin| match HeaderValue::from_str(&origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    if origins.is_empty() {
        return Err(ConfigError::NoCorsOrigins(
            config.cors_allowed_origins.clone(),
        ));
    }

    Ok(layer.allow_origin(AllowOrigin::list(origins)))
}
