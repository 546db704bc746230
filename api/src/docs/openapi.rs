//! OpenAPI document
//!
//! Builds an OpenAPI 3.0 description of the routes as JSON.

use serde_json::{json, Map, Value};

use super::{API_DESCRIPTION, API_TITLE};
use crate::routes::{ResponseKind, RouteDoc};

pub const OPENAPI_VERSION: &str = "3.0.3";

/// Build the OpenAPI document for `routes`
pub fn openapi_document(routes: &[RouteDoc]) -> Value {
    let mut paths = Map::new();
    for route in routes {
        paths.insert(route.path.to_string(), path_item(route));
    }

    json!({
        "openapi": OPENAPI_VERSION,
        "info": {
            "title": API_TITLE,
            "description": API_DESCRIPTION,
            "version": env!("CARGO_PKG_VERSION"),
        },
        "paths": paths,
        "components": {
            "schemas": {
                "Car": car_schema(),
                "Welcome": welcome_schema(),
                "Health": health_schema(),
            }
        }
    })
}

fn path_item(route: &RouteDoc) -> Value {
    let (content_type, schema) = match route.response {
        ResponseKind::Welcome => ("application/json", schema_ref("Welcome")),
        ResponseKind::CarList => (
            "application/json",
            json!({ "type": "array", "items": schema_ref("Car") }),
        ),
        ResponseKind::Health => ("application/json", schema_ref("Health")),
        ResponseKind::OpenApi => ("application/json", json!({ "type": "object" })),
        ResponseKind::DocsPage => ("text/html", json!({ "type": "string" })),
    };

    json!({
        "get": {
            "operationId": route.operation_id,
            "tags": [route.tag],
            "summary": route.summary,
            "description": route.description,
            "responses": {
                "200": {
                    "description": "Successful Response",
                    "content": {
                        content_type: { "schema": schema }
                    }
                }
            }
        }
    })
}

fn schema_ref(name: &str) -> Value {
    json!({ "$ref": format!("#/components/schemas/{}", name) })
}

fn car_schema() -> Value {
    json!({
        "type": "object",
        "additionalProperties": false,
        "required": ["id", "make", "model", "year", "price"],
        "properties": {
            "id": { "oneOf": [{ "type": "number" }, { "type": "string" }] },
            "make": { "type": "string" },
            "model": { "type": "string" },
            "year": { "type": "integer" },
            "price": { "type": "number" },
            "type": {
                "type": "string",
                "enum": ["SUV", "Sedan", "Sports", "Truck", "Electric"]
            },
            "color": { "type": "string" },
            "mileage": { "type": "integer" },
            "description": { "type": "string" },
            "features": { "type": "array", "items": { "type": "string" } },
            "imageUrl": { "type": "string" }
        }
    })
}

fn welcome_schema() -> Value {
    json!({
        "type": "object",
        "required": ["message", "docs", "dealer_inventory_endpoint", "warehouse_inventory_endpoint"],
        "properties": {
            "message": { "type": "string" },
            "docs": { "type": "string" },
            "dealer_inventory_endpoint": { "type": "string" },
            "warehouse_inventory_endpoint": { "type": "string" }
        }
    })
}

fn health_schema() -> Value {
    json!({
        "type": "object",
        "required": ["status", "version", "dealer_count", "warehouse_count"],
        "properties": {
            "status": { "type": "string" },
            "version": { "type": "string" },
            "dealer_count": { "type": "integer" },
            "warehouse_count": { "type": "integer" }
        }
    })
}
