//! Documentation handlers
//!
//! Serves the generated API docs as HTML or as an OpenAPI document.

use axum::{
    http::{header, HeaderMap},
    response::{Html, IntoResponse, Response},
    Json,
};
use serde_json::Value;

use crate::docs::{openapi_document, render_docs_page};
use crate::routes::ROUTES;

/// Check if the client wants JSON response
fn wants_json(headers: &HeaderMap) -> bool {
    headers
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.contains("application/json"))
        .unwrap_or(false)
}

/// GET /docs
///
/// HTML reference page, or the OpenAPI document for JSON clients.
pub async fn docs(headers: HeaderMap) -> Response {
    if wants_json(&headers) {
        Json(openapi_document(ROUTES)).into_response()
    } else {
        Html(render_docs_page(ROUTES)).into_response()
    }
}

/// GET /openapi.json
pub async fn openapi() -> Json<Value> {
    Json(openapi_document(ROUTES))
}
